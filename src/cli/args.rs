use clap::Args;

/// Arguments for placing a snippet at a known address
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Text to place on the page (a-z, space, comma, period)
    pub snippet: String,

    /// Wall number
    #[arg(long, default_value_t = 0)]
    pub wall: u64,

    /// Shelf on the wall (0-4)
    #[arg(long, default_value_t = 0)]
    pub shelf: u32,

    /// Volume on the shelf (0-31)
    #[arg(long, default_value_t = 0)]
    pub volume: u32,

    /// Page in the volume (0-419)
    #[arg(long, default_value_t = 0)]
    pub page: u32,

    /// Character offset of the snippet on the page
    #[arg(short = 'o', long, default_value_t = 0)]
    pub offset: usize,
}

/// Arguments for reading a page back from its handle
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Handle to decode (reads stdin if omitted or "-")
    pub handle: Option<String>,

    /// Also report where this text occurs on the page
    #[arg(long, value_name = "TEXT")]
    pub find: Option<String>,
}

/// Arguments for placing a snippet at a random address
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Text to place on the page (a-z, space, comma, period)
    pub snippet: String,

    /// Seed for the random address (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Sample walls from 0 up to this count (default from config)
    #[arg(long, value_name = "N")]
    pub walls: Option<u64>,

    /// Pin the wall
    #[arg(long)]
    pub wall: Option<u64>,

    /// Pin the shelf
    #[arg(long)]
    pub shelf: Option<u32>,

    /// Pin the volume
    #[arg(long)]
    pub volume: Option<u32>,

    /// Pin the page
    #[arg(long)]
    pub page: Option<u32>,
}

/// Arguments for opening a share link
#[derive(Args, Debug)]
pub struct OpenArgs {
    /// Link of the form handle#wall-shelf-volume-page#offset$snippet
    pub link: String,
}
