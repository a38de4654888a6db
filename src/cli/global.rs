use clap::Args;

/// Global arguments that apply to all subcommands
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Print only the essential value (the handle, or the page text)
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Output JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Wrap printed pages at this width (0 = no wrapping)
    #[arg(short = 'w', long, global = true, value_name = "COLUMNS")]
    pub width: Option<usize>,
}
