mod args;
mod global;
mod handlers;
mod output;

use babel_addr::{Library, LibraryConfig};
use clap::{Parser, Subcommand};

use args::{DecodeArgs, EncodeArgs, OpenArgs, SearchArgs};
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "babel-addr")]
#[command(version)]
#[command(about = "Find any text in the Library of Babel: place a snippet on a page and get a handle that names it", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Place a snippet at a given address and print its handle
    Encode(EncodeArgs),
    /// Print the address and page named by a handle
    Decode(DecodeArgs),
    /// Place a snippet at a random address
    Search(SearchArgs),
    /// Open and verify a share link
    Open(OpenArgs),
    /// Show the effective configuration and library capacity
    Config,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.global.no_color {
        // Unsafe: environment variable access (not thread-safe).
        // Nothing else is running yet.
        unsafe {
            std::env::set_var("NO_COLOR", "1");
        }
    }

    // Load configuration with user overrides, then apply command-line flags
    let mut config = LibraryConfig::load_with_overrides()?;
    if let Some(width) = cli.global.width {
        config.display.line_width = width;
    }
    if cli.global.json {
        config.display.json = true;
    }

    let library = Library::standard();

    match cli.command {
        Commands::Encode(args) => handlers::encode::handle(args, &cli.global, &config),
        Commands::Decode(args) => handlers::decode::handle(args, &cli.global, &config),
        Commands::Search(args) => handlers::search::handle(args, &cli.global, &config),
        Commands::Open(args) => handlers::open::handle(args, &cli.global, &config),
        Commands::Config => handlers::config::handle(&config, library),
    }
}
