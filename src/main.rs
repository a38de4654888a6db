mod cli;

use env_logger::{Builder, Env};

fn init_logger() {
    // RUST_LOG=debug babel-addr ... shows each pipeline stage.
    Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();
}

fn main() {
    init_logger();

    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
