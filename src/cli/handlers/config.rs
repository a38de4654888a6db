use babel_addr::{Library, LibraryConfig, PAGE_LENGTH};

pub fn handle(
    config: &LibraryConfig,
    library: &Library,
) -> Result<(), Box<dyn std::error::Error>> {
    if config.display.json {
        let output = serde_json::json!({
            "config": config,
            "library": {
                "page_length": PAGE_LENGTH,
                "safe_walls": library.safe_walls(),
                "max_position": library.max_position(),
                "modulus_bits": library.scrambler().lcg().bits(),
            },
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print!("{}", toml::to_string_pretty(config)?);
    println!();
    println!("# page length:  {} characters", PAGE_LENGTH);
    println!(
        "# safe walls:   0-{} (every page round-trips)",
        library.safe_walls().saturating_sub(1)
    );
    println!("# max position: {}", library.max_position());
    println!("# modulus:      2^{}", library.scrambler().lcg().bits());

    Ok(())
}
