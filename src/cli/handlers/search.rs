use crate::cli::{
    args::SearchArgs,
    global::GlobalArgs,
    output::{Essential, PageReport, print_report},
};
use babel_addr::{
    Library, LibraryConfig,
    convenience::{SearchOptions, ShareLink, search},
};
use rand::{SeedableRng, rngs::StdRng};

pub fn handle(
    args: SearchArgs,
    global: &GlobalArgs,
    config: &LibraryConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let safe_walls = Library::standard().safe_walls();
    match args.walls {
        Some(0) => return Err("--walls must be at least 1".into()),
        Some(walls) if walls > safe_walls => {
            return Err(format!(
                "--walls {} exceeds the {} walls the library can address",
                walls, safe_walls
            )
            .into());
        }
        Some(_) => {}
        None => config.validate(safe_walls)?,
    }

    let options = SearchOptions {
        wall: args.wall,
        shelf: args.shelf,
        volume: args.volume,
        page: args.page,
        offset: None,
        walls: args.walls.unwrap_or(config.search.walls),
    };

    // A seed makes the search reproducible; otherwise use the thread-local generator
    let found = match args.seed {
        Some(seed) => search(&args.snippet, &options, &mut StdRng::seed_from_u64(seed))?,
        None => search(&args.snippet, &options, &mut rand::rng())?,
    };
    let link = ShareLink::from_encoded(&found, &args.snippet);

    let report = PageReport {
        handle: Some(&found.handle),
        coordinate: found.coordinate,
        offset: Some(found.offset),
        link: Some(link.to_string()),
        matches: None,
        page_text: &found.page_text,
    };
    print_report(&report, config, global.quiet, Essential::Handle)
}
