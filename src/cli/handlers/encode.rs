use crate::cli::{
    args::EncodeArgs,
    global::GlobalArgs,
    output::{Essential, PageReport, print_report},
};
use babel_addr::{Coordinate, LibraryConfig, convenience::ShareLink};

pub fn handle(
    args: EncodeArgs,
    global: &GlobalArgs,
    config: &LibraryConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let coord = Coordinate::new(args.wall, args.shelf, args.volume, args.page);
    let encoded = babel_addr::encode(&args.snippet, &coord, args.offset)?;
    let link = ShareLink::from_encoded(&encoded, &args.snippet);

    let report = PageReport {
        handle: Some(&encoded.handle),
        coordinate: encoded.coordinate,
        offset: Some(encoded.offset),
        link: Some(link.to_string()),
        matches: None,
        page_text: &encoded.page_text,
    };
    print_report(&report, config, global.quiet, Essential::Handle)
}
