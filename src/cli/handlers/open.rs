use crate::cli::{
    args::OpenArgs,
    global::GlobalArgs,
    output::{Essential, PageReport, print_report},
};
use babel_addr::{LibraryConfig, convenience::ShareLink};

pub fn handle(
    args: OpenArgs,
    global: &GlobalArgs,
    config: &LibraryConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let link = ShareLink::parse(&args.link)?;
    let decoded = link.open()?;

    let report = PageReport {
        handle: Some(&link.handle),
        coordinate: decoded.coordinate,
        offset: link.snippet.as_ref().map(|(offset, _)| *offset),
        link: Some(link.to_string()),
        matches: None,
        page_text: &decoded.page_text,
    };
    print_report(&report, config, global.quiet, Essential::Page)
}
