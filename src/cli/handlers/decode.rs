use crate::cli::{
    args::DecodeArgs,
    global::GlobalArgs,
    output::{Essential, PageReport, print_report},
};
use babel_addr::LibraryConfig;
use std::io::{self, Read};

pub fn handle(
    args: DecodeArgs,
    global: &GlobalArgs,
    config: &LibraryConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    // Read the handle from the argument or stdin
    let handle = match args.handle.as_deref() {
        Some(h) if h != "-" => h.to_string(),
        _ => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    let handle = handle.trim();

    let decoded = babel_addr::decode(handle)?;
    let matches = args.find.as_deref().map(|text| decoded.find(text));

    let report = PageReport {
        handle: Some(handle),
        coordinate: decoded.coordinate,
        offset: None,
        link: None,
        matches,
        page_text: &decoded.page_text,
    };
    print_report(&report, config, global.quiet, Essential::Page)
}
