use babel_addr::{Coordinate, LibraryConfig, convenience::wrap_page};
use serde::Serialize;

/// Everything a command may report about one page.
#[derive(Serialize)]
pub struct PageReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<&'a str>,
    pub coordinate: Coordinate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches: Option<Vec<usize>>,
    pub page_text: &'a str,
}

/// What `--quiet` keeps.
pub enum Essential {
    Handle,
    Page,
}

pub fn print_report(
    report: &PageReport<'_>,
    config: &LibraryConfig,
    quiet: bool,
    essential: Essential,
) -> Result<(), Box<dyn std::error::Error>> {
    if config.display.json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    if quiet {
        match (essential, report.handle) {
            (Essential::Handle, Some(handle)) => println!("{}", handle),
            _ => println!("{}", report.page_text),
        }
        return Ok(());
    }

    println!("--- Full Page ---");
    for line in wrap_page(report.page_text, config.display.line_width) {
        println!("{}", line);
    }
    println!();
    if let Some(handle) = report.handle {
        println!("Handle: {}", handle);
    }
    println!("Coordinates: {}", report.coordinate);
    if let Some(offset) = report.offset {
        println!("Snippet Position: {}", offset);
    }
    if let Some(matches) = &report.matches {
        if matches.is_empty() {
            println!("Matches: none");
        } else {
            let list: Vec<String> = matches.iter().map(|m| m.to_string()).collect();
            println!("Matches: {}", list.join(", "));
        }
    }
    if let Some(link) = &report.link {
        println!("Link: {}", link);
    }

    Ok(())
}
