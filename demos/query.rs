//! Headless demo: search a catalog from the command line.
//!
//! Usage: `cargo run --example query -- "<colour>" [catalog.json]`

use std::fs::File;
use std::process::ExitCode;

use floem_colour_search::{parse_catalog, read_catalog, ColorEntry, ColourSearcher};

const SAMPLE_CATALOG: &str = include_str!("colors.json");

fn load(path: Option<&str>) -> Result<Vec<ColorEntry>, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(read_catalog(File::open(path)?)?),
        None => Ok(parse_catalog(SAMPLE_CATALOG)?),
    }
}

fn print_table(entries: &[ColorEntry]) {
    println!("{:<20} {:<9} {:<15} {:<15}", "Name", "Hex", "RGB", "HSL");
    for entry in entries {
        println!(
            "{:<20} {:<9} {:<15} {:<15}",
            entry.name,
            entry.hex,
            entry.rgb.to_string(),
            entry.hsl.to_string()
        );
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(query) = args.first() else {
        eprintln!("usage: query <colour> [catalog.json]");
        return ExitCode::FAILURE;
    };

    let catalog = match load(args.get(1).map(String::as_str)) {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("failed to load catalog: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut searcher = ColourSearcher::new(catalog);
    match searcher.submit(query) {
        Ok(results) => {
            let results = results.to_vec();
            if let Some(hex) = searcher.last_query() {
                println!("Results for \"{hex}\"");
            }
            print_table(&results);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Invalid CSS color: {err}");
            ExitCode::FAILURE
        }
    }
}
