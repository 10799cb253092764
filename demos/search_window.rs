//! Standalone demo: opens a window with the colour search screen.
//!
//! Usage: `cargo run --example search_window --features gui -- [catalog.json]`

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_colour_search::{colour_search, parse_catalog, read_catalog, ColourSearcher};

const SAMPLE_CATALOG: &str = include_str!("colors.json");

fn main() {
    env_logger::init();

    let loaded = match std::env::args().nth(1) {
        Some(path) => std::fs::File::open(&path)
            .map_err(Into::into)
            .and_then(|file| read_catalog(file)),
        None => parse_catalog(SAMPLE_CATALOG),
    };
    let searcher = match loaded {
        Ok(catalog) => ColourSearcher::new(catalog),
        Err(err) => {
            log::error!("failed to load catalog: {err}");
            ColourSearcher::default()
        }
    };
    let searcher = RwSignal::new(searcher);

    floem::Application::new()
        .window(
            move |_| {
                colour_search(searcher).on_event_stop(
                    floem::event::EventListener::WindowClosed,
                    |_| floem::quit_app(),
                )
            },
            Some(
                WindowConfig::default()
                    .size((620.0, 720.0))
                    .title("Colour Searcher"),
            ),
        )
        .run();
}
