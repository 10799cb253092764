//! # floem-colour-search
//!
//! Find catalog colours by visual similarity.
//!
//! A catalog of named colours is partitioned into fifteen clusters around
//! fixed reference hues. A query in `#RRGGBB`, `rgb(r, g, b)` or
//! `hsl(h, s, l)` form is matched to its nearest cluster and that cluster's
//! colours are ranked by RGB distance. The `gui` feature adds a
//! [Floem](https://github.com/lapce/floem) search window.
//!
//! ## Usage
//!
//! ```rust
//! use floem_colour_search::{parse_catalog, ColourSearcher};
//!
//! let catalog = parse_catalog(r##"{"colors": [
//!     {"color": "pure red", "hex": "#FF0000"},
//!     {"color": "pure blue", "hex": "#0000FF"}
//! ]}"##).unwrap();
//!
//! let mut searcher = ColourSearcher::new(catalog);
//! let shown = searcher.submit("rgb(254, 1, 0)").unwrap();
//! assert_eq!(shown[0].name, "pure red");
//! assert_eq!(shown.len(), 1);
//! ```

pub mod catalog;
pub mod cluster;
mod color;
mod error;
pub mod math;
pub mod search;
mod searcher;
pub mod validate;

#[cfg(feature = "gui")]
mod constants;
#[cfg(feature = "gui")]
mod inputs;
#[cfg(feature = "gui")]
mod results_table;
#[cfg(feature = "gui")]
mod search_view;

pub use catalog::{parse_catalog, read_catalog, CatalogRecord};
pub use cluster::{Cluster, ClusterIndex, ANCHORS};
pub use color::{ColorEntry, Hsl, Rgb};
pub use error::{CatalogError, ColorError};
pub use search::{search, RankedResult, SearchMode};
pub use searcher::ColourSearcher;
pub use validate::{convert_to_hex, is_valid_color, normalize_query};

#[cfg(feature = "gui")]
pub use gui::colour_search;

#[cfg(feature = "gui")]
mod gui {
    use std::sync::Once;

    use floem::prelude::*;
    use floem::reactive::RwSignal;
    use floem::text::FONT_SYSTEM;

    use crate::searcher::ColourSearcher;

    static LOAD_LUCIDE_FONT: Once = Once::new();

    /// Creates the top-level colour search view.
    ///
    /// The view reads from and writes to `searcher`: submitting a query
    /// updates the session, and the table follows its displayed list.
    pub fn colour_search(searcher: RwSignal<ColourSearcher>) -> impl IntoView {
        LOAD_LUCIDE_FONT.call_once(|| {
            FONT_SYSTEM
                .lock()
                .db_mut()
                .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
        });
        crate::search_view::search_view(searcher)
    }
}
