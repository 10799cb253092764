//! Search session state behind a colour search screen.
//!
//! [`ColourSearcher`] owns the loaded catalog and its index and tracks what
//! the screen currently shows. Input layers hand it raw query strings on
//! submit; it runs validate → normalize → search and updates its state.

use crate::cluster::ClusterIndex;
use crate::color::ColorEntry;
use crate::error::ColorError;
use crate::math;
use crate::search::{self, SearchMode};
use crate::validate;

#[derive(Debug, Clone, Default)]
pub struct ColourSearcher {
    catalog: Vec<ColorEntry>,
    index: ClusterIndex,
    displayed: Vec<ColorEntry>,
    last_query: Option<String>,
    error: Option<ColorError>,
    mode: SearchMode,
    loaded: bool,
}

impl ColourSearcher {
    /// A session with `catalog` already loaded.
    pub fn new(catalog: Vec<ColorEntry>) -> Self {
        let mut searcher = Self::default();
        searcher.load(catalog);
        searcher
    }

    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Replace the catalog, rebuilding the index and resetting the session.
    pub fn load(&mut self, catalog: Vec<ColorEntry>) {
        self.index = ClusterIndex::build(&catalog);
        self.displayed = catalog.clone();
        self.catalog = catalog;
        self.last_query = None;
        self.error = None;
        self.loaded = true;
    }

    /// Handle a submitted query.
    ///
    /// On success the displayed list becomes the ranked matches. On failure
    /// the displayed list and last query are left unchanged and the error is
    /// remembered for [`ColourSearcher::error`].
    pub fn submit(&mut self, raw: &str) -> Result<&[ColorEntry], ColorError> {
        let hex = match validate::normalize_query(raw) {
            Ok(hex) => hex,
            Err(err) => {
                log::warn!("rejected query: {err}");
                self.error = Some(err.clone());
                return Err(err);
            }
        };

        let query = math::hex_to_rgb(&hex);
        self.displayed = search::search_with(&self.index, query, self.mode)
            .into_iter()
            .map(|result| result.entry.clone())
            .collect();
        self.last_query = Some(hex);
        self.error = None;
        Ok(&self.displayed)
    }

    /// False until a catalog has been loaded.
    pub fn is_ready(&self) -> bool {
        self.loaded
    }

    pub fn catalog(&self) -> &[ColorEntry] {
        &self.catalog
    }

    pub fn index(&self) -> &ClusterIndex {
        &self.index
    }

    /// The catalog in fetch order until the first successful search, then
    /// the latest ranked matches.
    pub fn displayed(&self) -> &[ColorEntry] {
        &self.displayed
    }

    /// Normalized hex of the last accepted query.
    pub fn last_query(&self) -> Option<&str> {
        self.last_query.as_deref()
    }

    /// Error from the latest submit, cleared by the next accepted one.
    pub fn error(&self) -> Option<&ColorError> {
        self.error.as_ref()
    }

    pub fn is_invalid(&self) -> bool {
        self.error.is_some()
    }
}
