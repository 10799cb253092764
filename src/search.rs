//! Similarity search over a [`ClusterIndex`].
//!
//! A query is matched to its nearest cluster, then that cluster's members
//! are ranked by RGB distance to the query. Colours in neighbouring clusters
//! are never considered, so the true nearest colour can be missed;
//! [`search_exhaustive`] is the opt-in flat scan without that limitation.

use crate::cluster::ClusterIndex;
use crate::color::{ColorEntry, Rgb};
use crate::math;

/// A catalog entry paired with its distance to the query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedResult<'a> {
    pub entry: &'a ColorEntry,
    pub distance: f64,
}

/// How many clusters a search looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Rank only the members of the nearest cluster.
    #[default]
    Cluster,
    /// Rank every clustered colour.
    Exhaustive,
}

/// Rank the nearest cluster's members against a hex query.
///
/// A query without hex digits is searched as black.
pub fn search<'a>(index: &'a ClusterIndex, query_hex: &str) -> Vec<RankedResult<'a>> {
    search_rgb(index, math::hex_to_rgb(query_hex))
}

/// [`search`] on an already converted query colour.
pub fn search_rgb(index: &ClusterIndex, query: Rgb) -> Vec<RankedResult<'_>> {
    let Some(cluster) = index.nearest_cluster(query) else {
        return Vec::new();
    };
    let results = rank(query, cluster.members.iter());
    log::debug!(
        "query {query} matched cluster {:?} with {} members",
        cluster.name,
        results.len()
    );
    results
}

/// Rank every colour in the index, regardless of cluster.
pub fn search_exhaustive(index: &ClusterIndex, query: Rgb) -> Vec<RankedResult<'_>> {
    rank(query, index.sorted_entries())
}

/// Search with the given mode.
pub fn search_with(index: &ClusterIndex, query: Rgb, mode: SearchMode) -> Vec<RankedResult<'_>> {
    match mode {
        SearchMode::Cluster => search_rgb(index, query),
        SearchMode::Exhaustive => search_exhaustive(index, query),
    }
}

/// Distance-ascending, keeping input order among equal distances.
fn rank<'a>(query: Rgb, entries: impl Iterator<Item = &'a ColorEntry>) -> Vec<RankedResult<'a>> {
    let mut results: Vec<RankedResult<'a>> = entries
        .map(|entry| RankedResult {
            entry,
            distance: math::distance(query, entry.rgb),
        })
        .collect();
    results.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    results
}
