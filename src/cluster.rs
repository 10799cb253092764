//! Catalog clustering around fixed reference anchors.
//!
//! Every catalog colour is assigned to the anchor nearest to it in RGB
//! space. The anchor table never changes at runtime; only the member lists
//! are filled, once, when an index is built.

use crate::color::{ColorEntry, Rgb};
use crate::math;

/// A fixed reference colour naming one cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub id: u8,
    pub name: &'static str,
    pub rgb: Rgb,
}

const fn anchor(id: u8, name: &'static str, r: u8, g: u8, b: u8) -> Anchor {
    Anchor {
        id,
        name,
        rgb: Rgb::new(r, g, b),
    }
}

/// Cluster anchors in assignment order. Ties go to the earlier entry.
pub const ANCHORS: [Anchor; 15] = [
    anchor(1, "red", 255, 0, 0),
    anchor(2, "orange", 255, 128, 0),
    anchor(3, "yellow", 255, 255, 0),
    anchor(4, "chartreuse", 128, 255, 0),
    anchor(5, "green", 0, 255, 0),
    anchor(6, "spring green", 0, 255, 128),
    anchor(7, "cyan", 0, 255, 255),
    anchor(8, "azure", 0, 127, 255),
    anchor(9, "blue", 0, 0, 255),
    anchor(10, "violet", 127, 0, 255),
    anchor(11, "magenta", 255, 0, 255),
    anchor(12, "rose", 255, 0, 128),
    anchor(13, "black", 0, 0, 0),
    anchor(14, "grey", 235, 235, 235),
    anchor(15, "white", 255, 255, 255),
];

/// A named bucket of catalog colours closest to one anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    pub id: u8,
    pub name: &'static str,
    pub anchor: Rgb,
    /// Sorted by hex string, ascending.
    pub members: Vec<ColorEntry>,
}

impl From<&Anchor> for Cluster {
    fn from(anchor: &Anchor) -> Self {
        Self {
            id: anchor.id,
            name: anchor.name,
            anchor: anchor.rgb,
            members: Vec::new(),
        }
    }
}

/// Position of the anchor nearest to `rgb`; the first wins on a tie.
pub(crate) fn nearest(rgb: Rgb, anchors: impl IntoIterator<Item = Rgb>) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, anchor) in anchors.into_iter().enumerate() {
        let d = math::distance(rgb, anchor);
        if best.map_or(true, |(_, min)| d < min) {
            best = Some((i, d));
        }
    }
    best.map(|(i, _)| i)
}

/// A catalog partitioned into the [`ANCHORS`] clusters.
///
/// The default index has no clusters at all, standing in for "no catalog
/// loaded yet". An index is read-only once built; load a new catalog by
/// building a new index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClusterIndex {
    clusters: Vec<Cluster>,
}

impl ClusterIndex {
    pub fn build(catalog: &[ColorEntry]) -> Self {
        let mut clusters: Vec<Cluster> = ANCHORS.iter().map(Cluster::from).collect();

        for entry in catalog {
            if let Some(i) = nearest(entry.rgb, ANCHORS.iter().map(|a| a.rgb)) {
                clusters[i].members.push(entry.clone());
            }
        }
        for cluster in &mut clusters {
            cluster.members.sort_by(|a, b| a.hex.cmp(&b.hex));
        }

        log::debug!(
            "clustered {} colors: {}",
            catalog.len(),
            clusters
                .iter()
                .filter(|c| !c.members.is_empty())
                .map(|c| format!("{}={}", c.name, c.members.len()))
                .collect::<Vec<_>>()
                .join(" ")
        );

        Self { clusters }
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    /// Look up a cluster by its stable id (1–15).
    pub fn cluster(&self, id: u8) -> Option<&Cluster> {
        self.clusters.iter().find(|c| c.id == id)
    }

    /// The cluster whose anchor is nearest to `rgb`.
    pub fn nearest_cluster(&self, rgb: Rgb) -> Option<&Cluster> {
        nearest(rgb, self.clusters.iter().map(|c| c.anchor)).map(|i| &self.clusters[i])
    }

    /// Total number of clustered colours.
    pub fn len(&self) -> usize {
        self.clusters.iter().map(|c| c.members.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The catalog in cluster order, each cluster's members in hex order.
    pub fn sorted_entries(&self) -> impl Iterator<Item = &ColorEntry> {
        self.clusters.iter().flat_map(|c| c.members.iter())
    }
}
