use crate::grid::{Grid, GridTag, Intensity, Polarity};
use crate::stability::Candidate;
use crate::tree::{ErTree, NodeId};
use serde::{Deserialize, Serialize};

/// Handle to a detected region.
///
/// Carries the seed element and threshold level, not the membership; use
/// [`fill`](crate::fill::fill) to materialize the elements. Handles are
/// stamped with the identity of the grid they came from and are rejected by
/// any other grid. Deserialized handles carry no identity and are rejected
/// everywhere.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedRegion {
    pub node: NodeId,
    /// Linear index of an element at exactly `level` inside the region.
    pub representative: usize,
    /// Threshold level under `polarity`.
    pub level: u32,
    /// Raw intensity of the representative.
    pub intensity: u32,
    pub size: usize,
    /// Variation score; lower is more stable.
    pub score: f32,
    pub polarity: Polarity,
    #[serde(skip)]
    tag: GridTag,
}

impl SelectedRegion {
    pub(crate) fn from_candidate<T: Intensity, const D: usize>(
        grid: &Grid<'_, T, D>,
        tree: &ErTree,
        candidate: &Candidate,
    ) -> Self {
        let node = tree.node(candidate.node);
        Self {
            node: candidate.node,
            representative: node.representative,
            level: node.level,
            intensity: grid.intensity(node.representative).to_level(),
            size: node.size,
            score: candidate.score,
            polarity: tree.polarity(),
            tag: grid.tag(),
        }
    }

    pub fn tag(&self) -> GridTag {
        self.tag
    }
}
