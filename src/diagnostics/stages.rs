use crate::stability::CandidateSelection;
use crate::tree::ErTree;
use serde::{Deserialize, Serialize};

/// Shape of the extremal region forest.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeStage {
    pub nodes: usize,
    pub roots: usize,
    pub leaves: usize,
    /// Largest root component; equals the element count on connected grids.
    pub largest_root: usize,
}

impl TreeStage {
    pub fn from_tree(tree: &ErTree) -> Self {
        Self {
            nodes: tree.len(),
            roots: tree.roots().len(),
            leaves: tree.leaf_count(),
            largest_root: tree
                .roots()
                .iter()
                .map(|&r| tree.node(r).size)
                .max()
                .unwrap_or(0),
        }
    }
}

/// Counts from the variation scoring and the local-minimum search.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringStage {
    pub delta: u32,
    pub scored: usize,
    pub local_minima: usize,
    pub rejected_size: usize,
    pub rejected_variation: usize,
    pub candidates: usize,
    pub min_size: usize,
    pub max_size: usize,
}

impl ScoringStage {
    pub fn from_selection(
        selection: &CandidateSelection,
        delta: u32,
        min_size: usize,
        max_size: usize,
    ) -> Self {
        Self {
            delta,
            scored: selection.scored,
            local_minima: selection.local_minima,
            rejected_size: selection.rejected_size,
            rejected_variation: selection.rejected_variation,
            candidates: selection.candidates.len(),
            min_size,
            max_size,
        }
    }
}

/// Diversity filter outcome.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiversityStage {
    pub min_diversity: f32,
    pub input: usize,
    pub kept: usize,
    pub suppressed: usize,
}
