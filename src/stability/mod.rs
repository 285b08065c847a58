//! Variation scoring and selection of maximally stable nodes.
//!
//! For a node at level `t` the variation is
//!
//! ```text
//! (size(t + delta) - size(t - delta)) / size(t)
//! ```
//!
//! where `size(s)` follows the node's parent chain above `t` and its
//! main-child chain below it (see [`ErTree::size_at`]). The score is only
//! defined when both `t + delta` and `t - delta` lie inside the level domain;
//! nodes too close to either end are never candidates.
//!
//! A node is maximally stable when its score is a strict local minimum along
//! its merge path: not above its parent's score (equal scores favour the node
//! nearer the leaves) and strictly below its main child's score. Undefined
//! neighbours do not block a node.

use crate::tree::{ErTree, NodeId};
use log::debug;
use serde::{Deserialize, Serialize};

/// Candidate region: a maximally stable node that passed the size gates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub node: NodeId,
    pub score: f32,
    pub size: usize,
}

/// Absolute size window and optional variation ceiling applied to minima.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CandidateFilter {
    pub min_size: usize,
    pub max_size: usize,
    pub max_variation: Option<f32>,
}

/// Outcome of [`select_candidates`], with counts kept for diagnostics.
#[derive(Clone, Debug, Default)]
pub struct CandidateSelection {
    pub candidates: Vec<Candidate>,
    pub scored: usize,
    pub local_minima: usize,
    pub rejected_size: usize,
    pub rejected_variation: usize,
}

/// Variation score of every node (index = `NodeId`).
pub fn score_tree(tree: &ErTree, delta: u32) -> Vec<Option<f32>> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        (0..tree.len() as u32)
            .into_par_iter()
            .map(|i| score_node(tree, NodeId(i), delta))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        (0..tree.len() as u32)
            .map(|i| score_node(tree, NodeId(i), delta))
            .collect()
    }
}

/// Variation score of one node, `None` when the window leaves the domain.
pub fn score_node(tree: &ErTree, id: NodeId, delta: u32) -> Option<f32> {
    let node = tree.node(id);
    let upper = node.level.checked_add(delta)?;
    if upper > tree.max_level() {
        return None;
    }
    let lower = node.level.checked_sub(delta)?;
    let above = tree.size_at(id, upper);
    let below = tree.size_at(id, lower);
    Some((above - below) as f32 / node.size as f32)
}

/// Pick strict local minima of `scores` and apply the size/variation gates.
pub fn select_candidates(
    tree: &ErTree,
    scores: &[Option<f32>],
    filter: &CandidateFilter,
) -> CandidateSelection {
    debug_assert_eq!(scores.len(), tree.len());
    let mut selection = CandidateSelection::default();

    for (i, node) in tree.nodes().iter().enumerate() {
        let Some(score) = scores[i] else {
            continue;
        };
        selection.scored += 1;

        let parent_score = node.parent.and_then(|p| scores[p.index()]);
        if matches!(parent_score, Some(p) if score > p) {
            continue;
        }
        let child_score = node.main_child.and_then(|c| scores[c.index()]);
        if matches!(child_score, Some(c) if score >= c) {
            continue;
        }
        selection.local_minima += 1;

        if node.size < filter.min_size || node.size > filter.max_size {
            selection.rejected_size += 1;
            continue;
        }
        if matches!(filter.max_variation, Some(max) if score > max) {
            selection.rejected_variation += 1;
            continue;
        }
        selection.candidates.push(Candidate {
            node: NodeId(i as u32),
            score,
            size: node.size,
        });
    }

    debug!(
        "select_candidates nodes={} scored={} minima={} size_rejected={} variation_rejected={} kept={}",
        tree.len(),
        selection.scored,
        selection.local_minima,
        selection.rejected_size,
        selection.rejected_variation,
        selection.candidates.len()
    );
    selection
}

#[cfg(test)]
mod tests;
