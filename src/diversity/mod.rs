//! Non-maximum suppression of nested candidates.
//!
//! Candidates are visited from most to least stable (score, then size, then
//! node id). A candidate is dropped when an already kept candidate is its
//! ancestor or descendant and the two are too close in size:
//!
//! ```text
//! (size(ancestor) - size(descendant)) / size(ancestor) < min_diversity
//! ```
//!
//! Suppression only runs forward; a kept region is never revisited. Sizes grow
//! strictly along parent links, so the relative difference grows with every
//! step up and each walk stops at the first ancestor outside the window.

use crate::stability::Candidate;
use crate::tree::{ErTree, NodeId};
use log::debug;
use std::cmp::Ordering;

/// Priority order used by [`suppress`]: lower score, then smaller size, then
/// lower node id first.
pub fn priority_order(a: &Candidate, b: &Candidate) -> Ordering {
    a.score
        .total_cmp(&b.score)
        .then(a.size.cmp(&b.size))
        .then(a.node.cmp(&b.node))
}

#[inline]
fn relative_difference(ancestor: usize, descendant: usize) -> f32 {
    (ancestor - descendant) as f32 / ancestor as f32
}

/// Keep the non-redundant candidates, returned in priority order.
pub fn suppress(tree: &ErTree, mut candidates: Vec<Candidate>, min_diversity: f32) -> Vec<Candidate> {
    candidates.sort_by(priority_order);
    if min_diversity <= 0.0 {
        return candidates;
    }

    let total = candidates.len();
    let mut kept = vec![false; tree.len()];
    // Ancestors inside the window of a kept descendant.
    let mut shadowed = vec![false; tree.len()];
    let mut out = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        if shadowed[candidate.node.index()] {
            continue;
        }
        if window(tree, candidate.node, min_diversity).any(|a| kept[a.index()]) {
            continue;
        }
        kept[candidate.node.index()] = true;
        for ancestor in window(tree, candidate.node, min_diversity) {
            shadowed[ancestor.index()] = true;
        }
        out.push(candidate);
    }

    debug!(
        "suppress min_diversity={:.3} candidates={} kept={}",
        min_diversity,
        total,
        out.len()
    );
    out
}

/// Ancestors of `id` whose relative size difference stays below `min_diversity`.
fn window(tree: &ErTree, id: NodeId, min_diversity: f32) -> impl Iterator<Item = NodeId> + '_ {
    let size = tree.node(id).size;
    tree.ancestors(id)
        .take_while(move |&a| relative_difference(tree.node(a).size, size) < min_diversity)
}
