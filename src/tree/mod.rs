//! Extremal region forest built by an incremental union-find sweep.
//!
//! Elements are visited in increasing level order (see
//! [`Polarity`](crate::grid::Polarity)); each time a connected component of
//! `{level <= t}` changes at level `t` (it appears, grows, or absorbs another
//! component) a node is appended recording the component at that level.
//! Nodes live in a flat arena indexed by [`NodeId`]; parent links point to the
//! node describing the same, grown component at the next level where it
//! changes. Roots are the components still separate after the whole range,
//! one per connected piece of the grid.
//!
//! Invariants
//! - `level(child) < level(parent)` and `size(child) < size(parent)`.
//! - Each node's `representative` has exactly the node's level, so the node
//!   can be rebuilt by flooding from it.
//! - The root sizes sum to the grid's element count.
//!
//! Every walk over the tree is iterative; parent chains may be as long as the
//! number of distinct levels.

mod builder;
mod union_find;

use crate::grid::{Grid, Intensity, Polarity};
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Index of a node in an [`ErTree`] arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A component as it exists at one level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErNode {
    pub parent: Option<NodeId>,
    /// Largest child (lowest id on ties): the branch the component grew from.
    pub main_child: Option<NodeId>,
    pub level: u32,
    pub size: usize,
    pub representative: usize,
}

#[derive(Clone, Debug)]
pub struct ErTree {
    nodes: Vec<ErNode>,
    roots: Vec<NodeId>,
    polarity: Polarity,
    elements: usize,
    max_level: u32,
}

impl ErTree {
    /// Sweep `grid` under `polarity` and build the extremal region forest.
    pub fn build<T: Intensity, const D: usize>(grid: &Grid<'_, T, D>, polarity: Polarity) -> Self {
        let start = Instant::now();
        let nodes = builder::TreeBuilder::new(grid, polarity).run();
        let roots: Vec<NodeId> = nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.parent.is_none())
            .map(|(i, _)| NodeId(i as u32))
            .collect();
        debug!(
            "ErTree::build elements={} nodes={} roots={} polarity={} elapsed_ms={:.3}",
            grid.len(),
            nodes.len(),
            roots.len(),
            polarity.label(),
            start.elapsed().as_secs_f64() * 1000.0
        );
        Self {
            nodes,
            roots,
            polarity,
            elements: grid.len(),
            max_level: T::MAX_LEVEL,
        }
    }

    pub fn nodes(&self) -> &[ErNode] {
        &self.nodes
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &ErNode {
        &self.nodes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Number of grid elements the tree was built over.
    pub fn element_count(&self) -> usize {
        self.elements
    }

    /// Upper end of the level domain of the source intensity type.
    pub fn max_level(&self) -> u32 {
        self.max_level
    }

    /// Nodes without children.
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.main_child.is_none()).count()
    }

    /// Proper ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.node(id).parent,
        }
    }

    /// True when `ancestor` lies strictly above `node` on its parent chain.
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let target = self.node(ancestor).level;
        self.ancestors(node)
            .take_while(|&a| self.node(a).level <= target)
            .any(|a| a == ancestor)
    }

    /// Size of the component holding `id`'s representative at `level`.
    ///
    /// Above the node's level this follows parent links; below it follows the
    /// main-child chain and is 0 once that chain ends above `level`.
    pub fn size_at(&self, id: NodeId, level: u32) -> usize {
        let node = self.node(id);
        if level >= node.level {
            let mut current = id;
            while let Some(parent) = self.node(current).parent {
                if self.node(parent).level > level {
                    break;
                }
                current = parent;
            }
            self.node(current).size
        } else {
            let mut current = id;
            loop {
                match self.node(current).main_child {
                    Some(child) if self.node(child).level <= level => {
                        return self.node(child).size;
                    }
                    Some(child) => current = child,
                    None => return 0,
                }
            }
        }
    }
}

pub struct Ancestors<'t> {
    tree: &'t ErTree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.node(current).parent;
        Some(current)
    }
}

#[cfg(test)]
mod tests;
