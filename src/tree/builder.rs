use super::union_find::UnionFind;
use super::{ErNode, NodeId};
use crate::grid::{Grid, Intensity, Polarity};

const NO_NODE: u32 = u32::MAX;

/// Single-pass sweep over the sorted elements.
///
/// Elements of one level form a plateau batch: every union inside the batch
/// happens before any node of that level is emitted, so the result does not
/// depend on the order of equal-level elements.
pub(super) struct TreeBuilder<'g, 'a, T: Intensity, const D: usize> {
    grid: &'g Grid<'a, T, D>,
    levels: Vec<u32>,
    uf: UnionFind,
    /// Latest node of each union-find root (`NO_NODE` while it changes).
    last_node: Vec<u32>,
    /// Nodes absorbed during the current batch with the root they lived in.
    pending: Vec<(u32, usize)>,
    nodes: Vec<ErNode>,
}

impl<'g, 'a, T: Intensity, const D: usize> TreeBuilder<'g, 'a, T, D> {
    pub(super) fn new(grid: &'g Grid<'a, T, D>, polarity: Polarity) -> Self {
        let levels = grid.data().iter().map(|&v| polarity.level(v)).collect();
        let n = grid.len();
        Self {
            grid,
            levels,
            uf: UnionFind::new(n),
            last_node: vec![NO_NODE; n],
            pending: Vec::new(),
            nodes: Vec::new(),
        }
    }

    pub(super) fn run(mut self) -> Vec<ErNode> {
        let order = sorted_order(&self.levels);
        let mut start = 0;
        while start < order.len() {
            let level = self.levels[order[start] as usize];
            let mut end = start + 1;
            while end < order.len() && self.levels[order[end] as usize] == level {
                end += 1;
            }
            self.process_batch(&order[start..end], level);
            start = end;
        }
        self.nodes
    }

    fn process_batch(&mut self, batch: &[u32], level: u32) {
        let grid = self.grid;
        for &e in batch {
            let e = e as usize;
            self.uf.activate(e);
            for n in grid.neighbors_of(e) {
                if self.uf.is_active(n) {
                    self.merge(e, n);
                }
            }
        }

        // Batch elements are in index order, so the first one seen per
        // component is its smallest index at this level.
        for &e in batch {
            let e = e as usize;
            let root = self.uf.find(e);
            if self.last_node[root] == NO_NODE {
                let id = self.nodes.len() as u32;
                self.nodes.push(ErNode {
                    parent: None,
                    main_child: None,
                    level,
                    size: self.uf.size(root),
                    representative: e,
                });
                self.last_node[root] = id;
            }
        }

        let pending = std::mem::take(&mut self.pending);
        for &(child, old_root) in &pending {
            let root = self.uf.find(old_root);
            let parent = self.last_node[root];
            debug_assert_ne!(parent, NO_NODE);
            self.attach(child, parent);
        }
        self.pending = pending;
        self.pending.clear();
    }

    fn merge(&mut self, a: usize, b: usize) {
        let ra = self.uf.find(a);
        let rb = self.uf.find(b);
        if ra == rb {
            return;
        }
        for root in [ra, rb] {
            let prev = self.last_node[root];
            if prev != NO_NODE {
                self.pending.push((prev, root));
                self.last_node[root] = NO_NODE;
            }
        }
        self.uf.link(ra, rb);
    }

    fn attach(&mut self, child: u32, parent: u32) {
        self.nodes[child as usize].parent = Some(NodeId(parent));
        let child_size = self.nodes[child as usize].size;
        let replace = match self.nodes[parent as usize].main_child {
            None => true,
            Some(current) => {
                let current_size = self.nodes[current.index()].size;
                child_size > current_size || (child_size == current_size && child < current.0)
            }
        };
        if replace {
            self.nodes[parent as usize].main_child = Some(NodeId(child));
        }
    }
}

/// Element indices sorted by `(level, index)`; keys are unique, so the
/// unstable sort is still deterministic.
fn sorted_order(levels: &[u32]) -> Vec<u32> {
    let mut order: Vec<u32> = (0..levels.len() as u32).collect();
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        order.par_sort_unstable_by_key(|&i| (levels[i as usize], i));
    }
    #[cfg(not(feature = "parallel"))]
    order.sort_unstable_by_key(|&i| (levels[i as usize], i));
    order
}
