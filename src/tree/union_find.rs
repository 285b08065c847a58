const INACTIVE: u32 = u32::MAX;

/// Flat disjoint-set forest over grid elements.
///
/// Elements start inactive and join the structure as the intensity sweep
/// reaches them. Uses path halving and union by size.
pub(super) struct UnionFind {
    parent: Vec<u32>,
    size: Vec<u32>,
}

impl UnionFind {
    pub(super) fn new(len: usize) -> Self {
        Self {
            parent: vec![INACTIVE; len],
            size: vec![0; len],
        }
    }

    #[inline]
    pub(super) fn activate(&mut self, x: usize) {
        self.parent[x] = x as u32;
        self.size[x] = 1;
    }

    #[inline]
    pub(super) fn is_active(&self, x: usize) -> bool {
        self.parent[x] != INACTIVE
    }

    #[inline]
    pub(super) fn find(&mut self, x: usize) -> usize {
        let mut x = x;
        loop {
            let p = self.parent[x] as usize;
            if p == x {
                return x;
            }
            let gp = self.parent[p] as usize;
            self.parent[x] = gp as u32;
            x = gp;
        }
    }

    /// Link two distinct roots; the larger component (lower index on ties)
    /// stays the root. Returns the surviving root.
    #[inline]
    pub(super) fn link(&mut self, a: usize, b: usize) -> usize {
        debug_assert_ne!(a, b);
        let (root, child) = match self.size[a].cmp(&self.size[b]) {
            std::cmp::Ordering::Greater => (a, b),
            std::cmp::Ordering::Less => (b, a),
            std::cmp::Ordering::Equal => (a.min(b), a.max(b)),
        };
        self.parent[child] = root as u32;
        self.size[root] += self.size[child];
        root
    }

    #[inline]
    pub(super) fn size(&self, root: usize) -> usize {
        self.size[root] as usize
    }
}
