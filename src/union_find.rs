//! Weighted quick-union with path compression.
//!
//! Used only to count connected components after a round of edge cuts;
//! rebuilt from scratch each time (`spec.md` §5: "allocated once per
//! component-count check and released immediately after").

#[derive(Debug, Clone, Copy)]
struct Elt {
    rank: u32,
    parent: usize,
}

/// A disjoint-set forest over `0..n`.
#[derive(Debug, Clone)]
pub struct UnionFind {
    elts: Vec<Elt>,
    components: usize,
}

impl UnionFind {
    /// Creates `n` singleton sets.
    pub fn make(n: usize) -> Self {
        let elts = (0..n).map(|i| Elt { rank: 0, parent: i }).collect();
        UnionFind {
            elts,
            components: n,
        }
    }

    /// Returns the representative of `x`'s set, compressing the path from
    /// `x` to the root as it goes.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.elts[root].parent != root {
            root = self.elts[root].parent;
        }
        let mut cur = x;
        while self.elts[cur].parent != root {
            let next = self.elts[cur].parent;
            self.elts[cur].parent = root;
            cur = next;
        }
        root
    }

    /// Unions the sets containing `x` and `y`, attaching the lower-rank
    /// root under the higher-rank one (ties broken by attaching `y` under
    /// `x`). Returns `true` if this merged two previously distinct sets.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let xr = self.find(x);
        let yr = self.find(y);
        if xr == yr {
            return false;
        }
        match self.elts[xr].rank.cmp(&self.elts[yr].rank) {
            std::cmp::Ordering::Less => self.elts[xr].parent = yr,
            std::cmp::Ordering::Greater => self.elts[yr].parent = xr,
            std::cmp::Ordering::Equal => {
                self.elts[yr].parent = xr;
                self.elts[xr].rank += 1;
            }
        }
        self.components -= 1;
        true
    }

    /// Number of distinct sets remaining.
    pub fn count_components(&self) -> usize {
        self.components
    }
}
