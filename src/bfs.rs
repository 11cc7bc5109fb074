//! Single-source BFS with Brandes-style multi-parent bookkeeping.
//!
//! Produces, for a chosen source, the distance to every reachable node, the
//! number of shortest paths (`sigma`), every immediate predecessor on some
//! shortest path (`pred`), and a traversal stack in non-decreasing distance
//! order — everything [`crate::betweenness`] needs to run its reverse pass.
//! See `spec.md` §4.7.

use crate::graph::CsrGraph;
use crate::queue::IntQueue;
use crate::seq::IntSeq;

/// Per-node BFS bookkeeping, reset and reused across sources within a
/// single betweenness pass so the growable `pred`/`stack` buffers keep
/// their capacity.
#[derive(Debug, Clone)]
pub struct BfsInfo {
    pub src: usize,
    pub parent: Vec<i64>,
    pub distance: Vec<i64>,
    pub sigma: Vec<f64>,
    pub pred: Vec<IntSeq>,
    pub stack: IntSeq,
    queue: IntQueue,
}

impl BfsInfo {
    /// Allocates bookkeeping for a graph of `n` nodes. Call once per driver
    /// run; reuse across sources via [`Self::reset`].
    pub fn new(n: usize) -> Self {
        BfsInfo {
            src: 0,
            parent: vec![-1; n],
            distance: vec![-1; n],
            sigma: vec![0.0; n],
            pred: vec![IntSeq::with_capacity(4); n],
            stack: IntSeq::with_capacity(n),
            queue: IntQueue::with_capacity(n),
        }
    }

    /// Restores every per-node array to its initial state in O(n +
    /// size(pred[*])) without reallocating the outer `Vec`s.
    pub fn reset(&mut self, src: usize) {
        self.src = src;
        self.parent.iter_mut().for_each(|p| *p = -1);
        self.distance.iter_mut().for_each(|d| *d = -1);
        self.sigma.iter_mut().for_each(|s| *s = 0.0);
        self.pred.iter_mut().for_each(IntSeq::clear);
        self.stack.clear();
        self.queue.clear();
    }

    /// Runs BFS from `self.src` over `graph`'s live edges. `self` must
    /// already be in its reset state (call [`Self::reset`] first).
    pub fn run(&mut self, graph: &CsrGraph) {
        let src = self.src;
        self.distance[src] = 0;
        self.sigma[src] = 1.0;
        self.queue.push_back(src);

        while let Some(u) = self.queue.pop_front() {
            self.stack.append(u as i64);
            for v in graph.live_neighbors(u) {
                if self.distance[v] == -1 {
                    self.distance[v] = self.distance[u] + 1;
                    self.parent[v] = u as i64;
                    self.queue.push_back(v);
                }
                if self.distance[v] == self.distance[u] + 1 {
                    self.sigma[v] += self.sigma[u];
                    self.pred[v].append(u as i64);
                }
            }
        }
    }
}
