//! Compressed-sparse-row graph with bidirectional edge duplication.
//!
//! Each undirected edge is stored as two half-edges so that neighbor lookup
//! never has to scan anything but the queried node's own slice. Cuts do not
//! remove array entries — they flip the sign of `edge_id` — so the
//! topology arrays (`index`, `neighbors`) never change after construction.
//! See `spec.md` §3–4.6 for the full field contract and invariants.

use crate::edge_list::{Column, EdgeList};
use crate::error::{GnError, Result};
use crate::id_map::IdMap;

/// An immutable-topology, dense-indexed undirected graph.
#[derive(Debug, Clone)]
pub struct CsrGraph {
    n: usize,
    m: usize,
    index: Vec<usize>,
    neighbors: Vec<usize>,
    edge_id: Vec<i64>,
    edge_bet: Vec<f32>,
    degree: Vec<usize>,
    node_id: Vec<u64>,
    sample: Vec<usize>,
    /// `edge_endpoints[id - 1] == (u, v)` with `u < v`, for each edge id
    /// `1..=m`. Lets the Girvan-Newman driver go straight from "which edge
    /// id had max betweenness" to a `cut` call without re-scanning the
    /// adjacency for it.
    edge_endpoints: Vec<(usize, usize)>,
}

impl CsrGraph {
    /// Builds a CSR graph from a raw edge list of `(external_u, external_v)`
    /// pairs (already validated by the caller: no self-loops, no
    /// duplicates). Returns the graph and the `IdMap` used to rewrite
    /// endpoints, which callers need again to translate output labels back
    /// to external IDs.
    pub fn build(raw_edges: &[(u64, u64)]) -> (CsrGraph, IdMap) {
        let id_map = IdMap::build(
            raw_edges
                .iter()
                .flat_map(|&(u, v)| [u, v].into_iter()),
        );
        let n = id_map.len();
        let m = raw_edges.len();

        // Doubled half-edge list: (u, v, id) and (v, u, id) for each edge,
        // with fresh edge IDs numbered 1..=m (0 is unused so sign-flipping
        // for cuts never collides with "no edge").
        let mut doubled = EdgeList::with_capacity(2 * m);
        let mut edge_endpoints = Vec::with_capacity(m);
        for (i, &(eu, ev)) in raw_edges.iter().enumerate() {
            // Endpoints were already validated against id_map's build set
            // by construction (they came from the same raw_edges).
            let ui_res = id_map.to_internal(eu);
            let vi_res = id_map.to_internal(ev);
            debug_assert!(ui_res.is_ok() && vi_res.is_ok(), "endpoint in build set");
            let ui = ui_res.unwrap();
            let vi = vi_res.unwrap();
            let id = (i + 1) as i64;
            doubled.push(ui, vi, id);
            doubled.push(vi, ui, id);
            edge_endpoints.push(if ui < vi { (ui, vi) } else { (vi, ui) });
        }

        // Group by source, ascending target within each source.
        doubled.sort_by(Column::V);
        doubled.sort_by(Column::U);

        let mut index = vec![0usize; n + 1];
        for &u in &doubled.u {
            index[u + 1] += 1;
        }
        for i in 0..n {
            index[i + 1] += index[i];
        }

        let neighbors = doubled.v.clone();
        let edge_id = doubled.id.clone();
        let degree: Vec<usize> = (0..n).map(|i| index[i + 1] - index[i]).collect();

        let mut node_id = vec![0u64; n];
        for i in 0..n {
            let external_res = id_map.to_external(i);
            debug_assert!(external_res.is_ok(), "internal index in range");
            node_id[i] = external_res.unwrap();
        }

        let graph = CsrGraph {
            n,
            m,
            index,
            neighbors,
            edge_id,
            edge_bet: vec![0.0; m],
            degree,
            node_id,
            sample: Vec::new(),
            edge_endpoints,
        };
        (graph, id_map)
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn m(&self) -> usize {
        self.m
    }

    /// External ID stored at internal index `i`.
    pub fn node_id(&self, i: usize) -> u64 {
        self.node_id[i]
    }

    /// Cached degree of node `i` at construction time. Never updated by
    /// cuts — Girvan-Newman's sample selection and per-round relabeling
    /// both rely on this being the *original* degree, not a live neighbor
    /// count.
    pub fn degree(&self, i: usize) -> usize {
        self.degree[i]
    }

    /// All half-edge targets of `i`, live or cut, ascending by target.
    /// Most callers want [`Self::live_neighbors`] instead.
    fn half_edge_slice(&self, i: usize) -> std::ops::Range<usize> {
        self.index[i]..self.index[i + 1]
    }

    /// An iterator over the live neighbors of `i`, ascending by target.
    pub fn live_neighbors(&self, i: usize) -> impl Iterator<Item = usize> + '_ {
        self.half_edge_slice(i)
            .filter(move |&k| self.edge_id[k] > 0)
            .map(move |k| self.neighbors[k])
    }

    /// Binary-searches for `b` within `a`'s target slice; `true` only if
    /// found and the corresponding edge is live.
    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.find_half_edge(a, b)
            .is_some_and(|k| self.edge_id[k] > 0)
    }

    /// Positive edge ID shared by the two half-edges of `(a, b)`.
    pub fn edge_id_of(&self, a: usize, b: usize) -> Result<i64> {
        match self.find_half_edge(a, b) {
            Some(k) if self.edge_id[k] > 0 => Ok(self.edge_id[k]),
            _ => Err(GnError::no_such_edge(format!("no live edge ({}, {})", a, b))),
        }
    }

    /// Locates the half-edge position of `(a, b)` via binary search over
    /// `a`'s target slice, live or not.
    fn find_half_edge(&self, a: usize, b: usize) -> Option<usize> {
        let range = self.half_edge_slice(a);
        let slice = &self.neighbors[range.clone()];
        slice
            .binary_search(&b)
            .ok()
            .map(|offset| range.start + offset)
    }

    /// Marks both symmetric half-edges of `(a, b)` as cut by negating their
    /// edge ID to `-iter`. Fails if the edge does not exist or is already
    /// cut.
    pub fn cut(&mut self, a: usize, b: usize, iter: u32) -> Result<()> {
        let k_ab = match self.find_half_edge(a, b) {
            Some(k) if self.edge_id[k] > 0 => k,
            _ => return Err(GnError::no_such_edge(format!("no live edge ({}, {})", a, b))),
        };
        let k_ba_opt = self
            .find_half_edge(b, a)
            .filter(|&k| self.edge_id[k] == self.edge_id[k_ab]);
        debug_assert!(k_ba_opt.is_some(), "symmetric half-edge must exist with matching id");
        let k_ba = k_ba_opt.unwrap();
        let marker = -(iter as i64);
        self.edge_id[k_ab] = marker;
        self.edge_id[k_ba] = marker;
        Ok(())
    }

    /// The `(u, v)` endpoints (`u < v`) of edge `id`, fixed at construction
    /// time regardless of whether the edge is currently live.
    pub fn endpoints_of_id(&self, id: i64) -> (usize, usize) {
        self.edge_endpoints[(id - 1) as usize]
    }

    /// Cuts edge `id` directly, without a neighbor-slice lookup.
    pub fn cut_by_id(&mut self, id: i64, iter: u32) -> Result<()> {
        let (u, v) = self.endpoints_of_id(id);
        self.cut(u, v, iter)
    }

    /// Zeroes the betweenness accumulator for every live edge. Called at
    /// the start of each Girvan-Newman iteration.
    pub fn reset_betweenness(&mut self) {
        self.edge_bet.iter_mut().for_each(|b| *b = 0.0);
    }

    /// Adds `delta` to the accumulated betweenness of edge `id` (`id` is
    /// the 1-based positive edge ID; storage is 0-based).
    pub fn add_betweenness(&mut self, id: i64, delta: f32) {
        debug_assert!(id > 0, "betweenness accumulation only applies to live edges");
        self.edge_bet[(id - 1) as usize] += delta;
    }

    pub fn betweenness(&self, id: i64) -> f32 {
        self.edge_bet[(id - 1) as usize]
    }

    /// Sets the fixed sample set of internal node indices used by every
    /// Girvan-Newman iteration.
    pub fn set_sample(&mut self, sample: Vec<usize>) {
        self.sample = sample;
    }

    pub fn sample(&self) -> &[usize] {
        &self.sample
    }

    /// Internal indices `(u, v)` with `u < v` of every currently live edge,
    /// each yielded once. Used for post-termination component labeling and
    /// for rebuilding the union-find.
    pub fn live_edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.n).flat_map(move |u| {
            self.half_edge_slice(u)
                .filter(move |&k| self.edge_id[k] > 0)
                .filter_map(move |k| {
                    let v = self.neighbors[k];
                    (u < v).then_some((u, v))
                })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> (CsrGraph, IdMap) {
        CsrGraph::build(&[(1, 2), (2, 3), (1, 3)])
    }

    #[test]
    fn test_csr_invariant_symmetric_has_edge() {
        let (g, map) = triangle();
        let a = map.to_internal(1).unwrap();
        let b = map.to_internal(2).unwrap();
        assert!(g.has_edge(a, b));
        assert!(g.has_edge(b, a));
        assert_eq!(g.edge_id_of(a, b).unwrap(), g.edge_id_of(b, a).unwrap());
    }

    #[test]
    fn test_degree_sum_equals_2m() {
        let (g, _) = triangle();
        let sum: usize = (0..g.n()).map(|i| g.degree(i)).sum();
        assert_eq!(sum, 2 * g.m());
        assert_eq!(g.index[g.n()], 2 * g.m());
    }

    #[test]
    fn test_neighbors_sorted_ascending() {
        let (g, _) = CsrGraph::build(&[(5, 1), (5, 9), (5, 3)]);
        let map = IdMap::build([5u64, 1, 9, 3]);
        let center = map.to_internal(5).unwrap();
        let neighbors: Vec<usize> = g.live_neighbors(center).collect();
        let mut sorted = neighbors.clone();
        sorted.sort_unstable();
        assert_eq!(neighbors, sorted);
    }

    #[test]
    fn test_cut_hides_edge_both_directions() {
        let (mut g, map) = triangle();
        let a = map.to_internal(1).unwrap();
        let b = map.to_internal(2).unwrap();
        assert!(g.has_edge(a, b));
        g.cut(a, b, 1).unwrap();
        assert!(!g.has_edge(a, b));
        assert!(!g.has_edge(b, a));
        assert!(g.edge_id_of(a, b).is_err());
    }

    #[test]
    fn test_cut_by_id_matches_cut_by_endpoints() {
        let (mut g, map) = triangle();
        let a = map.to_internal(1).unwrap();
        let b = map.to_internal(2).unwrap();
        let id = g.edge_id_of(a, b).unwrap();
        let (eu, ev) = g.endpoints_of_id(id);
        assert_eq!((eu.min(ev), eu.max(ev)), (a.min(b), a.max(b)));
        g.cut_by_id(id, 1).unwrap();
        assert!(!g.has_edge(a, b));
    }

    #[test]
    fn test_cut_nonexistent_edge_errors() {
        let (mut g, map) = triangle();
        let a = map.to_internal(1).unwrap();
        let b = map.to_internal(2).unwrap();
        g.cut(a, b, 1).unwrap();
        assert!(g.cut(a, b, 2).is_err());
    }

    #[test]
    fn test_degree_unchanged_by_cut() {
        let (mut g, map) = triangle();
        let a = map.to_internal(1).unwrap();
        let b = map.to_internal(2).unwrap();
        let before = g.degree(a);
        g.cut(a, b, 1).unwrap();
        assert_eq!(g.degree(a), before);
    }

    #[test]
    fn test_live_edges_unordered_once() {
        let (g, _) = triangle();
        let mut edges: Vec<(usize, usize)> = g.live_edges().collect();
        edges.sort_unstable();
        assert_eq!(edges.len(), 3);
        for &(u, v) in &edges {
            assert!(u < v);
        }
    }

    #[test]
    fn test_betweenness_reset_and_accumulate() {
        let (mut g, map) = triangle();
        let a = map.to_internal(1).unwrap();
        let b = map.to_internal(2).unwrap();
        let id = g.edge_id_of(a, b).unwrap();
        g.add_betweenness(id, 2.5);
        assert_eq!(g.betweenness(id), 2.5);
        g.reset_betweenness();
        assert_eq!(g.betweenness(id), 0.0);
    }
}
