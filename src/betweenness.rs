//! Sampled edge-betweenness accumulation (Brandes' reverse pass) on top of
//! [`crate::bfs`]. See `spec.md` §4.8.

use crate::bfs::BfsInfo;
use crate::graph::CsrGraph;
use ordered_float::OrderedFloat;

/// Chooses the sample set `S`: the top `ceil(sample_rate * n)` nodes by
/// (original, pre-cut) degree, ties broken by ascending internal index.
/// Called once per driver run — the sample is fixed for the lifetime of a
/// Girvan-Newman run even though later rounds cut edges.
pub fn choose_sample(graph: &CsrGraph, sample_rate: f64) -> Vec<usize> {
    let n = graph.n();
    let sample_size = ((sample_rate * n as f64).ceil() as usize).clamp(0, n);
    let mut by_degree: Vec<usize> = (0..n).collect();
    // Descending degree, ascending index on ties: a degree-desc sort is
    // stable w.r.t. the already-ascending index order of `0..n`.
    by_degree.sort_by_key(|&i| std::cmp::Reverse(graph.degree(i)));
    by_degree.truncate(sample_size);
    by_degree
}

/// Runs the sampled betweenness pass: zeroes nothing itself (callers reset
/// via [`CsrGraph::reset_betweenness`]), then for each node in the sample
/// runs a BFS and drains its stack in reverse to accumulate dependency onto
/// `graph`'s `edge_bet` array. Accumulation happens in `f32`, in ascending
/// edge-ID order within each source's reverse pass (the order `pred`
/// entries were appended, which is ascending discovery order), so repeated
/// runs over the same live topology are bitwise reproducible.
pub fn accumulate(graph: &mut CsrGraph, info: &mut BfsInfo) {
    let sample = graph.sample().to_vec();
    for &s in &sample {
        info.reset(s);
        info.run(graph);

        let n = graph.n();
        let mut delta = vec![0.0f64; n];
        while !info.stack.is_empty() {
            let w = info.stack.pop() as usize;
            let preds: Vec<i64> = info.pred[w].iter().copied().collect();
            for u in preds {
                let u = u as usize;
                let c = (info.sigma[u] / info.sigma[w]) * (1.0 + delta[w]);
                delta[u] += c;
                let edge_id_res = graph.edge_id_of(u, w);
                debug_assert!(
                    edge_id_res.is_ok(),
                    "pred edge must be live: BFS never traverses cut edges"
                );
                graph.add_betweenness(edge_id_res.unwrap(), c as f32);
            }
        }
    }
}

/// The current maximum betweenness among live edges and every edge ID
/// tied at that maximum, in ascending edge-ID order. `None` if there are no
/// live edges.
pub fn largest(graph: &CsrGraph) -> Option<(f32, Vec<i64>)> {
    let mut max: Option<OrderedFloat<f32>> = None;
    let mut ids: Vec<i64> = Vec::new();

    let mut live_ids: Vec<i64> = graph
        .live_edges()
        .map(|(u, v)| {
            let id_res = graph.edge_id_of(u, v);
            debug_assert!(id_res.is_ok(), "live edge has a positive id");
            id_res.unwrap()
        })
        .collect();
    live_ids.sort_unstable();
    live_ids.dedup();

    for id in live_ids {
        let score = OrderedFloat(graph.betweenness(id));
        match max {
            None => {
                max = Some(score);
                ids.push(id);
            }
            Some(m) if score > m => {
                max = Some(score);
                ids.clear();
                ids.push(id);
            }
            Some(m) if score == m => {
                ids.push(id);
            }
            _ => {}
        }
    }

    max.map(|m| (m.into_inner(), ids))
}
