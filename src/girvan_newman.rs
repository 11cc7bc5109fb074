//! The Girvan-Newman driver (§4.9): repeatedly recompute betweenness, cut
//! the highest-betweenness edge(s), and check the live component count
//! against the requested target via a freshly rebuilt union-find.

use crate::betweenness::{accumulate, choose_sample, largest};
use crate::bfs::BfsInfo;
use crate::error::{GnError, Result};
use crate::graph::CsrGraph;
use crate::union_find::UnionFind;

/// The result of a completed run: communities as internal-index lists,
/// ordered by ascending smallest member, and the actual number found
/// (`>= target`, since a tied cut can split more than one component).
#[derive(Debug, Clone)]
pub struct Partition {
    pub communities: Vec<Vec<usize>>,
}

impl Partition {
    pub fn count(&self) -> usize {
        self.communities.len()
    }
}

/// Runs Girvan-Newman on `graph` until the live-edge component count
/// reaches `target_communities`, or the graph runs out of edges first.
/// `sample_rate` controls the fraction of highest-degree nodes used as BFS
/// sources for betweenness (`1.0` is exact Brandes betweenness).
pub fn girvan_newman(
    graph: &mut CsrGraph,
    target_communities: usize,
    sample_rate: f64,
) -> Result<Partition> {
    if target_communities == 0 {
        return Err(GnError::invalid_arguments(
            "num_clusters must be at least 1",
        ));
    }

    let n = graph.n();
    if n == 0 {
        return Ok(Partition {
            communities: Vec::new(),
        });
    }

    graph.set_sample(choose_sample(graph, sample_rate));
    let mut info = BfsInfo::new(n);

    let mut iter: u32 = 1;
    loop {
        if count_components(graph) >= target_communities {
            break;
        }

        graph.reset_betweenness();
        accumulate(graph, &mut info);

        let Some((_, tied)) = largest(graph) else {
            // Edgeless before reaching the target: fall back to singletons.
            break;
        };

        for &id in &tied {
            graph.cut_by_id(id, iter)?;
        }

        tracing::debug!(iteration = iter, cuts = tied.len(), "girvan-newman cut round");
        iter += 1;
    }

    Ok(Partition {
        communities: label_components(graph),
    })
}

/// Rebuilds a union-find over the live subgraph and returns its component
/// count. Allocated fresh each call and dropped on return, per §5.
fn count_components(graph: &CsrGraph) -> usize {
    let mut uf = UnionFind::make(graph.n());
    for (u, v) in graph.live_edges() {
        uf.union(u, v);
    }
    uf.count_components()
}

/// One pass over all live half-edges unions their endpoints; communities
/// are the resulting equivalence classes, emitted in ascending order of
/// their smallest member.
fn label_components(graph: &CsrGraph) -> Vec<Vec<usize>> {
    let n = graph.n();
    let mut uf = UnionFind::make(n);
    for (u, v) in graph.live_edges() {
        uf.union(u, v);
    }

    let mut by_root: std::collections::HashMap<usize, Vec<usize>> = std::collections::HashMap::new();
    for i in 0..n {
        let root = uf.find(i);
        by_root.entry(root).or_default().push(i);
    }

    let mut communities: Vec<Vec<usize>> = by_root.into_values().collect();
    for community in &mut communities {
        community.sort_unstable();
    }
    communities.sort_by_key(|community| community[0]);
    communities
}
