/*!
# Input/Output

Reads the plain-text edge-list format (`spec.md` §6) into a raw
`(u64, u64)` edge list, and writes the final node-to-community mapping.
Grounded in the teacher's `core::io` module: line-oriented `BufReader`,
`#`-comment handling, and a `HashMap` used to track state while scanning —
here it tracks which unordered pairs have already been seen, instead of a
node-id map.
*/

use crate::error::{GnError, Result};
use crate::graph::CsrGraph;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Reads an edge-list file: one `<u> <v>` pair per non-empty, non-comment
/// line. A line is a comment if it starts with `#` after trimming leading
/// whitespace; such lines are dropped whole (no inline `#` stripping).
/// Self-loops and duplicate (unordered) edges are rejected as
/// `MalformedInput`.
pub fn read_edge_list(path: &Path) -> Result<Vec<(u64, u64)>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut edges = Vec::new();
    let mut seen: HashSet<(u64, u64)> = HashSet::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        if tokens.len() != 2 {
            return Err(GnError::malformed_input(format!(
                "line {}: expected exactly two whitespace-separated integers, got {:?}",
                line_no + 1,
                trimmed
            )));
        }

        let u: u64 = tokens[0].parse().map_err(|_| {
            GnError::malformed_input(format!(
                "line {}: '{}' is not a base-10 nonnegative integer",
                line_no + 1,
                tokens[0]
            ))
        })?;
        let v: u64 = tokens[1].parse().map_err(|_| {
            GnError::malformed_input(format!(
                "line {}: '{}' is not a base-10 nonnegative integer",
                line_no + 1,
                tokens[1]
            ))
        })?;

        if u == v {
            return Err(GnError::malformed_input(format!(
                "line {}: self-loop at node {}",
                line_no + 1,
                u
            )));
        }

        let key = if u < v { (u, v) } else { (v, u) };
        if !seen.insert(key) {
            return Err(GnError::malformed_input(format!(
                "line {}: duplicate edge ({}, {})",
                line_no + 1,
                u,
                v
            )));
        }

        edges.push((u, v));
    }

    Ok(edges)
}

/// Writes one `<external_id> <community_index>` line per node, ordered by
/// ascending external ID, per `spec.md` §6.
pub fn write_communities(
    path: &Path,
    communities: &[Vec<usize>],
    graph: &CsrGraph,
) -> Result<()> {
    let mut label = vec![0usize; graph.n()];
    for (community_idx, members) in communities.iter().enumerate() {
        for &internal in members {
            label[internal] = community_idx;
        }
    }

    let mut externals: Vec<(u64, usize)> = (0..graph.n())
        .map(|internal| (graph.node_id(internal), label[internal]))
        .collect();
    externals.sort_unstable_by_key(|&(external, _)| external);

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for (external, community) in externals {
        writeln!(writer, "{} {}", external, community)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn test_parses_basic_edges_and_skips_comments() {
        let f = write_temp("# a comment\n1 2\n\n2 3\n");
        let edges = read_edge_list(f.path()).unwrap();
        assert_eq!(edges, vec![(1, 2), (2, 3)]);
    }

    #[test]
    fn test_rejects_self_loop() {
        let f = write_temp("1 1\n");
        assert!(matches!(
            read_edge_list(f.path()),
            Err(GnError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_rejects_duplicate_edge_either_direction() {
        let f = write_temp("1 2\n2 1\n");
        assert!(matches!(
            read_edge_list(f.path()),
            Err(GnError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_tokens() {
        let f = write_temp("1 two\n");
        assert!(matches!(
            read_edge_list(f.path()),
            Err(GnError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_rejects_wrong_token_count() {
        let f = write_temp("1 2 3\n");
        assert!(matches!(
            read_edge_list(f.path()),
            Err(GnError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_write_communities_sorted_by_external_id() {
        let (graph, id_map) = CsrGraph::build(&[(30, 10), (10, 20)]);
        let n10 = id_map.to_internal(10).unwrap();
        let n20 = id_map.to_internal(20).unwrap();
        let n30 = id_map.to_internal(30).unwrap();
        let communities = vec![vec![n10, n30], vec![n20]];

        let out = tempfile::NamedTempFile::new().unwrap();
        write_communities(out.path(), &communities, &graph).unwrap();
        let contents = std::fs::read_to_string(out.path()).unwrap();
        assert_eq!(contents, "10 0\n20 1\n30 0\n");
    }
}
