//! Greedy modularity community detection.
//!
//! Weighted modularity Q compares intra-community edge weight against the
//! weight expected under a random rewiring with the same degree sequence:
//!
//! ```text
//! Q = sum_c [ w_in(c)/m - (deg(c) / 2m)^2 ]
//! ```
//!
//! where `m` is the total edge weight, `w_in(c)` the weight inside community
//! `c`, and `deg(c)` the summed weighted degree of its members. Detection is
//! the classic greedy agglomeration: start with one community per node and
//! repeatedly apply the merge with the greatest positive modularity gain
//!
//! ```text
//! dQ(c, d) = w_between(c, d)/m - deg(c) * deg(d) / (2 m^2)
//! ```
//!
//! until no merge improves Q. Ties are broken by the lowest community index
//! pair over the sorted node order, so identical input always produces an
//! identical partition. Isolated nodes stay as singleton communities; an
//! edge-free graph partitions into all singletons.

use std::collections::HashMap;

use tracing::debug;

use study_types::{Partition, RelationGraph};

/// Partition a relation graph into communities by greedy modularity
/// maximisation.
pub fn detect_communities(graph: &RelationGraph) -> Partition {
    let mut nodes: Vec<&str> = graph.nodes().iter().map(|s| s.as_str()).collect();
    nodes.sort_unstable();

    let total_weight = graph.total_weight();
    if nodes.is_empty() || graph.edge_count() == 0 || total_weight <= 0.0 {
        return Partition::new(nodes.into_iter().map(|n| vec![n.to_string()]).collect());
    }

    let m = f64::from(total_weight);
    let index_of: HashMap<&str, usize> = nodes.iter().enumerate().map(|(i, n)| (*n, i)).collect();

    // Community state: members, summed weighted degree, and the weight
    // between each live pair of communities.
    let mut members: Vec<Option<Vec<usize>>> = (0..nodes.len()).map(|i| Some(vec![i])).collect();
    let mut degree: Vec<f64> = nodes
        .iter()
        .map(|n| f64::from(graph.weighted_degree(n)))
        .collect();
    let mut between: HashMap<(usize, usize), f64> = HashMap::new();
    for edge in graph.edges() {
        let i = index_of[edge.source.as_str()];
        let j = index_of[edge.target.as_str()];
        let key = (i.min(j), i.max(j));
        *between.entry(key).or_insert(0.0) += f64::from(edge.weight);
    }

    loop {
        // Best merge among connected community pairs; iterating keys in
        // sorted order makes the first maximum win ties deterministically.
        let mut keys: Vec<(usize, usize)> = between.keys().copied().collect();
        keys.sort_unstable();

        let mut best: Option<((usize, usize), f64)> = None;
        for key in keys {
            let (c, d) = key;
            let gain = between[&key] / m - degree[c] * degree[d] / (2.0 * m * m);
            if best.is_none_or(|(_, g)| gain > g) {
                best = Some((key, gain));
            }
        }

        let Some(((c, d), gain)) = best else { break };
        if gain <= 0.0 {
            break;
        }

        debug!(a = c, b = d, gain = gain, "Merging communities");

        // Merge d into c (c < d by key construction)
        let absorbed = members[d].take().expect("live community");
        members[c].as_mut().expect("live community").extend(absorbed);
        degree[c] += degree[d];
        degree[d] = 0.0;

        // Re-key d's connections onto c
        let stale: Vec<((usize, usize), f64)> = between
            .iter()
            .filter(|((a, b), _)| *a == d || *b == d)
            .map(|(k, w)| (*k, *w))
            .collect();
        for ((a, b), weight) in stale {
            between.remove(&(a, b));
            let other = if a == d { b } else { a };
            if other == c {
                continue; // now internal weight, no longer a between-pair
            }
            let key = (other.min(c), other.max(c));
            *between.entry(key).or_insert(0.0) += weight;
        }
    }

    let communities: Vec<Vec<String>> = members
        .into_iter()
        .flatten()
        .map(|idx_list| idx_list.iter().map(|&i| nodes[i].to_string()).collect())
        .collect();

    Partition::new(communities)
}

/// Weighted modularity of a partition over a graph.
///
/// Edges whose endpoints are missing from the partition contribute nothing.
pub fn modularity(graph: &RelationGraph, partition: &Partition) -> f64 {
    let total = f64::from(graph.total_weight());
    if total <= 0.0 {
        return 0.0;
    }

    let mut intra = vec![0.0f64; partition.len()];
    let mut degree = vec![0.0f64; partition.len()];

    for edge in graph.edges() {
        let ca = partition.community_of(&edge.source);
        let cb = partition.community_of(&edge.target);
        let w = f64::from(edge.weight);
        if let (Some(ca), Some(cb)) = (ca, cb) {
            if ca == cb {
                intra[ca] += w;
            }
            degree[ca] += w;
            degree[cb] += w;
        }
    }

    (0..partition.len())
        .map(|c| intra[c] / total - (degree[c] / (2.0 * total)).powi(2))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_from(nodes: &[&str], edges: &[(&str, &str, f32)]) -> RelationGraph {
        let mut g = RelationGraph::new();
        for n in nodes {
            g.add_node(*n);
        }
        for (a, b, w) in edges {
            g.add_edge(*a, *b, *w).unwrap();
        }
        g
    }

    #[test]
    fn test_empty_graph() {
        let partition = detect_communities(&RelationGraph::new());
        assert!(partition.is_empty());
    }

    #[test]
    fn test_edge_free_topics_become_singletons() {
        let g = graph_from(&["alone", "apart"], &[]);
        let partition = detect_communities(&g);
        assert_eq!(partition.len(), 2);
        assert_eq!(partition.communities()[0], vec!["alone".to_string()]);
        assert_eq!(partition.communities()[1], vec!["apart".to_string()]);
    }

    #[test]
    fn test_two_dense_groups() {
        // Two triangles joined by one weak bridge
        let g = graph_from(
            &["a1", "a2", "a3", "b1", "b2", "b3"],
            &[
                ("a1", "a2", 0.9),
                ("a2", "a3", 0.9),
                ("a1", "a3", 0.9),
                ("b1", "b2", 0.9),
                ("b2", "b3", 0.9),
                ("b1", "b3", 0.9),
                ("a3", "b1", 0.1),
            ],
        );

        let partition = detect_communities(&g);
        assert_eq!(partition.len(), 2);
        assert_eq!(partition.community_of("a1"), partition.community_of("a3"));
        assert_eq!(partition.community_of("b1"), partition.community_of("b3"));
        assert_ne!(partition.community_of("a1"), partition.community_of("b1"));
    }

    #[test]
    fn test_partition_covers_node_set_disjointly() {
        let g = graph_from(
            &["a", "b", "c", "d", "e"],
            &[("a", "b", 0.8), ("c", "d", 0.7)],
        );

        let partition = detect_communities(&g);
        assert_eq!(partition.member_count(), g.node_count());
        for node in g.nodes() {
            // exactly one community claims each node
            let claiming = partition
                .communities()
                .iter()
                .filter(|c| c.contains(node))
                .count();
            assert_eq!(claiming, 1, "node {node} in {claiming} communities");
        }
    }

    #[test]
    fn test_isolated_node_kept_as_singleton() {
        let g = graph_from(&["a", "b", "island"], &[("a", "b", 0.9)]);
        let partition = detect_communities(&g);
        assert_eq!(partition.community_of("island").is_some(), true);
        let idx = partition.community_of("island").unwrap();
        assert_eq!(partition.communities()[idx].len(), 1);
    }

    #[test]
    fn test_deterministic_across_runs() {
        let g = graph_from(
            &["w", "x", "y", "z"],
            &[("w", "x", 0.5), ("y", "z", 0.5), ("x", "y", 0.5)],
        );
        let p1 = detect_communities(&g);
        let p2 = detect_communities(&g);
        assert_eq!(p1.communities(), p2.communities());
    }

    #[test]
    fn test_weights_drive_merges() {
        // c attaches strongly to a-b, weakly to d; weights must decide
        let g = graph_from(
            &["a", "b", "c", "d", "e"],
            &[
                ("a", "b", 0.9),
                ("b", "c", 0.8),
                ("c", "d", 0.1),
                ("d", "e", 0.9),
            ],
        );
        let partition = detect_communities(&g);
        assert_eq!(partition.community_of("c"), partition.community_of("a"));
        assert_ne!(partition.community_of("c"), partition.community_of("d"));
    }

    #[test]
    fn test_detected_partition_scores_positive_modularity() {
        let g = graph_from(
            &["a1", "a2", "a3", "b1", "b2", "b3"],
            &[
                ("a1", "a2", 0.9),
                ("a2", "a3", 0.9),
                ("a1", "a3", 0.9),
                ("b1", "b2", 0.9),
                ("b2", "b3", 0.9),
                ("b1", "b3", 0.9),
                ("a3", "b1", 0.1),
            ],
        );
        let partition = detect_communities(&g);
        let q = modularity(&g, &partition);
        assert!(q > 0.3, "expected strong community structure, got {q}");

        // The detected split beats the everything-in-one-bucket partition
        let lumped = Partition::new(vec![g.nodes().to_vec()]);
        assert!(q > modularity(&g, &lumped));
    }

    #[test]
    fn test_modularity_empty_graph_is_zero() {
        let g = graph_from(&["a"], &[]);
        let p = detect_communities(&g);
        assert_eq!(modularity(&g, &p), 0.0);
    }
}
