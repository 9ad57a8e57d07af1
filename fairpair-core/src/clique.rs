/// Fixed-size clique enumeration.
///
/// Both strategies return every distinct set of exactly `size` pairwise
/// adjacent nodes, in the same canonical order: node ids ascending inside each
/// clique, cliques sorted lexicographically. No clique of the requested size
/// is a valid, empty outcome.
use std::collections::HashSet;

use log::debug;

use crate::graph::{CompatibilityGraph, NodeId, NodeSet};
use crate::types::CliqueStrategy;

/// Node ids of one clique, ascending.
pub type Clique = Vec<NodeId>;

pub fn find_cliques(graph: &CompatibilityGraph, size: usize, strategy: CliqueStrategy) -> Vec<Clique> {
    if size == 0 {
        return Vec::new();
    }
    if size == 1 {
        return (0..graph.node_count()).map(|id| vec![id]).collect();
    }

    let cliques = match strategy {
        CliqueStrategy::PairwiseMerge => pairwise_merge(graph, size),
        CliqueStrategy::ExactSearch => exact_search(graph, size),
    };
    debug!("{:?}: {} cliques of size {}", strategy, cliques.len(), size);
    cliques
}

// ---------------------------------------------------------------------------
// Pairwise merge
// ---------------------------------------------------------------------------

/// Start from the edges (2-cliques). Each round, two k-cliques whose symmetric
/// difference is exactly two adjacent nodes merge into a (k+1)-clique.
/// Duplicates collapse in a hash set before the next round.
fn pairwise_merge(graph: &CompatibilityGraph, size: usize) -> Vec<Clique> {
    let capacity = graph.node_count();
    let mut current: Vec<NodeSet> = graph
        .edges()
        .into_iter()
        .map(|(a, b)| NodeSet::from_ids(capacity, [a, b]))
        .collect();

    let mut k = 2;
    while !current.is_empty() && k < size {
        let mut next: HashSet<NodeSet> = HashSet::new();
        for (i, u) in current.iter().enumerate() {
            for v in &current[i + 1..] {
                if u.symmetric_difference_len(v) != 2 {
                    continue;
                }
                let diff = u.symmetric_difference(v);
                let mut ends = diff.iter();
                if let (Some(a), Some(b)) = (ends.next(), ends.next()) {
                    if graph.are_adjacent(a, b) {
                        next.insert(u.union(v));
                    }
                }
            }
        }
        current = next.into_iter().collect();
        k += 1;
        debug!("pairwise merge: {} cliques of size {}", current.len(), k);
    }

    let mut cliques: Vec<Clique> = current.iter().map(NodeSet::to_vec).collect();
    cliques.sort_unstable();
    cliques
}

// ---------------------------------------------------------------------------
// Exact search
// ---------------------------------------------------------------------------

/// Depth-first growth of a partial clique. Candidates are the common
/// neighbours of the partial clique with ids above its last member, so every
/// clique is produced once and in lexicographic order. A branch stops as soon
/// as it cannot reach `size` members.
fn exact_search(graph: &CompatibilityGraph, size: usize) -> Vec<Clique> {
    // A node needs at least size - 1 neighbours to sit in any clique.
    let mut candidates = graph.all_nodes();
    for id in 0..graph.node_count() {
        if graph.node(id).degree() + 1 < size {
            candidates.remove(id);
        }
    }

    let mut cliques = Vec::new();
    let mut current = Vec::with_capacity(size);
    extend(graph, size, &mut current, &candidates, &mut cliques);
    cliques
}

fn extend(
    graph: &CompatibilityGraph,
    size: usize,
    current: &mut Vec<NodeId>,
    candidates: &NodeSet,
    cliques: &mut Vec<Clique>,
) {
    if current.len() == size {
        cliques.push(current.clone());
        return;
    }
    if current.len() + candidates.len() < size {
        return;
    }

    for v in candidates.iter() {
        let mut next = candidates.intersection(graph.neighbors(v));
        next.remove_through(v);
        if current.len() + 1 + next.len() < size {
            continue;
        }
        current.push(v);
        extend(graph, size, current, &next, cliques);
        current.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinations::combinations;
    use crate::types::{Player, Team};
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    /// Every `team_size` combination of `n` anonymous players.
    fn full_graph(n: usize, team_size: usize) -> CompatibilityGraph {
        let teams = combinations(n, team_size)
            .into_iter()
            .map(|c| Team::new(c.iter().map(|i| Player::new(format!("P{i}"), 1000.0)).collect()))
            .collect();
        CompatibilityGraph::from_teams(teams)
    }

    fn assert_valid_cliques(graph: &CompatibilityGraph, cliques: &[Clique], size: usize) {
        for clique in cliques {
            assert_eq!(clique.len(), size);
            for (i, &a) in clique.iter().enumerate() {
                for &b in &clique[i + 1..] {
                    assert!(a < b, "clique not sorted: {:?}", clique);
                    assert!(graph.are_adjacent(a, b), "{a} and {b} not adjacent in {:?}", clique);
                }
            }
        }
        let unique: HashSet<&Clique> = cliques.iter().collect();
        assert_eq!(unique.len(), cliques.len(), "duplicate cliques");
    }

    #[test]
    fn test_perfect_team_splits_of_twelve_players() {
        // Six disjoint pairs covering twelve players: 11 * 9 * 7 * 5 * 3 = 10395.
        let graph = full_graph(12, 2);
        let cliques = find_cliques(&graph, 6, CliqueStrategy::ExactSearch);
        assert_eq!(cliques.len(), 10395);
        assert_valid_cliques(&graph, &cliques, 6);

        for clique in cliques.iter().take(50) {
            let mut names: Vec<&str> = clique.iter().flat_map(|&id| graph.team(id).names()).collect();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), 12);
        }
    }

    #[test]
    fn test_strategies_agree_on_small_graph() {
        let graph = full_graph(8, 2);
        for size in 2..=4 {
            let merged = find_cliques(&graph, size, CliqueStrategy::PairwiseMerge);
            let searched = find_cliques(&graph, size, CliqueStrategy::ExactSearch);
            assert_eq!(merged, searched, "size {size}");
            assert_valid_cliques(&graph, &searched, size);
        }
        // 8 players into 4 disjoint pairs: 7 * 5 * 3 = 105.
        assert_eq!(find_cliques(&graph, 4, CliqueStrategy::ExactSearch).len(), 105);
    }

    #[test]
    fn test_strategies_agree_on_random_graphs() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..10 {
            let teams: Vec<Team> = combinations(8, 2)
                .into_iter()
                .filter(|_| rng.random::<f64>() < 0.7)
                .map(|c| Team::new(c.iter().map(|i| Player::new(format!("P{i}"), 1000.0)).collect()))
                .collect();
            let graph = CompatibilityGraph::from_teams(teams);
            for size in [3, 4] {
                assert_eq!(
                    find_cliques(&graph, size, CliqueStrategy::PairwiseMerge),
                    find_cliques(&graph, size, CliqueStrategy::ExactSearch),
                );
            }
        }
    }

    #[test]
    fn test_two_cliques_are_edges() {
        let graph = full_graph(4, 2);
        let cliques = find_cliques(&graph, 2, CliqueStrategy::PairwiseMerge);
        let edges: Vec<Clique> = graph.edges().into_iter().map(|(a, b)| vec![a, b]).collect();
        assert_eq!(cliques, edges);
        assert_eq!(cliques.len(), 3);
    }

    #[test]
    fn test_too_few_players_yields_no_cliques() {
        // Ten players can field at most five disjoint pairs.
        let graph = full_graph(10, 2);
        assert!(find_cliques(&graph, 6, CliqueStrategy::ExactSearch).is_empty());
        let graph = full_graph(6, 2);
        assert!(find_cliques(&graph, 4, CliqueStrategy::PairwiseMerge).is_empty());
    }

    #[test]
    fn test_empty_graph() {
        let graph = CompatibilityGraph::from_teams(Vec::new());
        assert!(find_cliques(&graph, 6, CliqueStrategy::ExactSearch).is_empty());
        assert!(find_cliques(&graph, 6, CliqueStrategy::PairwiseMerge).is_empty());
        assert!(find_cliques(&graph, 1, CliqueStrategy::ExactSearch).is_empty());
    }
}
