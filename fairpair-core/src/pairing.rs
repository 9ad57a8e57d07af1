/// Per-clique pairing and ranking.
///
/// Inside one clique every team ranks the others by how close their average
/// rating is, closest first. The stable roommates solution over those lists
/// splits the clique into opposing pairs; the pairing is scored by its worst
/// single gap.
use crate::error::Result;
use crate::graph::CompatibilityGraph;
use crate::roommates::solve_stable_roommates;
use crate::types::{Matchup, PairingResult};

/// Preference lists over clique positions (`0..clique.len()`), by ascending
/// absolute rating difference. Equal differences keep clique order.
pub fn preference_lists(graph: &CompatibilityGraph, clique: &[usize]) -> Vec<Vec<usize>> {
    let ratings: Vec<f64> = clique.iter().map(|&id| graph.team(id).average_rating).collect();

    (0..clique.len())
        .map(|i| {
            let mut others: Vec<(usize, f64)> = (0..clique.len())
                .filter(|&j| j != i)
                .map(|j| (j, (ratings[i] - ratings[j]).abs()))
                .collect();
            others.sort_by(|a, b| a.1.total_cmp(&b.1));
            others.into_iter().map(|(j, _)| j).collect()
        })
        .collect()
}

/// Split one clique into opposing pairs.
///
/// Fails with `NoStableMatching` when the preference profile has no stable
/// roommate solution; callers skip such cliques.
pub fn solve_clique(graph: &CompatibilityGraph, clique: &[usize]) -> Result<PairingResult> {
    let preferences = preference_lists(graph, clique);
    let partners = solve_stable_roommates(&preferences)?;

    let mut matchups: Vec<Matchup> = Vec::with_capacity(clique.len() / 2);
    for (i, &j) in partners.iter().enumerate() {
        if i > j {
            continue;
        }
        let a = graph.team(clique[i]);
        let b = graph.team(clique[j]);
        let (lower, higher) = if b.average_rating < a.average_rating { (b, a) } else { (a, b) };
        matchups.push(Matchup {
            lower: lower.clone(),
            higher: higher.clone(),
            gap: higher.average_rating - lower.average_rating,
        });
    }
    matchups.sort_by(|a, b| a.lower.average_rating.total_cmp(&b.lower.average_rating));

    let worst_gap = matchups.iter().map(|m| m.gap).fold(0.0, f64::max);
    Ok(PairingResult { matchups, worst_gap })
}

/// Sort by worst gap ascending. Stable, so equal gaps keep their input order.
pub fn rank_pairings(pairings: &mut [PairingResult]) {
    pairings.sort_by(|a, b| a.worst_gap.total_cmp(&b.worst_gap));
}
