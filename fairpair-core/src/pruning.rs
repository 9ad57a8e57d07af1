/// Candidate pruning: drop k-combinations that have no plausible fair opponent.
///
/// Combinations are sorted by average rating. From each combination we walk
/// backward, and separately forward, to the first combination that shares no
/// player with it. That single neighbour decides the side: the side is valid
/// iff the rating gap to it is strictly below `fairness_range`. A combination
/// survives iff at least one side is valid.
///
/// Only the nearest disjoint neighbour is consulted. A closer overlapping
/// combination does not stop the walk, but the first disjoint one does,
/// whether or not it is within range.
use crate::combinations::{combinations, is_disjoint_sorted};

/// A k-combination of player indices with its mean rating.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Player indices, ascending.
    pub members: Vec<usize>,
    pub average_rating: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PruneOutcome {
    /// Surviving combinations, in generation (lexicographic) order.
    pub kept: Vec<Candidate>,
    /// How many combinations were dropped.
    pub pruned: usize,
}

/// Generate every `team_size`-combination of `ratings` and prune it.
pub fn prune_combinations(ratings: &[f64], team_size: usize, fairness_range: f64) -> PruneOutcome {
    let candidates: Vec<Candidate> = combinations(ratings.len(), team_size)
        .into_iter()
        .map(|members| {
            let average_rating = members.iter().map(|&i| ratings[i]).sum::<f64>() / team_size as f64;
            Candidate { members, average_rating }
        })
        .collect();

    prune_candidates(candidates, fairness_range)
}

/// Prune an already-built candidate list. Output keeps the input order.
pub fn prune_candidates(candidates: Vec<Candidate>, fairness_range: f64) -> PruneOutcome {
    // sorted[pos] = index into `candidates`. Stable sort, so equal averages
    // keep generation order.
    let mut sorted: Vec<usize> = (0..candidates.len()).collect();
    sorted.sort_by(|&a, &b| candidates[a].average_rating.total_cmp(&candidates[b].average_rating));

    let mut keep = vec![false; candidates.len()];
    for (pos, &idx) in sorted.iter().enumerate() {
        let current = &candidates[idx];

        let valid_left = sorted[..pos]
            .iter()
            .rev()
            .map(|&other| &candidates[other])
            .find(|other| is_disjoint_sorted(&current.members, &other.members))
            .is_some_and(|other| current.average_rating - other.average_rating < fairness_range);

        let valid_right = sorted[pos + 1..]
            .iter()
            .map(|&other| &candidates[other])
            .find(|other| is_disjoint_sorted(&current.members, &other.members))
            .is_some_and(|other| other.average_rating - current.average_rating < fairness_range);

        keep[idx] = valid_left || valid_right;
    }

    let total = candidates.len();
    let kept: Vec<Candidate> = candidates
        .into_iter()
        .zip(keep)
        .filter_map(|(candidate, keep)| keep.then_some(candidate))
        .collect();
    let pruned = total - kept.len();

    PruneOutcome { kept, pruned }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(members: &[usize], average_rating: f64) -> Candidate {
        Candidate { members: members.to_vec(), average_rating }
    }

    #[test]
    fn test_close_ratings_keep_everything() {
        let ratings = [1000.0, 1005.0, 1010.0, 1015.0];
        let outcome = prune_combinations(&ratings, 2, 25.0);
        assert_eq!(outcome.kept.len(), 6);
        assert_eq!(outcome.pruned, 0);
        assert_eq!(outcome.kept[0].members, vec![0, 1]);
        assert!((outcome.kept[0].average_rating - 1002.5).abs() < 1e-12);
    }

    #[test]
    fn test_outlier_teams_are_dropped() {
        // Player 4 is far from everyone. Teams with 4 average ~1500, and their
        // nearest disjoint neighbours average ~1000.
        let ratings = [1000.0, 1002.0, 1004.0, 1006.0, 2000.0];
        let outcome = prune_combinations(&ratings, 2, 25.0);
        let kept: Vec<Vec<usize>> = outcome.kept.iter().map(|c| c.members.clone()).collect();
        assert_eq!(kept, vec![vec![0, 1], vec![0, 2], vec![0, 3], vec![1, 2], vec![1, 3], vec![2, 3]]);
        assert_eq!(outcome.pruned, 4);
    }

    #[test]
    fn test_gap_must_be_strictly_below_range() {
        let candidates = vec![candidate(&[0, 1], 1000.0), candidate(&[2, 3], 1025.0)];
        let outcome = prune_candidates(candidates.clone(), 25.0);
        assert!(outcome.kept.is_empty());
        assert_eq!(outcome.pruned, 2);

        let outcome = prune_candidates(candidates, 25.5);
        assert_eq!(outcome.kept.len(), 2);
    }

    #[test]
    fn test_overlapping_neighbour_does_not_stop_scan() {
        // [0,1] overlaps [1,2] (nearest), the first disjoint one is [2,3] within range.
        let candidates = vec![
            candidate(&[0, 1], 1000.0),
            candidate(&[1, 2], 1001.0),
            candidate(&[2, 3], 1010.0),
        ];
        let outcome = prune_candidates(candidates, 25.0);
        let kept: Vec<Vec<usize>> = outcome.kept.iter().map(|c| c.members.clone()).collect();
        assert_eq!(kept, vec![vec![0, 1], vec![2, 3]]);
    }

    #[test]
    fn test_first_disjoint_neighbour_decides_even_if_out_of_range() {
        // Forward from [0,1]: [2,3] is disjoint but 100 away, so the scan stops
        // there even though [4,5] further on would not matter either way.
        // Backward from [0,1]: nothing. [0,1] must be dropped.
        let candidates = vec![
            candidate(&[0, 1], 1000.0),
            candidate(&[2, 3], 1100.0),
            candidate(&[4, 5], 1101.0),
        ];
        let outcome = prune_candidates(candidates, 25.0);
        let kept: Vec<Vec<usize>> = outcome.kept.iter().map(|c| c.members.clone()).collect();
        assert_eq!(kept, vec![vec![2, 3], vec![4, 5]]);
    }

    #[test]
    fn test_output_keeps_generation_order() {
        let candidates = vec![
            candidate(&[0, 1], 1020.0),
            candidate(&[2, 3], 1000.0),
            candidate(&[4, 5], 1010.0),
        ];
        let outcome = prune_candidates(candidates, 25.0);
        let averages: Vec<f64> = outcome.kept.iter().map(|c| c.average_rating).collect();
        assert_eq!(averages, vec![1020.0, 1000.0, 1010.0]);
    }

    #[test]
    fn test_no_disjoint_partner_means_dropped() {
        // Three players, teams of two: every pair of teams overlaps.
        let outcome = prune_combinations(&[1000.0, 1000.0, 1000.0], 2, 25.0);
        assert!(outcome.kept.is_empty());
        assert_eq!(outcome.pruned, 3);
    }
}
