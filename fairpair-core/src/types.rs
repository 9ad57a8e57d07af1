use std::collections::HashSet;

use crate::constants::{DEFAULT_CLIQUE_SIZE, DEFAULT_FAIRNESS_RANGE, DEFAULT_TEAM_SIZE};
use crate::error::{PairingError, Result};

/// A rated player. Names are unique within one run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(alias = "elo"))]
    pub rating: f64,
}

impl Player {
    pub fn new(name: impl Into<String>, rating: f64) -> Self {
        Player { name: name.into(), rating }
    }
}

/// A fixed-size group of distinct players, treated as one graph vertex.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Team {
    pub players: Vec<Player>,
    /// Mean of the members' ratings.
    pub average_rating: f64,
}

impl Team {
    pub fn new(players: Vec<Player>) -> Self {
        let average_rating = if players.is_empty() {
            0.0
        } else {
            players.iter().map(|p| p.rating).sum::<f64>() / players.len() as f64
        };
        Team { players, average_rating }
    }

    /// Two teams are compatible iff no player name appears in both.
    pub fn is_disjoint(&self, other: &Team) -> bool {
        !self.players.iter().any(|a| other.players.iter().any(|b| a.name == b.name))
    }

    pub fn names(&self) -> Vec<&str> {
        self.players.iter().map(|p| p.name.as_str()).collect()
    }
}

/// How the clique enumerator searches the compatibility graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CliqueStrategy {
    /// Grow k-cliques into (k+1)-cliques by merging pairs that differ in
    /// exactly two adjacent nodes. Quadratic in the clique count per round.
    PairwiseMerge,
    /// Backtracking over shrinking candidate sets, bounded by the target size.
    #[default]
    ExactSearch,
}

/// Engine configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PairingConfig {
    pub team_size: usize,
    pub clique_size: usize,
    /// Rating gap under which a team's nearest disjoint neighbour counts as fair.
    pub fairness_range: f64,
    pub clique_strategy: CliqueStrategy,
}

impl Default for PairingConfig {
    fn default() -> Self {
        PairingConfig {
            team_size: DEFAULT_TEAM_SIZE,
            clique_size: DEFAULT_CLIQUE_SIZE,
            fairness_range: DEFAULT_FAIRNESS_RANGE,
            clique_strategy: CliqueStrategy::default(),
        }
    }
}

impl PairingConfig {
    pub fn validate(&self) -> Result<()> {
        if self.team_size == 0 {
            return Err(PairingError::InvalidConfig("team size must be at least 1".into()));
        }
        if self.clique_size < 2 || self.clique_size % 2 != 0 {
            return Err(PairingError::InvalidConfig(format!(
                "clique size must be an even number >= 2, got {}",
                self.clique_size
            )));
        }
        if !self.fairness_range.is_finite() || self.fairness_range < 0.0 {
            return Err(PairingError::InvalidConfig(format!(
                "fairness range must be a finite non-negative number, got {}",
                self.fairness_range
            )));
        }
        Ok(())
    }

    /// Distinct players needed to fill one clique.
    pub fn required_players(&self) -> usize {
        self.team_size * self.clique_size
    }
}

/// Two opposing teams, lower average rating first.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matchup {
    pub lower: Team,
    pub higher: Team,
    /// Absolute difference of the two average ratings.
    pub gap: f64,
}

/// One clique split into opposing pairs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PairingResult {
    pub matchups: Vec<Matchup>,
    /// Largest single-matchup gap. Lower is fairer.
    pub worst_gap: f64,
}

/// Everything the engine hands back to the caller.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PairingReport {
    /// Sorted by `worst_gap` ascending.
    pub pairings: Vec<PairingResult>,
    pub total_cliques: usize,
    pub total_nodes: usize,
    pub pruned_combinations: usize,
    /// Cliques skipped because no stable matching exists.
    pub unstable_cliques: usize,
}

/// Validated player list. Teams refer to players by their index in it.
pub(crate) struct Roster<'a> {
    players: &'a [Player],
}

impl<'a> Roster<'a> {
    pub fn from_players(players: &'a [Player]) -> Result<Self> {
        if players.is_empty() {
            return Err(PairingError::EmptyPlayerList);
        }
        let mut seen = HashSet::with_capacity(players.len());
        for player in players {
            if !player.rating.is_finite() {
                return Err(PairingError::InvalidRating { name: player.name.clone() });
            }
            if !seen.insert(player.name.as_str()) {
                return Err(PairingError::DuplicatePlayer(player.name.clone()));
            }
        }
        Ok(Roster { players })
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn ratings(&self) -> Vec<f64> {
        self.players.iter().map(|p| p.rating).collect()
    }

    /// Builds the team for a sorted list of player indices.
    pub fn team(&self, members: &[usize]) -> Team {
        Team::new(members.iter().map(|&i| self.players[i].clone()).collect())
    }
}
