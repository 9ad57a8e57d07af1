/// Pairing pipeline orchestrator.
///
/// Validate → prune combinations → build the compatibility graph → enumerate
/// cliques → solve each clique → rank. Pure computation: no IO, nothing is
/// printed. Stage statistics go to the `log` facade.
///
/// Input errors abort before any work is done. A clique without a stable
/// matching is counted and skipped; it never aborts the run.
use log::{debug, info};

use crate::clique::find_cliques;
use crate::error::{PairingError, Result};
use crate::graph::CompatibilityGraph;
use crate::pairing::{rank_pairings, solve_clique};
use crate::pruning::prune_combinations;
use crate::types::{PairingConfig, PairingReport, Player, Roster};

pub struct PairingEngine<'a> {
    roster: Roster<'a>,
    config: PairingConfig,
}

impl<'a> PairingEngine<'a> {
    /// Validates the configuration and the player list.
    pub fn new(players: &'a [Player], config: PairingConfig) -> Result<Self> {
        config.validate()?;
        let roster = Roster::from_players(players)?;

        let required = config.required_players();
        if roster.len() < required {
            return Err(PairingError::NotEnoughPlayers { found: roster.len(), required });
        }

        Ok(PairingEngine { roster, config })
    }

    pub fn config(&self) -> &PairingConfig {
        &self.config
    }

    /// Prune the candidate teams and link the survivors.
    /// Returns the graph and how many combinations were pruned.
    pub fn build_graph(&self) -> (CompatibilityGraph, usize) {
        let outcome = prune_combinations(&self.roster.ratings(), self.config.team_size, self.config.fairness_range);
        debug!(
            "pruning: kept {} of {} combinations (fairness range {})",
            outcome.kept.len(),
            outcome.kept.len() + outcome.pruned,
            self.config.fairness_range,
        );

        let teams = outcome.kept.iter().map(|c| self.roster.team(&c.members)).collect();
        let graph = CompatibilityGraph::from_teams(teams);
        debug!("graph: {} nodes, {} edges", graph.node_count(), graph.edge_count());

        (graph, outcome.pruned)
    }

    /// Run the whole pipeline.
    pub fn run(&self) -> PairingReport {
        let (graph, pruned_combinations) = self.build_graph();
        let cliques = find_cliques(&graph, self.config.clique_size, self.config.clique_strategy);

        let mut pairings = Vec::with_capacity(cliques.len());
        let mut unstable_cliques = 0;
        for clique in &cliques {
            match solve_clique(&graph, clique) {
                Ok(result) => pairings.push(result),
                Err(e) => {
                    debug!("skipping clique {:?}: {e}", clique);
                    unstable_cliques += 1;
                }
            }
        }
        rank_pairings(&mut pairings);

        info!(
            "{} pairings from {} cliques over {} graph nodes ({} without a stable matching)",
            pairings.len(),
            cliques.len(),
            graph.node_count(),
            unstable_cliques,
        );

        PairingReport {
            pairings,
            total_cliques: cliques.len(),
            total_nodes: graph.node_count(),
            pruned_combinations,
            unstable_cliques,
        }
    }
}

/// Validate, compute and rank in one call.
pub fn run_pairing(players: &[Player], config: &PairingConfig) -> Result<PairingReport> {
    Ok(PairingEngine::new(players, config.clone())?.run())
}
