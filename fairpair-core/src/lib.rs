/// fairpair-core: Pure-computation team pairing engine.
///
/// Rated players → candidate teams → compatibility graph → cliques of mutually
/// disjoint teams → stable-roommate split into opposing pairs → pairings ranked
/// by their worst single rating gap. No IO, no filesystem, nothing printed.
///
/// # Quick start
///
/// ```rust
/// use fairpair_core::{run_pairing, PairingConfig, Player};
///
/// let players: Vec<Player> = (0..12)
///     .map(|i| Player::new(format!("P{i}"), 1000.0 + 10.0 * i as f64))
///     .collect();
///
/// let report = run_pairing(&players, &PairingConfig::default()).unwrap();
///
/// if let Some(best) = report.pairings.first() {
///     for m in &best.matchups {
///         println!("{:?} vs {:?} (gap {:.1})", m.lower.names(), m.higher.names(), m.gap);
///     }
/// }
/// println!("{} cliques, {} graph nodes", report.total_cliques, report.total_nodes);
/// ```

pub mod clique;
pub mod combinations;
pub mod constants;
pub mod engine;
pub mod error;
pub mod graph;
pub mod pairing;
pub mod pruning;
pub mod roommates;
pub mod types;

// Re-export primary public API at crate root.
pub use clique::{find_cliques, Clique};
pub use engine::{run_pairing, PairingEngine};
pub use error::{PairingError, Result};
pub use graph::{CompatibilityGraph, GraphNode, NodeId, NodeSet};
pub use pairing::{preference_lists, rank_pairings, solve_clique};
pub use pruning::{prune_candidates, prune_combinations, Candidate, PruneOutcome};
pub use roommates::{is_stable, solve_stable_roommates};
pub use types::{CliqueStrategy, Matchup, PairingConfig, PairingReport, PairingResult, Player, Team};
