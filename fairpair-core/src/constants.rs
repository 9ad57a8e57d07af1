/// Number of players per team. Two-player teams are what the engine ships for.
pub const DEFAULT_TEAM_SIZE: usize = 2;

/// Number of mutually compatible teams in a group. Six teams give a 3-vs-3
/// split into opposing pairs.
pub const DEFAULT_CLIQUE_SIZE: usize = 6;

/// Rating gap (in rating units) below which two teams are considered a
/// plausible fair match during candidate pruning.
///
/// Only the nearest disjoint neighbour on each side of a team in rating order
/// is checked against this threshold, so it is a coarse filter rather than a
/// guarantee: pairings that survive it can still carry a larger worst gap.
pub const DEFAULT_FAIRNESS_RANGE: f64 = 25.0;
