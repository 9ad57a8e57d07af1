/// Error types for the pairing engine.
///
/// Input and configuration problems are fatal and surface before any
/// computation starts. `NoStableMatching` is the one recoverable variant: the
/// engine skips the offending clique and keeps going.
use thiserror::Error;

/// Result type alias using `PairingError`.
pub type Result<T> = std::result::Result<T, PairingError>;

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum PairingError {
    /// The player list was empty.
    #[error("InvalidInput: player list is empty")]
    EmptyPlayerList,

    /// Two players share a name.
    #[error("InvalidInput: duplicate player name \"{0}\"")]
    DuplicatePlayer(String),

    /// A rating was NaN or infinite.
    #[error("InvalidInput: player \"{name}\" has a non-finite rating")]
    InvalidRating { name: String },

    /// Not enough distinct players to fill a single clique.
    #[error("InvalidInput: need at least {required} distinct players, got {found}")]
    NotEnoughPlayers { found: usize, required: usize },

    /// Team size, clique size or fairness range out of bounds.
    #[error("InvalidConfig: {0}")]
    InvalidConfig(String),

    /// The preference profile admits no stable roommate matching.
    #[error("NoStableMatching: preference profile has no stable roommate matching")]
    NoStableMatching,
}

impl PairingError {
    /// Fatal errors abort the run; everything else is isolated per clique.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, PairingError::NoStableMatching)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_no_stable_matching_is_recoverable() {
        assert!(!PairingError::NoStableMatching.is_fatal());
        assert!(PairingError::EmptyPlayerList.is_fatal());
        assert!(PairingError::DuplicatePlayer("A".into()).is_fatal());
        assert!(PairingError::NotEnoughPlayers { found: 3, required: 12 }.is_fatal());
    }

    #[test]
    fn test_messages_name_the_offender() {
        let msg = PairingError::DuplicatePlayer("Alice".into()).to_string();
        assert!(msg.contains("Alice"));
        let msg = PairingError::NotEnoughPlayers { found: 5, required: 12 }.to_string();
        assert!(msg.contains("12") && msg.contains('5'));
    }
}
