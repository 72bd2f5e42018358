//! Error types shared by every layer of the game core.

use thiserror::Error;

/// Why a list of move names cannot form a playable move set
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no moves given: enter an odd number >= 3 of non-repeating moves")]
    Empty,

    #[error("{0} move(s) given: enter an odd number >= 3 of non-repeating moves")]
    TooFew(usize),

    #[error("{0} moves given: the number of moves must be odd")]
    EvenLength(usize),

    #[error("move '{0}' is repeated: moves must not repeat")]
    Duplicate(String),
}

/// Errors from game operations
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Invalid move set: {0}")]
    Validation(#[from] ValidationError),

    #[error("Secure random source unavailable: {0}")]
    EntropyUnavailable(String),

    #[error("Invalid move: '{0}' is not one of the available moves")]
    InvalidMove(String),

    #[error("Cannot {operation} while session is {state}")]
    InvalidState {
        operation: &'static str,
        state: &'static str,
    },

    #[error("Move '{0}' is not in the move set")]
    MoveNotInSet(String),

    #[error("Cannot select a move from an empty move set")]
    EmptyMoveSet,

    #[error("Invalid hex encoding: {0}")]
    InvalidHex(String),
}

impl GameError {
    /// Whether the caller can recover by asking the player again
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GameError::InvalidMove(_))
    }
}

/// Result alias for game operations
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_converts() {
        let err: GameError = ValidationError::EvenLength(4).into();
        assert!(matches!(err, GameError::Validation(ValidationError::EvenLength(4))));
        assert!(err.to_string().contains("must be odd"));
    }

    #[test]
    fn test_only_invalid_move_is_recoverable() {
        assert!(GameError::InvalidMove("Spock".into()).is_recoverable());
        assert!(!GameError::EmptyMoveSet.is_recoverable());
        assert!(!GameError::EntropyUnavailable("closed".into()).is_recoverable());
    }
}
