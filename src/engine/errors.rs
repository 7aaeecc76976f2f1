use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur during a recalculation
///
/// Every failure is fail-fast and leaves previously persisted aggregates
/// untouched; retrying is the caller's responsibility.
#[derive(Debug, Error)]
pub enum RecalcError {
    #[error("Round {round_id} has no scoring configuration")]
    ConfigurationMissing { round_id: Uuid },

    #[error("Game {game_id} cannot be counted: {reason}")]
    InvalidGameState { game_id: Uuid, reason: String },

    #[error("A recalculation is already in flight for scope {scope}")]
    ConcurrentRecalcConflict { scope: Uuid },

    #[error("Persistence failure: {0}")]
    Persistence(String),
}

pub type RecalcResult<T> = Result<T, RecalcError>;
