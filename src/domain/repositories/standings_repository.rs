use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::standings::StandingsRow;

/// Repository trait for the standings sink
///
/// The aggregator owns a round's whole row set; implementations must make
/// `replace_round` atomic (the old set stays visible until the new one
/// commits, and no reader ever sees a partial set).
#[async_trait]
pub trait StandingsRepository: Send + Sync {
    /// Atomically replace the full standings row set of one round
    async fn replace_round(&self, round_id: Uuid, rows: &[StandingsRow]) -> Result<(), String>;

    /// Find the current standings of one round, in rank order
    async fn find_by_round(&self, round_id: Uuid) -> Result<Vec<StandingsRow>, String>;
}
