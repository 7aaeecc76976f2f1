use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::stats::{GoalieSeasonStats, PlayerSeasonStats};

/// Repository trait for the player season statistics sink
///
/// Same full-replace discipline as the standings sink: the season's whole
/// set is swapped atomically so players who no longer qualify leave no
/// stale rows behind.
#[async_trait]
pub trait PlayerStatsRepository: Send + Sync {
    /// Atomically replace the full player stats set of one season
    async fn replace_season(
        &self,
        season_id: Uuid,
        stats: &[PlayerSeasonStats],
    ) -> Result<(), String>;

    /// Find the current player stats of one season
    async fn find_by_season(&self, season_id: Uuid) -> Result<Vec<PlayerSeasonStats>, String>;
}

/// Repository trait for the goalie season statistics sink
#[async_trait]
pub trait GoalieStatsRepository: Send + Sync {
    /// Atomically replace the full goalie stats set of one season
    async fn replace_season(
        &self,
        season_id: Uuid,
        stats: &[GoalieSeasonStats],
    ) -> Result<(), String>;

    /// Find the current goalie stats of one season
    async fn find_by_season(&self, season_id: Uuid) -> Result<Vec<GoalieSeasonStats>, String>;
}
