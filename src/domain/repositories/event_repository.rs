use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::league::{GameEvent, GoalieGameStat};

/// Repository trait for the per-game event ledger (goals, assists,
/// penalties)
#[async_trait]
pub trait GameEventRepository: Send + Sync {
    /// Find all events recorded for a set of games
    async fn find_by_games(&self, game_ids: &[Uuid]) -> Result<Vec<GameEvent>, String>;
}

/// Repository trait for per-game goalie lines
#[async_trait]
pub trait GoalieStatRepository: Send + Sync {
    /// Find all goalie lines recorded for a set of games
    async fn find_by_games(&self, game_ids: &[Uuid]) -> Result<Vec<GoalieGameStat>, String>;
}
