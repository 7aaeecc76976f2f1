use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::league::Game;

/// Repository trait for games
///
/// The recalculation engine only reads; `save` exists for the reporting
/// workflow that finalizes or corrects a game before triggering a
/// recompute.
#[async_trait]
pub trait GameRepository: Send + Sync {
    /// Save a game (insert or update)
    async fn save(&self, game: &Game) -> Result<(), String>;

    /// Find a game by its ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Game>, String>;

    /// Find all completed games of one round
    async fn find_completed_by_round(&self, round_id: Uuid) -> Result<Vec<Game>, String>;

    /// Find all completed games across a set of rounds
    async fn find_completed_by_rounds(&self, round_ids: &[Uuid]) -> Result<Vec<Game>, String>;
}
