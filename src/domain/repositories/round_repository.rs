use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::league::Round;

/// Repository trait for round configuration
///
/// Source of the per-round scoring rules; the engine never caches rounds
/// across recomputes.
#[async_trait]
pub trait RoundRepository: Send + Sync {
    /// Find a round by its ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Round>, String>;

    /// Find all rounds of a season
    async fn find_by_season(&self, season_id: Uuid) -> Result<Vec<Round>, String>;
}
