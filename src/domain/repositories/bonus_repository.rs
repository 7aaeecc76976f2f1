use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::league::BonusPoint;

/// Repository trait for operator-assigned bonus points
#[async_trait]
pub trait BonusPointRepository: Send + Sync {
    /// Find all bonus point entries of one round
    async fn find_by_round(&self, round_id: Uuid) -> Result<Vec<BonusPoint>, String>;
}
