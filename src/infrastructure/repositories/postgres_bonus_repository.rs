use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::league::BonusPoint;
use crate::domain::repositories::BonusPointRepository;

/// PostgreSQL implementation of BonusPointRepository
pub struct PostgresBonusPointRepository {
    pool: PgPool,
}

impl PostgresBonusPointRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct BonusPointRow {
    id: Uuid,
    round_id: Uuid,
    team_id: Uuid,
    points: i32,
    reason: Option<String>,
}

#[async_trait]
impl BonusPointRepository for PostgresBonusPointRepository {
    async fn find_by_round(&self, round_id: Uuid) -> Result<Vec<BonusPoint>, String> {
        let rows = sqlx::query_as::<_, BonusPointRow>(
            "SELECT id, round_id, team_id, points, reason
             FROM bonus_points WHERE round_id = $1",
        )
        .bind(round_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to find bonus points by round: {}", e))?;

        Ok(rows
            .into_iter()
            .map(|r| BonusPoint {
                id: r.id,
                round_id: r.round_id,
                team_id: r.team_id,
                points: r.points,
                reason: r.reason,
            })
            .collect())
    }
}
