use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::repositories::StandingsRepository;
use crate::domain::standings::StandingsRow;

/// PostgreSQL implementation of StandingsRepository
///
/// `replace_round` runs DELETE + INSERT inside one transaction: readers
/// keep seeing the old row set until the commit, and a failure rolls the
/// whole replacement back.
pub struct PostgresStandingsRepository {
    pool: PgPool,
}

impl PostgresStandingsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct StandingsRowRecord {
    round_id: Uuid,
    team_id: Uuid,
    games_played: i32,
    wins: i32,
    draws: i32,
    losses: i32,
    goals_for: i32,
    goals_against: i32,
    goal_difference: i32,
    bonus_points: i32,
    total_points: i32,
    rank: i32,
}

#[async_trait]
impl StandingsRepository for PostgresStandingsRepository {
    async fn replace_round(&self, round_id: Uuid, rows: &[StandingsRow]) -> Result<(), String> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| format!("Failed to begin standings transaction: {}", e))?;

        sqlx::query("DELETE FROM standings_rows WHERE round_id = $1")
            .bind(round_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| format!("Failed to clear standings: {}", e))?;

        for row in rows {
            sqlx::query(
                r#"
                INSERT INTO standings_rows (
                    round_id, team_id, games_played, wins, draws, losses,
                    goals_for, goals_against, goal_difference,
                    bonus_points, total_points, rank
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
                "#,
            )
            .bind(row.round_id)
            .bind(row.team_id)
            .bind(row.games_played)
            .bind(row.wins)
            .bind(row.draws)
            .bind(row.losses)
            .bind(row.goals_for)
            .bind(row.goals_against)
            .bind(row.goal_difference)
            .bind(row.bonus_points)
            .bind(row.total_points)
            .bind(row.rank)
            .execute(&mut *tx)
            .await
            .map_err(|e| format!("Failed to insert standings row: {}", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| format!("Failed to commit standings: {}", e))
    }

    async fn find_by_round(&self, round_id: Uuid) -> Result<Vec<StandingsRow>, String> {
        let rows = sqlx::query_as::<_, StandingsRowRecord>(
            r#"
            SELECT round_id, team_id, games_played, wins, draws, losses,
                   goals_for, goals_against, goal_difference,
                   bonus_points, total_points, rank
            FROM standings_rows
            WHERE round_id = $1
            ORDER BY rank, team_id
            "#,
        )
        .bind(round_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to find standings by round: {}", e))?;

        Ok(rows
            .into_iter()
            .map(|r| StandingsRow {
                round_id: r.round_id,
                team_id: r.team_id,
                games_played: r.games_played,
                wins: r.wins,
                draws: r.draws,
                losses: r.losses,
                goals_for: r.goals_for,
                goals_against: r.goals_against,
                goal_difference: r.goal_difference,
                bonus_points: r.bonus_points,
                total_points: r.total_points,
                rank: r.rank,
            })
            .collect())
    }
}
