use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::league::{Game, GameStatus};
use crate::domain::repositories::GameRepository;

/// PostgreSQL implementation of GameRepository
pub struct PostgresGameRepository {
    pool: PgPool,
}

impl PostgresGameRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct GameRow {
    id: Uuid,
    round_id: Uuid,
    home_team_id: Uuid,
    away_team_id: Uuid,
    home_score: Option<i32>,
    away_score: Option<i32>,
    status: GameStatus,
    scheduled_at: Option<DateTime<Utc>>,
}

impl From<GameRow> for Game {
    fn from(r: GameRow) -> Self {
        Game::from_persistence(
            r.id,
            r.round_id,
            r.home_team_id,
            r.away_team_id,
            r.home_score,
            r.away_score,
            r.status,
            r.scheduled_at,
        )
    }
}

const GAME_COLUMNS: &str =
    "id, round_id, home_team_id, away_team_id, home_score, away_score, status, scheduled_at";

#[async_trait]
impl GameRepository for PostgresGameRepository {
    async fn save(&self, game: &Game) -> Result<(), String> {
        sqlx::query(
            r#"
            INSERT INTO games (
                id, round_id, home_team_id, away_team_id,
                home_score, away_score, status, scheduled_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO UPDATE SET
                home_score = EXCLUDED.home_score,
                away_score = EXCLUDED.away_score,
                status = EXCLUDED.status,
                scheduled_at = EXCLUDED.scheduled_at
            "#,
        )
        .bind(game.id())
        .bind(game.round_id())
        .bind(game.home_team_id())
        .bind(game.away_team_id())
        .bind(game.home_score())
        .bind(game.away_score())
        .bind(game.status())
        .bind(game.scheduled_at())
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to save game: {}", e))?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Game>, String> {
        let row = sqlx::query_as::<_, GameRow>(&format!(
            "SELECT {GAME_COLUMNS} FROM games WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to find game by id: {}", e))?;

        Ok(row.map(Game::from))
    }

    async fn find_completed_by_round(&self, round_id: Uuid) -> Result<Vec<Game>, String> {
        let rows = sqlx::query_as::<_, GameRow>(&format!(
            "SELECT {GAME_COLUMNS} FROM games
             WHERE round_id = $1 AND status = $2
             ORDER BY id"
        ))
        .bind(round_id)
        .bind(GameStatus::Completed)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to find completed games by round: {}", e))?;

        Ok(rows.into_iter().map(Game::from).collect())
    }

    async fn find_completed_by_rounds(&self, round_ids: &[Uuid]) -> Result<Vec<Game>, String> {
        let rows = sqlx::query_as::<_, GameRow>(&format!(
            "SELECT {GAME_COLUMNS} FROM games
             WHERE round_id = ANY($1) AND status = $2
             ORDER BY id"
        ))
        .bind(round_ids)
        .bind(GameStatus::Completed)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to find completed games by rounds: {}", e))?;

        Ok(rows.into_iter().map(Game::from).collect())
    }
}
