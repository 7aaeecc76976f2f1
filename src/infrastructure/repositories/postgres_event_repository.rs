use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::league::{GameEvent, GameEventKind, GoalieGameStat};
use crate::domain::repositories::{GameEventRepository, GoalieStatRepository};

/// PostgreSQL implementation of GameEventRepository
pub struct PostgresGameEventRepository {
    pool: PgPool,
}

impl PostgresGameEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct GameEventRow {
    game_id: Uuid,
    player_id: Uuid,
    kind: GameEventKind,
    penalty_minutes: Option<i32>,
}

#[async_trait]
impl GameEventRepository for PostgresGameEventRepository {
    async fn find_by_games(&self, game_ids: &[Uuid]) -> Result<Vec<GameEvent>, String> {
        let rows = sqlx::query_as::<_, GameEventRow>(
            "SELECT game_id, player_id, kind, penalty_minutes
             FROM game_events WHERE game_id = ANY($1)",
        )
        .bind(game_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to find game events: {}", e))?;

        Ok(rows
            .into_iter()
            .map(|r| GameEvent {
                game_id: r.game_id,
                player_id: r.player_id,
                kind: r.kind,
                penalty_minutes: r.penalty_minutes,
            })
            .collect())
    }
}

/// PostgreSQL implementation of GoalieStatRepository
pub struct PostgresGoalieStatRepository {
    pool: PgPool,
}

impl PostgresGoalieStatRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct GoalieGameStatRow {
    game_id: Uuid,
    goalie_id: Uuid,
    goals_against: i32,
    minutes_played: i32,
}

#[async_trait]
impl GoalieStatRepository for PostgresGoalieStatRepository {
    async fn find_by_games(&self, game_ids: &[Uuid]) -> Result<Vec<GoalieGameStat>, String> {
        let rows = sqlx::query_as::<_, GoalieGameStatRow>(
            "SELECT game_id, goalie_id, goals_against, minutes_played
             FROM goalie_game_stats WHERE game_id = ANY($1)",
        )
        .bind(game_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to find goalie game stats: {}", e))?;

        Ok(rows
            .into_iter()
            .map(|r| GoalieGameStat {
                game_id: r.game_id,
                goalie_id: r.goalie_id,
                goals_against: r.goals_against,
                minutes_played: r.minutes_played,
            })
            .collect())
    }
}
