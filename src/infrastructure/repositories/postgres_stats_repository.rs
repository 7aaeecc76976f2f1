use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::repositories::{GoalieStatsRepository, PlayerStatsRepository};
use crate::domain::stats::{GoalieSeasonStats, PlayerSeasonStats};

/// PostgreSQL implementation of PlayerStatsRepository
///
/// Transactional full-replace per season, same discipline as standings.
pub struct PostgresPlayerStatsRepository {
    pool: PgPool,
}

impl PostgresPlayerStatsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PlayerSeasonStatsRow {
    player_id: Uuid,
    season_id: Uuid,
    games_played: i32,
    goals: i32,
    assists: i32,
    points: i32,
    penalty_minutes: i32,
}

#[async_trait]
impl PlayerStatsRepository for PostgresPlayerStatsRepository {
    async fn replace_season(
        &self,
        season_id: Uuid,
        stats: &[PlayerSeasonStats],
    ) -> Result<(), String> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| format!("Failed to begin player stats transaction: {}", e))?;

        sqlx::query("DELETE FROM player_season_stats WHERE season_id = $1")
            .bind(season_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| format!("Failed to clear player stats: {}", e))?;

        for line in stats {
            sqlx::query(
                r#"
                INSERT INTO player_season_stats (
                    player_id, season_id, games_played,
                    goals, assists, points, penalty_minutes
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#,
            )
            .bind(line.player_id)
            .bind(line.season_id)
            .bind(line.games_played)
            .bind(line.goals)
            .bind(line.assists)
            .bind(line.points)
            .bind(line.penalty_minutes)
            .execute(&mut *tx)
            .await
            .map_err(|e| format!("Failed to insert player stats: {}", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| format!("Failed to commit player stats: {}", e))
    }

    async fn find_by_season(&self, season_id: Uuid) -> Result<Vec<PlayerSeasonStats>, String> {
        let rows = sqlx::query_as::<_, PlayerSeasonStatsRow>(
            r#"
            SELECT player_id, season_id, games_played,
                   goals, assists, points, penalty_minutes
            FROM player_season_stats
            WHERE season_id = $1
            ORDER BY points DESC, goals DESC, player_id
            "#,
        )
        .bind(season_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to find player stats by season: {}", e))?;

        Ok(rows
            .into_iter()
            .map(|r| PlayerSeasonStats {
                player_id: r.player_id,
                season_id: r.season_id,
                games_played: r.games_played,
                goals: r.goals,
                assists: r.assists,
                points: r.points,
                penalty_minutes: r.penalty_minutes,
            })
            .collect())
    }
}

/// PostgreSQL implementation of GoalieStatsRepository
pub struct PostgresGoalieStatsRepository {
    pool: PgPool,
}

impl PostgresGoalieStatsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct GoalieSeasonStatsRow {
    goalie_id: Uuid,
    season_id: Uuid,
    games_played: i32,
    goals_against: i32,
    minutes_played: i32,
    gaa: Option<f64>,
    eligible: bool,
}

#[async_trait]
impl GoalieStatsRepository for PostgresGoalieStatsRepository {
    async fn replace_season(
        &self,
        season_id: Uuid,
        stats: &[GoalieSeasonStats],
    ) -> Result<(), String> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| format!("Failed to begin goalie stats transaction: {}", e))?;

        sqlx::query("DELETE FROM goalie_season_stats WHERE season_id = $1")
            .bind(season_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| format!("Failed to clear goalie stats: {}", e))?;

        for line in stats {
            sqlx::query(
                r#"
                INSERT INTO goalie_season_stats (
                    goalie_id, season_id, games_played,
                    goals_against, minutes_played, gaa, eligible
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#,
            )
            .bind(line.goalie_id)
            .bind(line.season_id)
            .bind(line.games_played)
            .bind(line.goals_against)
            .bind(line.minutes_played)
            .bind(line.gaa)
            .bind(line.eligible)
            .execute(&mut *tx)
            .await
            .map_err(|e| format!("Failed to insert goalie stats: {}", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| format!("Failed to commit goalie stats: {}", e))
    }

    async fn find_by_season(&self, season_id: Uuid) -> Result<Vec<GoalieSeasonStats>, String> {
        let rows = sqlx::query_as::<_, GoalieSeasonStatsRow>(
            r#"
            SELECT goalie_id, season_id, games_played,
                   goals_against, minutes_played, gaa, eligible
            FROM goalie_season_stats
            WHERE season_id = $1
            ORDER BY gaa NULLS LAST, goalie_id
            "#,
        )
        .bind(season_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to find goalie stats by season: {}", e))?;

        Ok(rows
            .into_iter()
            .map(|r| GoalieSeasonStats {
                goalie_id: r.goalie_id,
                season_id: r.season_id,
                games_played: r.games_played,
                goals_against: r.goals_against,
                minutes_played: r.minutes_played,
                gaa: r.gaa,
                eligible: r.eligible,
            })
            .collect())
    }
}
