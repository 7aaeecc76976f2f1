use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::repositories::{GoalieStatsRepository, PlayerStatsRepository};
use crate::domain::stats::{GoalieSeasonStats, PlayerSeasonStats};
use crate::infrastructure::repositories::{
    PostgresGoalieStatsRepository, PostgresPlayerStatsRepository,
};

/// One player's line in the season statistics response
#[derive(Debug, Serialize)]
pub struct PlayerStatsResponse {
    pub player_id: Uuid,
    pub games_played: i32,
    pub goals: i32,
    pub assists: i32,
    pub points: i32,
    pub penalty_minutes: i32,
}

impl From<&PlayerSeasonStats> for PlayerStatsResponse {
    fn from(s: &PlayerSeasonStats) -> Self {
        Self {
            player_id: s.player_id,
            games_played: s.games_played,
            goals: s.goals,
            assists: s.assists,
            points: s.points,
            penalty_minutes: s.penalty_minutes,
        }
    }
}

/// One goalie's line in the season statistics response
#[derive(Debug, Serialize)]
pub struct GoalieStatsResponse {
    pub goalie_id: Uuid,
    pub games_played: i32,
    pub goals_against: i32,
    pub minutes_played: i32,
    pub gaa: Option<f64>,
    pub eligible: bool,
}

impl From<&GoalieSeasonStats> for GoalieStatsResponse {
    fn from(s: &GoalieSeasonStats) -> Self {
        Self {
            goalie_id: s.goalie_id,
            games_played: s.games_played,
            goals_against: s.goals_against,
            minutes_played: s.minutes_played,
            gaa: s.gaa,
            eligible: s.eligible,
        }
    }
}

/// Recompute a season's player statistics
///
/// POST /api/seasons/:id/player-stats/recalc
pub async fn recalc_player_stats(
    State(state): State<AppState>,
    Path(season_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.engine.recalc_player_stats(season_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Get a season's current player statistics
///
/// GET /api/seasons/:id/player-stats
pub async fn get_player_stats(
    State(state): State<AppState>,
    Path(season_id): Path<Uuid>,
) -> Result<Json<Vec<PlayerStatsResponse>>, ApiError> {
    let repo = PostgresPlayerStatsRepository::new(state.pool.clone());
    let stats = repo.find_by_season(season_id).await?;

    Ok(Json(stats.iter().map(Into::into).collect()))
}

/// Recompute a season's goalie statistics
///
/// POST /api/seasons/:id/goalie-stats/recalc
pub async fn recalc_goalie_stats(
    State(state): State<AppState>,
    Path(season_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.engine.recalc_goalie_stats(season_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Get a season's current goalie statistics
///
/// GET /api/seasons/:id/goalie-stats
pub async fn get_goalie_stats(
    State(state): State<AppState>,
    Path(season_id): Path<Uuid>,
) -> Result<Json<Vec<GoalieStatsResponse>>, ApiError> {
    let repo = PostgresGoalieStatsRepository::new(state.pool.clone());
    let stats = repo.find_by_season(season_id).await?;

    Ok(Json(stats.iter().map(Into::into).collect()))
}
