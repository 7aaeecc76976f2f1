use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::repositories::StandingsRepository;
use crate::domain::standings::StandingsRow;
use crate::infrastructure::repositories::PostgresStandingsRepository;

/// One team's line in the standings response
#[derive(Debug, Serialize)]
pub struct StandingsRowResponse {
    pub team_id: Uuid,
    pub rank: i32,
    pub games_played: i32,
    pub wins: i32,
    pub draws: i32,
    pub losses: i32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
    pub bonus_points: i32,
    pub total_points: i32,
}

impl From<&StandingsRow> for StandingsRowResponse {
    fn from(row: &StandingsRow) -> Self {
        Self {
            team_id: row.team_id,
            rank: row.rank,
            games_played: row.games_played,
            wins: row.wins,
            draws: row.draws,
            losses: row.losses,
            goals_for: row.goals_for,
            goals_against: row.goals_against,
            goal_difference: row.goal_difference,
            bonus_points: row.bonus_points,
            total_points: row.total_points,
        }
    }
}

/// Recompute a round's standings
///
/// POST /api/rounds/:id/standings/recalc
pub async fn recalc_standings(
    State(state): State<AppState>,
    Path(round_id): Path<Uuid>,
) -> Result<(StatusCode, Json<Vec<StandingsRowResponse>>), ApiError> {
    state.engine.recalc_standings(round_id).await?;

    let repo = PostgresStandingsRepository::new(state.pool.clone());
    let rows = repo.find_by_round(round_id).await?;

    Ok((StatusCode::OK, Json(rows.iter().map(Into::into).collect())))
}

/// Get a round's current standings, in rank order
///
/// GET /api/rounds/:id/standings
pub async fn get_standings(
    State(state): State<AppState>,
    Path(round_id): Path<Uuid>,
) -> Result<Json<Vec<StandingsRowResponse>>, ApiError> {
    let repo = PostgresStandingsRepository::new(state.pool.clone());
    let rows = repo.find_by_round(round_id).await?;

    Ok(Json(rows.iter().map(Into::into).collect()))
}
