use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::league::{Game, Round};
use crate::domain::repositories::{GameRepository, RoundRepository};
use crate::infrastructure::repositories::{PostgresGameRepository, PostgresRoundRepository};

/// Request body for reporting a final score
#[derive(Debug, Deserialize)]
pub struct ReportResultRequest {
    pub home_score: i32,
    pub away_score: i32,
}

/// Response after a game mutation, reporting which recomputes ran
#[derive(Debug, Serialize)]
pub struct GameResponse {
    pub id: Uuid,
    pub round_id: Uuid,
    pub status: String,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub recalculated: bool,
}

impl GameResponse {
    fn new(game: &Game, recalculated: bool) -> Self {
        Self {
            id: game.id(),
            round_id: game.round_id(),
            status: game.status().to_string(),
            home_score: game.home_score(),
            away_score: game.away_score(),
            recalculated,
        }
    }
}

/// Report a game's final result and recompute the affected aggregates
///
/// POST /api/games/:id/result
///
/// This is the finalization workflow: the game transitions to completed,
/// then the round's standings and, where the round counts towards season
/// totals, the season's player and goalie statistics are recomputed.
pub async fn report_result(
    State(state): State<AppState>,
    Path(game_id): Path<Uuid>,
    Json(req): Json<ReportResultRequest>,
) -> Result<(StatusCode, Json<GameResponse>), ApiError> {
    let game_repo = PostgresGameRepository::new(state.pool.clone());
    let mut game = find_game(&game_repo, game_id).await?;

    game.report_result(req.home_score, req.away_score)
        .map_err(ApiError::bad_request)?;
    game_repo.save(&game).await?;

    let round = find_round(&state, game.round_id()).await?;
    run_recalcs(&state, &round).await?;

    Ok((StatusCode::OK, Json(GameResponse::new(&game, true))))
}

/// Postpone a game
///
/// POST /api/games/:id/postpone
///
/// Postponing an already completed game is a correction: its contribution
/// is removed from every affected aggregate by a fresh recompute.
pub async fn postpone_game(
    State(state): State<AppState>,
    Path(game_id): Path<Uuid>,
) -> Result<Json<GameResponse>, ApiError> {
    correct_game(state, game_id, Game::postpone).await
}

/// Cancel a game, with the same correction semantics as postponing
///
/// POST /api/games/:id/cancel
pub async fn cancel_game(
    State(state): State<AppState>,
    Path(game_id): Path<Uuid>,
) -> Result<Json<GameResponse>, ApiError> {
    correct_game(state, game_id, Game::cancel).await
}

async fn correct_game(
    state: AppState,
    game_id: Uuid,
    transition: fn(&mut Game) -> Result<bool, String>,
) -> Result<Json<GameResponse>, ApiError> {
    let game_repo = PostgresGameRepository::new(state.pool.clone());
    let mut game = find_game(&game_repo, game_id).await?;

    let was_counted = transition(&mut game).map_err(ApiError::bad_request)?;
    game_repo.save(&game).await?;

    if was_counted {
        let round = find_round(&state, game.round_id()).await?;
        run_recalcs(&state, &round).await?;
    }

    Ok(Json(GameResponse::new(&game, was_counted)))
}

async fn find_game(repo: &PostgresGameRepository, game_id: Uuid) -> Result<Game, ApiError> {
    repo.find_by_id(game_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Game not found: {}", game_id)))
}

async fn find_round(state: &AppState, round_id: Uuid) -> Result<Round, ApiError> {
    PostgresRoundRepository::new(state.pool.clone())
        .find_by_id(round_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Round not found: {}", round_id)))
}

/// Runs the standings recompute and the season stats recomputes the
/// round's flags call for
async fn run_recalcs(state: &AppState, round: &Round) -> Result<(), ApiError> {
    state.engine.recalc_standings(round.id).await?;

    if round.counts_for_player_stats {
        state.engine.recalc_player_stats(round.season_id).await?;
    }
    if round.counts_for_goalie_stats {
        state.engine.recalc_goalie_stats(round.season_id).await?;
    }

    Ok(())
}
