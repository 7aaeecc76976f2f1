use std::sync::Arc;

use sqlx::PgPool;

use crate::engine::RecalcEngine;
use crate::infrastructure::repositories::{
    PostgresBonusPointRepository, PostgresGameEventRepository, PostgresGameRepository,
    PostgresGoalieStatRepository, PostgresGoalieStatsRepository, PostgresPlayerStatsRepository,
    PostgresRoundRepository, PostgresStandingsRepository,
};

/// Shared application state
///
/// The engine is built once so its per-scope lock registries are
/// process-wide; handlers construct read-side repositories per request.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub engine: Arc<RecalcEngine>,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let engine = RecalcEngine::new(
            Arc::new(PostgresRoundRepository::new(pool.clone())),
            Arc::new(PostgresGameRepository::new(pool.clone())),
            Arc::new(PostgresBonusPointRepository::new(pool.clone())),
            Arc::new(PostgresGameEventRepository::new(pool.clone())),
            Arc::new(PostgresGoalieStatRepository::new(pool.clone())),
            Arc::new(PostgresStandingsRepository::new(pool.clone())),
            Arc::new(PostgresPlayerStatsRepository::new(pool.clone())),
            Arc::new(PostgresGoalieStatsRepository::new(pool.clone())),
        );

        Self {
            pool,
            engine: Arc::new(engine),
        }
    }
}
