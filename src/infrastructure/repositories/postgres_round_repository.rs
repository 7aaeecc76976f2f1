use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::league::Round;
use crate::domain::repositories::RoundRepository;

/// PostgreSQL implementation of RoundRepository
pub struct PostgresRoundRepository {
    pool: PgPool,
}

impl PostgresRoundRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct RoundRow {
    id: Uuid,
    season_id: Uuid,
    name: String,
    points_win: i32,
    points_draw: i32,
    points_loss: i32,
    counts_for_player_stats: bool,
    counts_for_goalie_stats: bool,
    goalie_min_games: i32,
}

impl From<RoundRow> for Round {
    fn from(r: RoundRow) -> Self {
        Round {
            id: r.id,
            season_id: r.season_id,
            name: r.name,
            points_win: r.points_win,
            points_draw: r.points_draw,
            points_loss: r.points_loss,
            counts_for_player_stats: r.counts_for_player_stats,
            counts_for_goalie_stats: r.counts_for_goalie_stats,
            goalie_min_games: r.goalie_min_games,
        }
    }
}

const ROUND_COLUMNS: &str = "id, season_id, name, points_win, points_draw, points_loss, \
     counts_for_player_stats, counts_for_goalie_stats, goalie_min_games";

#[async_trait]
impl RoundRepository for PostgresRoundRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Round>, String> {
        let row = sqlx::query_as::<_, RoundRow>(&format!(
            "SELECT {ROUND_COLUMNS} FROM rounds WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to find round by id: {}", e))?;

        Ok(row.map(Round::from))
    }

    async fn find_by_season(&self, season_id: Uuid) -> Result<Vec<Round>, String> {
        let rows = sqlx::query_as::<_, RoundRow>(&format!(
            "SELECT {ROUND_COLUMNS} FROM rounds WHERE season_id = $1 ORDER BY name"
        ))
        .bind(season_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to find rounds by season: {}", e))?;

        Ok(rows.into_iter().map(Round::from).collect())
    }
}
