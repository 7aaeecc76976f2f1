use uuid::Uuid;

use crate::domain::stats::aggregate_goalie_stats;

use super::errors::{RecalcError, RecalcResult};
use super::RecalcEngine;

impl RecalcEngine {
    /// Recomputes and atomically replaces one season's goalie statistics
    ///
    /// Only rounds flagged `counts_for_goalie_stats` contribute. The
    /// eligibility threshold applied at season level is the strictest
    /// (largest) `goalie_min_games` among those rounds.
    pub async fn recalc_goalie_stats(&self, season_id: Uuid) -> RecalcResult<()> {
        let _guard = self
            .goalie_season_locks
            .try_acquire(season_id)
            .ok_or(RecalcError::ConcurrentRecalcConflict { scope: season_id })?;

        let rounds = self
            .rounds
            .find_by_season(season_id)
            .await
            .map_err(RecalcError::Persistence)?;

        let counting: Vec<&crate::domain::league::Round> = rounds
            .iter()
            .filter(|r| r.counts_for_goalie_stats)
            .collect();

        let round_ids: Vec<Uuid> = counting.iter().map(|r| r.id).collect();
        let min_games = counting.iter().map(|r| r.goalie_min_games).max().unwrap_or(0);

        let lines = if round_ids.is_empty() {
            Vec::new()
        } else {
            let games = self
                .games
                .find_completed_by_rounds(&round_ids)
                .await
                .map_err(RecalcError::Persistence)?;

            let game_ids: Vec<Uuid> = games.iter().map(|g| g.id()).collect();
            if game_ids.is_empty() {
                Vec::new()
            } else {
                self.goalie_lines
                    .find_by_games(&game_ids)
                    .await
                    .map_err(RecalcError::Persistence)?
            }
        };

        let stats = aggregate_goalie_stats(season_id, &lines, min_games);

        self.goalie_stats
            .replace_season(season_id, &stats)
            .await
            .map_err(RecalcError::Persistence)?;

        tracing::info!(
            %season_id,
            rounds = round_ids.len(),
            goalies = stats.len(),
            "goalie statistics recomputed"
        );

        Ok(())
    }
}
