use uuid::Uuid;

use crate::domain::stats::aggregate_player_stats;

use super::errors::{RecalcError, RecalcResult};
use super::RecalcEngine;

impl RecalcEngine {
    /// Recomputes and atomically replaces one season's player statistics
    ///
    /// Only rounds flagged `counts_for_player_stats` contribute; events
    /// recorded in other rounds are never fetched. The season's whole set
    /// is replaced even when it comes out empty, so players who no longer
    /// qualify leave no stale rows.
    pub async fn recalc_player_stats(&self, season_id: Uuid) -> RecalcResult<()> {
        let _guard = self
            .player_season_locks
            .try_acquire(season_id)
            .ok_or(RecalcError::ConcurrentRecalcConflict { scope: season_id })?;

        let rounds = self
            .rounds
            .find_by_season(season_id)
            .await
            .map_err(RecalcError::Persistence)?;

        let counting_rounds: Vec<Uuid> = rounds
            .iter()
            .filter(|r| r.counts_for_player_stats)
            .map(|r| r.id)
            .collect();

        let events = self.ledger_events_for(&counting_rounds).await?;
        let stats = aggregate_player_stats(season_id, &events);

        self.player_stats
            .replace_season(season_id, &stats)
            .await
            .map_err(RecalcError::Persistence)?;

        tracing::info!(
            %season_id,
            rounds = counting_rounds.len(),
            players = stats.len(),
            "player statistics recomputed"
        );

        Ok(())
    }

    async fn ledger_events_for(
        &self,
        round_ids: &[Uuid],
    ) -> RecalcResult<Vec<crate::domain::league::GameEvent>> {
        if round_ids.is_empty() {
            return Ok(Vec::new());
        }

        let games = self
            .games
            .find_completed_by_rounds(round_ids)
            .await
            .map_err(RecalcError::Persistence)?;

        let game_ids: Vec<Uuid> = games.iter().map(|g| g.id()).collect();
        if game_ids.is_empty() {
            return Ok(Vec::new());
        }

        self.events
            .find_by_games(&game_ids)
            .await
            .map_err(RecalcError::Persistence)
    }
}
