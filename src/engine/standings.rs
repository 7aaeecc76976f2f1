use std::collections::HashMap;

use uuid::Uuid;

use crate::domain::standings::{assign_ranks, tally, GameLine, StandingsRow};

use super::errors::{RecalcError, RecalcResult};
use super::RecalcEngine;

impl RecalcEngine {
    /// Recomputes and atomically replaces one round's standings
    ///
    /// Steps: resolve scoring rules (fail fast), fetch the round's
    /// completed games, tally results from both teams' perspectives, add
    /// per-team bonus sums, compute totals, rank by the tie-break chain,
    /// then swap the round's whole row set. A completed game missing a
    /// score aborts the recompute before anything is written.
    pub async fn recalc_standings(&self, round_id: Uuid) -> RecalcResult<()> {
        let _guard = self
            .round_locks
            .try_acquire(round_id)
            .ok_or(RecalcError::ConcurrentRecalcConflict { scope: round_id })?;

        let rules = self.resolver.resolve(round_id).await?;

        let games = self
            .games
            .find_completed_by_round(round_id)
            .await
            .map_err(RecalcError::Persistence)?;

        let mut lines = Vec::with_capacity(games.len());
        for game in &games {
            let line = GameLine::from_game(game).map_err(|reason| RecalcError::InvalidGameState {
                game_id: game.id(),
                reason,
            })?;
            lines.push(line);
        }

        let tallies = tally(&lines);

        let mut bonus_per_team: HashMap<Uuid, i32> = HashMap::new();
        for entry in self
            .bonus_points
            .find_by_round(round_id)
            .await
            .map_err(RecalcError::Persistence)?
        {
            *bonus_per_team.entry(entry.team_id).or_insert(0) += entry.points;
        }

        let mut rows: Vec<StandingsRow> = tallies
            .into_iter()
            .map(|(team_id, t)| {
                let bonus_points = bonus_per_team.get(&team_id).copied().unwrap_or(0);
                StandingsRow {
                    round_id,
                    team_id,
                    games_played: t.games_played,
                    wins: t.wins,
                    draws: t.draws,
                    losses: t.losses,
                    goals_for: t.goals_for,
                    goals_against: t.goals_against,
                    goal_difference: t.goal_difference(),
                    bonus_points,
                    total_points: t.result_points(
                        rules.points_win,
                        rules.points_draw,
                        rules.points_loss,
                    ) + bonus_points,
                    rank: 0,
                }
            })
            .collect();

        assign_ranks(&mut rows);

        self.standings
            .replace_round(round_id, &rows)
            .await
            .map_err(RecalcError::Persistence)?;

        tracing::info!(
            %round_id,
            games = games.len(),
            teams = rows.len(),
            "standings recomputed"
        );

        Ok(())
    }
}
