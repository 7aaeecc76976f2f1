use std::collections::BTreeMap;

use uuid::Uuid;

use crate::domain::league::Game;

/// A completed game reduced to the fields the tally needs
///
/// Constructed through `from_game`, which rejects games that are not
/// countable; the tally itself can then no longer fail.
#[derive(Debug, Clone, Copy)]
pub struct GameLine {
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub home_score: i32,
    pub away_score: i32,
}

impl GameLine {
    /// Validates and extracts the countable result of a completed game
    ///
    /// # Returns
    /// * `Err(String)` - The game is not completed, is missing a score, or
    ///   carries a negative score; the whole round recompute must abort
    pub fn from_game(game: &Game) -> Result<Self, String> {
        let (home_score, away_score) = game.final_score()?;
        Ok(Self {
            home_team_id: game.home_team_id(),
            away_team_id: game.away_team_id(),
            home_score,
            away_score,
        })
    }
}

/// Accumulated results for one team within a round, before points
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeamTally {
    pub games_played: i32,
    pub wins: i32,
    pub draws: i32,
    pub losses: i32,
    pub goals_for: i32,
    pub goals_against: i32,
}

impl TeamTally {
    fn record(&mut self, scored: i32, conceded: i32) {
        self.games_played += 1;
        self.goals_for += scored;
        self.goals_against += conceded;
        match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => self.wins += 1,
            std::cmp::Ordering::Equal => self.draws += 1,
            std::cmp::Ordering::Less => self.losses += 1,
        }
    }

    pub fn goal_difference(&self) -> i32 {
        self.goals_for - self.goals_against
    }

    /// Game-derived points under the given point values, before bonus
    pub fn result_points(&self, points_win: i32, points_draw: i32, points_loss: i32) -> i32 {
        self.wins * points_win + self.draws * points_draw + self.losses * points_loss
    }
}

/// Accumulates every game line from both teams' perspectives
///
/// Only teams appearing in at least one countable game get a tally; a
/// BTreeMap keeps iteration deterministic across recomputes.
pub fn tally(lines: &[GameLine]) -> BTreeMap<Uuid, TeamTally> {
    let mut tallies: BTreeMap<Uuid, TeamTally> = BTreeMap::new();

    for line in lines {
        tallies
            .entry(line.home_team_id)
            .or_default()
            .record(line.home_score, line.away_score);
        tallies
            .entry(line.away_team_id)
            .or_default()
            .record(line.away_score, line.home_score);
    }

    tallies
}
