use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::value_objects::GameStatus;

/// Game aggregate root
///
/// Represents one fixture between two teams within a round. The
/// recalculation engine treats games as read-only input; mutation happens
/// only through the reporting workflow (`report_result`, `postpone`,
/// `cancel`), which enforces the status transition rules.
///
/// # Invariants
/// - Home and away teams must differ
/// - Scores are only present on completed games and are never negative
/// - Status transitions follow `GameStatus::can_transition_to`
#[derive(Debug, Clone)]
pub struct Game {
    id: Uuid,
    round_id: Uuid,
    home_team_id: Uuid,
    away_team_id: Uuid,
    home_score: Option<i32>,
    away_score: Option<i32>,
    status: GameStatus,
    scheduled_at: Option<DateTime<Utc>>,
}

impl Game {
    /// Creates a new scheduled game
    ///
    /// # Returns
    /// * `Ok(Game)` - A game in `Scheduled` status with no scores
    /// * `Err(String)` - If the two teams are the same
    pub fn new(
        round_id: Uuid,
        home_team_id: Uuid,
        away_team_id: Uuid,
        scheduled_at: Option<DateTime<Utc>>,
    ) -> Result<Self, String> {
        if home_team_id == away_team_id {
            return Err("A team cannot play against itself".to_string());
        }

        Ok(Self {
            id: Uuid::new_v4(),
            round_id,
            home_team_id,
            away_team_id,
            home_score: None,
            away_score: None,
            status: GameStatus::Scheduled,
            scheduled_at,
        })
    }

    /// Records the final result and completes the game
    ///
    /// Accepted from `Scheduled` (a result report implies the game was
    /// played) or `InProgress`.
    ///
    /// # Business Rules
    /// - Scores must be non-negative
    /// - Game must not already be completed, postponed or cancelled
    pub fn report_result(&mut self, home_score: i32, away_score: i32) -> Result<(), String> {
        if home_score < 0 || away_score < 0 {
            return Err("Scores cannot be negative".to_string());
        }

        match self.status {
            GameStatus::Scheduled | GameStatus::InProgress => {
                self.home_score = Some(home_score);
                self.away_score = Some(away_score);
                self.status = GameStatus::Completed;
                Ok(())
            }
            other => Err(format!("Cannot report a result for a {} game", other)),
        }
    }

    /// Postpones the game
    ///
    /// # Returns
    /// * `Ok(true)` - The game was already completed; its round and season
    ///   aggregates must be recomputed (correction)
    /// * `Ok(false)` - The game had not been counted yet
    pub fn postpone(&mut self) -> Result<bool, String> {
        self.correct_to(GameStatus::Postponed)
    }

    /// Cancels the game, with the same correction semantics as `postpone`
    pub fn cancel(&mut self) -> Result<bool, String> {
        self.correct_to(GameStatus::Cancelled)
    }

    fn correct_to(&mut self, next: GameStatus) -> Result<bool, String> {
        if !self.status.can_transition_to(next) {
            return Err(format!("Cannot move a {} game to {}", self.status, next));
        }

        let was_counted = self.status.is_correction(next);
        self.status = next;
        self.home_score = None;
        self.away_score = None;
        Ok(was_counted)
    }

    /// Returns the final score of a completed game
    ///
    /// A completed game missing either score is structurally invalid and
    /// must abort the whole recompute of its round.
    ///
    /// # Returns
    /// * `Ok((home, away))` - Both scores present and non-negative
    /// * `Err(String)` - Reason the game cannot be counted
    pub fn final_score(&self) -> Result<(i32, i32), String> {
        if self.status != GameStatus::Completed {
            return Err(format!("Game is {}, not completed", self.status));
        }

        let home = self.home_score.ok_or("Completed game has no home score")?;
        let away = self.away_score.ok_or("Completed game has no away score")?;

        if home < 0 || away < 0 {
            return Err(format!("Invalid negative score {}:{}", home, away));
        }

        Ok((home, away))
    }

    // ===== Getters =====

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn round_id(&self) -> Uuid {
        self.round_id
    }

    pub fn home_team_id(&self) -> Uuid {
        self.home_team_id
    }

    pub fn away_team_id(&self) -> Uuid {
        self.away_team_id
    }

    pub fn home_score(&self) -> Option<i32> {
        self.home_score
    }

    pub fn away_score(&self) -> Option<i32> {
        self.away_score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn scheduled_at(&self) -> Option<DateTime<Utc>> {
        self.scheduled_at
    }

    /// Reconstructs a Game from persistence layer data
    ///
    /// Bypasses transition validation; only to be used by repository
    /// implementations for data reconstruction.
    #[allow(clippy::too_many_arguments)]
    pub fn from_persistence(
        id: Uuid,
        round_id: Uuid,
        home_team_id: Uuid,
        away_team_id: Uuid,
        home_score: Option<i32>,
        away_score: Option<i32>,
        status: GameStatus,
        scheduled_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            round_id,
            home_team_id,
            away_team_id,
            home_score,
            away_score,
            status,
            scheduled_at,
        }
    }
}
