use serde::{Deserialize, Serialize};

/// Represents the lifecycle status of a game
///
/// # Status Transitions
/// ```text
/// Scheduled -> InProgress -> Completed
///     |                         |
///     +-> Postponed/Cancelled   +-> Postponed/Cancelled (corrections)
/// ```
///
/// A `Completed -> Postponed` or `Completed -> Cancelled` transition is a
/// correction: the game was already counted by a prior recompute, so the
/// affected round and season must be recalculated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "game_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// Game is on the schedule but has not started
    Scheduled,
    /// Game is currently being played
    InProgress,
    /// Game finished with a final score
    Completed,
    /// Game was moved off its scheduled date
    Postponed,
    /// Game will not be played
    Cancelled,
}

impl GameStatus {
    /// Checks if a transition from the current status to the next is valid
    ///
    /// # Valid Transitions
    /// - Scheduled -> InProgress
    /// - Scheduled -> Postponed
    /// - Scheduled -> Cancelled
    /// - InProgress -> Completed
    /// - Completed -> Postponed (correction)
    /// - Completed -> Cancelled (correction)
    /// - Postponed -> Scheduled (rescheduled)
    pub fn can_transition_to(&self, next: GameStatus) -> bool {
        use GameStatus::*;
        matches!(
            (self, next),
            (Scheduled, InProgress)
                | (Scheduled, Postponed)
                | (Scheduled, Cancelled)
                | (InProgress, Completed)
                | (Completed, Postponed)
                | (Completed, Cancelled)
                | (Postponed, Scheduled)
        )
    }

    /// True for transitions that pull a finished result back out of scope
    ///
    /// Any aggregate that already counted the game must be recomputed when
    /// one of these is applied.
    pub fn is_correction(&self, next: GameStatus) -> bool {
        use GameStatus::*;
        matches!((self, next), (Completed, Postponed) | (Completed, Cancelled))
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Scheduled => write!(f, "scheduled"),
            GameStatus::InProgress => write!(f, "in_progress"),
            GameStatus::Completed => write!(f, "completed"),
            GameStatus::Postponed => write!(f, "postponed"),
            GameStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Kind of a discrete in-game event recorded in the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "game_event_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum GameEventKind {
    Goal,
    Assist,
    Penalty,
}

impl std::fmt::Display for GameEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEventKind::Goal => write!(f, "goal"),
            GameEventKind::Assist => write!(f, "assist"),
            GameEventKind::Penalty => write!(f, "penalty"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_transition_scheduled_to_in_progress() {
        assert!(GameStatus::Scheduled.can_transition_to(GameStatus::InProgress));
    }

    #[test]
    fn valid_transition_in_progress_to_completed() {
        assert!(GameStatus::InProgress.can_transition_to(GameStatus::Completed));
    }

    #[test]
    fn valid_correction_completed_to_postponed() {
        assert!(GameStatus::Completed.can_transition_to(GameStatus::Postponed));
    }

    #[test]
    fn valid_correction_completed_to_cancelled() {
        assert!(GameStatus::Completed.can_transition_to(GameStatus::Cancelled));
    }

    #[test]
    fn postponed_game_can_be_rescheduled() {
        assert!(GameStatus::Postponed.can_transition_to(GameStatus::Scheduled));
    }

    #[test]
    fn invalid_transition_scheduled_to_completed() {
        assert!(!GameStatus::Scheduled.can_transition_to(GameStatus::Completed));
    }

    #[test]
    fn invalid_transition_cancelled_to_anything() {
        assert!(!GameStatus::Cancelled.can_transition_to(GameStatus::Scheduled));
        assert!(!GameStatus::Cancelled.can_transition_to(GameStatus::Completed));
    }

    #[test]
    fn correction_detection() {
        assert!(GameStatus::Completed.is_correction(GameStatus::Postponed));
        assert!(GameStatus::Completed.is_correction(GameStatus::Cancelled));
        assert!(!GameStatus::Scheduled.is_correction(GameStatus::Postponed));
        assert!(!GameStatus::InProgress.is_correction(GameStatus::Completed));
    }

    #[test]
    fn status_display() {
        assert_eq!(GameStatus::Scheduled.to_string(), "scheduled");
        assert_eq!(GameStatus::InProgress.to_string(), "in_progress");
        assert_eq!(GameStatus::Completed.to_string(), "completed");
        assert_eq!(GameStatus::Postponed.to_string(), "postponed");
        assert_eq!(GameStatus::Cancelled.to_string(), "cancelled");
    }

    #[test]
    fn event_kind_display() {
        assert_eq!(GameEventKind::Goal.to_string(), "goal");
        assert_eq!(GameEventKind::Assist.to_string(), "assist");
        assert_eq!(GameEventKind::Penalty.to_string(), "penalty");
    }
}
