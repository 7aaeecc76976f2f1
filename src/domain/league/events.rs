use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::GameEventKind;

/// A discrete in-game event from the ledger (goal, assist or penalty)
///
/// Read-only input to the player statistics aggregation. `penalty_minutes`
/// is only meaningful for `Penalty` events; the aggregator ignores it for
/// the other kinds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameEvent {
    pub game_id: Uuid,
    pub player_id: Uuid,
    pub kind: GameEventKind,
    pub penalty_minutes: Option<i32>,
}

impl GameEvent {
    /// Minutes this event contributes to the player's penalty total
    pub fn penalty_contribution(&self) -> i32 {
        match self.kind {
            GameEventKind::Penalty => self.penalty_minutes.unwrap_or(0),
            _ => 0,
        }
    }
}

/// A goalie's line for one game
///
/// Read-only input to the goalie statistics aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalieGameStat {
    pub game_id: Uuid,
    pub goalie_id: Uuid,
    pub goals_against: i32,
    pub minutes_played: i32,
}
