// Standings domain module
// Pure per-round tally and ranking logic; no storage concerns

pub mod ranking;
pub mod tally;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use ranking::assign_ranks;
pub use tally::{tally, GameLine, TeamTally};

/// One team's line in a round's standings table
///
/// The whole row set of a round is owned by the standings aggregator and
/// replaced atomically on every recompute; rows are never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub round_id: Uuid,
    pub team_id: Uuid,
    pub games_played: i32,
    pub wins: i32,
    pub draws: i32,
    pub losses: i32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
    pub bonus_points: i32,
    pub total_points: i32,
    pub rank: i32,
}
