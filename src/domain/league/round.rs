use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Season read model
///
/// Owned by the season-management collaborator; the engine only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Season {
    pub id: Uuid,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Round read model: a scoring-configured subdivision of a season
///
/// Carries the point values awarded per result and the flags deciding
/// whether the round's games feed the season-level player/goalie statistics.
/// Immutable during a recompute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    pub id: Uuid,
    pub season_id: Uuid,
    pub name: String,
    pub points_win: i32,
    pub points_draw: i32,
    pub points_loss: i32,
    pub counts_for_player_stats: bool,
    pub counts_for_goalie_stats: bool,
    pub goalie_min_games: i32,
}

impl Round {
    /// Extracts the scoring configuration the aggregators consume
    pub fn scoring_rules(&self) -> ScoringRules {
        ScoringRules {
            points_win: self.points_win,
            points_draw: self.points_draw,
            points_loss: self.points_loss,
            counts_for_player_stats: self.counts_for_player_stats,
            counts_for_goalie_stats: self.counts_for_goalie_stats,
            goalie_min_games: self.goalie_min_games,
        }
    }
}

/// Resolved per-round scoring configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringRules {
    pub points_win: i32,
    pub points_draw: i32,
    pub points_loss: i32,
    pub counts_for_player_stats: bool,
    pub counts_for_goalie_stats: bool,
    pub goalie_min_games: i32,
}

/// Team read-only reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
}

/// Operator-assigned point adjustment on top of game-derived points
///
/// `points` is signed: penalties deducted by the league show up as negative
/// bonus points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BonusPoint {
    pub id: Uuid,
    pub round_id: Uuid,
    pub team_id: Uuid,
    pub points: i32,
    pub reason: Option<String>,
}
