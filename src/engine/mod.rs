// Recalculation engine (application layer)
//
// Three entry points, each a pure function of currently stored state:
// standings per round, player statistics per season, goalie statistics
// per season. No running deltas are maintained; a recompute always
// rebuilds the full aggregate set from scratch and swaps it atomically.

pub mod errors;
pub mod goalie_stats;
pub mod locks;
pub mod player_stats;
pub mod resolver;
pub mod standings;

use std::sync::Arc;

pub use errors::{RecalcError, RecalcResult};
pub use locks::ScopeLocks;
pub use resolver::ScoringRuleResolver;

use crate::domain::repositories::{
    BonusPointRepository, GameEventRepository, GameRepository, GoalieStatRepository,
    GoalieStatsRepository, PlayerStatsRepository, RoundRepository, StandingsRepository,
};

/// The standings & season-statistics recalculation engine
///
/// Holds the repository ports and one lock registry per aggregator so that
/// recomputes serialize within a scope but never across scopes. Every call
/// takes its round or season id explicitly; the engine reads no ambient
/// "current season" state.
pub struct RecalcEngine {
    pub(crate) resolver: ScoringRuleResolver,
    pub(crate) rounds: Arc<dyn RoundRepository>,
    pub(crate) games: Arc<dyn GameRepository>,
    pub(crate) bonus_points: Arc<dyn BonusPointRepository>,
    pub(crate) events: Arc<dyn GameEventRepository>,
    pub(crate) goalie_lines: Arc<dyn GoalieStatRepository>,
    pub(crate) standings: Arc<dyn StandingsRepository>,
    pub(crate) player_stats: Arc<dyn PlayerStatsRepository>,
    pub(crate) goalie_stats: Arc<dyn GoalieStatsRepository>,
    pub(crate) round_locks: ScopeLocks,
    pub(crate) player_season_locks: ScopeLocks,
    pub(crate) goalie_season_locks: ScopeLocks,
}

impl RecalcEngine {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        rounds: Arc<dyn RoundRepository>,
        games: Arc<dyn GameRepository>,
        bonus_points: Arc<dyn BonusPointRepository>,
        events: Arc<dyn GameEventRepository>,
        goalie_lines: Arc<dyn GoalieStatRepository>,
        standings: Arc<dyn StandingsRepository>,
        player_stats: Arc<dyn PlayerStatsRepository>,
        goalie_stats: Arc<dyn GoalieStatsRepository>,
    ) -> Self {
        Self {
            resolver: ScoringRuleResolver::new(Arc::clone(&rounds)),
            rounds,
            games,
            bonus_points,
            events,
            goalie_lines,
            standings,
            player_stats,
            goalie_stats,
            round_locks: ScopeLocks::new(),
            player_season_locks: ScopeLocks::new(),
            goalie_season_locks: ScopeLocks::new(),
        }
    }
}
