// Season statistics domain module
// Pure aggregation of the event ledger into per-player and per-goalie
// season lines; round filtering happens in the engine before these run

pub mod goalie;
pub mod player;

pub use goalie::{aggregate_goalie_stats, GoalieSeasonStats};
pub use player::{aggregate_player_stats, PlayerSeasonStats};
