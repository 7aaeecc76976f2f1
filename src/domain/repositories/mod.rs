// Repository traits (ports) the engine depends on
// Implementations live in the infrastructure layer

pub mod bonus_repository;
pub mod event_repository;
pub mod game_repository;
pub mod round_repository;
pub mod standings_repository;
pub mod stats_repository;

pub use bonus_repository::BonusPointRepository;
pub use event_repository::{GameEventRepository, GoalieStatRepository};
pub use game_repository::GameRepository;
pub use round_repository::RoundRepository;
pub use standings_repository::StandingsRepository;
pub use stats_repository::{GoalieStatsRepository, PlayerStatsRepository};
