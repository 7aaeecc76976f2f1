// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod postgres_bonus_repository;
pub mod postgres_event_repository;
pub mod postgres_game_repository;
pub mod postgres_round_repository;
pub mod postgres_standings_repository;
pub mod postgres_stats_repository;

pub use postgres_bonus_repository::PostgresBonusPointRepository;
pub use postgres_event_repository::{PostgresGameEventRepository, PostgresGoalieStatRepository};
pub use postgres_game_repository::PostgresGameRepository;
pub use postgres_round_repository::PostgresRoundRepository;
pub use postgres_standings_repository::PostgresStandingsRepository;
pub use postgres_stats_repository::{
    PostgresGoalieStatsRepository, PostgresPlayerStatsRepository,
};
