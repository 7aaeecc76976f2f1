// League domain module
// Contains the game aggregate, round/season read models and ledger inputs

pub mod events;
pub mod game;
pub mod round;
pub mod value_objects;

// Re-export main types for convenience
pub use events::{GameEvent, GoalieGameStat};
pub use game::Game;
pub use round::{BonusPoint, Round, ScoringRules, Season, Team};
pub use value_objects::{GameEventKind, GameStatus};
