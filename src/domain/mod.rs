// Domain layer module exports
// Following Hexagonal Architecture and DDD principles
// Domain is independent of infrastructure concerns

pub mod league;
pub mod repositories;
pub mod standings;
pub mod stats;
