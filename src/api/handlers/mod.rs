// HTTP handlers (controller adapters)

pub mod games;
pub mod health;
pub mod standings;
pub mod stats;
