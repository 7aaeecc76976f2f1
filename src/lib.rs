//! Rinkside API Library
//!
//! Core functionality of the league management service: the standings &
//! season-statistics recalculation engine, its domain model, repository
//! ports and infrastructure adapters.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infrastructure;
