//! benchplot library: configuration and application logic.

pub mod app;
pub mod config;
pub mod errors;
