// src/predict/mod.rs
//! Win probabilities and moneylines for one day's games.
//!
//! `PredictionEngine::build` does the fetching (team stat pages fanned out over
//! a small worker pool, then the month's schedule); `predict` only does math.
mod engine;
mod model;

pub use engine::{DayGame, PredictionEngine};
pub use model::{ModelParams, StatColumns, moneyline, sigmoid};
