// src/gui/mod.rs
pub mod app;
pub mod components;
pub mod progress;
pub mod tasks;

pub use app::run;
