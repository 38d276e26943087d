// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod data;
pub mod error;
pub mod gui;
pub mod log;
pub mod predict;
pub mod progress;
pub mod scrape;
pub mod store;
pub mod teams;

pub use error::{Error, Result};
