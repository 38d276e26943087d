// src/specs/mod.rs
//! # Page specs
//!
//! One module per Basketball-Reference page shape. A spec knows *where the
//! data lives in the HTML* and nothing else: no fetching, no caching, no team
//! code resolution. Each exposes a pure `parse_*` entry point so it can be
//! tested offline against captured snippets.
//!
//! ```text
//! scrape::* / predict::* → core::net (fetch) → specs::<page>::parse_*
//!                                            ↘ typed records / RawTable
//! ```
//!
//! ## Current specs
//! - `month_links` – the "filter" navigation block on a season index page
//!   (`/leagues/NBA_{season}_games.html`), one link per month.
//! - `schedule` – the schedule table of a month page, column names and the
//!   per-row fields the normalizer and the predictor read.
//! - `team_stats` – most recent season row of a team's per-game totals page
//!   (offense and opponent pages share the shape).
//!
//! Markup surprises are reported as values (`month_links::Anomaly`) rather
//! than log lines so callers decide how loud to be.
pub mod month_links;
pub mod schedule;
pub mod team_stats;
