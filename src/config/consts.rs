// src/config/consts.rs
use crate::teams::ResolverMode;

// Net config
pub const BASE_URL: &str = "https://www.basketball-reference.com";
pub const USER_AGENT: &str = "br_scrape/0.1";
pub const HTTP_TIMEOUT_SECS: u64 = 15;

// Scrape
/// Which team-name resolver the season pipeline uses unless overridden.
pub const RESOLVER_MODE: ResolverMode = ResolverMode::Merged;

// Local store
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_SEASONS_SUBDIR: &str = "seasons";

// Model
pub const DEFAULT_MODEL: &str = include_str!("../../assets/model/hifo_v1.json");

// Concurrency
pub const WORKERS: usize = 4;
pub const REQUEST_PAUSE_MS: u64 = 750; // be polite
pub const JITTER_MS: u64 = 250; // extra 0..250 ms

/// Season index page: lists the per-month schedule links.
pub fn season_index_url(base: &str, season: u16) -> String {
    let base = base.trim_end_matches('/');
    format!("{base}/leagues/NBA_{season}_games.html")
}

/// One month of a season's schedule, `month` lowercase English ("october").
pub fn season_month_url(base: &str, season: u16, month: &str) -> String {
    let base = base.trim_end_matches('/');
    format!("{base}/leagues/NBA_{season}_games-{month}.html")
}

pub fn team_offense_url(base: &str, franchise: &str) -> String {
    let base = base.trim_end_matches('/');
    format!("{base}/teams/{franchise}/stats_per_game_totals.html")
}

pub fn team_defense_url(base: &str, franchise: &str) -> String {
    let base = base.trim_end_matches('/');
    format!("{base}/teams/{franchise}/opp_stats_per_game_totals.html")
}
