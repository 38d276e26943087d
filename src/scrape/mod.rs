// src/scrape/mod.rs
mod bulk;
mod months;
mod normalize;
mod season;

pub use bulk::{DownloadReport, download_range};
pub use months::{discover_month_links, probe_anchors};
pub use normalize::{normalize, visitor_won};
pub use season::{SeasonOutcome, aggregate_season, month_games, month_url};
