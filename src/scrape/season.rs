// src/scrape/season.rs
//
// Season Aggregator: index probe → month links → per-month normalize → one
// dataset. A month that fails is dropped and remembered, never fatal.

use std::thread;

use reqwest::Url;
use tracing::{info, warn};

use super::months::discover_month_links;
use super::normalize::normalize;
use crate::config::consts::{season_index_url, season_month_url};
use crate::config::options::ScrapeOptions;
use crate::core::net::{Fetch, is_success};
use crate::data::{GameRecord, SeasonDataset};
use crate::error::Result;
use crate::specs::schedule;
use crate::teams::TeamResolver;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeasonOutcome {
    /// The index page itself did not answer 2xx. Nothing was attempted.
    Unreachable { status: u16 },
    Collected {
        /// `None` when not a single month produced a table.
        dataset: Option<SeasonDataset>,
        /// True iff fewer month tables than discovered months.
        missing_months: bool,
    },
}

impl SeasonOutcome {
    pub fn dataset(&self) -> Option<&SeasonDataset> {
        match self {
            SeasonOutcome::Collected { dataset, .. } => dataset.as_ref(),
            SeasonOutcome::Unreachable { .. } => None,
        }
    }

    pub fn into_dataset(self) -> Option<SeasonDataset> {
        match self {
            SeasonOutcome::Collected { dataset, .. } => dataset,
            SeasonOutcome::Unreachable { .. } => None,
        }
    }

    /// `None` for a total failure, which is different from "some missing".
    pub fn missing_months(&self) -> Option<bool> {
        match self {
            SeasonOutcome::Collected { missing_months, .. } => Some(*missing_months),
            SeasonOutcome::Unreachable { .. } => None,
        }
    }

    /// No dataset, or an incomplete one.
    pub fn is_bad(&self) -> bool {
        self.dataset().is_none() || self.missing_months() == Some(true)
    }
}

pub fn aggregate_season(fetch: &dyn Fetch, opts: &ScrapeOptions, season: u16) -> Result<SeasonOutcome> {
    let base = Url::parse(&opts.base_url)?;
    let index = Url::parse(&season_index_url(&opts.base_url, season))?;

    let status = fetch.probe(&index)?;
    if !is_success(status) {
        warn!("Season {season}: index {index} answered {status}; giving up on the season");
        return Ok(SeasonOutcome::Unreachable { status });
    }

    let links = discover_month_links(fetch, &index, &base)?;
    let resolver = TeamResolver::new(opts.resolver);

    let mut tables: Vec<Vec<GameRecord>> = Vec::with_capacity(links.len());
    for (n, link) in links.iter().enumerate() {
        if !link.reachable {
            warn!("Season {season}: skipping {} (unreachable)", link.month);
            continue;
        }
        match month_games(fetch, &link.url, &resolver) {
            Ok(games) => {
                info!("Season {season}: {} → {} games", link.month, games.len());
                tables.push(games);
            }
            Err(e) if e.is_recoverable() => {
                warn!("Season {season}: {} excluded: {e}", link.month);
            }
            Err(e) => return Err(e),
        }
        thread::sleep(opts.pause_for(n));
    }

    let missing_months = tables.len() < links.len();
    let dataset = (!tables.is_empty()).then(|| SeasonDataset::from_months(season, tables));
    Ok(SeasonOutcome::Collected { dataset, missing_months })
}

/// One month page → normalized games.
pub fn month_games(fetch: &dyn Fetch, url: &Url, resolver: &TeamResolver) -> Result<Vec<GameRecord>> {
    let doc = fetch.get_text(url)?;
    let table = schedule::parse_doc(&doc, url.as_str())?;
    normalize(&table, resolver)
}

/// URL of one month of a season, from the month's English name.
pub fn month_url(opts: &ScrapeOptions, season: u16, month: &str) -> Result<Url> {
    Ok(Url::parse(&season_month_url(&opts.base_url, season, &month.to_lowercase()))?)
}
