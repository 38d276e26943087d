// src/predict/engine.rs
use std::{
    collections::HashMap, thread,
    sync::{ mpsc, atomic::{ AtomicUsize, Ordering }},
};

use chrono::NaiveDate;
use reqwest::Url;
use tracing::{info, warn};

use super::model::{ModelParams, moneyline};
use crate::config::consts::{WORKERS, team_defense_url, team_offense_url};
use crate::config::options::ScrapeOptions;
use crate::core::net::{Fetch, is_success};
use crate::data::{PredictionRecord, TeamRecord};
use crate::error::{Error, Result};
use crate::progress::Progress;
use crate::scrape::month_url;
use crate::specs::{schedule, team_stats};
use crate::teams::{TeamCode, TeamResolver};

/// One scheduled game on the target date, keyed by franchise codes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayGame {
    pub date: NaiveDate,
    pub start: Option<String>,
    pub visitor: TeamCode,
    pub home: TeamCode,
}

struct TeamProfile {
    projection: Vec<f64>,
    record: TeamRecord,
}

/// Everything fetched for one (season, date). Building it does all the
/// network work; `predict` is pure.
pub struct PredictionEngine {
    date: NaiveDate,
    model: ModelParams,
    projections: HashMap<TeamCode, Vec<f64>>,
    standings: Vec<TeamRecord>,
    games: Vec<DayGame>,
}

impl PredictionEngine {
    pub fn build(
        fetch: &dyn Fetch,
        opts: &ScrapeOptions,
        model: ModelParams,
        season: u16,
        date: NaiveDate,
        mut progress: Option<&mut dyn Progress>,
    ) -> Result<Self> {
        let teams = TeamResolver::active_teams();
        if let Some(p) = progress.as_deref_mut() {
            p.begin(teams.len());
            p.log("Fetching team stats…");
        }

        let built = Self::collect(fetch, opts, model, season, date, &teams, progress.as_deref_mut());

        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
        built
    }

    fn collect(
        fetch: &dyn Fetch,
        opts: &ScrapeOptions,
        model: ModelParams,
        season: u16,
        date: NaiveDate,
        teams: &[(&'static str, TeamCode)],
        progress: Option<&mut (dyn Progress + '_)>,
    ) -> Result<Self> {
        let profiles = fetch_profiles(fetch, opts, &model, teams, progress)?;

        let mut projections = HashMap::with_capacity(profiles.len());
        let mut standings = Vec::with_capacity(profiles.len());
        for (code, profile) in profiles {
            projections.insert(code, profile.projection);
            standings.push(profile.record);
        }
        standings.sort_by_key(|r| r.team);

        let games = match day_games(fetch, opts, season, date) {
            Ok(games) => games,
            Err(e) if e.is_recoverable() => {
                warn!("{date}: schedule unusable ({e}); no games");
                Vec::new()
            }
            Err(e) => return Err(e),
        };
        info!("{} games on {date}, {} teams profiled", games.len(), projections.len());

        Ok(Self { date, model, projections, standings, games })
    }

    pub fn date(&self) -> NaiveDate { self.date }

    /// W/L of every team whose pages came back, ordered by code.
    pub fn standings(&self) -> &[TeamRecord] { &self.standings }

    pub fn games(&self) -> &[DayGame] { &self.games }

    /// One record per game whose two teams were both profiled, in schedule
    /// order. Empty when there are no games.
    pub fn predict(&self) -> Vec<PredictionRecord> {
        self.games.iter()
            .filter_map(|g| {
                let (Some(v), Some(h)) = (self.projections.get(&g.visitor), self.projections.get(&g.home)) else {
                    warn!("{} @ {}: missing team stats; skipped", g.visitor, g.home);
                    return None;
                };
                let p = self.model.probability(v, h);
                let (visitor_line, home_line) = moneyline(p);
                Some(PredictionRecord {
                    date: g.date,
                    start: g.start.clone(),
                    visitor: g.visitor,
                    home: g.home,
                    visitor_win_probability: p,
                    visitor_line,
                    home_line,
                })
            })
            .collect()
    }
}

/// Fan the per-team page pairs out over a few worker threads. Returns once
/// every worker is done. A team whose pages are unusable is left out; a
/// transport error fails the whole build.
fn fetch_profiles(
    fetch: &dyn Fetch,
    opts: &ScrapeOptions,
    model: &ModelParams,
    teams: &[(&'static str, TeamCode)],
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<Vec<(TeamCode, TeamProfile)>> {
    let counter = AtomicUsize::new(0);
    let (res_tx, res_rx) = mpsc::channel::<(TeamCode, Result<TeamProfile>)>();
    let workers = WORKERS.min(teams.len()).max(1);

    let mut profiles = Vec::with_capacity(teams.len());
    let mut fatal: Option<Error> = None;

    thread::scope(|s| {
        for _ in 0..workers {
            let tx = res_tx.clone();
            let counter = &counter;
            s.spawn(move || {
                loop {
                    let i = counter.fetch_add(1, Ordering::Relaxed);
                    let Some(&(_, code)) = teams.get(i) else { break };
                    let result = team_profile(fetch, opts, model, code);
                    if tx.send((code, result)).is_err() {
                        break;
                    }
                    thread::sleep(opts.pause_for(i)); // be polite
                }
            });
        }
        drop(res_tx); // main thread is sole receiver now

        for (code, result) in res_rx {
            match result {
                Ok(profile) => {
                    profiles.push((code, profile));
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_done(code.as_str());
                    }
                }
                Err(e) if e.is_recoverable() => {
                    warn!("{code}: {e}; team excluded");
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_failed(code.as_str());
                    }
                }
                Err(e) => {
                    // Stop handing out work; running fetches finish on their own.
                    counter.store(teams.len(), Ordering::Relaxed);
                    fatal.get_or_insert(e);
                }
            }
        }
    });

    match fatal {
        Some(e) => Err(e),
        None => Ok(profiles),
    }
}

fn team_profile(fetch: &dyn Fetch, opts: &ScrapeOptions, model: &ModelParams, code: TeamCode) -> Result<TeamProfile> {
    let cols = &model.stat_columns;

    let url = Url::parse(&team_offense_url(&opts.base_url, code.as_str()))?;
    let offense = team_stats::parse_doc(&fetch.get_text(&url)?, url.as_str(), &cols.first, &cols.last)?;

    let url = Url::parse(&team_defense_url(&opts.base_url, code.as_str()))?;
    let defense = team_stats::parse_doc(&fetch.get_text(&url)?, url.as_str(), &cols.first, &cols.last)?;

    let mut raw = offense.stats;
    raw.extend(defense.stats);
    Ok(TeamProfile {
        projection: model.project(&raw)?,
        record: TeamRecord { team: code, wins: offense.wins, losses: offense.losses },
    })
}

/// Games scheduled on `date`. A missing month page or a quiet day is an
/// empty list; a page without a usable schedule table is a recoverable error.
fn day_games(fetch: &dyn Fetch, opts: &ScrapeOptions, season: u16, date: NaiveDate) -> Result<Vec<DayGame>> {
    let url = month_url(opts, season, &date.format("%B").to_string())?;

    let status = fetch.probe(&url)?;
    if !is_success(status) {
        warn!("From {url} unexpected status code {status}");
        return Ok(Vec::new());
    }

    let table = schedule::parse_doc(&fetch.get_text(&url)?, url.as_str())?;
    let cols = schedule::Columns::locate(&table)?;

    let mut games = Vec::new();
    for row in 0..table.len() {
        if schedule::parse_date(table.cell(row, cols.date)) != Some(date) {
            continue;
        }
        let visitor_name = table.cell(row, cols.visitor);
        let home_name = table.cell(row, cols.home);
        let (Some(visitor), Some(home)) = (TeamResolver::franchise(visitor_name), TeamResolver::franchise(home_name)) else {
            warn!("{date}: {visitor_name:?} @ {home_name:?} is not between current franchises; skipped");
            continue;
        };
        let start = cols.start
            .map(|c| s!(table.cell(row, c)))
            .filter(|s| !s.is_empty());
        games.push(DayGame { date, start, visitor, home });
    }

    if games.is_empty() {
        info!("No games {date}");
    }
    Ok(games)
}
