// src/data.rs
//
// Typed records produced by the pipelines. The string grid (`store::DataSet`)
// is only for display/export; everything upstream of it uses these.

use chrono::NaiveDate;
use reqwest::Url;

use crate::store::DataSet;
use crate::teams::TeamCode;

/// One finished-or-scheduled game from a schedule page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameRecord {
    pub date: NaiveDate,
    pub visitor: TeamCode,
    pub home: TeamCode,
    /// Strictly visitor points > home points; false for ties and unplayed games.
    pub visitor_won: bool,
}

/// A month entry found on a season index page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthLink {
    pub month: String,
    pub url: Url,
    pub reachable: bool,
}

/// All games of one season, months appended in discovery order.
/// Built once by the season aggregator, never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeasonDataset {
    season: u16,
    games: Vec<GameRecord>,
}

impl SeasonDataset {
    pub(crate) fn from_months(season: u16, months: Vec<Vec<GameRecord>>) -> Self {
        Self { season, games: months.into_iter().flatten().collect() }
    }

    pub fn season(&self) -> u16 { self.season }
    pub fn games(&self) -> &[GameRecord] { &self.games }
    pub fn len(&self) -> usize { self.games.len() }
    pub fn is_empty(&self) -> bool { self.games.is_empty() }
}

pub const GAME_HEADERS: [&str; 4] = ["Date", "Visitor/Neutral", "Home/Neutral", "VisitorWin"];

pub fn games_to_dataset(games: &[GameRecord]) -> DataSet {
    DataSet {
        headers: Some(GAME_HEADERS.iter().map(|h| s!(*h)).collect()),
        rows: games.iter()
            .map(|g| vec![
                g.date.to_string(),
                s!(g.visitor.as_str()),
                s!(g.home.as_str()),
                g.visitor_won.to_string(),
            ])
            .collect(),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PredictionRecord {
    pub date: NaiveDate,
    /// "Start (ET)" as printed on the schedule, when present.
    pub start: Option<String>,
    pub visitor: TeamCode,
    pub home: TeamCode,
    pub visitor_win_probability: f64,
    pub visitor_line: i32,
    pub home_line: i32,
}

pub const PREDICTION_HEADERS: [&str; 7] = [
    "Date", "Start (ET)", "Visitor", "Home", "Visitor win probability", "Visitor Line", "Home Line",
];

pub fn predictions_to_dataset(preds: &[PredictionRecord]) -> DataSet {
    DataSet {
        headers: Some(PREDICTION_HEADERS.iter().map(|h| s!(*h)).collect()),
        rows: preds.iter()
            .map(|p| vec![
                p.date.to_string(),
                p.start.clone().unwrap_or_default(),
                s!(p.visitor.as_str()),
                s!(p.home.as_str()),
                format!("{:.4}", p.visitor_win_probability),
                format!("{:+}", p.visitor_line),
                format!("{:+}", p.home_line),
            ])
            .collect(),
    }
}

/// Current win/loss tally of one franchise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamRecord {
    pub team: TeamCode,
    pub wins: u32,
    pub losses: u32,
}
