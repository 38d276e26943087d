// src/specs/schedule.rs
//
// Month schedule page: `/leagues/NBA_{season}_games-{month}.html`.
// One table, one row per game, with a "Playoffs" banner row in the April
// (or whichever month the regular season ends in) table.

use chrono::NaiveDate;

use crate::core::html::{RawTable, first_table};
use crate::error::Result;

pub const DATE: &str = "Date";
pub const START: &str = "Start (ET)";
pub const VISITOR: &str = "Visitor/Neutral";
pub const VISITOR_PTS: &str = "PTS";
pub const HOME: &str = "Home/Neutral";
pub const HOME_PTS: &str = "PTS.1";

/// Date formats seen in schedule cells, then our own stored form.
const DATE_FORMATS: [&str; 2] = ["%a, %b %d, %Y", "%Y-%m-%d"];

pub fn parse_doc(doc: &str, url: &str) -> Result<RawTable> {
    first_table(doc, url)
}

pub fn parse_date(cell: &str) -> Option<NaiveDate> {
    let cell = cell.trim();
    DATE_FORMATS.iter()
        .find_map(|f| NaiveDate::parse_from_str(cell, f).ok())
}

/// Column positions of one schedule table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Columns {
    pub date: usize,
    pub visitor: usize,
    pub home: usize,
    pub visitor_pts: usize,
    pub home_pts: usize,
    pub start: Option<usize>,
}

impl Columns {
    /// Everything but the start time is required.
    pub fn locate(table: &RawTable) -> Result<Self> {
        Ok(Self {
            date: table.require_column(DATE)?,
            visitor: table.require_column(VISITOR)?,
            home: table.require_column(HOME)?,
            visitor_pts: table.require_column(VISITOR_PTS)?,
            home_pts: table.require_column(HOME_PTS)?,
            start: table.column(START),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn site_and_iso_dates_parse() {
        let want = NaiveDate::from_ymd_opt(2020, 12, 22);
        assert_eq!(parse_date("Tue, Dec 22, 2020"), want);
        assert_eq!(parse_date(" 2020-12-22 "), want);
        assert_eq!(parse_date("Playoffs"), None);
    }

    #[test]
    fn start_column_is_optional() {
        let t = RawTable {
            headers: [DATE, VISITOR, VISITOR_PTS, HOME, HOME_PTS].iter().map(|h| s!(*h)).collect(),
            rows: vec![],
        };
        let cols = Columns::locate(&t).unwrap();
        assert_eq!(cols.start, None);
        assert_eq!(cols.home_pts, 4);
    }

    #[test]
    fn missing_home_points_is_reported() {
        let t = RawTable {
            headers: [DATE, VISITOR, VISITOR_PTS, HOME].iter().map(|h| s!(*h)).collect(),
            rows: vec![],
        };
        let err = Columns::locate(&t).unwrap_err();
        assert!(matches!(err, Error::MissingColumn(c) if c == HOME_PTS));
    }
}
