// src/specs/team_stats.rs
//
// `/teams/{code}/stats_per_game_totals.html` and the `opp_` twin. One row per
// season, most recent first. We only ever read the first row.

use crate::core::html::{RawTable, first_table};
use crate::error::{Error, Result};

pub const WINS: &str = "W";
pub const LOSSES: &str = "L";

/// Most recent season of one team page.
#[derive(Clone, Debug, PartialEq)]
pub struct SeasonLine {
    /// Values of the contiguous `first..=last` column range, in page order.
    pub stats: Vec<f64>,
    pub wins: u32,
    pub losses: u32,
}

pub fn parse_doc(doc: &str, url: &str, first: &str, last: &str) -> Result<SeasonLine> {
    let table = first_table(doc, url)?;
    season_line(&table, first, last)
}

pub fn season_line(table: &RawTable, first: &str, last: &str) -> Result<SeasonLine> {
    let from = table.require_column(first)?;
    let to = table.require_column(last)?;
    if to < from {
        return Err(Error::MissingColumn(format!("{first}..{last}")));
    }
    if table.is_empty() {
        return Err(Error::BadNumber { column: s!(first), value: s!() });
    }

    let mut stats = Vec::with_capacity(to - from + 1);
    for col in from..=to {
        let raw = table.cell(0, col);
        // Blank cells (stat not tracked that year) count as zero.
        let v = if raw.trim().is_empty() {
            0.0
        } else {
            raw.trim().parse::<f64>().map_err(|_| Error::BadNumber {
                column: table.headers[col].clone(),
                value: s!(raw),
            })?
        };
        stats.push(v);
    }

    Ok(SeasonLine {
        stats,
        wins: tally(table, WINS)?,
        losses: tally(table, LOSSES)?,
    })
}

fn tally(table: &RawTable, name: &str) -> Result<u32> {
    let col = table.require_column(name)?;
    let raw = table.cell(0, col).trim();
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse().map_err(|_| Error::BadNumber { column: s!(name), value: s!(raw) })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <table id="stats">
          <thead>
            <tr><th colspan="4"></th><th colspan="3">Per Game</th></tr>
            <tr><th>Season</th><th>Lg</th><th>W</th><th>L</th><th>FG</th><th>FGA</th><th>PTS</th></tr>
          </thead>
          <tbody>
            <tr><th>2021-22</th><td>NBA</td><td>12</td><td>7</td><td>41.2</td><td>88.0</td><td>110.4</td></tr>
            <tr><th>2020-21</th><td>NBA</td><td>48</td><td>24</td><td>43.1</td><td>88.4</td><td>118.3</td></tr>
          </tbody>
        </table>"#;

    #[test]
    fn first_row_slice_and_record() {
        let line = parse_doc(PAGE, "test", "FG", "PTS").unwrap();
        assert_eq!(line.stats, vec![41.2, 88.0, 110.4]);
        assert_eq!((line.wins, line.losses), (12, 7));
    }

    #[test]
    fn non_numeric_stat_is_rejected() {
        let doc = PAGE.replace("88.0", "n/a");
        let err = parse_doc(&doc, "test", "FG", "PTS").unwrap_err();
        assert!(matches!(err, Error::BadNumber { column, .. } if column == "FGA"));
    }

    #[test]
    fn missing_range_end_is_rejected() {
        let err = parse_doc(PAGE, "test", "FG", "TOV").unwrap_err();
        assert!(matches!(err, Error::MissingColumn(_)));
    }
}
