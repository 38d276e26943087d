// src/scrape/normalize.rs
//
// Raw schedule table → typed game records. Strict: one unknown team name
// anywhere rejects the whole table.

use crate::core::html::RawTable;
use crate::core::sanitize::parse_points;
use crate::data::GameRecord;
use crate::error::{Error, Result};
use crate::specs::schedule::{self, Columns};
use crate::teams::{TeamCode, TeamResolver};

pub fn normalize(table: &RawTable, resolver: &TeamResolver) -> Result<Vec<GameRecord>> {
    let cols = Columns::locate(table)?;

    // Resolve every name before producing anything.
    let mut pairs: Vec<(usize, TeamCode, TeamCode)> = Vec::with_capacity(table.len());
    for row in 0..table.len() {
        let visitor = resolve_cell(table, resolver, row, cols.visitor)?;
        let home = resolve_cell(table, resolver, row, cols.home)?;
        pairs.push((row, visitor, home));
    }

    pairs
        .into_iter()
        .filter(|(_, v, h)| !resolver.is_sentinel(*v) && !resolver.is_sentinel(*h))
        .map(|(row, visitor, home)| {
            let raw_date = table.cell(row, cols.date);
            let date = schedule::parse_date(raw_date)
                .ok_or_else(|| Error::BadDate(s!(raw_date)))?;
            let vp = parse_points(table.cell(row, cols.visitor_pts));
            let hp = parse_points(table.cell(row, cols.home_pts));
            Ok(GameRecord { date, visitor, home, visitor_won: visitor_won(vp, hp) })
        })
        .collect()
}

/// Strict greater-than. Ties and unplayed games are `false`.
pub fn visitor_won(visitor_pts: Option<u32>, home_pts: Option<u32>) -> bool {
    match (visitor_pts, home_pts) {
        (Some(v), Some(h)) => v > h,
        _ => false,
    }
}

fn resolve_cell(table: &RawTable, resolver: &TeamResolver, row: usize, col: usize) -> Result<TeamCode> {
    let name = table.cell(row, col);
    resolver.resolve(name).ok_or_else(|| Error::UnrecognizedTeamName {
        column: table.headers[col].clone(),
        name: s!(name),
    })
}
