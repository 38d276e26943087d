// src/store.rs
//
// Flat CSV persistence for season datasets, plus a generic reader that
// hands any stored file back as a display grid.

use std::{fs, path::{Path, PathBuf}};

use chrono::NaiveDate;
use serde::Serialize;

use crate::data::{GameRecord, SeasonDataset};
use crate::error::Result;

/// Headers + rows of strings; what the GUI table and exports consume.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn row_count(&self) -> usize { self.rows.len() }
    pub fn header_count(&self) -> usize {
        self.headers.as_ref().map(|h| h.len()).unwrap_or(0)
    }
}

#[derive(Serialize)]
struct GameRow<'a> {
    #[serde(rename = "Date")]
    date: NaiveDate,
    #[serde(rename = "Visitor/Neutral")]
    visitor: &'a str,
    #[serde(rename = "Home/Neutral")]
    home: &'a str,
    #[serde(rename = "VisitorWin")]
    visitor_won: bool,
}

impl<'a> From<&'a GameRecord> for GameRow<'a> {
    fn from(g: &'a GameRecord) -> Self {
        Self {
            date: g.date,
            visitor: g.visitor.as_str(),
            home: g.home.as_str(),
            visitor_won: g.visitor_won,
        }
    }
}

pub fn season_path(dir: &Path, season: u16) -> PathBuf {
    dir.join(format!("NBA_{season}_games.csv"))
}

pub fn combined_path(dir: &Path, start: u16, end: u16) -> PathBuf {
    dir.join(format!("NBA_{start}-{end}_games.csv"))
}

pub fn save_season(dir: &Path, ds: &SeasonDataset) -> Result<PathBuf> {
    let path = season_path(dir, ds.season());
    write_games(&path, ds.games().iter())?;
    Ok(path)
}

/// One file holding every season back to back, in the order given.
pub fn save_combined(dir: &Path, start: u16, end: u16, seasons: &[SeasonDataset]) -> Result<PathBuf> {
    let path = combined_path(dir, start, end);
    write_games(&path, seasons.iter().flat_map(|s| s.games().iter()))?;
    Ok(path)
}

fn write_games<'a>(path: &Path, games: impl Iterator<Item = &'a GameRecord>) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let mut w = csv::Writer::from_path(path)?;
    let mut any = false;
    for g in games {
        w.serialize(GameRow::from(g))?;
        any = true;
    }
    // serialize() only emits headers with the first record
    if !any {
        w.write_record(crate::data::GAME_HEADERS)?;
    }
    w.flush()?;
    Ok(())
}

/// Read any stored CSV back; first line is the header.
pub fn load_table(path: &Path) -> Result<DataSet> {
    let mut r = csv::Reader::from_path(path)?;
    let headers = r.headers()?.iter().map(|h| s!(h)).collect();
    let mut rows = Vec::new();
    for rec in r.records() {
        rows.push(rec?.iter().map(|c| s!(c)).collect());
    }
    Ok(DataSet { headers: Some(headers), rows })
}

pub fn ensure_directory(dir: &Path) -> std::io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::other(format!(
            "Path exists but is not a directory: {}", dir.display()
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::teams::{ResolverMode, TeamResolver};

    fn tmp_dir(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("br_store_{}", name));
        let _ = fs::remove_dir_all(&p);
        p
    }

    fn game(day: u32, v: &str, h: &str, won: bool) -> GameRecord {
        let r = TeamResolver::new(ResolverMode::Merged);
        GameRecord {
            date: NaiveDate::from_ymd_opt(2020, 12, day).unwrap(),
            visitor: r.resolve(v).unwrap(),
            home: r.resolve(h).unwrap(),
            visitor_won: won,
        }
    }

    #[test]
    fn season_round_trips_through_csv() {
        let dir = tmp_dir("season");
        let ds = SeasonDataset::from_months(2021, vec![vec![
            game(22, "Golden State Warriors", "Brooklyn Nets", false),
            game(22, "Los Angeles Clippers", "Los Angeles Lakers", true),
        ]]);
        let path = save_season(&dir, &ds).unwrap();
        assert!(path.ends_with("NBA_2021_games.csv"));

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("Date,Visitor/Neutral,Home/Neutral,VisitorWin\n"));
        assert!(text.contains("2020-12-22,GSW,BRK,false"));
        assert!(text.contains("2020-12-22,LAC,LAL,true"));

        let table = load_table(&path).unwrap();
        assert_eq!(table.header_count(), 4);
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn empty_dataset_still_writes_header() {
        let dir = tmp_dir("empty");
        let ds = SeasonDataset::from_months(1999, vec![]);
        let path = save_season(&dir, &ds).unwrap();
        let table = load_table(&path).unwrap();
        assert_eq!(table.header_count(), 4);
        assert_eq!(table.row_count(), 0);
    }
}
