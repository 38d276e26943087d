// tests/season_pipeline.rs
//
// A captured-shape season: index page with a stray text node in the filter
// block, a regular month, a month with a playoffs banner, one dead link.

use std::collections::HashMap;

use br_scrape::config::options::ScrapeOptions;
use br_scrape::core::net::Fetch;
use br_scrape::scrape::{SeasonOutcome, aggregate_season};
use br_scrape::store::{load_table, save_season};
use br_scrape::teams::ResolverMode;
use br_scrape::{Error, Result};
use reqwest::Url;

const BASE: &str = "http://br.test";

struct MemFetch(HashMap<String, String>);

impl Fetch for MemFetch {
    fn get_text(&self, url: &Url) -> Result<String> {
        self.0.get(url.as_str()).cloned()
            .ok_or_else(|| Error::Status { url: url.to_string(), status: 404 })
    }
    fn probe(&self, url: &Url) -> Result<u16> {
        Ok(if self.0.contains_key(url.as_str()) { 200 } else { 404 })
    }
}

const INDEX: &str = r#"<html><body>
<div class="filter">
  <div class=""><a href="/leagues/NBA_2021_games-april.html">April</a></div> stray
  <div class=""><a href="/leagues/NBA_2021_games-may.html">May</a></div>
  <div class=""><a href="/leagues/NBA_2021_games-june">June</a></div>
</div>
</body></html>"#;

const APRIL: &str = r#"<table id="schedule">
<thead><tr><th>Date</th><th>Start (ET)</th><th>Visitor/Neutral</th><th>PTS</th>
<th>Home/Neutral</th><th>PTS</th><th></th><th></th><th>Attend.</th><th>Notes</th></tr></thead>
<tbody>
<tr><th>Thu, Apr 1, 2021</th><td>7:30p</td><td>Charlotte Hornets</td><td>102</td><td>Cleveland Cavaliers</td><td>90</td><td>Box Score</td><td></td><td>300</td><td></td></tr>
<tr><th>Thu, Apr 1, 2021</th><td>8:00p</td><td>New Orleans Pelicans</td><td>108</td><td>Brooklyn Nets</td><td>139</td><td>Box Score</td><td></td><td>1,773</td><td></td></tr>
</tbody></table>"#;

const MAY: &str = r#"<table id="schedule">
<thead><tr><th>Date</th><th>Start (ET)</th><th>Visitor/Neutral</th><th>PTS</th>
<th>Home/Neutral</th><th>PTS</th><th></th><th></th><th>Attend.</th><th>Notes</th></tr></thead>
<tbody>
<tr><th>Sun, May 16, 2021</th><td>8:00p</td><td>Denver Nuggets</td><td>114</td><td>Portland Trail Blazers</td><td>132</td><td>Box Score</td><td></td><td>1,939</td><td></td></tr>
<tr class="thead"><th colspan="10">Playoffs</th></tr>
<tr><th>Sat, May 22, 2021</th><td>10:30p</td><td>Portland Trail Blazers</td><td>123</td><td>Denver Nuggets</td><td>109</td><td>Box Score</td><td></td><td>7,283</td><td></td></tr>
</tbody></table>"#;

fn fetch() -> MemFetch {
    let mut pages = HashMap::new();
    pages.insert(format!("{BASE}/leagues/NBA_2021_games.html"), INDEX.to_string());
    pages.insert(format!("{BASE}/leagues/NBA_2021_games-april.html"), APRIL.to_string());
    pages.insert(format!("{BASE}/leagues/NBA_2021_games-may.html"), MAY.to_string());
    MemFetch(pages)
}

fn opts(resolver: ResolverMode) -> ScrapeOptions {
    ScrapeOptions { base_url: BASE.to_string(), resolver, pause_ms: 0 }
}

#[test]
fn distinct_mode_drops_playoffs_and_flags_dead_month() {
    let out = aggregate_season(&fetch(), &opts(ResolverMode::Distinct), 2021).unwrap();
    assert_eq!(out.missing_months(), Some(true));

    let ds = out.dataset().unwrap();
    let rows: Vec<(String, &str, &str, bool)> = ds.games().iter()
        .map(|g| (g.date.to_string(), g.visitor.as_str(), g.home.as_str(), g.visitor_won))
        .collect();
    assert_eq!(rows, vec![
        ("2021-04-01".to_string(), "CHO", "CLE", true),
        ("2021-04-01".to_string(), "NOP", "BRK", false),
        ("2021-05-16".to_string(), "DEN", "POR", false),
        ("2021-05-22".to_string(), "POR", "DEN", true),
    ]);
}

#[test]
fn merged_mode_rejects_the_month_with_the_banner() {
    let out = aggregate_season(&fetch(), &opts(ResolverMode::Merged), 2021).unwrap();
    let SeasonOutcome::Collected { dataset: Some(ds), missing_months: true } = out else {
        panic!("expected a partial season, got {out:?}");
    };
    // Only April survives; Charlotte collapses onto CHA.
    assert_eq!(ds.len(), 2);
    assert_eq!(ds.games()[0].visitor.as_str(), "CHA");
}

#[test]
fn stored_season_reads_back() {
    let out = aggregate_season(&fetch(), &opts(ResolverMode::Distinct), 2021).unwrap();
    let ds = out.into_dataset().unwrap();

    let mut dir = std::env::temp_dir();
    dir.push("br_pipeline_store");
    let _ = std::fs::remove_dir_all(&dir);

    let path = save_season(&dir, &ds).unwrap();
    let table = load_table(&path).unwrap();
    assert_eq!(
        table.headers,
        Some(vec!["Date".into(), "Visitor/Neutral".into(), "Home/Neutral".into(), "VisitorWin".into()])
    );
    assert_eq!(table.rows[3], vec!["2021-05-22", "POR", "DEN", "true"]);
}
