// src/cli.rs
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr, eyre};
use reqwest::Url;

use crate::config::consts::{BASE_URL, season_index_url};
use crate::config::options::{AppOptions, DownloadOptions, PredictOptions, ScrapeOptions};
use crate::core::net::HttpClient;
use crate::data::predictions_to_dataset;
use crate::predict::{ModelParams, PredictionEngine};
use crate::scrape::{SeasonOutcome, aggregate_season, discover_month_links, download_range};
use crate::store::DataSet;
use crate::teams::{ResolverMode, TeamResolver};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Basketball-Reference schedule scraper and game predictor", long_about = None)]
struct Cli {
    /// Site root every page URL is built from
    #[arg(long, global = true, default_value = BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Download a range of seasons to CSV (plus a combined file if all are complete)
    Download {
        /// First season (second calendar year, e.g. 2021 for 2020-21)
        #[arg(long)]
        start: Option<u16>,
        /// Last season, inclusive
        #[arg(long)]
        end: Option<u16>,
        /// Output directory
        #[arg(short, long)]
        out: Option<PathBuf>,
        #[arg(long, default_value = "merged")]
        resolver: ResolverMode,
    },
    /// Scrape one season and summarize it without writing anything
    Season {
        season: u16,
        #[arg(long, default_value = "merged")]
        resolver: ResolverMode,
    },
    /// List the month links of a season index page
    Months { season: u16 },
    /// Win probabilities and moneylines for one day's games
    Predict {
        /// Defaults to the season the date falls in
        #[arg(long)]
        season: Option<u16>,
        /// YYYY-MM-DD, defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Model JSON to use instead of the bundled one
        #[arg(long)]
        model: Option<PathBuf>,
        /// Also print team W/L
        #[arg(long)]
        standings: bool,
    },
    /// Print the team name → code mapping
    Teams {
        #[arg(long, default_value = "merged")]
        resolver: ResolverMode,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut opts = AppOptions::default();
    opts.scrape.base_url = cli.base_url;

    match cli.command {
        Command::Download { start, end, out, resolver } => {
            opts.scrape.resolver = resolver;
            if let Some(s) = start { opts.download.start = s; }
            if let Some(e) = end { opts.download.end = e; }
            if let Some(o) = out { opts.download.out_dir = o; }
            download(&opts.scrape, &opts.download)
        }
        Command::Season { season, resolver } => {
            opts.scrape.resolver = resolver;
            season_summary(&opts.scrape, season)
        }
        Command::Months { season } => months(&opts.scrape, season),
        Command::Predict { season, date, model, standings } => {
            if let Some(d) = date {
                opts.predict.date = d;
                opts.predict.season = crate::config::options::season_for_date(d);
            }
            if let Some(s) = season { opts.predict.season = s; }
            opts.predict.model_path = model;
            predict(&opts.scrape, &opts.predict, standings)
        }
        Command::Teams { resolver } => {
            for (name, code) in TeamResolver::new(resolver).mapping() {
                println!("{code},{name}");
            }
            Ok(())
        }
    }
}

fn download(scrape: &ScrapeOptions, download: &DownloadOptions) -> Result<()> {
    if download.start > download.end {
        return Err(eyre!("start season {} is after end season {}", download.start, download.end));
    }
    let client = HttpClient::new()?;
    let report = download_range(&client, scrape, download, None)?;
    for p in &report.saved {
        println!("Wrote {}", p.display());
    }
    match &report.combined {
        Some(p) => println!("Wrote {}", p.display()),
        None => println!("Bad seasons {:?}; no combined file", report.bad_seasons),
    }
    Ok(())
}

fn season_summary(scrape: &ScrapeOptions, season: u16) -> Result<()> {
    let client = HttpClient::new()?;
    match aggregate_season(&client, scrape, season)? {
        SeasonOutcome::Unreachable { status } => {
            println!("Season {season}: index page unreachable (status {status})");
        }
        SeasonOutcome::Collected { dataset, missing_months } => {
            let games = dataset.as_ref().map(|d| d.len()).unwrap_or(0);
            println!("Season {season}: {games} games, missing months: {missing_months}");
        }
    }
    Ok(())
}

fn months(scrape: &ScrapeOptions, season: u16) -> Result<()> {
    let client = HttpClient::new()?;
    let base = Url::parse(&scrape.base_url).wrap_err("bad --base-url")?;
    let index = Url::parse(&season_index_url(&scrape.base_url, season))?;
    let links = discover_month_links(&client, &index, &base)?;
    let table = DataSet {
        headers: Some(vec![s!("Month"), s!("URL"), s!("Reachable")]),
        rows: links.iter()
            .map(|l| vec![l.month.clone(), l.url.to_string(), l.reachable.to_string()])
            .collect(),
    };
    print_table(&table);
    Ok(())
}

fn predict(scrape: &ScrapeOptions, opts: &PredictOptions, standings: bool) -> Result<()> {
    let model = ModelParams::load(opts.model_path.as_deref()).wrap_err("loading model")?;
    let client = HttpClient::new()?;
    let engine = PredictionEngine::build(&client, scrape, model, opts.season, opts.date, None)?;

    if standings {
        let table = DataSet {
            headers: Some(vec![s!("Tm"), s!("W"), s!("L")]),
            rows: engine.standings().iter()
                .map(|r| vec![s!(r.team.as_str()), r.wins.to_string(), r.losses.to_string()])
                .collect(),
        };
        print_table(&table);
        println!();
    }

    let preds = engine.predict();
    if preds.is_empty() {
        println!("No games {}", opts.date);
        return Ok(());
    }
    print_table(&predictions_to_dataset(&preds));
    Ok(())
}

/// Left-aligned columns, two spaces apart.
fn print_table(ds: &DataSet) {
    let cols = ds.header_count().max(ds.rows.iter().map(|r| r.len()).max().unwrap_or(0));
    let mut widths = vec![0usize; cols];
    let all = ds.headers.iter().chain(ds.rows.iter());
    for row in all.clone() {
        for (w, c) in widths.iter_mut().zip(row) {
            *w = (*w).max(c.chars().count());
        }
    }
    for row in all {
        let line: Vec<String> = row.iter()
            .zip(&widths)
            .map(|(c, &w)| format!("{c:<w$}"))
            .collect();
        println!("{}", line.join("  ").trim_end());
    }
}
