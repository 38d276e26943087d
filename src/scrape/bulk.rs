// src/scrape/bulk.rs
//
// Bulk Downloader: a range of seasons → one CSV each, plus a combined CSV
// only when every season in the range came back complete.

use std::path::PathBuf;

use tracing::{info, warn};

use super::season::aggregate_season;
use crate::config::options::{DownloadOptions, ScrapeOptions};
use crate::core::net::Fetch;
use crate::data::SeasonDataset;
use crate::error::Result;
use crate::progress::Progress;
use crate::store;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DownloadReport {
    /// Per-season files written, in season order.
    pub saved: Vec<PathBuf>,
    /// Seasons with no dataset or with missing months.
    pub bad_seasons: Vec<u16>,
    /// Written only when `bad_seasons` is empty.
    pub combined: Option<PathBuf>,
}

impl DownloadReport {
    pub fn is_complete(&self) -> bool { self.bad_seasons.is_empty() }
}

pub fn download_range(
    fetch: &dyn Fetch,
    scrape: &ScrapeOptions,
    download: &DownloadOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<DownloadReport> {
    let seasons: Vec<u16> = download.seasons().collect();
    if let Some(p) = progress.as_deref_mut() {
        p.begin(seasons.len());
        p.log(&format!("Downloading seasons {}-{}…", download.start, download.end));
    }

    let report = run_range(fetch, scrape, download, &seasons, progress.as_deref_mut());

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    report
}

fn run_range(
    fetch: &dyn Fetch,
    scrape: &ScrapeOptions,
    download: &DownloadOptions,
    seasons: &[u16],
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<DownloadReport> {
    let mut report = DownloadReport::default();
    let mut datasets: Vec<SeasonDataset> = Vec::with_capacity(seasons.len());

    for &season in seasons {
        let outcome = aggregate_season(fetch, scrape, season)?;
        let bad = outcome.is_bad();
        if bad {
            report.bad_seasons.push(season);
        }

        match outcome.into_dataset() {
            Some(ds) => {
                let path = store::save_season(&download.out_dir, &ds)?;
                info!("Season {season}: {} games → {}", ds.len(), path.display());
                report.saved.push(path);
                datasets.push(ds);
            }
            None => warn!("Season {season}: nothing to save"),
        }

        if let Some(p) = progress.as_deref_mut() {
            let label = season.to_string();
            if bad { p.item_failed(&label) } else { p.item_done(&label) }
        }
    }

    if report.is_complete() {
        let path = store::save_combined(&download.out_dir, download.start, download.end, &datasets)?;
        info!("Combined {} seasons → {}", datasets.len(), path.display());
        report.combined = Some(path);
    } else {
        warn!("Bad seasons {:?}; combined file not written", report.bad_seasons);
    }

    Ok(report)
}
