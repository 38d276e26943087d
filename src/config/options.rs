// src/config/options.rs
use std::path::PathBuf;

use chrono::{Datelike, Local, NaiveDate};

use super::consts::*;
use crate::teams::ResolverMode;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub download: DownloadOptions,
    pub predict: PredictOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub base_url: String,
    pub resolver: ResolverMode,
    /// Wait after each page fetch. Zero disables pausing and jitter.
    pub pause_ms: u64,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            resolver: RESOLVER_MODE,
            pause_ms: REQUEST_PAUSE_MS,
        }
    }
}

impl ScrapeOptions {
    /// Pause for the `n`th request: base wait plus a deterministic 0..JITTER_MS spread.
    pub fn pause_for(&self, n: usize) -> std::time::Duration {
        if self.pause_ms == 0 {
            return std::time::Duration::ZERO;
        }
        let jitter = (n as u64 * 37) % JITTER_MS;
        std::time::Duration::from_millis(self.pause_ms + jitter)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadOptions {
    /// First season label, inclusive.
    pub start: u16,
    /// Last season label, inclusive.
    pub end: u16,
    pub out_dir: PathBuf,
}

impl Default for DownloadOptions {
    fn default() -> Self {
        // The range the bundled model was fitted on (2001-02 .. 2020-21).
        Self {
            start: 2002,
            end: 2021,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR).join(DEFAULT_SEASONS_SUBDIR),
        }
    }
}

impl DownloadOptions {
    pub fn seasons(&self) -> std::ops::RangeInclusive<u16> {
        self.start..=self.end
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PredictOptions {
    pub season: u16,
    pub date: NaiveDate,
    /// Overrides the bundled model asset when set.
    pub model_path: Option<PathBuf>,
}

impl Default for PredictOptions {
    fn default() -> Self {
        let today = Local::now().date_naive();
        Self {
            season: season_for_date(today),
            date: today,
            model_path: None,
        }
    }
}

/// Season label a calendar date belongs to. Seasons tip off in the autumn,
/// so anything from August on counts toward next year's label.
pub fn season_for_date(date: NaiveDate) -> u16 {
    let year = date.year() as u16;
    if date.month() >= 8 { year + 1 } else { year }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_label_rolls_over_in_autumn() {
        let d = |y, m, dd| NaiveDate::from_ymd_opt(y, m, dd).unwrap();
        assert_eq!(season_for_date(d(2020, 12, 22)), 2021);
        assert_eq!(season_for_date(d(2021, 4, 30)), 2021);
        assert_eq!(season_for_date(d(2021, 7, 20)), 2021);
        assert_eq!(season_for_date(d(2021, 10, 19)), 2022);
    }

    #[test]
    fn zero_pause_disables_jitter() {
        let opts = ScrapeOptions { pause_ms: 0, ..Default::default() };
        assert_eq!(opts.pause_for(5), std::time::Duration::ZERO);
        let polite = ScrapeOptions::default();
        assert!(polite.pause_for(5) >= std::time::Duration::from_millis(REQUEST_PAUSE_MS));
    }

    #[test]
    fn download_range_is_inclusive() {
        let opts = DownloadOptions { start: 2019, end: 2021, ..Default::default() };
        assert_eq!(opts.seasons().collect::<Vec<_>>(), vec![2019, 2020, 2021]);
    }
}
