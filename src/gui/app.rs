// src/gui/app.rs
use std::{
    error::Error,
    path::{Path, PathBuf},
    sync::{mpsc, Arc, Mutex},
};

use eframe::egui;
use tracing::{info, warn};

use super::{components, tasks::{self, TaskResult}};
use crate::{
    config::state::{AppState, PredictView},
    data::{PredictionRecord, TeamRecord, predictions_to_dataset},
    store::{self, DataSet},
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Basketball-Reference Scraper",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // table currently on screen
    pub view: DataSet,

    // last prediction run, kept so the view toggle doesn't refetch
    pub predictions: Vec<PredictionRecord>,
    pub standings: Vec<TeamRecord>,

    // season files found in the output dir
    pub stored: Vec<(u16, PathBuf)>,

    // status/progress (workers write here)
    pub status: Arc<Mutex<String>>,
    pub task: Option<mpsc::Receiver<TaskResult>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let stored = list_stored_seasons(&state.options.download.out_dir);
        info!("Init: {} stored season file(s) in {}", stored.len(), state.options.download.out_dir.display());
        Self {
            state,
            view: DataSet::default(),
            predictions: Vec::new(),
            standings: Vec::new(),
            stored,
            status: Arc::new(Mutex::new(s!("Idle"))),
            task: None,
        }
    }

    #[inline]
    pub fn running(&self) -> bool { self.task.is_some() }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn start_download(&mut self, ctx: &egui::Context) {
        self.state.options.download.out_dir = PathBuf::from(self.state.gui.out_dir_text.trim());
        let download = self.state.options.download.clone();
        if download.start > download.end {
            self.status(format!(
                "Start season {} is after end season {}", download.start, download.end
            ));
            return;
        }
        self.task = Some(tasks::spawn_download(
            self.state.options.scrape.clone(),
            download,
            self.status.clone(),
            ctx.clone(),
        ));
    }

    pub fn start_predict(&mut self, ctx: &egui::Context) {
        let text = self.state.gui.date_text.trim();
        match chrono::NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            Ok(d) => self.state.options.predict.date = d,
            Err(_) => {
                self.status(format!("Not a date (YYYY-MM-DD): {text}"));
                return;
            }
        }
        let opts = &self.state.options;
        self.task = Some(tasks::spawn_predict(
            opts.scrape.clone(),
            opts.predict.clone(),
            self.status.clone(),
            ctx.clone(),
        ));
    }

    pub fn load_season(&mut self, season: u16, path: PathBuf) {
        match store::load_table(&path) {
            Ok(ds) => {
                self.status(format!("Season {season}: {} games", ds.row_count()));
                self.view = ds;
                self.state.gui.viewed_season = Some((season, path));
            }
            Err(e) => {
                warn!("Load {} failed: {e}", path.display());
                self.status(format!("Error: {e}"));
            }
        }
    }

    pub fn refresh_stored(&mut self) {
        self.stored = list_stored_seasons(Path::new(self.state.gui.out_dir_text.trim()));
    }

    /// Rebuild the prediction-tab table from the last run.
    pub fn show_predict_view(&mut self) {
        self.view = match self.state.gui.predict_view {
            PredictView::Games => predictions_to_dataset(&self.predictions),
            PredictView::Standings => DataSet {
                headers: Some(vec![s!("Tm"), s!("W"), s!("L")]),
                rows: self.standings.iter()
                    .map(|r| vec![s!(r.team.as_str()), r.wins.to_string(), r.losses.to_string()])
                    .collect(),
            },
        };
    }

    fn poll_task(&mut self) {
        let Some(rx) = &self.task else { return };
        let msg = match rx.try_recv() {
            Ok(m) => m,
            Err(mpsc::TryRecvError::Empty) => return,
            Err(mpsc::TryRecvError::Disconnected) => {
                self.task = None;
                self.status("Worker stopped unexpectedly");
                return;
            }
        };
        self.task = None;

        match msg {
            TaskResult::Downloaded(Ok(report)) => {
                self.refresh_stored();
                let tail = match &report.combined {
                    Some(p) => format!("combined → {}", p.display()),
                    None => format!("bad seasons {:?}, no combined file", report.bad_seasons),
                };
                self.status(format!("Saved {} season file(s); {tail}", report.saved.len()));
            }
            TaskResult::Predicted(Ok((preds, standings))) => {
                let n = preds.len();
                self.predictions = preds;
                self.standings = standings;
                self.show_predict_view();
                self.status(if n == 0 {
                    format!("No games {}", self.state.options.predict.date)
                } else {
                    format!("{n} game(s) predicted")
                });
            }
            TaskResult::Downloaded(Err(e)) | TaskResult::Predicted(Err(e)) => {
                warn!("Task failed: {e}");
                self.status(format!("Error: {e}"));
            }
        }
    }
}

/// `NBA_{season}_games.csv` files in `dir`, oldest first.
pub fn list_stored_seasons(dir: &Path) -> Vec<(u16, PathBuf)> {
    let Ok(entries) = std::fs::read_dir(dir) else { return Vec::new() };
    let mut out: Vec<(u16, PathBuf)> = entries
        .filter_map(|e| e.ok())
        .filter_map(|e| {
            let name = e.file_name().to_string_lossy().into_owned();
            let season = name.strip_prefix("NBA_")?.strip_suffix("_games.csv")?.parse().ok()?;
            Some((season, e.path()))
        })
        .collect();
    out.sort();
    out
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_task();

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.running() {
                    ui.add(egui::Spinner::new());
                }
                ui.label(self.status_text());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::tabs::draw(ui, self);

            ui.separator();

            components::controls::draw(ui, self);

            ui.separator();

            components::data_table::draw(ui, &self.view);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_single_season_files_are_listed() {
        let mut dir = std::env::temp_dir();
        dir.push("br_gui_stored");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        for f in ["NBA_2021_games.csv", "NBA_2003_games.csv", "NBA_2002-2021_games.csv", "notes.txt"] {
            std::fs::write(dir.join(f), "").unwrap();
        }
        let seasons: Vec<u16> = list_stored_seasons(&dir).into_iter().map(|(s, _)| s).collect();
        assert_eq!(seasons, vec![2003, 2021]);
    }
}
