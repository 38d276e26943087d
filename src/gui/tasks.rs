// src/gui/tasks.rs
//
// Long-running work off the UI thread. Each task owns copies of the options
// it needs and reports back through one channel message.

use std::{ sync::{ mpsc, Arc, Mutex }, thread };

use eframe::egui;
use tracing::info;

use super::progress::GuiProgress;
use crate::config::options::{DownloadOptions, PredictOptions, ScrapeOptions};
use crate::core::net::HttpClient;
use crate::data::{PredictionRecord, TeamRecord};
use crate::error::Result;
use crate::predict::{ModelParams, PredictionEngine};
use crate::scrape::{DownloadReport, download_range};

pub enum TaskResult {
    Downloaded(Result<DownloadReport>),
    Predicted(Result<(Vec<PredictionRecord>, Vec<TeamRecord>)>),
}

pub fn spawn_download(
    scrape: ScrapeOptions,
    download: DownloadOptions,
    status: Arc<Mutex<String>>,
    ctx: egui::Context,
) -> mpsc::Receiver<TaskResult> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        info!("GUI: download {}-{} → {}", download.start, download.end, download.out_dir.display());
        let mut prog = GuiProgress::new(status, ctx.clone(), "season");
        let res = HttpClient::new()
            .and_then(|client| download_range(&client, &scrape, &download, Some(&mut prog)));
        let _ = tx.send(TaskResult::Downloaded(res));
        ctx.request_repaint();
    });
    rx
}

pub fn spawn_predict(
    scrape: ScrapeOptions,
    predict: PredictOptions,
    status: Arc<Mutex<String>>,
    ctx: egui::Context,
) -> mpsc::Receiver<TaskResult> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        info!("GUI: predict season={} date={}", predict.season, predict.date);
        let mut prog = GuiProgress::new(status, ctx.clone(), "team");
        let res = run_predict(&scrape, &predict, &mut prog);
        let _ = tx.send(TaskResult::Predicted(res));
        ctx.request_repaint();
    });
    rx
}

fn run_predict(
    scrape: &ScrapeOptions,
    predict: &PredictOptions,
    prog: &mut GuiProgress,
) -> Result<(Vec<PredictionRecord>, Vec<TeamRecord>)> {
    let model = ModelParams::load(predict.model_path.as_deref())?;
    let client = HttpClient::new()?;
    let engine = PredictionEngine::build(
        &client, scrape, model, predict.season, predict.date, Some(prog),
    )?;
    Ok((engine.predict(), engine.standings().to_vec()))
}
