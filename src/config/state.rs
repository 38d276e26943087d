// src/config/state.rs
use std::path::PathBuf;

use super::options::AppOptions;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Seasons,
    Predictions,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Seasons, Tab::Predictions];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Seasons => "Seasons",
            Tab::Predictions => "Predictions",
        }
    }
}

/// What the Predictions tab is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PredictView {
    #[default]
    Games,
    Standings,
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub tab: Tab,
    pub predict_view: PredictView,

    pub window_w: u32,
    pub window_h: u32,

    /// Output dir as typed; applied to `options.download.out_dir` on Download.
    pub out_dir_text: String,
    /// Prediction date as typed (YYYY-MM-DD).
    pub date_text: String,

    /// Stored season file picked for viewing.
    pub viewed_season: Option<(u16, PathBuf)>,
}

impl GuiState {
    pub fn new(options: &AppOptions) -> Self {
        Self {
            tab: Tab::default(),
            predict_view: PredictView::default(),
            window_w: 1000,
            window_h: 680,
            out_dir_text: options.download.out_dir.to_string_lossy().into_owned(),
            date_text: options.predict.date.to_string(),
            viewed_season: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl Default for AppState {
    fn default() -> Self {
        let options = AppOptions::default();
        let gui = GuiState::new(&options);
        Self { options, gui }
    }
}
