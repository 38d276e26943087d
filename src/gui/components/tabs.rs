// src/gui/components/tabs.rs
//
// Top tabs. Switching tab swaps the table for what that tab last showed.

use eframe::egui;
use tracing::debug;

use crate::config::state::Tab;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let cur = app.state.gui.tab;
        for tab in Tab::ALL {
            let selected = tab == cur;
            if ui.selectable_label(selected, tab.title()).clicked() && !selected {
                debug!("UI: Tab switch {:?} → {:?}", cur, tab);
                app.state.gui.tab = tab;
                match tab {
                    Tab::Predictions => app.show_predict_view(),
                    Tab::Seasons => match app.state.gui.viewed_season.clone() {
                        Some((season, path)) => app.load_season(season, path),
                        None => app.view = Default::default(),
                    },
                }
            }
        }
    });
}
