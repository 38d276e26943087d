// src/gui/components/controls.rs
//
// Per-tab inputs and action buttons. Buttons are disabled while a task runs.

use eframe::egui;

use crate::config::state::{PredictView, Tab};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    match app.state.gui.tab {
        Tab::Seasons => seasons(ui, app),
        Tab::Predictions => predictions(ui, app),
    }
}

fn seasons(ui: &mut egui::Ui, app: &mut App) {
    let idle = !app.running();

    ui.horizontal(|ui| {
        let dl = &mut app.state.options.download;
        ui.label("Seasons:");
        ui.add(egui::DragValue::new(&mut dl.start).range(1950..=2100));
        ui.label("to");
        ui.add(egui::DragValue::new(&mut dl.end).range(1950..=2100));

        ui.label("Output:");
        ui.add(egui::TextEdit::singleline(&mut app.state.gui.out_dir_text)
            .font(egui::TextStyle::Monospace)
            .desired_width(220.0));

        if ui.add_enabled(idle, egui::Button::new("Download")).clicked() {
            app.start_download(ui.ctx());
        }
    });

    ui.horizontal(|ui| {
        ui.label("View season:");
        let current = app.state.gui.viewed_season.as_ref().map(|(s, _)| *s);
        let mut picked: Option<(u16, std::path::PathBuf)> = None;
        egui::ComboBox::from_id_salt("stored_season")
            .selected_text(current.map(|s| s.to_string()).unwrap_or_else(|| s!("(none)")))
            .show_ui(ui, |ui| {
                for (season, path) in &app.stored {
                    if ui.selectable_label(current == Some(*season), season.to_string()).clicked() {
                        picked = Some((*season, path.clone()));
                    }
                }
            });
        if ui.button("⟳").on_hover_text("Rescan output folder").clicked() {
            app.refresh_stored();
        }
        if let Some((season, path)) = picked {
            app.load_season(season, path);
        }
    });
}

fn predictions(ui: &mut egui::Ui, app: &mut App) {
    let idle = !app.running();

    ui.horizontal(|ui| {
        ui.label("Season:");
        ui.add(egui::DragValue::new(&mut app.state.options.predict.season).range(1950..=2100));
        ui.label("Date:");
        ui.add(egui::TextEdit::singleline(&mut app.state.gui.date_text)
            .font(egui::TextStyle::Monospace)
            .desired_width(96.0));

        if ui.add_enabled(idle, egui::Button::new("Predict")).clicked() {
            app.start_predict(ui.ctx());
        }
    });

    ui.horizontal(|ui| {
        let before = app.state.gui.predict_view;
        ui.selectable_value(&mut app.state.gui.predict_view, PredictView::Games, "Games");
        ui.selectable_value(&mut app.state.gui.predict_view, PredictView::Standings, "Standings");
        if app.state.gui.predict_view != before {
            app.show_predict_view();
        }
    });
}
