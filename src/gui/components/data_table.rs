// src/gui/components/data_table.rs
//
// Draws whatever grid the current tab produced. Purely a view.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::store::DataSet;

pub fn draw(ui: &mut egui::Ui, ds: &DataSet) {
    let cols = ds.header_count()
        .max(ds.rows.first().map(|r| r.len()).unwrap_or(0));
    if cols == 0 {
        ui.weak("Nothing to show yet.");
        return;
    }

    // Numbers centered, text left. Judged from the first row.
    let numeric: Vec<bool> = (0..cols)
        .map(|ci| {
            ds.rows.first()
                .and_then(|r| r.get(ci))
                .map(|c| c.trim_start_matches(['+', '-']).parse::<f64>().is_ok())
                .unwrap_or(false)
        })
        .collect();

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0);
    for _ in 0..cols {
        table = table.column(Column::initial(110.0).resizable(true).clip(true).at_least(20.0));
    }

    table
        .header(24.0, |mut header| {
            for ci in 0..cols {
                let text = ds.headers.as_ref()
                    .and_then(|h| h.get(ci).cloned())
                    .unwrap_or_else(|| format!("Col {}", ci + 1));
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    ui.add(egui::Label::new(RichText::new(text).strong()).selectable(false));
                });
            }
        })
        .body(|body| {
            body.rows(20.0, ds.rows.len(), |mut row| {
                let Some(data) = ds.rows.get(row.index()) else { return };
                for ci in 0..cols {
                    let cell = data.get(ci).map(|s| s.as_str()).unwrap_or("");
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        if numeric[ci] {
                            ui.centered_and_justified(|ui| { ui.label(cell); });
                        } else {
                            ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(cell); });
                        }
                    });
                }
            });
        });
}
