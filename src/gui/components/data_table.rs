// src/gui/components/data_table.rs
//
// Draws the live table for the current page. Purely a view.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let page = app.current_page();
    let table = &app.table;
    let cols = table.width();
    if cols == 0 {
        ui.label("No data");
        return;
    }

    let widths: Vec<f32> = match page.preferred_column_widths() {
        Some(ws) if ws.len() == cols => ws.to_vec(),
        _ => (0..cols).map(|ci| if ci == 0 { 180.0 } else { 90.0 }).collect(),
    };
    let numeric_from = page.numeric_from().unwrap_or(usize::MAX);

    let avail_h = ui.available_height();
    egui::ScrollArea::new([true, false])
        .id_salt("inner_table_hscroll")
        .min_scrolled_height(avail_h)
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut builder = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .id_salt(("table_state", page.kind(), cols));
            for w in &widths {
                builder = builder.column(Column::initial(*w).resizable(true).clip(true).at_least(20.0));
            }

            builder
                .header(24.0, |mut header| {
                    for h in &table.headers {
                        header.col(|ui| {
                            ui.strong(h);
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, table.rows.len(), |mut row| {
                        let data = &table.rows[row.index()];
                        for ci in 0..cols {
                            let cell = data.get(ci).map(String::as_str).unwrap_or("");
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                let text = RichText::new(cell);
                                if ci >= numeric_from {
                                    let text = if cell == "0" { text.weak() } else { text };
                                    ui.centered_and_justified(|ui| { ui.label(text); });
                                } else {
                                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(text); });
                                }
                            });
                        }
                    });
                });
        });
}
