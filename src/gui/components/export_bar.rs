// src/gui/components/export_bar.rs

use eframe::egui;
use crate::{gui::app::App, config::ExportFormat};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    {
        let export = &mut app.state.options.export;

        ui.horizontal(|ui| {
            ui.label("Format:");
            let before = export.format;
            ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
            ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");
            if export.format != before {
                tracing::debug!(format = ?export.format, "export format changed");
            }

            ui.separator();
            ui.checkbox(&mut export.tables, "Tables");
            ui.checkbox(&mut export.workbook, "Workbook");
            ui.checkbox(&mut export.heatmaps, "Heatmaps");
            ui.checkbox(&mut export.reports, "Reports");
        });
    }

    ui.horizontal(|ui| {
        ui.label("Output dir:");
        ui.add(egui::TextEdit::singleline(&mut app.state.gui.out_dir).desired_width(320.0));

        let has_data = app.analysis.is_some();
        if ui.add_enabled(has_data, egui::Button::new("Copy")).clicked() {
            app.copy(ui.ctx());
        }
        if ui.add_enabled(has_data, egui::Button::new("Export")).clicked() {
            app.export();
        }
    });
}
