// src/gui/pages/heatmap.rs
use eframe::egui;

use crate::{analysis::Analysis, config::PageKind, gui::app::App, table::Table};
use crate::gui::components::heatmap_view;
use super::Page;

/// Cities × overall top skills, painted.
pub struct HeatmapPage;
pub static PAGE: HeatmapPage = HeatmapPage;

impl Page for HeatmapPage {
    fn title(&self) -> &'static str { "Heatmap" }
    fn kind(&self) -> PageKind { PageKind::Heatmap }

    fn table(&self, analysis: &Analysis) -> Table {
        analysis.overall_chart().to_table("location")
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        match &app.chart {
            Some(chart) => heatmap_view::draw(ui, chart),
            None => { ui.label("Analyze a postings file to see the heatmap."); }
        }
    }
}
