// src/gui/pages/mod.rs
use eframe::egui;

use crate::{
    analysis::Analysis,
    config::PageKind,
    gui::{app::App, components::data_table},
    table::Table,
};

pub mod city_skill;
pub mod heatmap;
pub mod recommendations;
pub mod skill_role;
pub mod tidy;

pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// The page's rows, used for display, Copy and the per-page export.
    fn table(&self, analysis: &Analysis) -> Table;

    /// Headers shown before anything is analyzed.
    fn default_headers(&self) -> &'static [&'static str] {
        &[]
    }

    /// Columns at or after this index hold counts (drawn centered).
    fn numeric_from(&self) -> Option<usize> { None }

    /// Optional: per-page column widths (in px-ish)
    fn preferred_column_widths(&self) -> Option<&'static [f32]> { None }

    /// Page body below the export bar. Default: the table.
    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        data_table::draw(ui, app);
    }
}
