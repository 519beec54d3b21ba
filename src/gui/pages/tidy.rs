// src/gui/pages/tidy.rs
use crate::{analysis::Analysis, config::PageKind, model::TidyRow, table::Table};
use super::Page;

pub struct TidyPage;
pub static PAGE: TidyPage = TidyPage;

impl Page for TidyPage {
    fn title(&self) -> &'static str { "Tidy postings" }
    fn kind(&self) -> PageKind { PageKind::Tidy }

    fn table(&self, analysis: &Analysis) -> Table {
        analysis.tidy_table()
    }

    fn default_headers(&self) -> &'static [&'static str] {
        &TidyRow::HEADERS
    }

    fn preferred_column_widths(&self) -> Option<&'static [f32]> {
        Some(&[220.0, 130.0, 140.0, 160.0, 140.0])
    }
}
