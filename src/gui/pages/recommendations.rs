// src/gui/pages/recommendations.rs
use crate::{
    analysis::{Analysis, RecommendationEntry},
    config::PageKind,
    table::Table,
};
use super::Page;

pub struct RecommendationsPage;
pub static PAGE: RecommendationsPage = RecommendationsPage;

impl Page for RecommendationsPage {
    fn title(&self) -> &'static str { "Recommendations" }
    fn kind(&self) -> PageKind { PageKind::Recommendations }

    fn table(&self, analysis: &Analysis) -> Table {
        analysis.recommendations_table()
    }

    fn default_headers(&self) -> &'static [&'static str] {
        &RecommendationEntry::HEADERS
    }

    fn preferred_column_widths(&self) -> Option<&'static [f32]> {
        Some(&[140.0, 320.0, 280.0, 420.0])
    }
}
