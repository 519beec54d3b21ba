// src/gui/pages/city_skill.rs
use crate::{analysis::Analysis, config::PageKind, table::Table};
use super::Page;

pub struct CitySkillPage;
pub static PAGE: CitySkillPage = CitySkillPage;

impl Page for CitySkillPage {
    fn title(&self) -> &'static str { "City × Skill" }
    fn kind(&self) -> PageKind { PageKind::CitySkill }

    fn table(&self, analysis: &Analysis) -> Table {
        analysis.city_skill_matrix().to_table("location")
    }

    fn default_headers(&self) -> &'static [&'static str] { &["location"] }
    fn numeric_from(&self) -> Option<usize> { Some(1) }
}
