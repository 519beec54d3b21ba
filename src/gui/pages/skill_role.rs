// src/gui/pages/skill_role.rs
use crate::{analysis::Analysis, config::PageKind, table::Table};
use super::Page;

pub struct SkillRolePage;
pub static PAGE: SkillRolePage = SkillRolePage;

impl Page for SkillRolePage {
    fn title(&self) -> &'static str { "Skill × Role" }
    fn kind(&self) -> PageKind { PageKind::SkillRole }

    fn table(&self, analysis: &Analysis) -> Table {
        analysis.skill_role_matrix().to_table("skill")
    }

    fn default_headers(&self) -> &'static [&'static str] { &["skill"] }
    fn numeric_from(&self) -> Option<usize> { Some(1) }
}
