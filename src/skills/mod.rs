// src/skills/mod.rs

pub mod normalize;
pub mod parse;

pub use normalize::{SkillNormalizer, SkillVocabulary, normalize};
pub use parse::{parse_skills, split_skill_text};
