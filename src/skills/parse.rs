// src/skills/parse.rs
use once_cell::sync::Lazy;
use regex::Regex;

use super::SkillNormalizer;
use crate::model::RawSkills;

static LIST_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[;,|\n]+").expect("static regex"));

/// Split a free-text skills cell on `; , |` and newlines; trimmed, no empties.
pub fn split_skill_text(text: &str) -> Vec<&str> {
    LIST_SPLIT
        .split(text)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Normalized skills of one posting, in first-seen order. Duplicates are kept.
pub fn parse_skills(raw: &RawSkills, normalizer: &SkillNormalizer) -> Vec<String> {
    match raw {
        RawSkills::Missing => Vec::new(),
        RawSkills::Text(text) => normalize_tokens(split_skill_text(text), normalizer),
        RawSkills::List(items) => normalize_tokens(items.iter().map(String::as_str), normalizer),
    }
}

fn normalize_tokens<'a>(
    tokens: impl IntoIterator<Item = &'a str>,
    normalizer: &SkillNormalizer,
) -> Vec<String> {
    tokens
        .into_iter()
        .map(|t| normalizer.normalize(t))
        .filter(|skill| !skill.is_empty())
        .collect()
}
