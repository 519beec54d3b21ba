// src/analysis/tidy.rs
use std::collections::BTreeSet;

use crate::model::{PostingRecord, TidyRow};
use crate::skills::{SkillNormalizer, parse_skills};

/// One row per parsed skill. Location is trimmed; other fields are copied as-is.
/// Postings without skills contribute nothing.
pub fn expand(records: &[PostingRecord], normalizer: &SkillNormalizer) -> Vec<TidyRow> {
    let mut rows = Vec::with_capacity(records.len() * 4);
    for record in records {
        let location = s!(record.city());
        for skill in parse_skills(&record.raw_skills, normalizer) {
            rows.push(TidyRow {
                job_title: record.job_title.clone(),
                role: record.role.clone(),
                location: location.clone(),
                company: record.company.clone(),
                skill,
            });
        }
    }
    rows
}

/// Distinct trimmed locations of every posting (with or without skills), sorted.
pub fn distinct_cities(records: &[PostingRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.city())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(String::from)
        .collect()
}
