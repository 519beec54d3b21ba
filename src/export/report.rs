// src/export/report.rs
use std::{
    fmt::Write as _,
    fs,
    path::Path,
};

use crate::analysis::RecommendationEntry;
use crate::csv::write_table_to_path;
use crate::error::Result;
use crate::table::Table;

/// `recommendations_by_city.csv`: city, focus, hot, note.
pub fn write_recommendations_csv(path: &Path, entries: &[RecommendationEntry]) -> Result<()> {
    let table = Table::new(&RecommendationEntry::HEADERS)
        .with_rows(entries.iter().map(RecommendationEntry::to_row).collect());
    write_table_to_path(path, &table, b',')
}

/// One block per city:
///
/// ```text
/// - Austin
///   Focus: SQL, Python
///   Hot vs Global: SQL
///
/// ```
pub fn format_report(entries: &[RecommendationEntry]) -> String {
    let mut out = String::new();
    for e in entries {
        let _ = write!(
            out,
            "- {}\n  Focus: {}\n  Hot vs Global: {}\n\n",
            e.city,
            e.focus_joined(),
            e.hot_joined()
        );
    }
    out
}

pub fn write_recommendations_txt(path: &Path, entries: &[RecommendationEntry]) -> Result<()> {
    fs::write(path, format_report(entries))?;
    Ok(())
}
