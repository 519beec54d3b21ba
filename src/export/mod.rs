// src/export/mod.rs

pub mod heatmap;
pub mod report;
pub mod workbook;

use std::collections::HashMap;
use std::path::PathBuf;

use crate::analysis::Analysis;
use crate::config::ExportOptions;
use crate::config::consts::*;
use crate::csv::write_table_to_path;
use crate::error::Result;
use crate::file::{city_heatmap_stem, ensure_directory, resolve_unique_path};
use crate::progress::{NullProgress, Progress};

/// Write every enabled output into `opts.out_dir`. Returns the files written, in order.
pub fn write_all(
    analysis: &Analysis,
    opts: &ExportOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<Vec<PathBuf>> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };
    let dir = &opts.out_dir;
    ensure_directory(dir)?;

    let cities_with_skills: Vec<&String> = analysis
        .cities
        .iter()
        .filter(|c| analysis.aggregates.count_by_location_skill().row(c).is_some())
        .collect();

    let mut total = 0;
    if opts.tables { total += 3; }
    if opts.workbook { total += 1; }
    if opts.heatmaps { total += 1 + cities_with_skills.len(); }
    if opts.reports { total += 2; }
    progress.begin(total);

    let mut written = Vec::with_capacity(total);

    if opts.tables {
        let delim = opts.format.delim();
        for (stem, table) in [
            (TIDY_STEM, analysis.tidy_table()),
            (CITY_SKILL_STEM, analysis.city_skill_matrix().to_table("location")),
            (SKILL_ROLE_STEM, analysis.skill_role_matrix().to_table("skill")),
        ] {
            let path = opts.table_path(stem);
            write_table_to_path(&path, &table, delim)?;
            done(&mut written, progress, path);
        }
    }

    if opts.workbook {
        let path = dir.join(WORKBOOK_FILE);
        workbook::write_workbook(&path, analysis)?;
        done(&mut written, progress, path);
    }

    if opts.heatmaps {
        heatmap::register_font(opts.font.as_deref());

        let overall = analysis.overall_chart();
        if overall.is_empty() {
            tracing::warn!("no skills to chart; overall heatmap skipped");
        } else {
            let path = dir.join(HEATMAP_OVERALL_FILE);
            let title = format!("Top {} skills by city", overall.col_labels.len());
            heatmap::save(&overall, &title, &path)?;
            done(&mut written, progress, path);
        }

        let mut seen = HashMap::new();
        for city in cities_with_skills {
            let Some(chart) = analysis.city_chart(city) else { continue };
            let path = resolve_unique_path(dir, &city_heatmap_stem(city), &mut seen, "png");
            let title = format!("Top {} skills in {}", chart.row_labels.len(), city);
            heatmap::save(&chart, &title, &path)?;
            done(&mut written, progress, path);
        }
    }

    if opts.reports {
        let path = dir.join(RECOMMENDATIONS_CSV);
        report::write_recommendations_csv(&path, &analysis.recommendations)?;
        done(&mut written, progress, path);

        let path = dir.join(RECOMMENDATIONS_TXT);
        report::write_recommendations_txt(&path, &analysis.recommendations)?;
        done(&mut written, progress, path);
    }

    progress.finish();
    tracing::info!(dir = %dir.display(), files = written.len(), "exports written");
    Ok(written)
}

fn done(written: &mut Vec<PathBuf>, progress: &mut dyn Progress, path: PathBuf) {
    progress.item_done(&path.display().to_string());
    written.push(path);
}
