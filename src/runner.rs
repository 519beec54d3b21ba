// src/runner.rs
use std::path::{Path, PathBuf};

use crate::{
    analysis::{self, Analysis},
    collect::{self, CollectSummary},
    config::AppOptions,
    error::Result,
    export,
    progress::Progress,
    skills::SkillNormalizer,
};

/// Summary of what was produced.
#[derive(Clone, Debug, Default)]
pub struct RunSummary {
    pub out_dir: PathBuf,
    pub files_written: Vec<PathBuf>,
    pub postings: usize,
    pub tidy_rows: usize,
    pub cities: usize,
    pub skills: usize,
}

/// Read postings and run the core pipeline. No files are written.
pub fn load_and_analyze(opts: &AppOptions, input: &Path) -> Result<Analysis> {
    let records = crate::csv::read_postings(input)?;
    let normalizer = SkillNormalizer::new(&opts.vocabulary);
    Ok(analysis::analyze(&records, &normalizer, &opts.ranking))
}

/// Write the enabled exports for an existing analysis.
pub fn export(
    analysis: &Analysis,
    opts: &AppOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let files_written = export::write_all(analysis, &opts.export, progress)?;
    Ok(RunSummary {
        out_dir: opts.export.out_dir.clone(),
        files_written,
        postings: analysis.postings,
        tidy_rows: analysis.tidy.len(),
        cities: analysis.cities.len(),
        skills: analysis.aggregates.skill_count(),
    })
}

/// Top-level analyze run: postings CSV in, every enabled export out.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn analyze_file(
    opts: &AppOptions,
    input: &Path,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Reading {}", input.display()));
    }
    let analysis = load_and_analyze(opts, input)?;
    if analysis.is_empty() {
        tracing::warn!(input = %input.display(), "no skills found; outputs will be empty");
    }
    export(&analysis, opts, progress)
}

/// Saved pages → postings CSV.
pub fn collect(opts: &AppOptions, progress: Option<&mut dyn Progress>) -> Result<CollectSummary> {
    collect::collect_to_csv(&opts.collect, progress)
}
