// src/collect.rs
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::CollectOptions;
use crate::error::{Result, SkillmapError};
use crate::file::ensure_parent;
use crate::model::PostingRecord;
use crate::progress::{NullProgress, Progress};
use crate::specs::job_cards::CardSpec;

/// Postings gathered from a source directory.
#[derive(Clone, Debug, Default)]
pub struct Collected {
    pub records: Vec<PostingRecord>,
    pub files_read: usize,
    /// Files that could not be read or parsed and were skipped.
    pub skipped: Vec<PathBuf>,
}

/// What one collection run produced.
#[derive(Clone, Debug, Default)]
pub struct CollectSummary {
    pub out: PathBuf,
    pub rows: usize,
    pub files_read: usize,
    /// Files that could not be read or parsed and were skipped.
    pub skipped: Vec<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SourceKind {
    Html,
    Csv,
}

fn source_kind(path: &Path) -> Option<SourceKind> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "html" | "htm" => Some(SourceKind::Html),
        "csv" => Some(SourceKind::Csv),
        _ => None,
    }
}

/// Source files of `dir`, by file name.
fn list_sources(dir: &Path) -> Result<Vec<(PathBuf, SourceKind)>> {
    if !dir.exists() {
        return Err(SkillmapError::MissingSource(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(SkillmapError::NotADirectory(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if let Some(kind) = source_kind(&path) {
            files.push((path, kind));
        }
    }
    files.sort_by(|a, b| a.0.file_name().cmp(&b.0.file_name()));
    Ok(files)
}

/// Postings from every saved page and CSV in `opts.source_dir`.
///
/// Files that cannot be read or parsed (HTML or CSV) are logged and skipped.
pub fn collect_dir(
    opts: &CollectOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<Collected> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    let spec = CardSpec::new(opts)?;
    let sources = list_sources(&opts.source_dir)?;
    progress.begin(sources.len());

    let mut out = Collected::default();
    for (path, kind) in sources {
        match kind {
            SourceKind::Html => match fs::read(&path) {
                Ok(bytes) => {
                    let cards = spec.parse_page(&String::from_utf8_lossy(&bytes));
                    tracing::debug!(file = %path.display(), cards = cards.len(), "page parsed");
                    out.records.extend(cards);
                    out.files_read += 1;
                }
                Err(e) => {
                    tracing::warn!(file = %path.display(), error = %e, "skipping unreadable page");
                    out.skipped.push(path.clone());
                }
            },
            SourceKind::Csv => match crate::csv::read_postings(&path) {
                Ok(rows) => {
                    out.records.extend(rows);
                    out.files_read += 1;
                }
                Err(e) => {
                    tracing::warn!(file = %path.display(), error = %e, "skipping malformed csv");
                    out.skipped.push(path.clone());
                }
            },
        }
        progress.item_done(&path.display().to_string());
    }

    progress.finish();
    Ok(out)
}

/// [`collect_dir`], then write `opts.out` with the five posting columns.
pub fn collect_to_csv(
    opts: &CollectOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<CollectSummary> {
    let collected = collect_dir(opts, progress)?;
    ensure_parent(&opts.out)?;
    crate::csv::write_postings(&opts.out, &collected.records)?;

    let rows = collected.records.len();
    tracing::info!(out = %opts.out.display(), rows, "collected postings written");
    Ok(CollectSummary {
        out: opts.out.clone(),
        rows,
        files_read: collected.files_read,
        skipped: collected.skipped,
    })
}
