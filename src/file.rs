// src/file.rs

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use crate::error::{Result, SkillmapError};

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

pub fn normalize_dir_path(p: &str) -> PathBuf {
    PathBuf::from(normalize_separators(p))
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(SkillmapError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_directory(parent),
        _ => Ok(()),
    }
}

pub fn sanitize_file_stem(name: &str, fallback: &str) -> String {
    crate::core::sanitize::sanitize_file_stem(name, fallback)
}

/// Duplicate handling **only within this run**
pub fn resolve_unique_path(
    dir: &Path,
    stem: &str,                        // already sanitized, no extension
    seen_names: &mut HashMap<String, usize>,
    ext: &str,                         // "png" | "csv" | ...
) -> PathBuf {
    let count = seen_names.entry(stem.to_string()).or_insert(0);

    // First occurrence: "<stem>.ext"
    // Subsequent:       "<stem>_N.ext" with N starting at 2
    let filename = if *count == 0 {
        format!("{stem}.{ext}")
    } else {
        format!("{stem}_{}.{ext}", *count + 1)
    };

    *count += 1;
    dir.join(filename)
}

/// `heatmap_<city>_top10` with the city made filesystem-safe.
pub fn city_heatmap_stem(city: &str) -> String {
    format!("heatmap_{}_top10", sanitize_file_stem(city, "unknown"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_stems_get_counters() {
        let dir = Path::new("out");
        let mut seen = HashMap::new();
        let a = resolve_unique_path(dir, "heatmap_NY_top10", &mut seen, "png");
        let b = resolve_unique_path(dir, "heatmap_NY_top10", &mut seen, "png");
        assert_eq!(a, dir.join("heatmap_NY_top10.png"));
        assert_eq!(b, dir.join("heatmap_NY_top10_2.png"));
    }

    #[test]
    fn blank_city_stem() {
        assert_eq!(city_heatmap_stem(""), "heatmap_unknown_top10");
        assert_eq!(city_heatmap_stem("Austin, TX"), "heatmap_Austin_TX_top10");
    }
}
