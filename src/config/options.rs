// src/config/options.rs
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::consts::*;
use crate::skills::SkillVocabulary;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    pub vocabulary: SkillVocabulary,
    pub ranking: RankingOptions,
    pub export: ExportOptions,
    pub collect: CollectOptions,
}

/// Cut-offs for rankings, recommendations and charts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingOptions {
    /// Size of the global "hot" set.
    pub global_hot_k: usize,
    /// Focus skills per city.
    pub focus_k: usize,
    /// Hot-here-and-globally skills per city.
    pub hot_limit: usize,
    /// Skill columns/rows in heatmaps.
    pub chart_top_k: usize,
}

impl Default for RankingOptions {
    fn default() -> Self {
        Self {
            global_hot_k: GLOBAL_HOT_K,
            focus_k: CITY_FOCUS_K,
            hot_limit: HOT_LIMIT,
            chart_top_k: CHART_TOP_K,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
    pub format: ExportFormat,
    pub heatmaps: bool,
    pub workbook: bool,
    pub tables: bool,
    pub reports: bool,
    /// TTF for heatmap labels; system fonts are tried when unset.
    pub font: Option<PathBuf>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            format: ExportFormat::Csv,
            heatmaps: true,
            workbook: true,
            tables: true,
            reports: true,
            font: None,
        }
    }
}

impl ExportOptions {
    /// `<out_dir>/<stem>.<ext>` for the configured table format.
    pub fn table_path(&self, stem: &str) -> PathBuf {
        self.out_dir.join(join!(stem, ".", self.format.ext()))
    }

    /// Parse GUI text into the output directory. Blank text keeps the default.
    pub fn set_out_dir(&mut self, text: &str) {
        let s = text.trim();
        self.out_dir = if s.is_empty() {
            PathBuf::from(DEFAULT_OUT_DIR)
        } else {
            crate::file::normalize_dir_path(s)
        };
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectOptions {
    pub source_dir: PathBuf,
    pub out: PathBuf,
    pub roles: Vec<String>,
    pub selectors: CardSelectorOptions,
    /// Longer phrases are treated as prose, not skills.
    pub max_token_words: usize,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            out: PathBuf::from(DEFAULT_COLLECTED_FILE),
            roles: DEFAULT_ROLES.iter().map(|r| s!(*r)).collect(),
            selectors: CardSelectorOptions::default(),
            max_token_words: DEFAULT_MAX_TOKEN_WORDS,
        }
    }
}

/// CSS selectors for saved job-listing pages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardSelectorOptions {
    pub card: String,
    pub title: String,
    pub company: String,
    pub location: String,
}

impl Default for CardSelectorOptions {
    fn default() -> Self {
        Self {
            card: s!(CARD_SELECTOR),
            title: s!(TITLE_SELECTOR),
            company: s!(COMPANY_SELECTOR),
            location: s!(LOCATION_SELECTOR),
        }
    }
}
