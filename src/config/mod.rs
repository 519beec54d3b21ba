// src/config/mod.rs
use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::error::{Result, SkillmapError};

pub mod consts;
pub mod options;
pub mod state;

pub use options::{
    AppOptions, CardSelectorOptions, CollectOptions, ExportFormat, ExportOptions, RankingOptions,
};
pub use state::{AppState, GuiState, PageKind};

/// Layered options: built-in defaults, then a TOML file, then `SKILLMAP_*` env vars
/// (nested keys use `__`, e.g. `SKILLMAP_RANKING__FOCUS_K=3`).
///
/// An explicit `path` must exist; the default `skillmap.toml` is optional.
pub fn load(path: Option<&Path>) -> Result<AppOptions> {
    let file = match path {
        Some(p) if !p.is_file() => return Err(SkillmapError::MissingConfig(p.to_path_buf())),
        Some(p) => p.to_path_buf(),
        None => PathBuf::from(consts::CONFIG_FILE),
    };

    let options: AppOptions = figment(&file).extract()?;
    tracing::debug!(config = %file.display(), "options loaded");
    Ok(options)
}

fn figment(file: &Path) -> Figment {
    Figment::from(Serialized::defaults(AppOptions::default()))
        .merge(Toml::file(file))
        .merge(Env::prefixed(consts::ENV_PREFIX).split("__"))
}
