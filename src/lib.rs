// src/lib.rs

#[macro_use]
pub mod macros;

pub mod analysis;
pub mod collect;
pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod export;
pub mod file;
pub mod gui;
pub mod log;
pub mod model;
pub mod progress;
pub mod runner;
pub mod skills;
pub mod specs;
pub mod table;

#[cfg(feature = "cli")]
pub mod cli;

pub use analysis::{Analysis, analyze};
pub use error::{Result, SkillmapError};
pub use model::{PostingRecord, RawSkills, TidyRow};
pub use skills::{SkillNormalizer, SkillVocabulary};
