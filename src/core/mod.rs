// src/core/mod.rs

pub mod palette;
pub mod sanitize;
