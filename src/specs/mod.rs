// src/specs/mod.rs
//! # Saved-page “specs” module
//!
//! Page-shape knowledge for job-listing HTML that the user saved to disk.
//! A spec encodes *where the postings live in the markup* and *how to pull
//! the five posting fields out of it*.
//!
//! ## What lives here
//! - **Pure HTML parsing** with `scraper` CSS selectors (cards, title, company,
//!   location, skill list items).
//! - **Light shaping** of each card into a [`PostingRecord`](crate::model::PostingRecord).
//!
//! ## What does **not** live here
//! - Directory walking, CSV pass-through and writing the output (`collect`).
//! - Skill normalization; cards keep the raw token text and the core
//!   pipeline normalizes later.
//!
//! ## Typical call chain
//! ```text
//! CLI / GUI → runner::collect → collect::collect_dir → specs::job_cards::parse_page
//!                                                  ↘ csv::write_postings
//! ```
//!
//! ## Testing notes
//! - Specs are tested offline against small inline HTML fixtures.
pub mod job_cards;
