//! Core business logic for Divvy.
//!
//! This crate contains pure business logic with ZERO web dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `split` - Bill splitting and rounding-remainder reconciliation
//! - `parse` - Best-effort free-text bill extraction
//! - `report` - Text rendering of split results (steps, share text, prompts)

pub mod parse;
pub mod report;
pub mod split;
