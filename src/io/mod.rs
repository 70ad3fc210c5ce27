//! Output artifacts.
//!
//! - report path normalization and the single HTML write (`export`)
//! - optional raw dataset CSV export (`export`)

pub mod export;

pub use export::*;
