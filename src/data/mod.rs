//! Dataset production.
//!
//! The only data source is the seeded synthetic generator (`sample`).

pub mod sample;

pub use sample::*;
