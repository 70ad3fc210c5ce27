//! Shared domain types for the sales report pipeline.

pub mod types;

pub use types::*;
