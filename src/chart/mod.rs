//! Chart construction.
//!
//! Aggregation and the mapping of the dataset into the two plotly chart
//! specs live here; HTML page assembly is `report::html`'s job.

pub mod dashboard;

pub use dashboard::*;
