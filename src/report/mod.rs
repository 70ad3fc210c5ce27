//! Report surfaces.
//!
//! - terminal summary formatting (`format`)
//! - the interactive HTML document (`html`)
//!
//! We keep presentation code in one place so the data-shaping modules stay
//! clean and testable.

pub mod format;
pub mod html;

pub use format::*;
