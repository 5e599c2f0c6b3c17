//! Values passed between areas
//!
//! - `candidate`: candidate folders and the folder-name to template-name rule
//! - `lines`: template line sequences and the sentinel entry
//! - `summary`: per-folder outcomes of a merge run

pub mod candidate;
pub mod lines;
pub mod summary;
