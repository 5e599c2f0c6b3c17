//! Materializes per-language `.gitignore` files from a template store.
//!
//! The crate is laid out in three layers:
//!
//! - `areas`: filesystem-facing components (working directory, template store, merger)
//! - `artifacts`: plain values that flow between areas (candidate folders, line sequences, summaries)
//! - `commands`: the operations exposed on the merger

pub mod areas;
pub mod artifacts;
pub mod commands;
