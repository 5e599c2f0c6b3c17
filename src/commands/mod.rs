//! Operations exposed on the merger
//!
//! - `merge`: materialize `.gitignore` files for every candidate folder

pub mod merge;
