//! Filesystem-facing components
//!
//! - `workspace`: listing the working directory's immediate subfolders
//! - `template_store`: locating and reading `<Name>.gitignore` templates
//! - `merger`: ties the two together for a single working directory

pub mod merger;
pub(crate) mod template_store;
pub(crate) mod workspace;
