use anyhow::Context;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
    ignored_dirs: Vec<String>,
}

impl Workspace {
    pub fn new(path: Box<Path>, ignored_dirs: Vec<String>) -> Self {
        Workspace { path, ignored_dirs }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Immediate child directories of the workspace, sorted by name.
    ///
    /// Symlinks pointing at directories are listed too. Directories whose name
    /// matches one of `ignored_dirs` exactly are left out.
    pub fn list_dirs(&self) -> anyhow::Result<Vec<PathBuf>> {
        let mut dirs = Vec::new();

        for entry in WalkDir::new(&self.path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry
                .with_context(|| format!("Failed to list directory: {:?}", self.path))?;

            if entry.path().is_dir() && !self.is_ignored(entry.file_name()) {
                dirs.push(entry.into_path());
            }
        }

        Ok(dirs)
    }

    fn is_ignored(&self, name: &OsStr) -> bool {
        self.ignored_dirs
            .iter()
            .any(|ignored| OsStr::new(ignored) == name)
    }
}
