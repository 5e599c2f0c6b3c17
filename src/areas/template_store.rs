use crate::artifacts::candidate::TemplateName;
use crate::artifacts::lines::LineSequence;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Name of the directory, under the working directory, holding the templates.
pub const TEMPLATE_STORE_DIR: &str = "gitignore";

/// Read-only directory of `<Name>.gitignore` templates.
#[derive(Debug)]
pub struct TemplateStore {
    path: Box<Path>,
}

impl TemplateStore {
    pub fn new(path: Box<Path>) -> Self {
        TemplateStore { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn template_path(&self, name: &TemplateName) -> PathBuf {
        self.path.join(name)
    }

    /// Loads the template if it exists as a regular file.
    ///
    /// Lookup is case-sensitive; a missing template is `Ok(None)`, while an
    /// unreadable or non UTF-8 one is an error.
    pub fn load(&self, name: &TemplateName) -> anyhow::Result<Option<LineSequence>> {
        let template_path = self.template_path(name);

        if !template_path.is_file() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&template_path)
            .with_context(|| format!("Failed to read template: {:?}", template_path))?;

        Ok(Some(LineSequence::parse(&content)))
    }
}
