use crate::areas::template_store::{TEMPLATE_STORE_DIR, TemplateStore};
use crate::areas::workspace::Workspace;
use anyhow::Context;
use std::path::Path;

/// Output file written inside every candidate folder with a matching template.
pub const OUTPUT_FILE_NAME: &str = ".gitignore";

pub struct Merger {
    path: Box<Path>,
    workspace: Workspace,
    template_store: TemplateStore,
}

impl Merger {
    pub fn new(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let path = path
            .canonicalize()
            .with_context(|| format!("Failed to resolve working directory: {:?}", path))?;

        if !path.is_dir() {
            anyhow::bail!("The working directory is not a directory: {:?}", path);
        }

        let template_store = TemplateStore::new(path.join(TEMPLATE_STORE_DIR).into_boxed_path());
        let workspace = Workspace::new(
            path.clone().into_boxed_path(),
            vec![TEMPLATE_STORE_DIR.to_string()],
        );

        Ok(Merger {
            path: path.into_boxed_path(),
            workspace,
            template_store,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn template_store(&self) -> &TemplateStore {
        &self.template_store
    }
}
