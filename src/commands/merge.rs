use crate::areas::merger::{Merger, OUTPUT_FILE_NAME};
use crate::artifacts::candidate::CandidateFolder;
use crate::artifacts::lines::LineSequence;
use crate::artifacts::summary::{FolderOutcome, MergeSummary};
use anyhow::Context;
use std::io::Write;
use std::path::Path;

impl Merger {
    /// Writes `<folder>/.gitignore` for every candidate folder with a matching template.
    ///
    /// Folders without a template are left untouched. The first I/O error aborts
    /// the run; folders processed before it keep their new `.gitignore`.
    pub fn run(&self) -> anyhow::Result<MergeSummary> {
        let mut summary = MergeSummary::default();

        log::debug!(
            "Using templates from {}",
            self.template_store().path().display()
        );

        for dir_path in self.workspace().list_dirs()? {
            let folder = CandidateFolder::try_from(dir_path.as_path())?;

            let outcome = self.merge_folder(&folder)?;
            summary.record(folder.display_name(), outcome);
        }

        log::info!("{}", summary);

        Ok(summary)
    }

    fn merge_folder(&self, folder: &CandidateFolder) -> anyhow::Result<FolderOutcome> {
        let template_name = folder.template_name();

        let Some(mut lines) = self.template_store().load(&template_name)? else {
            log::debug!("No template {} for folder {}", template_name, folder.display_name());
            return Ok(FolderOutcome::MissingTemplate);
        };

        let sentinel_appended = lines.ensure_sentinel();

        let output_path = folder.path().join(OUTPUT_FILE_NAME);
        write_output(&output_path, &lines)?;

        log::info!(
            "Wrote {} from {}",
            Path::new(folder.name()).join(OUTPUT_FILE_NAME).display(),
            template_name
        );

        Ok(FolderOutcome::Written { sentinel_appended })
    }
}

fn write_output(path: &Path, lines: &LineSequence) -> anyhow::Result<()> {
    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("Failed to open file: {:?}", path))?;

    file.write_all(lines.render().as_bytes())
        .with_context(|| format!("Failed to write to file: {:?}", path))?;

    Ok(())
}
