use derive_new::new;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderOutcome {
    Written { sentinel_appended: bool },
    MissingTemplate,
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct FolderReport {
    folder: String,
    outcome: FolderOutcome,
}

impl FolderReport {
    pub fn folder(&self) -> &str {
        &self.folder
    }

    pub fn outcome(&self) -> FolderOutcome {
        self.outcome
    }
}

/// What a single merge run did to each candidate folder, in processing order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MergeSummary {
    reports: Vec<FolderReport>,
}

impl MergeSummary {
    pub fn record(&mut self, folder: impl Into<String>, outcome: FolderOutcome) {
        self.reports.push(FolderReport::new(folder.into(), outcome));
    }

    pub fn reports(&self) -> &[FolderReport] {
        &self.reports
    }

    pub fn outcome_of(&self, folder: &str) -> Option<FolderOutcome> {
        self.reports
            .iter()
            .find(|report| report.folder() == folder)
            .map(FolderReport::outcome)
    }

    pub fn written(&self) -> usize {
        self.reports
            .iter()
            .filter(|report| matches!(report.outcome(), FolderOutcome::Written { .. }))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.reports.len() - self.written()
    }
}

impl Display for MergeSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} .gitignore file(s) written, {} folder(s) skipped",
            self.written(),
            self.skipped()
        )
    }
}
