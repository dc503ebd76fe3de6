use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use crate::application::services::repository_handle::RepositoryHandle;
use crate::common::result::FanoutResult;
use crate::common::style::Style;

/// Snapshot of one repository as shown to the operator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryReport {
    /// Working directory
    pub path: PathBuf,

    /// Current branch
    pub branch: String,

    /// Whether nothing is pending
    pub clean: bool,

    /// Full status text, only for dirty repositories
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Reports for every repository of a run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusResult {
    pub repositories: Vec<RepositoryReport>,
    pub clean_count: usize,
    pub dirty_count: usize,
}

impl StatusResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_report(&mut self, report: RepositoryReport) {
        if report.clean {
            self.clean_count += 1;
        } else {
            self.dirty_count += 1;
        }
        self.repositories.push(report);
    }

    pub fn has_issues(&self) -> bool {
        self.dirty_count > 0
    }

    pub fn total_count(&self) -> usize {
        self.repositories.len()
    }
}

/// Prints a summary of each repository, one at a time
pub struct StatusCheckUseCase {
    style: Arc<dyn Style>,
}

impl StatusCheckUseCase {
    pub fn new(style: Arc<dyn Style>) -> Self {
        Self { style }
    }

    /// Query one repository. Cleanliness is computed once; the status text
    /// is only fetched when the repository is dirty.
    pub async fn inspect(&self, handle: &RepositoryHandle) -> FanoutResult<RepositoryReport> {
        let clean = handle.check_clean().await?;
        let branch = handle.current_branch().await?;
        let status = if clean {
            None
        } else {
            Some(handle.status_text().await?)
        };

        Ok(RepositoryReport {
            path: handle.path().to_path_buf(),
            branch,
            clean,
            status,
        })
    }

    /// Render a report with the text template
    pub fn render(&self, report: &RepositoryReport) -> String {
        let clean_text = if report.clean {
            self.style.highlight("true")
        } else {
            self.style.alert("false")
        };

        let mut text = format!(
            "\nProject {} Overview (Branch {}):\n - Project state is clean: {}\n",
            self.style.path(&report.path.display().to_string()),
            self.style.highlight(&report.branch),
            clean_text,
        );
        if let Some(status) = &report.status {
            text.push_str(&self.style.alert(status));
            text.push('\n');
        }
        text
    }

    /// Inspect and print one repository
    pub async fn report<W: Write>(
        &self,
        handle: &RepositoryHandle,
        out: &mut W,
    ) -> FanoutResult<RepositoryReport> {
        let report = self.inspect(handle).await?;
        write!(out, "{}", self.render(&report))?;
        out.flush()?;
        Ok(report)
    }

    /// Print every repository in order; the first failure ends the run
    pub async fn execute<W: Write>(
        &self,
        handles: &[RepositoryHandle],
        out: &mut W,
    ) -> FanoutResult<StatusResult> {
        let mut result = StatusResult::new();
        for handle in handles {
            result.add_report(self.report(handle, out).await?);
        }
        Ok(result)
    }

    /// Inspect every repository without printing anything
    pub async fn collect(&self, handles: &[RepositoryHandle]) -> FanoutResult<StatusResult> {
        let mut result = StatusResult::new();
        for handle in handles {
            result.add_report(self.inspect(handle).await?);
        }
        Ok(result)
    }
}
