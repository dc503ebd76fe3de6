use anyhow::Result;
use std::sync::Arc;

use super::discover_handles;
use crate::application::use_cases::status_check::{StatusCheckUseCase, StatusResult};
use crate::common::style::Style;
use crate::domain::entities::config::Config;
use crate::infrastructure::process::CommandRunner;
use crate::presentation::cli::OutputFormat;

/// Handler for the status command
pub struct StatusCommand {
    pub profile: String,
    pub output: OutputFormat,
    pub verbose: bool,
}

impl StatusCommand {
    pub fn new(profile: String, output: OutputFormat, verbose: bool) -> Self {
        Self {
            profile,
            output,
            verbose,
        }
    }

    pub async fn execute(
        &self,
        config: &Config,
        runner: Arc<dyn CommandRunner>,
        style: Arc<dyn Style>,
    ) -> Result<()> {
        let profile = config.profile(&self.profile)?;
        let handles = discover_handles(profile, runner)?;
        let use_case = StatusCheckUseCase::new(style);

        let status = match self.output {
            OutputFormat::Text => {
                let mut stdout = std::io::stdout();
                use_case.execute(&handles, &mut stdout).await?
            }
            OutputFormat::Json => {
                let status = use_case.collect(&handles).await?;
                println!("{}", serde_json::to_string_pretty(&status.repositories)?);
                status
            }
            OutputFormat::Yaml => {
                let status = use_case.collect(&handles).await?;
                print!("{}", serde_yaml::to_string(&status.repositories)?);
                status
            }
        };

        if self.verbose {
            self.print_summary(&status);
        }
        Ok(())
    }

    fn print_summary(&self, status: &StatusResult) {
        eprintln!(
            "{} repositories: {} clean, {} dirty",
            status.total_count(),
            status.clean_count,
            status.dirty_count
        );
    }
}
