use anyhow::Result;
use std::sync::Arc;

use super::discover_handles;
use crate::application::services::prompter::StdinPrompter;
use crate::application::use_cases::broadcast::{BroadcastConfig, BroadcastResult, BroadcastUseCase};
use crate::common::style::Style;
use crate::domain::entities::config::Config;
use crate::infrastructure::process::CommandRunner;

/// Handler for the broadcast command
pub struct BroadcastCommand {
    pub profile: String,
    pub command: String,
    pub verbose: bool,
}

impl BroadcastCommand {
    pub fn new(profile: String, command: String, verbose: bool) -> Self {
        Self {
            profile,
            command,
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
        let handles = discover_handles(profile, runner.clone())?;

        let use_case = BroadcastUseCase::new(
            BroadcastConfig::new(self.command.clone(), config.shell_command.clone()),
            runner,
            Arc::new(StdinPrompter::new()),
            style,
        );

        let mut stdout = std::io::stdout();
        let result = use_case.execute(&handles, &mut stdout).await?;

        if self.verbose {
            self.print_summary(&result);
        }
        Ok(())
    }

    fn print_summary(&self, result: &BroadcastResult) {
        eprintln!(
            "Broadcast to {} of {} repositories ({} skipped, {} resolved first)",
            result.broadcast_count,
            result.total_count(),
            result.skipped_count,
            result.resolved().len()
        );
    }
}
