use async_trait::async_trait;
use std::io::{BufRead, Write};

use crate::common::error::FanoutError;
use crate::common::result::FanoutResult;

/// Asks the operator a question and waits for one line of input
#[async_trait]
pub trait Prompter: Send + Sync {
    /// Show `question` and return the answer line as typed (untrimmed).
    ///
    /// End of input yields an empty string.
    async fn ask(&self, question: &str) -> FanoutResult<String>;
}

/// Reads answers from the process's standard input
#[derive(Debug, Default, Clone)]
pub struct StdinPrompter;

impl StdinPrompter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Prompter for StdinPrompter {
    async fn ask(&self, question: &str) -> FanoutResult<String> {
        // The question must be on screen before we block on the read.
        {
            let mut stdout = std::io::stdout().lock();
            write!(stdout, "{}", question)?;
            stdout.flush()?;
        }

        let answer = tokio::task::spawn_blocking(|| {
            let mut line = String::new();
            std::io::stdin().lock().read_line(&mut line).map(|_| line)
        })
        .await
        .map_err(|e| FanoutError::internal_error_with_source("Prompt task failed", e))??;

        Ok(answer)
    }
}
