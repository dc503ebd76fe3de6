//! # fanout - broadcast commands across many git repositories
//!
//! `fanout` finds the git working directories under a root directory and
//! either reports their state or runs one shell command in each of them,
//! asking the operator what to do whenever a repository has uncommitted
//! changes.
//!
//! ## Quick Start
//!
//! 1. Describe your profiles in `~/.fanout.json`:
//!
//! ```json
//! {
//!   "shellCommand": "zsh",
//!   "profiles": [
//!     { "name": "work", "rootdir": "~/src/work", "filter": "" },
//!     { "name": "web", "rootdir": "~/src/work", "filter": "frontend,landing" }
//!   ]
//! }
//! ```
//!
//! 2. Check on every repository:
//!
//! ```bash
//! fanout status work
//! ```
//!
//! 3. Run a command everywhere:
//!
//! ```bash
//! fanout broadcast work git pull --ff-only
//! ```
//!
//! Dirty repositories stop the run with a prompt: continue anyway (`c`),
//! open the configured shell to fix things by hand (`m`), hard reset
//! first (`h`), or skip the repository (`s`). Any other answer ends the
//! run.
//!
//! ## Architecture
//!
//! - [`domain`]: repositories, profiles, and operator choices
//! - [`application`]: the status report and broadcast procedures
//! - [`infrastructure`]: process execution, git queries, discovery, config files
//! - [`presentation`]: CLI interface
//! - [`common`]: error handling and terminal styling
//!
//! ## Using the Library
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use fanout::application::services::repository_handle::RepositoryHandle;
//! use fanout::application::use_cases::status_check::StatusCheckUseCase;
//! use fanout::common::style::PlainStyle;
//! use fanout::domain::value_objects::directory_filter::DirectoryFilter;
//! use fanout::infrastructure::{GitInspector, RepositoryWalker, SystemCommandRunner};
//!
//! # async fn example() -> fanout::Result<()> {
//! let repositories = RepositoryWalker::new()
//!     .discover("/src".as_ref(), &DirectoryFilter::parse("api,web"))?;
//! let inspector = Arc::new(GitInspector::new(Arc::new(SystemCommandRunner::new())));
//! let handles = RepositoryHandle::for_all(repositories, inspector);
//!
//! let status = StatusCheckUseCase::new(Arc::new(PlainStyle))
//!     .collect(&handles)
//!     .await?;
//! println!("{} dirty repositories", status.dirty_count);
//! # Ok(())
//! # }
//! ```

// Documentation attributes
#![deny(rustdoc::broken_intra_doc_links)]

pub mod application;
pub mod common;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types for convenience
pub use crate::common::error::FanoutError;
pub use crate::common::result::FanoutResult as Result;
