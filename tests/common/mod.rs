//! Shared fixtures for the CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary home with a config file and a root directory for repositories
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        std::fs::create_dir_all(dir.path().join("root")).expect("Failed to create root");
        Self { dir }
    }

    pub fn root(&self) -> PathBuf {
        self.dir.path().join("root")
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("fanout.json")
    }

    /// Write a config with one profile `p` rooted at [`Fixture::root`]
    pub fn write_config(&self, filter: &str) {
        let config = serde_json::json!({
            "shellCommand": "true",
            "profiles": [
                { "name": "p", "rootdir": self.root(), "filter": filter }
            ]
        });
        std::fs::write(self.config_path(), config.to_string()).expect("Failed to write config");
    }

    /// `fanout` with the fixture's config and colors off
    pub fn fanout(&self) -> Command {
        let mut cmd = Command::cargo_bin("fanout").expect("binary not built");
        cmd.env("FANOUT_CONFIG", self.config_path())
            .env_remove("RUST_LOG")
            .arg("--no-color");
        cmd
    }
}

pub fn git_available() -> bool {
    std::process::Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

fn git(dir: &Path, args: &[&str]) {
    let status = std::process::Command::new("git")
        .args(["-c", "user.name=fanout", "-c", "user.email=fanout@example.com"])
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run git")
        .status;
    assert!(status.success(), "git {:?} failed", args);
}

/// Create a git repository with one commit at `path`
pub fn init_git_repo(path: &Path) {
    std::fs::create_dir_all(path).expect("Failed to create repo dir");
    git(path, &["init", "-q"]);
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    std::fs::write(path.join("README.md"), "# test\n").expect("Failed to write README");
    git(path, &["add", "README.md"]);
    git(path, &["commit", "-q", "-m", "init"]);
}

/// Leave an uncommitted modification behind
pub fn make_dirty(path: &Path) {
    std::fs::write(path.join("README.md"), "# changed\n").expect("Failed to modify README");
}
