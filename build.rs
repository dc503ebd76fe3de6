use std::env;
use std::process::Command;

fn main() {
    let git_hash = get_git_hash();
    let build_date = chrono::Utc::now().format("%Y-%m-%d");

    println!("cargo:rustc-env=FANOUT_GIT_HASH={git_hash}");
    println!("cargo:rustc-env=FANOUT_BUILD_DATE={build_date}");
    println!(
        "cargo:rustc-env=FANOUT_BUILD_TARGET={}",
        env::var("TARGET").unwrap_or_default()
    );

    // Rerun if git state changes
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");
}

fn get_git_hash() -> String {
    if let Ok(output) = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
    {
        if output.status.success() {
            return String::from_utf8_lossy(&output.stdout).trim().to_string();
        }
    }
    "unknown".to_string()
}
