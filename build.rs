//! Generates `build_info.rs` for `civpath --version`.

use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::Command;

const UNKNOWN: &str = "unknown";

/// Short commit hash from git, if this is a checkout and git is available.
fn git_commit() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?.trim().to_string();
    (hash.len() == 7).then_some(hash)
}

/// An env override wins over the computed value.
fn env_or(name: &str, computed: impl FnOnce() -> Option<String>) -> String {
    println!("cargo:rerun-if-env-changed={}", name);
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(computed)
        .unwrap_or_else(|| UNKNOWN.to_string())
}

fn main() -> io::Result<()> {
    let entries = [
        ("BUILD_COMMIT", env_or("BUILD_COMMIT", git_commit)),
        (
            "BUILD_DATE",
            env_or("BUILD_DATE", || {
                Some(chrono::Utc::now().format("%Y-%m-%d").to_string())
            }),
        ),
    ];

    let source: String = entries
        .iter()
        .map(|(name, value)| format!("pub const {}: &str = {:?};\n", name, value))
        .collect();

    let out_dir = env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "OUT_DIR not set"))?;
    fs::write(out_dir.join("build_info.rs"), source)?;

    println!("cargo:rerun-if-changed=.git/HEAD");
    Ok(())
}
