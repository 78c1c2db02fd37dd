//! Stamps the binary with the commit it was built from, shown by `--version`.
//!
//! Packaged builds without a git checkout can pass the id in through
//! `BANKOFX_BUILD_SHA` themselves.

use std::env;
use std::process::Command;

const SHA_VAR: &str = "BANKOFX_BUILD_SHA";

fn main() {
    println!("cargo:rerun-if-env-changed={SHA_VAR}");

    let sha = env::var(SHA_VAR)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .or_else(git_describe)
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env={SHA_VAR}={sha}");
}

/// Short commit id, suffixed with `-dirty` for uncommitted changes.
fn git_describe() -> Option<String> {
    let out = Command::new("git")
        .args(["describe", "--always", "--dirty", "--abbrev=8"])
        .current_dir(env::var_os("CARGO_MANIFEST_DIR")?)
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let described = String::from_utf8(out.stdout).ok()?;
    Some(described.trim().to_string()).filter(|s| !s.is_empty())
}
