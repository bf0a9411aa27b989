//! Stamps the build with `SALAOZAP_VERSION` and `SALAOZAP_GIT_SHA` for the
//! layout footer. Both can be overridden from the environment.

use std::env;
use std::process::Command;

fn main() {
    let version = env::var("SALAOZAP_VERSION")
        .or_else(|_| env::var("CARGO_PKG_VERSION"))
        .unwrap_or_else(|_| "unknown".into());

    let git_sha = env::var("SALAOZAP_GIT_SHA")
        .or_else(|_| env::var("GITHUB_SHA").map(|sha| sha.chars().take(7).collect()))
        .ok()
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".into());

    println!("cargo:rustc-env=SALAOZAP_VERSION={version}");
    println!("cargo:rustc-env=SALAOZAP_GIT_SHA={git_sha}");
    for var in ["SALAOZAP_VERSION", "SALAOZAP_GIT_SHA", "GITHUB_SHA"] {
        println!("cargo:rerun-if-env-changed={var}");
    }
}

fn git_head() -> Option<String> {
    let out = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())?;
    let sha = String::from_utf8(out.stdout).ok()?;
    Some(sha.trim().to_string()).filter(|sha| !sha.is_empty())
}
