use std::process::Command;

use anyhow::{Context, Result};

/// Packages and the feature sets each must build with.
const FEATURE_MATRIX: &[(&str, &[&str])] = &[
    ("eventreg-domain", &[]),
    ("eventreg-domain", &["ts-gen"]),
    ("eventreg-app", &[]),
    ("eventreg-app", &["ts-gen"]),
];

/// Check that every package/feature combination compiles.
pub fn check_feature_matrix() -> Result<()> {
    println!("Checking {} feature combinations...", FEATURE_MATRIX.len());

    for (index, (package, features)) in FEATURE_MATRIX.iter().enumerate() {
        let label = if features.is_empty() { "default".to_string() } else { features.join(",") };
        println!("\n[{}/{}] {package} ({label})", index + 1, FEATURE_MATRIX.len());

        let mut command = Command::new("cargo");
        command.args(["check", "-p", package]);
        if !features.is_empty() {
            command.arg("--features").arg(features.join(","));
        }

        let status = command
            .status()
            .with_context(|| format!("Failed to run cargo check for {package} ({label})"))?;
        if !status.success() {
            anyhow::bail!("{package} with features '{label}' failed to compile");
        }
    }

    println!("\n✓ All feature combinations compile");
    Ok(())
}
