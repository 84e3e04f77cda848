//! Development automation tasks for the `EventReg` workspace.
//!
//! Run with: `cargo xtask <command>`
//!
//! This is a CLI tool for developers, so `println!` and `eprintln!` are
//! intentionally used for user-facing output rather than structured logging.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode};
use std::{env, fs};

use anyhow::{anyhow, Context};

mod features;

/// Where `ts-rs` writes bindings when the domain tests run with `ts-gen`.
const BINDINGS_DIR: &str = "crates/domain/bindings";

fn main() -> ExitCode {
    let task = env::args().nth(1);

    let result = match task.as_deref() {
        Some("ci") => run_ci(),
        Some("fmt") => run_fmt(),
        Some("clippy") => run_clippy(),
        Some("test") => run_test(),
        Some("bench") => run_bench(),
        Some("codegen") => run_codegen(env::args().nth(2).map(PathBuf::from)),
        Some("check-features") => features::check_feature_matrix(),
        Some("help") | None => {
            print_help();
            Ok(())
        }
        Some(unknown) => {
            eprintln!("Unknown task: {unknown}");
            eprintln!();
            print_help();
            Err(anyhow!("Unknown task"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Task failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_help() {
    println!("EventReg Development Tasks");
    println!();
    println!("USAGE:");
    println!("    cargo xtask <TASK>");
    println!();
    println!("TASKS:");
    println!("    ci              Run fmt, clippy, feature matrix and tests");
    println!("    fmt             Check Rust code formatting");
    println!("    clippy          Run Clippy lints");
    println!("    test            Run all tests");
    println!("    bench           Run the cost engine benchmarks");
    println!("    codegen [DIR]   Generate TypeScript types, optionally copying them to DIR");
    println!("    check-features  Verify the ts-gen feature compiles on and off");
    println!("    help            Show this help message");
}

/// Run all CI checks in sequence
fn run_ci() -> anyhow::Result<()> {
    println!("==> Step 1/4: Checking Rust format...");
    run_fmt()?;

    println!("\n==> Step 2/4: Running Clippy...");
    run_clippy()?;

    println!("\n==> Step 3/4: Checking feature matrix...");
    features::check_feature_matrix()?;

    println!("\n==> Step 4/4: Running tests...");
    run_test()?;

    println!("\n✓ All CI checks passed!");
    Ok(())
}

fn run_fmt() -> anyhow::Result<()> {
    cargo(&["fmt", "--all", "--", "--check"], "Format check failed. Run 'cargo fmt --all' to fix.")
}

fn run_clippy() -> anyhow::Result<()> {
    cargo(&["clippy", "--workspace", "--all-targets"], "Clippy run failed. See output above.")
}

fn run_test() -> anyhow::Result<()> {
    cargo(&["test", "--workspace"], "Tests failed")
}

fn run_bench() -> anyhow::Result<()> {
    cargo(&["bench", "-p", "eventreg-core", "--bench", "cost_engine"], "Benchmarks failed")
}

fn cargo(args: &[&str], failure: &str) -> anyhow::Result<()> {
    let status = Command::new("cargo")
        .args(args)
        .status()
        .with_context(|| format!("Failed to run cargo {}", args.join(" ")))?;

    if status.success() {
        Ok(())
    } else {
        Err(anyhow!("{failure}"))
    }
}

/// Generate TypeScript types for the wire format
fn run_codegen(target: Option<PathBuf>) -> anyhow::Result<()> {
    println!("==> Generating TypeScript types from Rust...\n");
    cargo(
        &["test", "-p", "eventreg-domain", "--features", "ts-gen", "--lib"],
        "TypeScript generation tests failed",
    )?;

    let bindings_dir = PathBuf::from(BINDINGS_DIR);
    if !bindings_dir.exists() {
        anyhow::bail!("Bindings directory not found at {}", bindings_dir.display());
    }

    let out_dir = match target {
        Some(dir) => {
            sync_bindings(&bindings_dir, &dir)?;
            dir
        }
        None => bindings_dir,
    };
    generate_index_ts(&out_dir)?;

    println!("\n✓ TypeScript types written to {}", out_dir.display());
    Ok(())
}

fn ts_modules(dir: &Path) -> anyhow::Result<Vec<String>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read {}", dir.display()))?;

    let mut modules: Vec<String> = entries
        .filter_map(Result::ok)
        .filter_map(|entry| {
            let path = entry.path();
            if path.extension()?.to_str()? != "ts" {
                return None;
            }
            let stem = path.file_stem()?.to_str()?;
            (stem != "index").then(|| stem.to_string())
        })
        .collect();
    modules.sort();
    Ok(modules)
}

fn sync_bindings(src: &Path, dest: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(dest).context("Failed to create target directory")?;

    let modules = ts_modules(src)?;
    for module in &modules {
        let from = src.join(format!("{module}.ts"));
        let to = dest.join(format!("{module}.ts"));
        fs::copy(&from, &to)
            .with_context(|| format!("Failed to copy {} to {}", from.display(), to.display()))?;
    }

    println!("  Synced {} files", modules.len());
    Ok(())
}

/// Write an index.ts re-exporting every generated type
fn generate_index_ts(types_dir: &Path) -> anyhow::Result<()> {
    let modules = ts_modules(types_dir)?;

    let mut content = String::from(
        "// Generated by ts-rs via: cargo xtask codegen\n\
         // DO NOT EDIT MANUALLY - changes will be overwritten\n\n",
    );
    for module in &modules {
        let _ = writeln!(content, "export type {{ {module} }} from './{module}';");
    }

    let index_path = types_dir.join("index.ts");
    fs::write(&index_path, content)
        .with_context(|| format!("Failed to write {}", index_path.display()))?;

    println!("  Generated index.ts with {} exports", modules.len());
    Ok(())
}
