// Copyright (C) 2024-2025 Fred Clausen and the ratatui project contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask
//!
//! Workspace automation for Flockdash. Run with `cargo xtask <command>`.
//!
//! - `ci` runs lint, build and test in that order
//! - `demo` seeds the store and prints each read view through the CLI
//! - `coverage` writes `target/lcov.info` via `cargo llvm-cov`
//!
//! Formatting and docs checks use the nightly toolchain.

#![deny(
    clippy::pedantic,
    //clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::{fmt::Debug, io, process::Output, vec};

use cargo_metadata::MetadataCommand;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{eyre::Context, Result};
use duct::cmd;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

/// CLI package exercised by `cargo xtask demo`.
const CLI_PACKAGE: &str = "flockdash-cli";

/// Read-only subcommands the demo walks through.
const DEMO_VIEWS: [&str; 4] = ["summary", "farms", "weekly", "reports"];

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    if let Err(err) = args.run() {
        tracing::error!("{err}");
        std::process::exit(1);
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(bin_name = "cargo xtask", styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn run(self) -> Result<()> {
        self.command.run()
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Run CI checks (lint, build, test)
    CI,

    /// Build every crate and target
    #[command(visible_alias = "b")]
    Build,

    /// Run cargo check
    #[command(visible_alias = "c")]
    Check,

    /// Generate an lcov coverage report
    #[command(visible_alias = "cov")]
    Coverage,

    /// Print every dashboard view from a freshly seeded store
    Demo,

    /// Lint clippy, docs and formatting
    #[command(visible_alias = "l")]
    Lint,

    /// Run clippy on the workspace
    #[command(visible_alias = "cl")]
    LintClippy,

    /// Check documentation for errors and warnings
    #[command(visible_alias = "d")]
    LintDocs,

    /// Check formatting
    #[command(visible_alias = "lf")]
    LintFormatting,

    /// Apply clippy suggestions
    #[command(visible_alias = "fc")]
    FixClippy,

    /// Apply rustfmt
    #[command(visible_alias = "fmt")]
    FixFormatting,

    /// Run lib and doc tests
    #[command(visible_alias = "t")]
    Test,

    /// Run doc tests
    #[command(visible_alias = "td")]
    TestDocs,

    /// Run lib tests
    #[command(visible_alias = "tl")]
    TestLibs,
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::CI => ci(),
            Self::Build => build(),
            Self::Check => check(),
            Self::Coverage => coverage(),
            Self::Demo => demo(),
            Self::Lint => lint(),
            Self::LintClippy => lint_clippy(),
            Self::LintDocs => lint_docs(),
            Self::LintFormatting => lint_format(),
            Self::FixClippy => fix_clippy(),
            Self::FixFormatting => fix_format(),
            Self::Test => test(),
            Self::TestDocs => test_docs(),
            Self::TestLibs => test_libs(),
        }
    }
}

fn ci() -> Result<()> {
    lint()?;
    build()?;
    test()?;
    Ok(())
}

fn build() -> Result<()> {
    run_cargo(vec!["build", "--all-targets", "--all-features"])
}

fn check() -> Result<()> {
    run_cargo(vec!["check", "--all-targets", "--all-features"])
}

fn coverage() -> Result<()> {
    run_cargo(vec![
        "llvm-cov",
        "--workspace",
        "--lcov",
        "--output-path",
        "target/lcov.info",
    ])
}

/// Run the CLI once per read view with no simulated latency
fn demo() -> Result<()> {
    for view in DEMO_VIEWS {
        run_cargo(vec![
            "run",
            "--quiet",
            "--package",
            CLI_PACKAGE,
            "--",
            "--latency-ms",
            "0",
            view,
        ])
        .wrap_err_with(|| format!("demo view `{view}` failed"))?;
    }
    Ok(())
}

fn lint() -> Result<()> {
    lint_clippy()?;
    lint_docs()?;
    lint_format()?;
    Ok(())
}

fn lint_clippy() -> Result<()> {
    run_cargo(vec![
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ])
}

fn fix_clippy() -> Result<()> {
    run_cargo(vec![
        "clippy",
        "--all-targets",
        "--all-features",
        "--fix",
        "--allow-dirty",
        "--allow-staged",
        "--",
        "-D",
        "warnings",
    ])
}

/// Build docs for each workspace package with docs.rs flags
fn lint_docs() -> Result<()> {
    let meta = MetadataCommand::new()
        .exec()
        .wrap_err("failed to get cargo metadata")?;

    for package in meta.workspace_default_packages() {
        let name: &str = &package.name;
        if name == "xtask" {
            continue;
        }
        nightly(cmd("cargo", ["doc", "--no-deps", "--package", name]))
            .env("RUSTDOCFLAGS", "--cfg docsrs -D warnings")
            .run_with_trace()?;
    }

    Ok(())
}

fn lint_format() -> Result<()> {
    run_cargo_nightly(vec!["fmt", "--all", "--check"])
}

fn fix_format() -> Result<()> {
    run_cargo_nightly(vec!["fmt", "--all"])
}

fn test() -> Result<()> {
    test_libs()?;
    test_docs()?;
    Ok(())
}

fn test_docs() -> Result<()> {
    run_cargo(vec!["test", "--doc", "--workspace"])
}

fn test_libs() -> Result<()> {
    run_cargo(vec!["test", "--workspace", "--all-targets"])
}

fn run_cargo(args: Vec<&str>) -> Result<()> {
    cmd("cargo", args).run_with_trace()?;
    Ok(())
}

fn run_cargo_nightly(args: Vec<&str>) -> Result<()> {
    nightly(cmd("cargo", args)).run_with_trace()?;
    Ok(())
}

/// Point an expression at the nightly toolchain.
///
/// `CARGO` is set inside a cargo subcommand and would pin the stable binary.
fn nightly(expression: duct::Expression) -> duct::Expression {
    expression
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
}

/// Logs a `duct::Expression` before running it.
trait ExpressionExt {
    fn run_with_trace(&self) -> io::Result<Output>;
}

impl ExpressionExt for duct::Expression {
    fn run_with_trace(&self) -> io::Result<Output> {
        tracing::info!("running command: {:?}", self);
        self.run().inspect_err(|_| {
            // Repeat the command; its first log line may have scrolled away
            tracing::error!("failed to run command: {:?}", self);
        })
    }
}
