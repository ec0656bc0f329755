// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use flockdash::State;
use flockdash::seed::demo_state;
use flockdash_runtime::{ProcessorConfig, ProcessorHandle};
use time::{Date, OffsetDateTime};
use tracing::info;

use crate::commands::Commands;

/// Flockdash - farm dashboard demo
///
/// Seeds an in-memory store, runs one command through the command
/// processor and prints the result as JSON.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Simulated latency applied to every operation, in milliseconds
    #[arg(long, global = true, default_value_t = 600)]
    latency_ms: u64,

    /// Start from an empty store instead of the demo farms
    #[arg(long, global = true)]
    no_seed: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let state: State = if args.no_seed {
        info!("Starting with an empty store");
        State::new()
    } else {
        let today: Date = OffsetDateTime::now_utc().date();
        info!(%today, "Seeding demo farms");
        demo_state(today)
    };

    let config: ProcessorConfig =
        ProcessorConfig::with_latency(Duration::from_millis(args.latency_ms));
    let handle: ProcessorHandle = flockdash_runtime::spawn(state, config);

    let output: serde_json::Value = commands::execute(&handle, args.command).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
