// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Subcommands and their execution against a running processor.

use clap::{Args, Subcommand};
use color_eyre::Result;
use color_eyre::eyre::eyre;
use flockdash_api::{
    RegisterFarmRequest, RegisterFarmResponse, SubmitDailyReportRequest,
    SubmitDailyReportResponse, validate_register_farm, validate_submit_daily_report,
};
use flockdash_domain::{DailyReport, DailyReportSubmission, Farm, FarmId, FarmRegistration, iso_date};
use flockdash_runtime::ProcessorHandle;
use serde_json::Value;
use tracing::{debug, info};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the dashboard totals
    Summary,
    /// Print egg counts for the trailing seven days
    Weekly {
        /// Show a single farm instead of every layer farm
        #[arg(long)]
        farm_id: Option<String>,
    },
    /// Print every report with its farm name, newest first
    Reports,
    /// Print the registered farms
    Farms,
    /// Register a farm and print it once committed
    RegisterFarm(RegisterFarmArgs),
    /// Submit a daily report and print it once committed
    SubmitReport(SubmitReportArgs),
}

#[derive(Args, Debug)]
pub struct RegisterFarmArgs {
    #[arg(long)]
    farm_name: String,
    #[arg(long)]
    owner_name: String,
    #[arg(long, allow_negative_numbers = true)]
    latitude: f64,
    #[arg(long, allow_negative_numbers = true)]
    longitude: f64,
    /// Layers, Broilers, Breeders or "Free Range"
    #[arg(long)]
    flock_type: String,
    #[arg(long, allow_negative_numbers = true)]
    initial_bird_count: f64,
    /// YYYY-MM-DD
    #[arg(long)]
    start_date: String,
}

impl From<RegisterFarmArgs> for RegisterFarmRequest {
    fn from(args: RegisterFarmArgs) -> Self {
        Self {
            farm_name: args.farm_name,
            owner_name: args.owner_name,
            latitude: args.latitude,
            longitude: args.longitude,
            flock_type: args.flock_type,
            initial_bird_count: args.initial_bird_count,
            start_date: args.start_date,
        }
    }
}

#[derive(Args, Debug)]
pub struct SubmitReportArgs {
    #[arg(long)]
    farm_id: String,
    /// YYYY-MM-DD
    #[arg(long)]
    date: String,
    #[arg(long, allow_negative_numbers = true)]
    eggs_collected: f64,
    /// Kilograms
    #[arg(long, allow_negative_numbers = true)]
    feed_used: f64,
    #[arg(long, allow_negative_numbers = true)]
    mortality: f64,
}

impl From<SubmitReportArgs> for SubmitDailyReportRequest {
    fn from(args: SubmitReportArgs) -> Self {
        Self {
            farm_id: args.farm_id,
            date: args.date,
            eggs_collected: args.eggs_collected,
            feed_used: args.feed_used,
            mortality: args.mortality,
        }
    }
}

/// Runs one subcommand and returns its JSON output.
///
/// Writes wait for the processor to commit, so the returned value
/// reflects the store after the command.
///
/// # Errors
///
/// Returns an error if form validation fails, the processor rejects the
/// command, or the output cannot be serialized.
pub async fn execute(handle: &ProcessorHandle, command: Commands) -> Result<Value> {
    debug!(?command, "Executing command");
    let output: Value = match command {
        Commands::Summary => serde_json::to_value(handle.aggregate_metrics())?,
        Commands::Weekly { farm_id } => {
            let farm_id: Option<FarmId> = farm_id.as_deref().map(FarmId::new);
            serde_json::to_value(handle.weekly_egg_series(farm_id.as_ref()))?
        }
        Commands::Reports => serde_json::to_value(handle.reports_with_farm_names())?,
        Commands::Farms => serde_json::to_value(handle.farms())?,
        Commands::RegisterFarm(args) => {
            let request: RegisterFarmRequest = args.into();
            let registration: FarmRegistration = validate_register_farm(&request)?;
            let farm: Farm = handle.register_farm(registration).await?;
            info!(farm_id = %farm.id, "Farm registered");
            let message: String = format!("Successfully registered farm '{}'", farm.farm_name);
            serde_json::to_value(RegisterFarmResponse { farm, message })?
        }
        Commands::SubmitReport(args) => {
            let request: SubmitDailyReportRequest = args.into();
            let submission: DailyReportSubmission = validate_submit_daily_report(&request)?;
            let report: DailyReport = handle
                .submit_daily_report(submission)
                .await
                .map_err(|err| eyre!("Report rejected: {err}"))?;
            info!(report_id = %report.id, "Report submitted");
            let message: String = format!(
                "Successfully submitted report for farm '{}' on {}",
                report.farm_id,
                iso_date::format(report.date)
            );
            serde_json::to_value(SubmitDailyReportResponse { report, message })?
        }
    };
    Ok(output)
}
