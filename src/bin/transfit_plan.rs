// ABOUTME: Command-line plan generator reading profile, catalog, and safety context JSON files
// ABOUTME: Prints the generated plan as JSON or writes it to a file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TransFit Contributors

//! TransFit plan generator CLI.
//!
//! Usage:
//! ```bash
//! # Generate with the built-in safety rules
//! cargo run --bin transfit-plan -- --profile profile.json --catalog exercises.json
//!
//! # Use a precomputed safety context instead
//! cargo run --bin transfit-plan -- --profile profile.json --catalog exercises.json \
//!     --safety-context context.json
//!
//! # Reproducible output starting on a given date
//! cargo run --bin transfit-plan -- --profile profile.json --catalog exercises.json \
//!     --start-date 2025-06-02 --seed 42 --output plan.json
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use chrono::{NaiveDate, Utc};
use clap::Parser;
use tokio::fs;
use tracing::info;

use transfit::config::PlanningConfig;
use transfit::logging::LoggingConfig;
use transfit::models::Profile;
use transfit::planning::{PlanGenerator, PlanOptions};
use transfit::providers::{
    ExerciseRepository, JsonFileExerciseRepository, SafetyRulesEngine, StaticSafetyRules,
};
use transfit::safety::DefaultSafetyRulesEngine;

#[derive(Parser)]
#[command(
    name = "transfit-plan",
    about = "TransFit safety-aware workout plan generator",
    long_about = "Generate a 1 or 4 week workout plan from a profile and an exercise catalog, \
                  applying binding, HRT, and post-operative safety rules"
)]
struct PlanArgs {
    /// Profile JSON file
    #[arg(long)]
    profile: PathBuf,

    /// Exercise catalog JSON file
    #[arg(long)]
    catalog: PathBuf,

    /// Precomputed safety context JSON; the built-in rules are used when absent
    #[arg(long)]
    safety_context: Option<PathBuf>,

    /// First day of the plan (YYYY-MM-DD), defaults to today
    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// Reference date for recovery and HRT timing, defaults to the start date
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Seed for reproducible exercise selection
    #[arg(long)]
    seed: Option<u64>,

    /// Write the plan here instead of stdout
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = PlanArgs::parse();

    let mut logging = LoggingConfig::from_env();
    if args.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let raw_profile = fs::read_to_string(&args.profile)
        .await
        .map_err(|e| anyhow!("reading profile {}: {e}", args.profile.display()))?;
    let profile: Profile = serde_json::from_str(&raw_profile)
        .map_err(|e| anyhow!("parsing profile {}: {e}", args.profile.display()))?;

    let repository: Arc<dyn ExerciseRepository> =
        Arc::new(JsonFileExerciseRepository::new(&args.catalog));
    let rules: Arc<dyn SafetyRulesEngine> = match &args.safety_context {
        Some(path) => Arc::new(StaticSafetyRules::from_json_file(path).await?),
        None => Arc::new(DefaultSafetyRulesEngine::new()),
    };

    let mut config = PlanningConfig::load()?;
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let start_date = args
        .start_date
        .unwrap_or_else(|| Utc::now().date_naive());
    let options = PlanOptions::starting(start_date).with_today(args.today.unwrap_or(start_date));

    let plan = PlanGenerator::new(repository, rules)
        .with_config(config)
        .generate_plan(&profile, options)
        .await?;

    let json = serde_json::to_string_pretty(&plan)?;
    match &args.output {
        Some(path) => {
            fs::write(path, json)
                .await
                .map_err(|e| anyhow!("writing plan {}: {e}", path.display()))?;
            info!(
                path = %path.display(),
                workout_days = plan.workout_day_count(),
                "plan written"
            );
        }
        None => println!("{json}"),
    }

    Ok(())
}
