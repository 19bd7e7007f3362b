// ABOUTME: Sample workout seeder for Fitlog demo accounts
// ABOUTME: Writes four workouts and their exercises into a SQLite database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Sample workout seeder.
//!
//! Usage:
//! ```bash
//! # Seed with default settings (DATABASE_URL or sqlite:./data/fitlog.db)
//! cargo run --bin seed-workouts
//!
//! # Seed for a specific user
//! cargo run --bin seed-workouts -- --user-id 6f1c2b1e-3c1a-4b7e-9a55-0d5f2f1e8c11
//!
//! # Reset workouts before seeding
//! cargo run --bin seed-workouts -- --reset
//!
//! # Verbose output
//! cargo run --bin seed-workouts -- -v
//! ```

use anyhow::Result;
use clap::Parser;
use fitlog_seeder::batch::DependentBatchWriter;
use fitlog_seeder::config::SeedConfig;
use fitlog_seeder::dispatch::CallbackQueue;
use fitlog_seeder::logging::LoggingConfig;
use fitlog_seeder::seeding::populate_sample_data;
use fitlog_seeder::store::SqliteStore;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(
    name = "seed-workouts",
    about = "Fitlog Sample Workout Seeder",
    long_about = "Populate the database with sample workouts and their exercises"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// User that owns the seeded workouts (generated if not specified)
    #[arg(long)]
    user_id: Option<String>,

    /// Delete existing workouts and exercises before seeding
    #[arg(long)]
    reset: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    LoggingConfig::from_env().with_level(log_level).init()?;

    info!("=== Fitlog Sample Workout Seeder ===");

    let config = SeedConfig::from_env()?.with_overrides(
        args.database_url,
        args.user_id.as_deref(),
        args.reset,
    )?;

    info!("Connecting to database: {}", config.database_url);
    let store = Arc::new(SqliteStore::connect(&config.connection_url()).await?);

    if config.reset {
        info!("Resetting workout data...");
        store.reset().await?;
    }

    let writer = DependentBatchWriter::new(Arc::clone(&store), CallbackQueue::spawn());
    let report = populate_sample_data(&writer, config.user_id, |all_succeeded| {
        if all_succeeded {
            info!("Sample data population completed");
        } else {
            warn!("Sample data population finished with failures");
        }
    })
    .wait()
    .await?;

    info!("");
    info!("=== Seeding Complete ===");
    info!("User: {}", config.user_id);
    info!("Writes issued: {}", report.issued);
    info!("Writes succeeded: {}", report.succeeded);
    info!("Workouts in database: {}", store.workout_count().await?);
    info!("Exercises in database: {}", store.exercise_count().await?);

    for failure in &report.failures {
        warn!("  {} failed: {}", failure.target, failure.message);
    }

    if !report.all_succeeded {
        anyhow::bail!(
            "{} of {} writes failed (batch {})",
            report.failed(),
            report.issued,
            report.batch_id
        );
    }

    Ok(())
}
