// ABOUTME: Seeds a set of starter challenges into the configured database
// ABOUTME: Intended for development and demo environments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitSphere

//! Seed starter challenges

use anyhow::Result;
use chrono::{Duration, Utc};
use clap::Parser;
use fitsphere::{
    config::ServerConfig,
    database_plugins::{factory::Database, DatabaseProvider},
    logging,
    models::Challenge,
};
use tracing::info;

#[derive(Parser)]
#[command(name = "seed-challenges")]
#[command(about = "Seed starter challenges into the FitSphere database")]
struct Args {
    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

fn starter_challenges() -> Vec<Challenge> {
    let month_end = Some(Utc::now() + Duration::days(30));
    vec![
        Challenge::new(
            "7-Day Consistency".to_owned(),
            "Complete a workout every day for a week".to_owned(),
            "workout".to_owned(),
            7,
            month_end,
        ),
        Challenge::new(
            "Two-Week Tune-Up".to_owned(),
            "Fourteen workouts in fourteen days".to_owned(),
            "workout".to_owned(),
            14,
            month_end,
        ),
        Challenge::new(
            "Hydration Habit".to_owned(),
            "Hit your daily water target for ten days".to_owned(),
            "nutrition".to_owned(),
            10,
            month_end,
        ),
    ]
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(database_url) = args.database_url {
        config.database.url = fitsphere::config::DatabaseUrl::parse_url(&database_url);
    }

    let database = Database::new(&config.database.url.to_connection_string()).await?;

    for challenge in starter_challenges() {
        database.create_challenge(&challenge).await?;
        info!("seeded challenge: {}", challenge.title);
    }

    info!("done");
    Ok(())
}
