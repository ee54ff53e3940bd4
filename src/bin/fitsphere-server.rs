// ABOUTME: Server binary wiring configuration, logging, storage, and the router
// ABOUTME: Runs the FitSphere REST API until interrupted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitSphere

//! # FitSphere API Server Binary

use anyhow::Result;
use clap::Parser;
use fitsphere::{
    auth::AuthManager,
    config::ServerConfig,
    database_plugins::{factory::Database, DatabaseProvider},
    logging,
    server::{self, ServerResources},
};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "fitsphere-server")]
#[command(about = "FitSphere API - fitness tracking and recommendation backend")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database.url = fitsphere::config::DatabaseUrl::parse_url(&database_url);
    }

    logging::init_from_env()?;

    info!("Starting FitSphere API");
    info!("{}", config.summary());

    let database = Database::new(&config.database.url.to_connection_string()).await?;
    info!("Database initialized: {}", database.backend_info());

    let auth_manager = AuthManager::new(
        config.auth.jwt_secret.clone(),
        config.auth.token_expiry_hours,
    );

    let resources = Arc::new(ServerResources::new(
        database,
        auth_manager,
        Arc::new(config),
    ));

    server::serve(resources).await
}
