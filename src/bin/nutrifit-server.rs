// ABOUTME: Server binary for the Nutrifit REST API
// ABOUTME: Loads configuration, opens the database, and serves the axum router until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutrifit Server Binary
//!
//! Starts the HTTP API with bearer authentication and `SQLite` storage.

use anyhow::Result;
use clap::Parser;
use nutrifit_server::{
    config::environment::ServerConfig, constants::routes::API_V1, logging,
    resources::ServerResources, routes::build_router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "nutrifit-server")]
#[command(about = "Nutrifit - nutrition and fitness tracking API")]
pub struct Args {
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

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database.url = database_url;
    }
    config.validate()?;

    info!("Starting Nutrifit API");
    info!("{}", config.summary());

    let bind_address = config.bind_address();
    let resources = Arc::new(ServerResources::from_config(config).await?);
    info!("Database initialized and migrated");

    let router = build_router(resources);
    let listener = TcpListener::bind(&bind_address).await?;
    info!("Listening on {bind_address}");
    display_available_endpoints();

    if let Err(e) = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server stopped");
    Ok(())
}

/// Wait for Ctrl+C
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received, draining connections");
}

/// Display all available API endpoints
fn display_available_endpoints() {
    info!("=== Available API Endpoints ===");
    info!("Health:");
    info!("  GET    /");
    info!("  GET    /health");
    info!("  GET    /ready");
    info!("Authentication:");
    info!("  POST   {API_V1}/auth/register");
    info!("  POST   {API_V1}/auth/login");
    info!("Profile:");
    info!("  GET    {API_V1}/users/me");
    info!("  PUT    {API_V1}/users/me");
    info!("  POST   {API_V1}/users/weight");
    info!("  GET    {API_V1}/users/weight/history");
    info!("Logs:");
    info!("  GET    {API_V1}/meals");
    info!("  POST   {API_V1}/meals");
    info!("  DELETE {API_V1}/meals/{{meal_id}}");
    info!("  GET    {API_V1}/workouts");
    info!("  POST   {API_V1}/workouts");
    info!("  DELETE {API_V1}/workouts/{{workout_id}}");
    info!("  GET    {API_V1}/water");
    info!("  POST   {API_V1}/water");
    info!("  DELETE {API_V1}/water");
}
