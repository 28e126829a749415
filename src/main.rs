mod api;
mod app;
mod config;
mod container;
mod domain;
mod infrastructure;
mod opentelemetry;
mod services;

use config::AppConfig;
use container::Container;
use infrastructure::databases::postgres;

use actix_web::HttpServer;
use clap::{Parser, Subcommand};
use sqlx::PgPool;
use std::sync::Arc;
use thiserror::Error;

#[cfg(test)]
mod tests;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error(transparent)]
    Configuration(#[from] figment::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    OTel(#[from] opentelemetry::OTelError),
}

#[derive(Parser)]
#[command(name = "customer-accounts", version)]
#[command(about = "Customer Accounts REST API Service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Serve the REST API (default)
    Serve,
    /// Drop all tables and re-create them (WARNING: destroys data)
    DbCreate,
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let config = AppConfig::load()?;

    let provider = opentelemetry::configure(&config.service, &config.logging)?;

    let pool = postgres::connect(&config.database).await?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(&config, pool).await?,
        Commands::DbCreate => {
            postgres::recreate_schema(&pool).await?;
            println!("Database tables created.");
        }
    }

    opentelemetry::shutdown(provider)?;

    Ok(())
}

async fn serve(config: &AppConfig, pool: PgPool) -> Result<(), AppError> {
    if config.database.create_schema {
        postgres::create_schema(&pool).await?;
    }

    let container = Arc::new(Container::new(pool));

    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        "Customer Accounts Service starting"
    );

    HttpServer::new(move || app::create(Arc::clone(&container)))
        .bind((config.server.host.as_str(), config.server.port))?
        .run()
        .await?;

    Ok(())
}

#[actix_web::main]
async fn main() {
    if let Err(err) = run(Cli::parse()).await {
        panic!("{err}");
    }
}
