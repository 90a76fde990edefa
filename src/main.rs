//! Campus Ledger - Main Application Entry Point
//!
//! REST API server hosting two independent transactional services: a
//! bank-account ledger (withdraw/deposit with balance checks) and a
//! course-registration workflow (enroll, list, unenroll with time-based
//! eligibility and loyalty pricing).
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx (async queries)
//! - **Layering**: handlers → services → stores; business rules live in
//!   the services and reach the database only through store traits
//! - **Format**: JSON requests/responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create database connection pool
//! 3. Run database migrations
//! 4. Build HTTP router
//! 5. Start server on configured port

mod config;
mod db;
mod error;
mod handlers;
mod models;
mod services;
mod stores;

use tracing_subscriber::EnvFilter;

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Create database pool
    let pool = db::create_pool(&config.database_url).await?;
    tracing::info!("Database pool created");

    // Run migrations
    db::run_migrations(&pool).await?;
    tracing::info!("Database migrations complete");

    let app = Router::new()
        .route("/health", get(handlers::health::health_check))
        // Bank account routes (errors surface as 200 with a message body)
        .route(
            "/bankaccount/drawmoney",
            post(handlers::bank_account::draw_money),
        )
        .route(
            "/bankaccount/depositmoney",
            post(handlers::bank_account::deposit_money),
        )
        // Course registration routes
        .route("/register", post(handlers::registration::register))
        .route(
            "/registered-courses/{email}",
            get(handlers::registration::registered_courses),
        )
        .route(
            "/unregister/{course_id}/{email}",
            delete(handlers::registration::unregister),
        )
        // Add tracing middleware for observability
        .layer(TraceLayer::new_for_http())
        // Share database pool with all handlers via State extraction
        .with_state(pool);

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Start serving HTTP requests
    // This blocks forever, handling requests concurrently with tokio
    axum::serve(listener, app).await?;

    Ok(())
}
