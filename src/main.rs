mod config;
mod domain;
mod infrastructure;
mod presentation;
mod usecase;

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    config::Config,
    infrastructure::{
        account_repository::SqlAccountRepository, database,
        sha256_password_hasher::Sha256PasswordHasher,
        tracing_registration_logger::TracingRegistrationLogger,
    },
    presentation::handlers::registration_handler::create_registration_router,
    usecase::register_user_usecase::RegisterUserUsecase,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = Config::from_env();
    tracing::debug!(?config, "Configuration loaded");

    let db = database::connect(&config).await?;
    let account_repository = SqlAccountRepository::new(db);
    let password_hasher = Sha256PasswordHasher::new();
    let logger = TracingRegistrationLogger::new();
    let register_user_usecase =
        RegisterUserUsecase::new(account_repository, password_hasher, logger);

    let app = Router::new()
        .route("/", get(|| async { "Hello, Axum!!!" }))
        .nest("/api", create_registration_router(register_user_usecase));

    let listener = TcpListener::bind(config.server_addr()).await?;
    tracing::info!(addr = %config.server_addr(), "Listening");
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

/// RUST_LOG overrides the default `info` filter
fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
