use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use migration::{Migrator, MigratorTrait};
use sea_orm::Database;
use student_service::{
    app, bootstrap, config::Config, state::AppState, utils::tracing::init_standard_tracing,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::parse();
    let page_settings = config.page_settings()?;

    init_standard_tracing(env!("CARGO_CRATE_NAME"), &config.log_level);

    tracing::info!("Starting application...");

    let db = Database::connect(&config.database_url)
        .await
        .context("Database connection failed")?;

    Migrator::up(&db, None)
        .await
        .context("Failed to run database migrations")?;

    if config.seed_on_startup {
        bootstrap::seed_students(&db).await?;
    }

    let state = AppState::new(db, page_settings);
    let app = app::create_app(state, config.swagger_enabled);

    let address = format!("0.0.0.0:{}", config.port);

    tracing::info!("Server listening on {}", &address);
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Failed to start server")?;

    Ok(())
}
