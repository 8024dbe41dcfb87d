use service_core::error::AppError;
use service_core::observability::init_tracing;
use users_service::config::UsersConfig;
use users_service::Application;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Load configuration - fail fast if invalid
    let config = UsersConfig::load()?;

    init_tracing("users-service", &config.common.log_level);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        backend = ?config.database.backend,
        "Starting users service"
    );

    let app = Application::build(config).await?;
    app.run_until_stopped().await?;

    tracing::info!("Server stopped");
    Ok(())
}
