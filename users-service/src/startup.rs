use crate::config::{DatabaseBackend, DatabaseConfig, UsersConfig};
use crate::handlers;
use crate::services::{InMemoryUserStore, MongoDb, UserStore};
use axum::{middleware, routing::get, Router};
use service_core::error::AppError;
use service_core::middleware::request_id_middleware;
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: UsersConfig,
    pub store: Arc<dyn UserStore>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health_check))
        .route("/api/ready", get(handlers::readiness_check))
        .route(
            "/api/users",
            get(handlers::list_users).post(handlers::create_user),
        )
        .route(
            "/api/users/:id",
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Open the configured backend once; the handle is shared by every request.
pub async fn connect_store(config: &DatabaseConfig) -> Result<Arc<dyn UserStore>, AppError> {
    match config.backend {
        DatabaseBackend::MongoDb => {
            let uri = config.uri.as_deref().ok_or_else(|| {
                AppError::ConfigError(anyhow::anyhow!("MONGODB_URI is required but not set"))
            })?;
            let db = MongoDb::connect(uri, &config.name).await?;
            db.initialize_indexes().await.map_err(|e| {
                tracing::error!("Failed to initialize database indexes: {}", e);
                e
            })?;
            Ok(Arc::new(db))
        }
        DatabaseBackend::Memory => {
            tracing::warn!("Using in-memory user store; data is lost on restart");
            Ok(Arc::new(InMemoryUserStore::new()))
        }
    }
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
    state: AppState,
}

impl Application {
    pub async fn build(config: UsersConfig) -> Result<Self, AppError> {
        let store = connect_store(&config.database).await?;
        Self::with_store(config, store).await
    }

    pub async fn with_store(
        config: UsersConfig,
        store: Arc<dyn UserStore>,
    ) -> Result<Self, AppError> {
        let state = AppState {
            config: config.clone(),
            store,
        };

        let app = build_router(state.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Server is running on port {}", port);

        let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
            state,
        })
    }

    pub fn store(&self) -> Arc<dyn UserStore> {
        self.state.store.clone()
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
