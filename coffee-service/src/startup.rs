use crate::config::CoffeeConfig;
use crate::handlers;
use crate::services::{CoffeeRepository, MongoDb};
use axum::http::Method;
use axum::middleware::from_fn;
use axum::routing::{delete, get};
use axum::Router;
use service_core::error::AppError;
use service_core::middleware::metrics::metrics_middleware;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: CoffeeConfig,
    pub db: MongoDb,
    pub repository: CoffeeRepository,
}

pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
    state: AppState,
}

impl Application {
    pub async fn build(config: CoffeeConfig) -> Result<Self, AppError> {
        let db = MongoDb::connect(&config.mongodb.uri, &config.mongodb.database).await?;

        // The startup ping runs alongside route registration rather than
        // gating it: requests are accepted while the store is unreachable,
        // each failing independently against the driver.
        let ping_db = db.clone();
        tokio::spawn(async move {
            match ping_db.health_check().await {
                Ok(()) => tracing::info!("Pinged MongoDB deployment; connection confirmed"),
                Err(e) => {
                    tracing::warn!(error = %e, "MongoDB unreachable at startup; serving anyway")
                }
            }
        });

        let repository = CoffeeRepository::new(db.database());

        let state = AppState {
            config: config.clone(),
            db: db.clone(),
            repository,
        };

        let router = Router::new()
            .route("/", get(handlers::health::liveness))
            .route("/health", get(handlers::health::health_check))
            .route("/ready", get(handlers::health::readiness_check))
            .route("/metrics", get(handlers::health::metrics_endpoint))
            .route(
                "/coffee",
                get(handlers::coffee::list_coffee).post(handlers::coffee::create_coffee),
            )
            .route(
                "/coffee/:id",
                get(handlers::coffee::get_coffee)
                    .put(handlers::coffee::replace_coffee)
                    .delete(handlers::coffee::delete_coffee),
            )
            .route(
                "/user",
                get(handlers::user::list_users)
                    .post(handlers::user::create_user)
                    .patch(handlers::user::update_last_login),
            )
            .route("/user/:id", delete(handlers::user::delete_user))
            .layer(from_fn(metrics_middleware))
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        version = ?request.version(),
                    )
                }),
            )
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods([
                        Method::GET,
                        Method::POST,
                        Method::PUT,
                        Method::PATCH,
                        Method::DELETE,
                        Method::OPTIONS,
                    ])
                    .allow_headers(Any),
            )
            .with_state(state.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("coffee server is running on port {}", port);

        Ok(Self {
            port,
            listener,
            router,
            state,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn db(&self) -> &MongoDb {
        &self.state.db
    }

    pub async fn run_until_stopped(self) -> Result<(), AppError> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server stopped; releasing MongoDB client");
        self.state.db.client().clone().shutdown().await;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
