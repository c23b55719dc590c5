use crate::config::GalleryConfig;
use crate::handlers;
use crate::models::UPLOADS_URL_PREFIX;
use crate::services::{ImageStore, LocalImageStore};
use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{metrics_middleware, request_id_middleware, REQUEST_ID_HEADER};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: GalleryConfig,
    pub store: Arc<dyn ImageStore>,
}

impl AppState {
    pub fn new(config: GalleryConfig) -> Self {
        let store: Arc<dyn ImageStore> =
            Arc::new(LocalImageStore::new(config.storage.upload_dir.clone()));
        Self { config, store }
    }
}

/// API routes, `/uploads` and the public asset directory as fallback.
pub fn build_router(state: AppState) -> Router {
    let uploads = ServeDir::new(&state.config.storage.upload_dir);
    let assets = ServeDir::new(&state.config.storage.public_dir);

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .route("/images/:region", get(handlers::list_images))
        .route(
            "/upload",
            post(handlers::upload_image).layer(DefaultBodyLimit::max(
                state.config.limits.max_upload_bytes,
            )),
        )
        .nest_service(UPLOADS_URL_PREFIX, uploads)
        .fallback_service(assets)
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    pub async fn build(config: GalleryConfig) -> Result<Self, AppError> {
        let state = AppState::new(config.clone());
        let router = build_router(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            port,
            upload_dir = %config.storage.upload_dir.display(),
            public_dir = %config.storage.public_dir.display(),
            "Listening on {}",
            port
        );

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
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
            Ok(mut sig) => {
                sig.recv().await;
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
