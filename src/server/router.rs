use std::sync::Arc;
use std::time::Instant;

use axum::extract::{DefaultBodyLimit, Request};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::post;
use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use super::catalog::catalog_router;
use super::multipart::MAX_UPLOAD_SIZE;
use super::{auth, contact};
use crate::media::MediaStore;
use crate::server::contact::Mailer;
use crate::store::Store;

pub struct AppState {
    pub store: Arc<dyn Store>,
    pub media: MediaStore,
    pub mailer: Arc<dyn Mailer>,
}

async fn health() -> &'static str {
    "OK"
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;

    let latency = start.elapsed();
    let status = response.status();

    tracing::info!(
        "{} {} {} {}ms",
        method,
        uri.path(),
        status.as_u16(),
        latency.as_millis()
    );

    response
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let uploads = ServeDir::new(state.media.uploads_dir().to_path_buf());

    Router::new()
        .route("/health", get(health))
        .nest("/api", catalog_router())
        .route("/api/login", post(auth::login))
        .route("/api/change-password", post(auth::change_password))
        .route("/api/contact", post(contact::submit_contact))
        .nest_service("/uploads", uploads)
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_SIZE + 64 * 1024))
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}
