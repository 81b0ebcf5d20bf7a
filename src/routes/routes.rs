//! Defines routes for the file gateway.
//!
//! ## Structure
//! - **Protected endpoints** (bearer credential required)
//!   - `POST /upload`          — store one multipart file field
//!   - `GET  /download/{key}`  — stream a stored object back by key
//!
//! - **Open endpoints**
//!   - `GET  /token`   — issue a bootstrap credential
//!   - `GET  /healthz` — liveness
//!   - `GET  /readyz`  — readiness (object-store connectivity)

use crate::{
    auth::middleware::require_auth,
    handlers::{
        auth_handlers::issue_token,
        health_handlers::{healthz, readyz},
        object_handlers::{download_object, upload_object},
    },
    state::AppState,
};
use axum::{
    Router, middleware,
    routing::{get, post},
};

/// Build and return the gateway router.
///
/// The transfer routes are layered behind the authentication gate; the
/// token and health endpoints stay open. The router carries shared state
/// (`AppState`) to all handlers.
pub fn routes(state: AppState) -> Router {
    let protected = Router::new()
        .route("/upload", post(upload_object))
        .route("/download/{key}", get(download_object))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .merge(protected)
        .route("/token", get(issue_token))
        // health endpoints (mounted at root)
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .with_state(state)
}
