//! Authentication middleware.

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use tracing::warn;

use crate::errors::AppError;
use crate::state::AppState;

/// Gate applied to every transfer route before upload/download logic runs.
///
/// The `Authorization` header carries the raw signed token, not the
/// conventional `Bearer <token>` scheme. A missing header is rejected with
/// 401 before any verification is attempted; a present-but-invalid token is
/// rejected with 403. On success the decoded claims are stored in request
/// extensions for handlers to consume.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    let Some(token) = token else {
        return Err(AppError::unauthenticated("Access Denied"));
    };

    let claims = state.signer.verify(&token).map_err(|err| {
        warn!("rejected credential: {}", err);
        AppError::forbidden(err.to_string())
    })?;

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
