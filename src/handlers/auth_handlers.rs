//! Credential issuance.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::{errors::AppError, state::AppState};

/// Placeholder identity embedded in issued credentials.
const BOOTSTRAP_USERNAME: &str = "testUser";

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// `GET /token` — issue a signed credential with a fixed placeholder identity.
///
/// Unauthenticated and unlimited: this endpoint exists only to bootstrap
/// testing of the authentication gate. It must not be exposed in a hardened
/// deployment.
pub async fn issue_token(State(state): State<AppState>) -> Result<Json<TokenResponse>, AppError> {
    let token = state
        .signer
        .issue(BOOTSTRAP_USERNAME)
        .map_err(|err| AppError::internal(err.to_string()))?;

    Ok(Json(TokenResponse { token }))
}
