//! HTTP handlers for the transfer paths.
//!
//! Both paths are single-shot pass-throughs: one store call per request,
//! no retries, no local buffering beyond the request/response bodies.

use axum::{
    Extension, Json,
    body::Body,
    extract::{Multipart, Path, State},
    http::{HeaderValue, StatusCode, header},
    response::Response,
};
use serde::Serialize;
use tracing::{debug, error};

use crate::{
    auth::jwt::Claims,
    errors::AppError,
    models::object::ObjectKey,
    services::object_store::StoreError,
    state::AppState,
};

/// Form field the upload must arrive under.
const UPLOAD_FIELD: &str = "image";

/// Body returned by a successful upload.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
}

/// `POST /upload` — store one multipart file field and return its retrieval URL.
pub async fn upload_object(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::bad_request(err.to_string()))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or("unnamed").to_string();
        let declared_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|err| AppError::bad_request(err.to_string()))?;

        // Prefer the type the client declared for the part; fall back to
        // guessing from the filename.
        let content_type = declared_type.unwrap_or_else(|| {
            mime_guess::from_path(&filename)
                .first_or_octet_stream()
                .to_string()
        });

        let key = ObjectKey::generate(&filename);
        debug!(
            user = %claims.username,
            key = %key,
            size = data.len(),
            "uploading object"
        );

        state
            .store
            .put_object(key.as_str(), &content_type, data)
            .await
            .map_err(|err| {
                error!("upload transfer failed: {}", err);
                AppError::internal("upload failed")
            })?;

        return Ok(Json(UploadResponse {
            url: state.download_url(key.as_str()),
        }));
    }

    Err(AppError::bad_request(format!(
        "multipart field `{}` is required",
        UPLOAD_FIELD
    )))
}

/// `GET /download/{key}` — stream a stored object back verbatim.
///
/// The key must exactly match a previously generated one; no normalization
/// or existence pre-check happens here.
pub async fn download_object(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Response, AppError> {
    let object = state.store.get_object(&key).await.map_err(|err| match err {
        StoreError::NotFound(_) => AppError::not_found(err.to_string()),
        other => {
            error!("download transfer failed: {}", other);
            AppError::bad_request("download failed")
        }
    })?;

    let content_type = object
        .content_type
        .unwrap_or_else(|| "application/octet-stream".into());

    let mut response = Response::new(Body::from(object.body));
    *response.status_mut() = StatusCode::OK;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_str(&content_type)
            .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream")),
    );

    Ok(response)
}
