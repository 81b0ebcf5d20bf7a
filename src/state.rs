//! Shared application state.

use std::sync::Arc;

use crate::auth::jwt::TokenSigner;
use crate::services::object_store::ObjectStore;

/// State carried by the router to all handlers.
///
/// Built once at startup from the parsed configuration; nothing in here is
/// mutated across requests.
#[derive(Clone)]
pub struct AppState {
    /// External object store the transfer paths call into.
    pub store: Arc<dyn ObjectStore>,

    /// Signs and verifies bearer credentials.
    pub signer: TokenSigner,

    /// Base URL retrieval links are built from.
    pub app_url: String,
}

impl AppState {
    pub fn new(store: Arc<dyn ObjectStore>, signer: TokenSigner, app_url: String) -> Self {
        Self {
            store,
            signer,
            app_url,
        }
    }

    /// Fully qualified retrieval URL for a stored key.
    pub fn download_url(&self, key: &str) -> String {
        format!("{}/download/{}", self.app_url.trim_end_matches('/'), key)
    }
}
