//! Represents an object fetched from or headed to the external store.

use bytes::Bytes;
use chrono::Utc;
use uuid::Uuid;

/// A stored object as the external store returns it: the content type it
/// recorded at upload time and the raw payload bytes.
///
/// The gateway never inspects or rewrites the payload; both fields are
/// echoed back to the client verbatim.
#[derive(Debug, Clone)]
pub struct StoredObject {
    /// Content type recorded by the store, if any.
    pub content_type: Option<String>,

    /// Raw object payload.
    pub body: Bytes,
}

/// The key an uploaded object is stored under and later retrieved by.
///
/// Keys combine the upload timestamp (millisecond precision), a random
/// segment, and the client-supplied filename's final path component:
/// `{millis}-{random}-{filename}`. The random segment keeps concurrent
/// uploads at the same millisecond from colliding. Once a key has been
/// handed to a client it is never invalidated or rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectKey(String);

impl ObjectKey {
    /// Generate a fresh key for an upload of `filename`.
    pub fn generate(filename: &str) -> Self {
        // Directory components in client filenames would break the single
        // path segment the retrieval URL uses; keep only the basename.
        let basename = filename
            .rsplit(['/', '\\'])
            .next()
            .filter(|name| !name.is_empty())
            .unwrap_or("unnamed");

        Self(format!(
            "{}-{}-{}",
            Utc::now().timestamp_millis(),
            Uuid::new_v4().simple(),
            basename
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_keeps_original_filename() {
        let key = ObjectKey::generate("report.pdf");
        assert!(key.as_str().ends_with("-report.pdf"));
    }

    #[test]
    fn test_key_strips_directory_components() {
        let key = ObjectKey::generate("../../etc/passwd");
        assert!(key.as_str().ends_with("-passwd"));
        assert!(!key.as_str().contains('/'));

        let key = ObjectKey::generate("C:\\Users\\photo.jpg");
        assert!(key.as_str().ends_with("-photo.jpg"));
        assert!(!key.as_str().contains('\\'));
    }

    #[test]
    fn test_empty_filename_falls_back() {
        let key = ObjectKey::generate("");
        assert!(key.as_str().ends_with("-unnamed"));
    }

    #[test]
    fn test_same_filename_produces_distinct_keys() {
        // Even within the same millisecond the random segment differs.
        let first = ObjectKey::generate("photo.jpg");
        let second = ObjectKey::generate("photo.jpg");
        assert_ne!(first, second);
    }
}
