//! Datastore error types and SDK error normalization
//!
//! All Azure blob integration code should route SDK failures through
//! [`normalize`] (or the [`NormalizeErr`] adapter) so callers only ever see
//! the small taxonomy below and never need to match on `object_store` types
//! directly.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatastoreError {
    #[error("Invalid storage path: {0}")]
    Validation(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Resource error: {0}")]
    Resource(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Translate an `object_store` error into a [`DatastoreError`].
///
/// Mapping, first match wins:
/// - authentication or permission failures become [`DatastoreError::Authentication`],
///   keeping only the last line of the SDK message (the credential chain
///   prepends multi-line diagnostics that bury the actual reason),
/// - not-found and already-exists become [`DatastoreError::Resource`] with the
///   full message,
/// - any other SDK error becomes [`DatastoreError::Internal`] tagged with the
///   backend name.
///
/// This layer performs no retries and no recovery, it only normalizes error
/// shape before propagating.
pub fn normalize(err: object_store::Error) -> DatastoreError {
    match &err {
        object_store::Error::Unauthenticated { .. }
        | object_store::Error::PermissionDenied { .. } => {
            let message = err.to_string();
            DatastoreError::Authentication(message.lines().last().unwrap_or_default().to_string())
        }
        object_store::Error::NotFound { .. } | object_store::Error::AlreadyExists { .. } => {
            DatastoreError::Resource(err.to_string())
        }
        _ => DatastoreError::Internal(format!("Azure error: {}", err)),
    }
}

/// Normalize an arbitrary boxed error.
///
/// SDK errors are routed through [`normalize`]; anything unrecognized becomes
/// an untagged [`DatastoreError::Internal`] with its full message.
pub fn normalize_any(err: Box<dyn std::error::Error + Send + Sync + 'static>) -> DatastoreError {
    match err.downcast::<object_store::Error>() {
        Ok(sdk_err) => normalize(*sdk_err),
        Err(other) => DatastoreError::Internal(other.to_string()),
    }
}

/// Boundary adapter for calls into the SDK.
///
/// Wrap every `object_store` result at the call site so normalization is
/// applied uniformly:
///
/// ```ignore
/// store.head(&path).await.normalize_err()?;
/// ```
pub trait NormalizeErr<T> {
    fn normalize_err(self) -> Result<T, DatastoreError>;
}

impl<T> NormalizeErr<T> for Result<T, object_store::Error> {
    fn normalize_err(self) -> Result<T, DatastoreError> {
        self.map_err(normalize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(message: &str) -> Box<dyn std::error::Error + Send + Sync + 'static> {
        message.to_string().into()
    }

    #[test]
    fn test_authentication_error_keeps_last_line_only() {
        let err = object_store::Error::Unauthenticated {
            path: "flows/data".to_string(),
            source: source("line1\nline2\nTHE REAL REASON"),
        };

        match normalize(err) {
            DatastoreError::Authentication(msg) => assert_eq!(msg, "THE REAL REASON"),
            other => panic!("expected Authentication, got {:?}", other),
        }
    }

    #[test]
    fn test_permission_denied_maps_to_authentication() {
        let err = object_store::Error::PermissionDenied {
            path: "flows/data".to_string(),
            source: source("access denied"),
        };

        assert!(matches!(
            normalize(err),
            DatastoreError::Authentication(_)
        ));
    }

    #[test]
    fn test_not_found_preserves_full_message() {
        let err = object_store::Error::NotFound {
            path: "flows/data/obj".to_string(),
            source: source("blob does not exist"),
        };
        let full_message = err.to_string();

        match normalize(err) {
            DatastoreError::Resource(msg) => assert_eq!(msg, full_message),
            other => panic!("expected Resource, got {:?}", other),
        }
    }

    #[test]
    fn test_already_exists_maps_to_resource() {
        let err = object_store::Error::AlreadyExists {
            path: "flows/data/obj".to_string(),
            source: source("blob already exists"),
        };

        assert!(matches!(normalize(err), DatastoreError::Resource(_)));
    }

    #[test]
    fn test_other_sdk_error_is_tagged_internal() {
        let err = object_store::Error::Generic {
            store: "MicrosoftAzure",
            source: source("request timed out"),
        };
        let full_message = err.to_string();

        match normalize(err) {
            DatastoreError::Internal(msg) => {
                assert_eq!(msg, format!("Azure error: {}", full_message));
            }
            other => panic!("expected Internal, got {:?}", other),
        }
    }

    #[test]
    fn test_unrecognized_error_is_untagged_internal() {
        let err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let full_message = err.to_string();

        match normalize_any(Box::new(err)) {
            DatastoreError::Internal(msg) => {
                assert_eq!(msg, full_message);
                assert!(!msg.starts_with("Azure error:"));
            }
            other => panic!("expected Internal, got {:?}", other),
        }
    }

    #[test]
    fn test_normalize_any_recognizes_boxed_sdk_error() {
        let err: Box<dyn std::error::Error + Send + Sync> =
            Box::new(object_store::Error::NotFound {
                path: "flows/data/obj".to_string(),
                source: source("gone"),
            });

        assert!(matches!(normalize_any(err), DatastoreError::Resource(_)));
    }

    #[test]
    fn test_normalize_err_adapter() {
        let ok: Result<u64, object_store::Error> = Ok(42);
        assert_eq!(ok.normalize_err().unwrap(), 42);

        let failed: Result<u64, object_store::Error> = Err(object_store::Error::NotFound {
            path: "flows/data/obj".to_string(),
            source: source("gone"),
        });
        assert!(matches!(
            failed.normalize_err(),
            Err(DatastoreError::Resource(_))
        ));
    }
}
