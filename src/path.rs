//! Storage path addressing
//!
//! A datastore root is addressed as `<container>/<optional/key/prefix>`.
//! Validation is strict: no leading slash, no trailing slash, no consecutive
//! slashes, non-empty container. No implicit string manipulation is done on
//! the caller's behalf, path handling is complicated enough without magic,
//! and strictness keeps error messages precise.

use std::fmt;

use object_store::path::Path as ObjectPath;

use crate::error::DatastoreError;

/// Parsed datastore root address
///
/// `container` is the blob storage container name; `key_prefix`, when
/// present, is the subpath within the container under which objects live.
/// An absent prefix means the whole container, which is distinct from an
/// empty prefix (the latter would require a trailing slash and is rejected
/// at parse time).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath {
    container: String,
    key_prefix: Option<String>,
}

impl StoragePath {
    /// Parse a full datastore path into a [`StoragePath`].
    ///
    /// The prefix part, when present, is kept verbatim: no trimming and no
    /// normalization, so the caller must supply an already-canonical path.
    pub fn parse(full_path: &str) -> Result<Self, DatastoreError> {
        if full_path.ends_with('/') {
            return Err(DatastoreError::Validation(format!(
                "storage path may not end with a slash (got {})",
                full_path
            )));
        }
        if full_path.starts_with('/') {
            return Err(DatastoreError::Validation(format!(
                "storage path may not start with a slash (got {})",
                full_path
            )));
        }
        if full_path.contains("//") {
            return Err(DatastoreError::Validation(format!(
                "storage path may not contain any consecutive slashes (got {})",
                full_path
            )));
        }

        let mut parts = full_path.splitn(2, '/');
        let container = parts.next().unwrap_or_default();
        if container.is_empty() {
            return Err(DatastoreError::Validation(format!(
                "container part of storage path may not be empty (tried to parse {})",
                full_path
            )));
        }
        let key_prefix = parts.next().map(str::to_string);

        Ok(Self {
            container: container.to_string(),
            key_prefix,
        })
    }

    /// Container name, never empty
    pub fn container(&self) -> &str {
        &self.container
    }

    /// Key prefix within the container, `None` means the whole container
    pub fn key_prefix(&self) -> Option<&str> {
        self.key_prefix.as_deref()
    }

    /// Object path for a key relative to this root.
    ///
    /// `ObjectPath` construction drops empty segments, so joining the prefix
    /// and the key can never produce doubled separators.
    pub fn object_path(&self, key: &str) -> ObjectPath {
        match &self.key_prefix {
            Some(prefix) => ObjectPath::from(format!("{}/{}", prefix, key)),
            None => ObjectPath::from(key),
        }
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.key_prefix {
            Some(prefix) => write!(f, "{}/{}", self.container, prefix),
            None => write!(f, "{}", self.container),
        }
    }
}
