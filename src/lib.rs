//! Azure Blob Datastore Adapter Layer
//!
//! This crate provides the addressing and error-normalization layer that an
//! Azure blob storage backend exposes to a pluggable-storage datastore:
//! parsing datastore root paths into (container, key prefix), translating
//! `object_store` errors into a stable internal taxonomy, and caching
//! default-credential handles by their construction arguments.

pub mod config;
pub mod credential;
pub mod error;
pub mod path;

pub use config::AzureStorageConfig;
pub use credential::CacheableCredential;
pub use error::{DatastoreError, NormalizeErr, normalize, normalize_any};
pub use path::StoragePath;
