//! Azure storage configuration

use std::env;

use tracing::debug;

/// Azure storage configuration
#[derive(Debug, Clone, Default)]
pub struct AzureStorageConfig {
    /// Shared access signature for blob access
    pub shared_access_signature: Option<String>,
    /// Storage account name
    pub account: Option<String>,
    /// Blob endpoint URL (for Azurite or other emulators)
    pub endpoint: Option<String>,
    /// Allow HTTP (not HTTPS) connections
    pub allow_http: bool,
}

impl AzureStorageConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        let config = Self::from_lookup(|key| env::var(key).ok());

        debug!(
            has_sas = config.shared_access_signature.is_some(),
            account = ?config.account,
            endpoint = ?config.endpoint,
            allow_http = config.allow_http,
            "Loaded Azure storage configuration from environment"
        );

        config
    }

    /// Load configuration through an injectable key lookup
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            shared_access_signature: lookup("AZURE_STORAGE_SHARED_ACCESS_SIGNATURE"),
            account: lookup("AZURE_STORAGE_ACCOUNT"),
            endpoint: lookup("AZURE_STORAGE_ENDPOINT"),
            allow_http: lookup("AZURE_STORAGE_ALLOW_HTTP")
                .map(|v| parse_bool(&v))
                .unwrap_or(false),
        }
    }

    /// Shared access signature for blob access.
    ///
    /// Wrapping the lookup into a method to ease testing.
    pub fn shared_access_signature(&self) -> Option<&str> {
        self.shared_access_signature.as_deref()
    }
}

fn parse_bool(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}
