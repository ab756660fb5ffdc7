use std::fmt::{Debug, Formatter};

use super::constants::*;
use super::credential::Credential;
use bookingapi_core::utils::Redact;

/// Which deployment of the booking API requests are sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiMode {
    /// Production API at [`LIVE_ENDPOINT`].
    #[default]
    Live,
    /// Staging API at [`STAGING_ENDPOINT`].
    Staging,
}

/// Config carries all the configuration for the booking API client.
///
/// Nothing is read from the environment or the filesystem, callers resolve
/// credentials themselves and hand them over here.
#[derive(Clone, Default)]
pub struct Config {
    /// Access id placed in front of the signature.
    pub access_id: Option<String>,
    /// Shared secret used to sign requests.
    pub signing_key: Option<Vec<u8>>,
    /// Live or staging API.
    pub mode: ApiMode,
    /// Override for the live base address.
    pub live_endpoint: Option<String>,
    /// Override for the staging base address.
    pub staging_endpoint: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set access_id
    pub fn with_access_id(mut self, access_id: impl Into<String>) -> Self {
        self.access_id = Some(access_id.into());
        self
    }

    /// Set signing_key
    pub fn with_signing_key(mut self, signing_key: impl AsRef<[u8]>) -> Self {
        self.signing_key = Some(signing_key.as_ref().to_vec());
        self
    }

    /// Set mode
    pub fn with_mode(mut self, mode: ApiMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set live_endpoint
    pub fn with_live_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.live_endpoint = Some(endpoint.into());
        self
    }

    /// Set staging_endpoint
    pub fn with_staging_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.staging_endpoint = Some(endpoint.into());
        self
    }

    /// Build the credential if both halves are present.
    ///
    /// Empty values are kept: the executor rejects them with
    /// `CredentialMissing` before anything is sent.
    pub fn credential(&self) -> Option<Credential> {
        match (&self.access_id, &self.signing_key) {
            (Some(id), Some(key)) => Some(Credential::new(id.clone(), key)),
            _ => None,
        }
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("access_id", &self.access_id.as_ref().map(Redact::from))
            .field("signing_key", &self.signing_key.as_ref().map(Redact::from))
            .field("mode", &self.mode)
            .field("live_endpoint", &self.live_endpoint)
            .field("staging_endpoint", &self.staging_endpoint)
            .finish()
    }
}

/// Base addresses for both modes, with overrides applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Endpoints {
    live: String,
    staging: String,
}

impl Endpoints {
    pub(crate) fn from_config(config: &Config) -> Self {
        Self {
            live: config
                .live_endpoint
                .clone()
                .unwrap_or_else(|| LIVE_ENDPOINT.to_string()),
            staging: config
                .staging_endpoint
                .clone()
                .unwrap_or_else(|| STAGING_ENDPOINT.to_string()),
        }
    }

    pub(crate) fn get(&self, mode: ApiMode) -> &str {
        match mode {
            ApiMode::Live => &self.live,
            ApiMode::Staging => &self.staging,
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_needs_both_halves() {
        assert!(Config::new().with_access_id("xxxx").credential().is_none());
        assert!(Config::new().with_signing_key("xxxxxxx").credential().is_none());

        let cred = Config::new()
            .with_access_id("xxxx")
            .with_signing_key("xxxxxxx")
            .credential()
            .unwrap();
        assert_eq!("xxxx", cred.access_id);
        assert_eq!(b"xxxxxxx".to_vec(), cred.signing_key);
    }

    #[test]
    fn test_endpoints() {
        let endpoints = Endpoints::default();
        assert_eq!(LIVE_ENDPOINT, endpoints.get(ApiMode::Live));
        assert_eq!(STAGING_ENDPOINT, endpoints.get(ApiMode::Staging));

        let endpoints = Endpoints::from_config(
            &Config::new().with_staging_endpoint("http://127.0.0.1:8080"),
        );
        assert_eq!(LIVE_ENDPOINT, endpoints.get(ApiMode::Live));
        assert_eq!("http://127.0.0.1:8080", endpoints.get(ApiMode::Staging));
    }

    #[test]
    fn test_debug_is_redacted() {
        let config = Config::new()
            .with_access_id("xxxx")
            .with_signing_key("a-very-secret-key");
        let s = format!("{config:?}");
        assert!(!s.contains("a-very-secret-key"));
    }
}
