//! Client configuration.
//!
//! The endpoint and user-facing strings are constants. On native builds the
//! endpoint can be overridden through `LABSIMPLIFY_API_URL` (a `.env` file
//! is loaded first) or the CLI's `--api-url` flag.

/// Endpoint of the summarizing service.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/simplify";

/// Environment variable overriding [`DEFAULT_API_URL`].
pub const API_URL_ENV: &str = "LABSIMPLIFY_API_URL";

/// Multipart field carrying the report.
pub const FILE_FIELD: &str = "file";

/// `accept` filter of the file picker.
pub const PICKER_ACCEPT: &str = ".pdf,image/*";

/// Prefix of the message shown for non-2xx responses.
pub const API_ERROR_PREFIX: &str = "API error: ";

/// Shown when a transport failure carries no description.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to process the file";

/// Shown when a 2xx body has no usable `summary`.
pub const MALFORMED_RESPONSE_MESSAGE: &str = "Invalid response from server: missing summary";

#[cfg(feature = "native")]
pub use native::ClientConfig;

#[cfg(feature = "native")]
mod native {
    use std::env;

    use reqwest::Url;

    use super::{API_URL_ENV, DEFAULT_API_URL};
    use crate::error::ConfigError;

    /// Runtime configuration of the native client.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ClientConfig {
        /// Full URL the report is posted to.
        pub api_url: String,
    }

    impl Default for ClientConfig {
        fn default() -> Self {
            Self {
                api_url: DEFAULT_API_URL.to_string(),
            }
        }
    }

    impl ClientConfig {
        /// Build from the environment, loading `.env` if present.
        pub fn from_env() -> Result<Self, ConfigError> {
            let _ = dotenvy::dotenv();

            match env::var(API_URL_ENV) {
                Ok(url) if !url.trim().is_empty() => Self::default().with_api_url(url.trim()),
                _ => Ok(Self::default()),
            }
        }

        /// Replace the endpoint after checking it is an absolute http(s) URL.
        pub fn with_api_url(mut self, url: &str) -> Result<Self, ConfigError> {
            let parsed = Url::parse(url).map_err(|e| ConfigError::InvalidApiUrl {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(ConfigError::InvalidApiUrl {
                    url: url.to_string(),
                    reason: format!("unsupported scheme '{}'", parsed.scheme()),
                });
            }

            self.api_url = url.to_string();
            Ok(self)
        }
    }

}
