//! Network seam of the upload controller.
//!
//! A [`Transport`] posts one [`SelectedFile`] as multipart form data with a
//! single part named [`FILE_FIELD`](crate::config::FILE_FIELD), and hands
//! back the raw reply. Interpreting status and body is the controller's job.

use crate::error::TransportError;
use crate::models::SelectedFile;

/// Raw HTTP reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub status_text: String,
    pub body: Vec<u8>,
}

impl HttpReply {
    pub fn new(status: u16, status_text: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body: body.into(),
        }
    }

    /// 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a selected file to the summarizing service.
///
/// One request per call: no retry, no timeout override, no cancellation.
// Futures are not required to be Send: the browser implementation holds
// JS handles across the await.
#[allow(async_fn_in_trait)]
pub trait Transport<B> {
    async fn post_file(&self, file: &SelectedFile<B>) -> Result<HttpReply, TransportError>;
}

#[cfg(feature = "native")]
pub use native::HttpTransport;

#[cfg(feature = "native")]
mod native {
    use reqwest::multipart::{Form, Part};

    use super::{HttpReply, Transport};
    use crate::config::{ClientConfig, FILE_FIELD};
    use crate::error::TransportError;
    use crate::models::SelectedFile;

    /// `reqwest`-backed transport for native builds.
    #[derive(Debug, Clone)]
    pub struct HttpTransport {
        client: reqwest::Client,
        url: String,
    }

    impl HttpTransport {
        pub fn new(url: impl Into<String>) -> Self {
            Self {
                client: reqwest::Client::new(),
                url: url.into(),
            }
        }

        pub fn from_config(config: &ClientConfig) -> Self {
            Self::new(config.api_url.clone())
        }

        pub fn url(&self) -> &str {
            &self.url
        }
    }

    impl Transport<Vec<u8>> for HttpTransport {
        async fn post_file(&self, file: &SelectedFile<Vec<u8>>) -> Result<HttpReply, TransportError> {
            let part = Part::bytes(file.content().clone())
                .file_name(file.name().to_string())
                .mime_str(file.media_type())
                .map_err(|e| TransportError::new(e.to_string()))?;
            let form = Form::new().part(FILE_FIELD, part);

            log::debug!("POST {} ({} bytes)", self.url, file.content().len());
            let response = self
                .client
                .post(&self.url)
                .multipart(form)
                .send()
                .await
                .map_err(|e| TransportError::new(e.to_string()))?;

            let status = response.status();
            let status_text = status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.as_str().to_string());

            let body = response
                .bytes()
                .await
                .map_err(|e| TransportError::new(e.to_string()))?;

            Ok(HttpReply::new(status.as_u16(), status_text, body.to_vec()))
        }
    }
}
