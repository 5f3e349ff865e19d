//! Browser transport: posts the selected report with `fetch`.

use gloo_net::http::Request;
use labsimplify::{HttpReply, SelectedFile, Transport, TransportError, FILE_FIELD};
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

/// [`Transport`] over the browser's `fetch`, for reports held as
/// `web_sys::File`.
#[derive(Debug, Clone)]
pub struct FetchTransport {
    url: String,
}

impl FetchTransport {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Transport<File> for FetchTransport {
    async fn post_file(&self, file: &SelectedFile<File>) -> Result<HttpReply, TransportError> {
        let form_data = FormData::new().map_err(js_error)?;
        form_data
            .append_with_blob_and_filename(FILE_FIELD, file.content(), file.name())
            .map_err(js_error)?;

        let request = Request::post(&self.url)
            .body(form_data)
            .map_err(fetch_error)?;

        let response = request
            .send()
            .await
            .map_err(fetch_error)?;

        let status = response.status();
        let status_text = response.status_text();
        let body = response
            .binary()
            .await
            .map_err(fetch_error)?;

        Ok(HttpReply::new(status, status_text, body))
    }
}

/// JS exceptions only carry a description when they are plain strings.
fn js_error(value: JsValue) -> TransportError {
    match value.as_string() {
        Some(message) => TransportError::new(message),
        None => TransportError::without_message(),
    }
}

/// Browser exceptions show their own `message`, without the `TypeError: ` prefix.
fn fetch_error(err: gloo_net::Error) -> TransportError {
    match err {
        gloo_net::Error::JsError(js) => TransportError::new(js.message),
        other => TransportError::new(other.to_string()),
    }
}
