//! Browser side of the REST client: `Transport` over `window.fetch` and
//! the `File` handle it uploads.

use crate::dom::js_error_message;
use avwx_core::api::{Artifact, RawResponse};
use avwx_core::client::{Client, Transport};
use avwx_core::config::ApiConfig;
use avwx_core::error::FetchError;
use avwx_core::request::{FormPart, FormValue};
use avwx_core::upload::FileMeta;
use log::debug;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, Response};

/// A file chosen in an `<input type="file">` or dropped on a zone.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserFile(pub web_sys::File);

impl FileMeta for BrowserFile {
    fn file_name(&self) -> String {
        self.0.name()
    }

    fn mime_type(&self) -> Option<String> {
        let mime = self.0.type_();
        (!mime.is_empty()).then_some(mime)
    }
}

impl BrowserFile {
    pub async fn read_text(&self) -> Result<String, JsValue> {
        let text = JsFuture::from(self.0.text()).await?;
        text.as_string()
            .ok_or_else(|| JsValue::from_str("file did not read as text"))
    }

    pub async fn read_bytes(&self) -> Result<Vec<u8>, JsValue> {
        let buffer = JsFuture::from(self.0.array_buffer()).await?;
        Ok(js_sys::Uint8Array::new(&buffer).to_vec())
    }
}

pub struct BrowserTransport {
    config: ApiConfig,
}

impl BrowserTransport {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

fn network_error(value: JsValue) -> FetchError {
    FetchError::Network(js_error_message(value))
}

/// Append `query` to `url`, percent-encoding each value.
fn with_query(url: &str, query: &[(&str, String)]) -> String {
    if query.is_empty() {
        return url.to_string();
    }
    let pairs: Vec<String> = query
        .iter()
        .map(|(key, value)| {
            let encoded = String::from(js_sys::encode_uri_component(value));
            format!("{}={}", key, encoded)
        })
        .collect();
    format!("{}?{}", url, pairs.join("&"))
}

async fn read_response(value: JsValue) -> Result<RawResponse, FetchError> {
    let response: Response = value.dyn_into().map_err(network_error)?;
    let status = response.status();
    let text = response.text().map_err(network_error)?;
    let body = JsFuture::from(text).await.map_err(network_error)?;
    Ok(RawResponse::new(status, body.as_string().unwrap_or_default()))
}

impl Transport for BrowserTransport {
    type File = BrowserFile;

    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<RawResponse, FetchError> {
        let url = with_query(&self.config.url(path), query);
        debug!("GET {}", url);
        let window = web_sys::window().ok_or_else(|| FetchError::Network("no window".into()))?;
        let value = JsFuture::from(window.fetch_with_str(&url))
            .await
            .map_err(network_error)?;
        read_response(value).await
    }

    async fn post_multipart(
        &self,
        path: &str,
        parts: Vec<FormPart<BrowserFile>>,
    ) -> Result<RawResponse, FetchError> {
        let url = self.config.url(path);
        debug!("POST {} ({} parts)", url, parts.len());
        let form = FormData::new().map_err(network_error)?;
        for part in parts {
            let appended = match part.value {
                FormValue::Text(text) => form.append_with_str(part.name, &text),
                FormValue::File(file) => {
                    form.append_with_blob_and_filename(part.name, &file.0, &file.0.name())
                }
            };
            appended.map_err(network_error)?;
        }

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_body(&JsValue::from(form));
        let request = Request::new_with_str_and_init(&url, &init).map_err(network_error)?;

        let window = web_sys::window().ok_or_else(|| FetchError::Network("no window".into()))?;
        let value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(network_error)?;
        read_response(value).await
    }
}

/// Client against the page's own origin.
pub fn client() -> Client<BrowserTransport> {
    Client::new(BrowserTransport::new(ApiConfig::same_origin()))
}

/// Link target for a report artifact.
pub fn download_url(artifact: Artifact, file_path: &str) -> String {
    with_query(
        &ApiConfig::same_origin().url(&artifact.path()),
        &[("file_path", file_path.to_string())],
    )
}
