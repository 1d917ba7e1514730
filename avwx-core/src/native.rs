//! Native `Transport` over `reqwest`, for the CLI.

use crate::api::RawResponse;
use crate::client::{Client, Transport};
use crate::config::ApiConfig;
use crate::error::FetchError;
use crate::request::{FormPart, FormValue};
use crate::upload::{FileMeta, PDF_MIME};
use log::debug;
use reqwest::multipart::{Form, Part};
use std::path::Path;
use std::time::Duration;

/// A file read from disk for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
    pub mime: Option<String>,
}

impl UploadFile {
    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mime = guess_mime(&name).map(str::to_string);
        Ok(Self { name, bytes, mime })
    }
}

impl FileMeta for UploadFile {
    fn file_name(&self) -> String {
        self.name.clone()
    }

    fn mime_type(&self) -> Option<String> {
        self.mime.clone()
    }
}

fn guess_mime(name: &str) -> Option<&'static str> {
    let lower = name.to_ascii_lowercase();
    if lower.ends_with(".pdf") {
        Some(PDF_MIME)
    } else if lower.ends_with(".csv") {
        Some("text/csv")
    } else if lower.ends_with(".txt") {
        Some("text/plain")
    } else {
        None
    }
}

pub struct ReqwestTransport {
    config: ApiConfig,
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(config: ApiConfig, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(Self { config, client })
    }

    async fn finish(response: reqwest::Response) -> Result<RawResponse, FetchError> {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        debug!("response status {} ({} bytes)", status, body.len());
        Ok(RawResponse { status, body })
    }
}

impl Transport for ReqwestTransport {
    type File = UploadFile;

    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<RawResponse, FetchError> {
        let url = self.config.url(path);
        debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Self::finish(response).await
    }

    async fn post_multipart(
        &self,
        path: &str,
        parts: Vec<FormPart<UploadFile>>,
    ) -> Result<RawResponse, FetchError> {
        let url = self.config.url(path);
        debug!("POST {}", url);
        let mut form = Form::new();
        for part in parts {
            form = match part.value {
                FormValue::Text(value) => form.text(part.name, value),
                FormValue::File(file) => {
                    let mut body = Part::bytes(file.bytes).file_name(file.name);
                    if let Some(mime) = &file.mime {
                        body = body
                            .mime_str(mime)
                            .map_err(|e| FetchError::Network(e.to_string()))?;
                    }
                    form.part(part.name, body)
                }
            };
        }
        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Self::finish(response).await
    }
}

/// A client talking to `config` with the given timeout.
pub fn native_client(config: ApiConfig, timeout: Duration) -> Result<Client<ReqwestTransport>, FetchError> {
    Ok(Client::new(ReqwestTransport::new(config, timeout)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_mime() {
        assert_eq!(guess_mime("TAFOR.PDF"), Some(PDF_MIME));
        assert_eq!(guess_mime("obs.csv"), Some("text/csv"));
        assert_eq!(guess_mime("01012024.txt"), Some("text/plain"));
        assert_eq!(guess_mime("metar.dat"), None);
    }

    #[tokio::test]
    async fn test_upload_file_from_path() {
        let dir = std::env::temp_dir().join("avwx-core-upload-test");
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let path = dir.join("01012024.txt");
        tokio::fs::write(&path, "TAF VABB").await.unwrap();
        let file = UploadFile::from_path(&path).await.unwrap();
        assert_eq!(file.name, "01012024.txt");
        assert_eq!(file.bytes, b"TAF VABB");
        assert_eq!(file.mime_type().as_deref(), Some("text/plain"));
    }
}
