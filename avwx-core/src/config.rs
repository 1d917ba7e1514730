//! Backend location.

/// Environment variable read by the CLI for the backend base URL.
pub const API_BASE_ENV: &str = "AVWX_API_BASE";

/// Default backend for native use (the development server).
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

/// Default request timeout for native use. Verification runs server-side and
/// can take a while.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Prefix for every endpoint path. Empty means same origin (browser).
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Relative URLs against the page's own origin.
    pub fn same_origin() -> Self {
        Self::new("")
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let config = ApiConfig::new("http://localhost:5000/");
        assert_eq!(config.url("/api/get_metar"), "http://localhost:5000/api/get_metar");
        assert_eq!(ApiConfig::same_origin().url("/api/get_metar"), "/api/get_metar");
    }
}
