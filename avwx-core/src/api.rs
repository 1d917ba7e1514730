//! Backend endpoints, response models and response classification.
//!
//! Classification rules, shared by every transport:
//! - non-2xx: the body's JSON `error` field is the message; a non-JSON body
//!   falls back to the call's generic message
//! - 2xx text that is actually an HTML page means "no data"

use crate::error::FetchError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const METAR_PREVIEW_PATH: &str = "/api/get_metar";
pub const UPPER_AIR_PREVIEW_PATH: &str = "/api/get_upper_air";
pub const PROCESS_METAR_PATH: &str = "/api/process_metar";
pub const PROCESS_UPPER_AIR_PATH: &str = "/api/process_upper_air";
pub const DOWNLOAD_PATH: &str = "/api/download";

/// Downloadable report artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Artifact {
    ComparisonCsv,
    MergedCsv,
    UpperAirCsv,
}

impl Artifact {
    pub fn as_str(&self) -> &'static str {
        match self {
            Artifact::ComparisonCsv => "comparison_csv",
            Artifact::MergedCsv => "merged_csv",
            Artifact::UpperAirCsv => "upper_air_csv",
        }
    }

    /// `/api/download/{artifact}`.
    pub fn path(&self) -> String {
        format!("{}/{}", DOWNLOAD_PATH, self.as_str())
    }

    /// Link text in a report.
    pub fn label(&self) -> &'static str {
        match self {
            Artifact::ComparisonCsv => "Download Comparison CSV",
            Artifact::MergedCsv => "Download Detailed Comparison CSV",
            Artifact::UpperAirCsv => "Download Verification CSV",
        }
    }

    pub fn fallback_message(&self) -> &'static str {
        match self {
            Artifact::ComparisonCsv => "Failed to download comparison CSV",
            Artifact::MergedCsv => "Failed to download detailed comparison CSV",
            Artifact::UpperAirCsv => "Failed to download verification CSV",
        }
    }
}

/// A raw HTTP response as seen by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// The `error` field of a JSON error body, or `fallback`.
pub fn error_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// Sniff for an HTML document (`<!doctype html` or `<html`, any case,
/// leading whitespace ignored).
pub fn looks_like_html(body: &str) -> bool {
    let head: String = body.trim_start().chars().take(16).collect::<String>().to_lowercase();
    head.starts_with("<!doctype html") || head.starts_with("<html")
}

fn check_status(response: &RawResponse, fallback: &str) -> Result<(), FetchError> {
    if response.is_success() {
        Ok(())
    } else {
        Err(FetchError::Http {
            status: response.status,
            message: error_message(&response.body, fallback),
        })
    }
}

/// Classify a response from a text or CSV endpoint.
pub fn classify_text(response: RawResponse, fallback: &str) -> Result<String, FetchError> {
    check_status(&response, fallback)?;
    if looks_like_html(&response.body) {
        return Err(FetchError::NoData);
    }
    Ok(response.body)
}

/// Classify a response from a JSON endpoint.
pub fn classify_json<T: DeserializeOwned>(
    response: RawResponse,
    fallback: &str,
) -> Result<T, FetchError> {
    check_status(&response, fallback)?;
    if looks_like_html(&response.body) {
        return Err(FetchError::NoData);
    }
    serde_json::from_str(&response.body).map_err(|e| FetchError::Decode(e.to_string()))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SurfaceMetadata {
    #[serde(default)]
    pub icao: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceFilePaths {
    pub comparison_csv: String,
    pub merged_csv: String,
    #[serde(default)]
    pub metar_file: Option<String>,
    #[serde(default)]
    pub metar_csv: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceMetrics {
    #[serde(default)]
    pub total_comparisons: Option<u64>,
    #[serde(default)]
    pub accurate_predictions: Option<u64>,
    #[serde(default)]
    pub accuracy_percentage: Option<f64>,
}

/// `POST /api/process_metar` success body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceVerification {
    #[serde(default)]
    pub metadata: SurfaceMetadata,
    pub file_paths: SurfaceFilePaths,
    #[serde(default)]
    pub metrics: Option<SurfaceMetrics>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpperAirMetadata {
    #[serde(default)]
    pub station_id: Option<String>,
    #[serde(default)]
    pub icao: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
}

/// `POST /api/process_upper_air` success body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpperAirVerification {
    #[serde(default)]
    pub metadata: UpperAirMetadata,
    #[serde(default)]
    pub temp_accuracy: Option<f64>,
    #[serde(default)]
    pub wind_accuracy: Option<f64>,
    #[serde(default)]
    pub wind_dir_accuracy: Option<f64>,
    #[serde(default)]
    pub weather_accuracy: Option<f64>,
    #[serde(default)]
    pub file_path: Option<String>,
}

/// Accuracy metrics a report can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Overall,
    Temperature,
    WindSpeed,
    WindDirection,
    Weather,
}

impl Metric {
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Overall => "Overall Accuracy",
            Metric::Temperature => "Temperature Accuracy",
            Metric::WindSpeed => "Wind Speed Accuracy",
            Metric::WindDirection => "Wind Direction Accuracy",
            Metric::Weather => "Weather Accuracy",
        }
    }
}

/// `85.5` -> `85.5%`, missing -> `--`.
pub fn format_accuracy(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{}%", v),
        _ => "--".to_string(),
    }
}

/// What a report header shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultMetadata {
    pub icao: Option<String>,
    pub station_id: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

/// A verification outcome, independent of which panel produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationResult {
    pub metadata: ResultMetadata,
    pub accuracy: Vec<(Metric, Option<f64>)>,
    pub downloads: Vec<(Artifact, String)>,
}

impl VerificationResult {
    pub fn download_path(&self, artifact: Artifact) -> Option<&str> {
        self.downloads
            .iter()
            .find(|(a, _)| *a == artifact)
            .map(|(_, p)| p.as_str())
    }

    /// Title lines for the surface report.
    pub fn surface_title(&self) -> Vec<String> {
        let mut lines = vec![
            "VERIFICATION RESULT OF TAKE-OFF FORECAST".to_string(),
            self.metadata.icao.clone().unwrap_or_default(),
        ];
        if let (Some(start), Some(end)) = (&self.metadata.start_time, &self.metadata.end_time) {
            lines.push(format!("{} TO {}", start, end));
        }
        lines
    }

    /// Title lines for the upper-air report.
    pub fn upper_air_title(&self) -> Vec<String> {
        let or_dash = |v: &Option<String>| v.clone().unwrap_or_else(|| "--".to_string());
        vec![
            format!(
                "UPPER AIR FORECAST VERIFICATION RESULTS FOR {} ({})",
                or_dash(&self.metadata.station_id),
                or_dash(&self.metadata.icao)
            ),
            format!(
                "FROM {} TO {}",
                or_dash(&self.metadata.start_time),
                or_dash(&self.metadata.end_time)
            ),
        ]
    }
}

impl From<&SurfaceVerification> for VerificationResult {
    fn from(v: &SurfaceVerification) -> Self {
        let accuracy = v
            .metrics
            .as_ref()
            .map(|m| vec![(Metric::Overall, m.accuracy_percentage)])
            .unwrap_or_default();
        VerificationResult {
            metadata: ResultMetadata {
                icao: v.metadata.icao.clone(),
                station_id: None,
                start_time: v.metadata.start_time.clone(),
                end_time: v.metadata.end_time.clone(),
            },
            accuracy,
            downloads: vec![
                (Artifact::ComparisonCsv, v.file_paths.comparison_csv.clone()),
                (Artifact::MergedCsv, v.file_paths.merged_csv.clone()),
            ],
        }
    }
}

impl From<&UpperAirVerification> for VerificationResult {
    fn from(v: &UpperAirVerification) -> Self {
        VerificationResult {
            metadata: ResultMetadata {
                icao: v.metadata.icao.clone(),
                station_id: v.metadata.station_id.clone(),
                start_time: v.metadata.start_time.clone(),
                end_time: v.metadata.end_time.clone(),
            },
            accuracy: vec![
                (Metric::Temperature, v.temp_accuracy),
                (Metric::WindSpeed, v.wind_accuracy),
                (Metric::WindDirection, v.wind_dir_accuracy),
                (Metric::Weather, v.weather_accuracy),
            ],
            downloads: v
                .file_path
                .iter()
                .map(|p| (Artifact::UpperAirCsv, p.clone()))
                .collect(),
        }
    }
}
