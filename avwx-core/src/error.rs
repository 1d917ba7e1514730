//! Error types shared by the UI and the CLI.
//!
//! `Display` of every variant is the message shown to the user.

use thiserror::Error;

/// Client-side validation failures. These block an action before any network
/// call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid ICAO code.")]
    InvalidIcao,
    #[error("Please enter a valid 5-digit station ID.")]
    InvalidStationId,
    #[error("Please upload a file named with day, month and year (like 01012024.txt). The first two digits are the day, the next two the month (01-12) and the last four the year.")]
    ForecastFileName,
    #[error("Please upload a CSV file for upper air observation.")]
    ObservationCsv,
    #[error("Please upload a PDF file for upper air forecast.")]
    ForecastPdf,
    #[error("Please upload a valid PDF forecast file.")]
    MissingForecastPdf,
    #[error("Please fill in all required fields and upload a forecast file.")]
    IncompleteSurfaceRequest,
    #[error("Please either upload an observation CSV or select date/time to fetch data.")]
    MissingObservationSource,
    #[error("Please select date, hour, and enter a valid 5-digit station ID.")]
    IncompleteSoundingRequest,
    #[error("Invalid {field}: {value:?}")]
    InvalidDateTime { field: &'static str, value: String },
    #[error("End date/time must not be before start date/time.")]
    RangeOrder,
}

/// Failures of a remote call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Non-success status. `message` is the backend's `error` field or a
    /// per-call fallback when the body is not JSON.
    #[error("{message}")]
    Http { status: u16, message: String },
    /// The response was successful but carried no usable data (an HTML page
    /// where text or CSV was expected).
    #[error("No data available for the selected date/time/station.")]
    NoData,
    #[error("Network error: {0}")]
    Network(String),
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn is_no_data(&self) -> bool {
        matches!(self, FetchError::NoData)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_displays_backend_message() {
        let err = FetchError::Http {
            status: 400,
            message: "bad request".to_string(),
        };
        assert_eq!(err.to_string(), "bad request");
    }

    #[test]
    fn test_only_html_bodies_count_as_no_data() {
        assert!(FetchError::NoData.is_no_data());
        assert!(!FetchError::Network("offline".to_string()).is_no_data());
    }

    #[test]
    fn test_invalid_date_time_names_field() {
        let err = ValidationError::InvalidDateTime {
            field: "start hour",
            value: "24".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid start hour: \"24\"");
    }
}
