//! Upload slots and their file-name constraints.

use crate::error::ValidationError;
use chrono::NaiveDate;

pub const PDF_MIME: &str = "application/pdf";

/// Anything that looks like a selected file: a browser `File`, a file read
/// from disk by the CLI, or a test double.
pub trait FileMeta {
    fn file_name(&self) -> String;
    /// MIME type as reported by the platform. `None` or empty when unknown.
    fn mime_type(&self) -> Option<String>;
}

/// The four upload inputs across both verification panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadSlot {
    SurfaceForecast,
    SurfaceObservation,
    UpperAirObservation,
    UpperAirForecast,
}

/// How a slot's file is previewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewKind {
    /// Read as text, show the first lines.
    TextHead,
    /// Show a fixed notice and run the upper-winds extraction.
    PdfNotice,
}

impl UploadSlot {
    /// DOM id of the `<input type="file">` for this slot.
    pub fn input_id(&self) -> &'static str {
        match self {
            UploadSlot::SurfaceForecast => "forecast-file-input",
            UploadSlot::SurfaceObservation => "obs-file-input",
            UploadSlot::UpperAirObservation => "upper-air-obs-file-input",
            UploadSlot::UpperAirForecast => "upper-air-forecast-file-input",
        }
    }

    /// DOM id of the drop zone wrapping the input.
    pub fn zone_id(&self) -> &'static str {
        match self {
            UploadSlot::SurfaceForecast => "forecast-upload-area",
            UploadSlot::SurfaceObservation => "obs-upload-area",
            UploadSlot::UpperAirObservation => "upper-air-obs-upload-area",
            UploadSlot::UpperAirForecast => "upper-air-forecast-upload-area",
        }
    }

    /// Value for the input's `accept` attribute.
    pub fn accept(&self) -> &'static str {
        match self {
            UploadSlot::SurfaceForecast => ".txt",
            UploadSlot::SurfaceObservation => "",
            UploadSlot::UpperAirObservation => ".csv",
            UploadSlot::UpperAirForecast => ".pdf,application/pdf",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UploadSlot::SurfaceForecast => "Forecast file (DDMMYYYY.txt)",
            UploadSlot::SurfaceObservation => "Observation file",
            UploadSlot::UpperAirObservation => "Observation file (.csv)",
            UploadSlot::UpperAirForecast => "Forecast file (.pdf)",
        }
    }

    pub fn preview_kind(&self) -> PreviewKind {
        match self {
            UploadSlot::UpperAirForecast => PreviewKind::PdfNotice,
            _ => PreviewKind::TextHead,
        }
    }

    /// Whether this slot is the panel's observation input, which takes part
    /// in range/upload mode switching.
    pub fn is_observation(&self) -> bool {
        matches!(
            self,
            UploadSlot::SurfaceObservation | UploadSlot::UpperAirObservation
        )
    }

    /// Check a file against this slot's naming rules.
    pub fn validate<F: FileMeta>(&self, file: &F) -> Result<(), ValidationError> {
        let name = file.file_name();
        match self {
            UploadSlot::SurfaceForecast => {
                if is_forecast_file_name(&name) {
                    Ok(())
                } else {
                    Err(ValidationError::ForecastFileName)
                }
            }
            UploadSlot::SurfaceObservation => Ok(()),
            UploadSlot::UpperAirObservation => {
                if has_extension(&name, "csv") {
                    Ok(())
                } else {
                    Err(ValidationError::ObservationCsv)
                }
            }
            UploadSlot::UpperAirForecast => {
                if has_extension(&name, "pdf") && mime_allows_pdf(file.mime_type().as_deref()) {
                    Ok(())
                } else {
                    Err(ValidationError::ForecastPdf)
                }
            }
        }
    }
}

/// `DDMMYYYY.txt` where the digits form a real calendar date.
pub fn is_forecast_file_name(name: &str) -> bool {
    let Some(stem) = name.strip_suffix(".txt") else {
        return false;
    };
    if stem.len() != 8 || !stem.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    NaiveDate::parse_from_str(stem, "%d%m%Y").is_ok()
}

/// Case-insensitive extension check (`ext` without the dot). The name must
/// have a non-empty stem.
pub fn has_extension(name: &str, ext: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    let suffix = format!(".{}", ext.to_ascii_lowercase());
    lower
        .strip_suffix(&suffix)
        .is_some_and(|stem| !stem.is_empty())
}

/// A missing or empty MIME type passes; anything reported must be PDF.
pub fn mime_allows_pdf(mime: Option<&str>) -> bool {
    match mime {
        None => true,
        Some(m) if m.trim().is_empty() => true,
        Some(m) => m.eq_ignore_ascii_case(PDF_MIME),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NamedFile(&'static str, Option<&'static str>);

    impl FileMeta for NamedFile {
        fn file_name(&self) -> String {
            self.0.to_string()
        }
        fn mime_type(&self) -> Option<String> {
            self.1.map(str::to_string)
        }
    }

    #[test]
    fn test_forecast_file_name() {
        assert!(is_forecast_file_name("01012024.txt"));
        assert!(is_forecast_file_name("31122023.txt"));
        assert!(!is_forecast_file_name("1012024.txt"));
        assert!(!is_forecast_file_name("01-01-2024.txt"));
        assert!(!is_forecast_file_name("01132024.txt"));
        assert!(!is_forecast_file_name("30022024.txt"));
        assert!(!is_forecast_file_name("01012024.TXT"));
        assert!(!is_forecast_file_name("01012024.txt.bak"));
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        assert!(has_extension("sounding.csv", "csv"));
        assert!(has_extension("SOUNDING.CSV", "csv"));
        assert!(!has_extension("sounding.csv.txt", "csv"));
        assert!(!has_extension("csv", "csv"));
    }

    #[test]
    fn test_pdf_slot_checks_mime_when_reported() {
        let slot = UploadSlot::UpperAirForecast;
        assert!(slot.validate(&NamedFile("tafor.pdf", Some(PDF_MIME))).is_ok());
        assert!(slot.validate(&NamedFile("TAFOR.PDF", None)).is_ok());
        assert!(slot.validate(&NamedFile("tafor.pdf", Some(""))).is_ok());
        assert_eq!(
            slot.validate(&NamedFile("tafor.pdf", Some("text/plain"))),
            Err(ValidationError::ForecastPdf)
        );
        assert_eq!(
            slot.validate(&NamedFile("tafor.txt", Some(PDF_MIME))),
            Err(ValidationError::ForecastPdf)
        );
    }

    #[test]
    fn test_slot_validation() {
        assert!(UploadSlot::SurfaceForecast
            .validate(&NamedFile("01012024.txt", None))
            .is_ok());
        assert_eq!(
            UploadSlot::SurfaceForecast.validate(&NamedFile("forecast.txt", None)),
            Err(ValidationError::ForecastFileName)
        );
        assert!(UploadSlot::SurfaceObservation
            .validate(&NamedFile("anything.dat", None))
            .is_ok());
        assert_eq!(
            UploadSlot::UpperAirObservation.validate(&NamedFile("obs.txt", None)),
            Err(ValidationError::ObservationCsv)
        );
    }

    #[test]
    fn test_preview_kind() {
        assert_eq!(UploadSlot::UpperAirForecast.preview_kind(), PreviewKind::PdfNotice);
        assert_eq!(UploadSlot::UpperAirObservation.preview_kind(), PreviewKind::TextHead);
        assert!(UploadSlot::SurfaceObservation.is_observation());
        assert!(!UploadSlot::SurfaceForecast.is_observation());
    }
}
