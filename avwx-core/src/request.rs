//! Verification requests and their multipart encoding.
//!
//! Builders validate panel input in the order the user sees the messages and
//! produce a request whose observation source is exactly one of a range or a
//! file. `F` is the platform's file handle.

use crate::datetime::{SoundingTime, SurfaceRange};
use crate::error::ValidationError;
use crate::station::{Icao, StationId};
use crate::upload::{FileMeta, UploadSlot};

/// One multipart field.
#[derive(Debug, Clone, PartialEq)]
pub enum FormValue<F> {
    Text(String),
    File(F),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormPart<F> {
    pub name: &'static str,
    pub value: FormValue<F>,
}

impl<F> FormPart<F> {
    pub fn text(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: FormValue::Text(value.into()),
        }
    }

    pub fn file(name: &'static str, file: F) -> Self {
        Self {
            name,
            value: FormValue::File(file),
        }
    }
}

/// Where a request's observations come from.
#[derive(Debug, Clone, PartialEq)]
pub enum ObservationSource<F, R> {
    /// Backend fetches observations for this wire-formatted range.
    Range(R),
    /// Observations uploaded by the user.
    File(F),
}

/// Surface verification (`/api/process_metar`).
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceRequest<F> {
    pub icao: Icao,
    pub forecast: F,
    /// Range as `(start, end)` in `YYYYMMDDHHmm`.
    pub observation: ObservationSource<F, (String, String)>,
}

impl<F: FileMeta> SurfaceRequest<F> {
    /// Validate the surface panel's input. An attached observation file takes
    /// precedence over the range.
    pub fn build(
        icao: &str,
        forecast: Option<F>,
        observation: Option<F>,
        range: &SurfaceRange,
    ) -> Result<Self, ValidationError> {
        let icao: Icao = icao.parse()?;
        let Some(forecast) = forecast else {
            return Err(ValidationError::IncompleteSurfaceRequest);
        };
        UploadSlot::SurfaceForecast.validate(&forecast)?;
        let observation = match observation {
            Some(file) => ObservationSource::File(file),
            None if range.is_complete() => ObservationSource::Range(range.to_wire()?),
            None => return Err(ValidationError::IncompleteSurfaceRequest),
        };
        Ok(Self {
            icao,
            forecast,
            observation,
        })
    }
}

impl<F> SurfaceRequest<F> {
    pub fn into_parts(self) -> Vec<FormPart<F>> {
        let mut parts = Vec::with_capacity(5);
        if let ObservationSource::Range((start, end)) = &self.observation {
            parts.push(FormPart::text("start_date", start.clone()));
            parts.push(FormPart::text("end_date", end.clone()));
        }
        parts.push(FormPart::text("icao", self.icao.as_str()));
        parts.push(FormPart::file("forecast_file", self.forecast));
        if let ObservationSource::File(file) = self.observation {
            parts.push(FormPart::file("observation_file", file));
        }
        parts
    }
}

/// Upper-air verification (`/api/process_upper_air`).
#[derive(Debug, Clone, PartialEq)]
pub struct UpperAirRequest<F> {
    pub station: StationId,
    pub forecast: F,
    /// Range as the sounding time in `YYYY-MM-DD HH:00:00`.
    pub observation: ObservationSource<F, String>,
}

impl<F: FileMeta> UpperAirRequest<F> {
    pub fn build(
        station: &str,
        forecast: Option<F>,
        observation: Option<F>,
        time: &SoundingTime,
    ) -> Result<Self, ValidationError> {
        let station: StationId = station.parse()?;
        // Same gate as the upload zone, reported with the submit-time message.
        let forecast = match forecast {
            Some(f) if UploadSlot::UpperAirForecast.validate(&f).is_ok() => f,
            _ => return Err(ValidationError::MissingForecastPdf),
        };
        let observation = match observation {
            Some(file) => ObservationSource::File(file),
            None if time.is_complete() => ObservationSource::Range(time.to_wire()?),
            None => return Err(ValidationError::MissingObservationSource),
        };
        Ok(Self {
            station,
            forecast,
            observation,
        })
    }
}

impl<F> UpperAirRequest<F> {
    pub fn into_parts(self) -> Vec<FormPart<F>> {
        let mut parts = vec![
            FormPart::text("station_id", self.station.as_str()),
            FormPart::file("forecast_file", self.forecast),
        ];
        match self.observation {
            ObservationSource::File(file) => parts.push(FormPart::file("observation_file", file)),
            ObservationSource::Range(datetime) => parts.push(FormPart::text("datetime", datetime)),
        }
        parts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datetime::DateTimeFields;
    use crate::upload::PDF_MIME;

    #[derive(Debug, Clone, PartialEq)]
    struct Named(&'static str, Option<&'static str>);

    impl FileMeta for Named {
        fn file_name(&self) -> String {
            self.0.to_string()
        }
        fn mime_type(&self) -> Option<String> {
            self.1.map(str::to_string)
        }
    }

    fn names(parts: &[FormPart<Named>]) -> Vec<&'static str> {
        parts.iter().map(|p| p.name).collect()
    }

    fn range() -> SurfaceRange {
        SurfaceRange {
            start: DateTimeFields {
                date: "2024-01-01".into(),
                hour: "0".into(),
                minute: "0".into(),
            },
            end: DateTimeFields {
                date: "2024-01-02".into(),
                hour: "6".into(),
                minute: "30".into(),
            },
        }
    }

    #[test]
    fn test_surface_range_request_parts() {
        let req = SurfaceRequest::build("VABB", Some(Named("01012024.txt", None)), None, &range())
            .unwrap();
        let parts = req.into_parts();
        assert_eq!(names(&parts), vec!["start_date", "end_date", "icao", "forecast_file"]);
        assert_eq!(parts[0].value, FormValue::Text("202401010000".into()));
        assert_eq!(parts[1].value, FormValue::Text("202401020630".into()));
    }

    #[test]
    fn test_surface_file_request_omits_dates() {
        let req = SurfaceRequest::build(
            "VABB",
            Some(Named("01012024.txt", None)),
            Some(Named("metar.txt", None)),
            &range(),
        )
        .unwrap();
        assert!(matches!(req.observation, ObservationSource::File(_)));
        assert_eq!(
            names(&req.into_parts()),
            vec!["icao", "forecast_file", "observation_file"]
        );
    }

    #[test]
    fn test_surface_validation_order() {
        assert_eq!(
            SurfaceRequest::<Named>::build("VAB", None, None, &range()),
            Err(ValidationError::InvalidIcao)
        );
        assert_eq!(
            SurfaceRequest::<Named>::build("VABB", None, None, &range()),
            Err(ValidationError::IncompleteSurfaceRequest)
        );
        assert_eq!(
            SurfaceRequest::build(
                "VABB",
                Some(Named("01012024.txt", None)),
                None,
                &SurfaceRange::default()
            ),
            Err(ValidationError::IncompleteSurfaceRequest)
        );
        assert_eq!(
            SurfaceRequest::build("VABB", Some(Named("forecast.txt", None)), None, &range()),
            Err(ValidationError::ForecastFileName)
        );
    }

    #[test]
    fn test_upper_air_parts() {
        let time = SoundingTime {
            date: "2024-01-01".into(),
            hour: "12".into(),
        };
        let req = UpperAirRequest::build("43003", Some(Named("f.pdf", Some(PDF_MIME))), None, &time)
            .unwrap();
        let parts = req.into_parts();
        assert_eq!(names(&parts), vec!["station_id", "forecast_file", "datetime"]);
        assert_eq!(parts[2].value, FormValue::Text("2024-01-01 12:00:00".into()));

        let req = UpperAirRequest::build(
            "43003",
            Some(Named("f.pdf", None)),
            Some(Named("o.csv", Some("text/csv"))),
            &SoundingTime::default(),
        )
        .unwrap();
        assert_eq!(
            names(&req.into_parts()),
            vec!["station_id", "forecast_file", "observation_file"]
        );
    }

    #[test]
    fn test_upper_air_validation() {
        let time = SoundingTime::default();
        assert_eq!(
            UpperAirRequest::<Named>::build("4300", None, None, &time),
            Err(ValidationError::InvalidStationId)
        );
        assert_eq!(
            UpperAirRequest::build("43003", Some(Named("f.pdf", Some("text/plain"))), None, &time),
            Err(ValidationError::MissingForecastPdf)
        );
        assert_eq!(
            UpperAirRequest::build("43003", Some(Named("f.pdf", Some(PDF_MIME))), None, &time),
            Err(ValidationError::MissingObservationSource)
        );
    }

    #[test]
    fn test_upper_air_forecast_needs_pdf_extension() {
        let time = SoundingTime {
            date: "2024-01-01".into(),
            hour: "00".into(),
        };
        assert_eq!(
            UpperAirRequest::build("43003", Some(Named("forecast.txt", None)), None, &time),
            Err(ValidationError::MissingForecastPdf)
        );
        assert!(
            UpperAirRequest::build("43003", Some(Named("FORECAST.PDF", None)), None, &time).is_ok()
        );
    }
}
