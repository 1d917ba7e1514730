//! The REST client contract, generic over the HTTP layer.
//!
//! `Transport` is implemented once for the browser (`web-sys` fetch) and once
//! natively (`reqwest`, `api` feature). `Client` owns the per-call fallback
//! messages, the response classification and the download ordering.

use crate::api::{
    classify_json, classify_text, Artifact, RawResponse, SurfaceFilePaths, SurfaceVerification,
    UpperAirVerification, METAR_PREVIEW_PATH, PROCESS_METAR_PATH, PROCESS_UPPER_AIR_PATH,
    UPPER_AIR_PREVIEW_PATH,
};
use crate::csv_table::{ReportTables, ResultTable};
use crate::error::FetchError;
use crate::request::{FormPart, SurfaceRequest, UpperAirRequest};
use crate::station::{Icao, StationId};
use log::{info, warn};

/// Minimal HTTP layer. Implementations report transport failures as
/// `FetchError::Network`; any HTTP status is returned as a `RawResponse`.
#[allow(async_fn_in_trait)]
pub trait Transport {
    type File;

    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<RawResponse, FetchError>;

    async fn post_multipart(
        &self,
        path: &str,
        parts: Vec<FormPart<Self::File>>,
    ) -> Result<RawResponse, FetchError>;
}

pub struct Client<T> {
    transport: T,
}

impl<T: Transport> Client<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Raw METAR text for a surface range (`YYYYMMDDHHmm` bounds).
    pub async fn metar_preview(
        &self,
        start: &str,
        end: &str,
        icao: &Icao,
    ) -> Result<String, FetchError> {
        let query = [
            ("start_date", start.to_string()),
            ("end_date", end.to_string()),
            ("icao", icao.to_string()),
        ];
        let response = self.transport.get(METAR_PREVIEW_PATH, &query).await?;
        classify_text(response, "Failed to fetch METAR data")
    }

    /// Raw sounding text for `YYYY-MM-DD HH:00:00`.
    pub async fn upper_air_preview(
        &self,
        datetime: &str,
        station: &StationId,
    ) -> Result<String, FetchError> {
        let query = [
            ("datetime", datetime.to_string()),
            ("station_id", station.to_string()),
        ];
        let response = self.transport.get(UPPER_AIR_PREVIEW_PATH, &query).await?;
        classify_text(response, "Failed to fetch upper air data")
    }

    pub async fn submit_surface(
        &self,
        request: SurfaceRequest<T::File>,
    ) -> Result<SurfaceVerification, FetchError> {
        info!("submitting surface verification for {}", request.icao);
        let response = self
            .transport
            .post_multipart(PROCESS_METAR_PATH, request.into_parts())
            .await?;
        classify_json(response, "Failed to process METAR data")
    }

    pub async fn submit_upper_air(
        &self,
        request: UpperAirRequest<T::File>,
    ) -> Result<UpperAirVerification, FetchError> {
        info!("submitting upper air verification for {}", request.station);
        let response = self
            .transport
            .post_multipart(PROCESS_UPPER_AIR_PATH, request.into_parts())
            .await?;
        classify_json(response, "Failed to process upper air data")
    }

    /// CSV text of a report artifact.
    pub async fn download(&self, artifact: Artifact, file_path: &str) -> Result<String, FetchError> {
        let query = [("file_path", file_path.to_string())];
        let response = self.transport.get(&artifact.path(), &query).await?;
        classify_text(response, artifact.fallback_message())
    }

    /// Download the surface report tables: the comparison table first, then
    /// the detailed table. Stops at the first failure; the detailed table is
    /// never requested if the comparison table fails.
    pub async fn surface_tables(&self, paths: &SurfaceFilePaths) -> Result<ReportTables, FetchError> {
        let comparison = self
            .download(Artifact::ComparisonCsv, &paths.comparison_csv)
            .await
            .inspect_err(|e| warn!("comparison table download failed: {}", e))?;
        let detailed = self
            .download(Artifact::MergedCsv, &paths.merged_csv)
            .await
            .inspect_err(|e| warn!("detailed table download failed: {}", e))?;
        let mut tables = ReportTables::default();
        tables
            .render(ResultTable::Comparison, &comparison)
            .map_err(decode_error)?;
        tables
            .render(ResultTable::DetailedComparison, &detailed)
            .map_err(decode_error)?;
        Ok(tables)
    }

    /// Download the upper-air verification table, if the response named one.
    pub async fn upper_air_tables(
        &self,
        verification: &UpperAirVerification,
    ) -> Result<ReportTables, FetchError> {
        let mut tables = ReportTables::default();
        if let Some(path) = &verification.file_path {
            let text = self.download(Artifact::UpperAirCsv, path).await?;
            tables
                .render(ResultTable::UpperAirVerification, &text)
                .map_err(decode_error)?;
        }
        Ok(tables)
    }
}

fn decode_error(e: csv::Error) -> FetchError {
    FetchError::Decode(e.to_string())
}

#[cfg(test)]
pub(crate) mod fake {
    //! In-memory transport for exercising the client contract.

    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    #[derive(Debug, Clone, PartialEq)]
    pub struct Call {
        pub path: String,
        pub query: Vec<(String, String)>,
        pub parts: Vec<&'static str>,
    }

    #[derive(Default)]
    pub struct FakeTransport {
        responses: RefCell<VecDeque<Result<RawResponse, FetchError>>>,
        pub calls: RefCell<Vec<Call>>,
    }

    impl FakeTransport {
        pub fn with(responses: Vec<Result<RawResponse, FetchError>>) -> Self {
            Self {
                responses: RefCell::new(responses.into()),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn next(&self) -> Result<RawResponse, FetchError> {
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(FetchError::Network("no scripted response".into())))
        }
    }

    impl Transport for FakeTransport {
        type File = String;

        async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<RawResponse, FetchError> {
            self.calls.borrow_mut().push(Call {
                path: path.to_string(),
                query: query.iter().map(|(k, v)| (k.to_string(), v.clone())).collect(),
                parts: Vec::new(),
            });
            self.next()
        }

        async fn post_multipart(
            &self,
            path: &str,
            parts: Vec<FormPart<String>>,
        ) -> Result<RawResponse, FetchError> {
            self.calls.borrow_mut().push(Call {
                path: path.to_string(),
                query: Vec::new(),
                parts: parts.iter().map(|p| p.name).collect(),
            });
            self.next()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fake::FakeTransport;
    use super::*;
    use crate::request::ObservationSource;

    fn paths() -> SurfaceFilePaths {
        SurfaceFilePaths {
            comparison_csv: "tok-c".into(),
            merged_csv: "tok-m".into(),
            metar_file: None,
            metar_csv: None,
        }
    }

    #[tokio::test]
    async fn test_metar_preview_query() {
        let client = Client::new(FakeTransport::with(vec![Ok(RawResponse::new(200, "METAR VABB"))]));
        let icao: Icao = "VABB".parse().unwrap();
        let text = client
            .metar_preview("202401010000", "202401020000", &icao)
            .await
            .unwrap();
        assert_eq!(text, "METAR VABB");
        let calls = client.transport().calls.borrow();
        assert_eq!(calls[0].path, "/api/get_metar");
        assert_eq!(
            calls[0].query,
            vec![
                ("start_date".to_string(), "202401010000".to_string()),
                ("end_date".to_string(), "202401020000".to_string()),
                ("icao".to_string(), "VABB".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_upper_air_preview_html_is_no_data() {
        let client = Client::new(FakeTransport::with(vec![Ok(RawResponse::new(
            200,
            "<!DOCTYPE html><title>index</title>",
        ))]));
        let station: StationId = "43003".parse().unwrap();
        let err = client
            .upper_air_preview("2024-01-01 00:00:00", &station)
            .await
            .unwrap_err();
        assert_eq!(err, FetchError::NoData);
    }

    #[tokio::test]
    async fn test_surface_tables_in_order() {
        let client = Client::new(FakeTransport::with(vec![
            Ok(RawResponse::new(200, "a,b\n1,2")),
            Ok(RawResponse::new(200, "c\n3\n4")),
        ]));
        let tables = client.surface_tables(&paths()).await.unwrap();
        assert_eq!(tables.get(ResultTable::Comparison).unwrap().rows.len(), 1);
        assert_eq!(tables.get(ResultTable::DetailedComparison).unwrap().rows.len(), 2);
        let calls = client.transport().calls.borrow();
        assert_eq!(calls[0].path, "/api/download/comparison_csv");
        assert_eq!(calls[0].query[0].1, "tok-c");
        assert_eq!(calls[1].path, "/api/download/merged_csv");
    }

    #[tokio::test]
    async fn test_surface_tables_stop_at_first_failure() {
        let client = Client::new(FakeTransport::with(vec![
            Ok(RawResponse::new(404, "not json")),
            Ok(RawResponse::new(200, "c\n3")),
        ]));
        let err = client.surface_tables(&paths()).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to download comparison CSV");
        assert_eq!(client.transport().calls.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_submit_surface_error_field() {
        let client = Client::new(FakeTransport::with(vec![Ok(RawResponse::new(
            400,
            r#"{"error":"bad request"}"#,
        ))]));
        let request = SurfaceRequest {
            icao: "VABB".parse().unwrap(),
            forecast: "01012024.txt".to_string(),
            observation: ObservationSource::File("obs.txt".to_string()),
        };
        let err = client.submit_surface(request).await.unwrap_err();
        assert_eq!(err.to_string(), "bad request");
        let calls = client.transport().calls.borrow();
        assert_eq!(calls[0].path, "/api/process_metar");
        assert_eq!(calls[0].parts, vec!["icao", "forecast_file", "observation_file"]);
    }

    #[tokio::test]
    async fn test_upper_air_tables_skip_without_path() {
        let client = Client::new(FakeTransport::with(vec![]));
        let verification: UpperAirVerification =
            serde_json::from_str(r#"{"metadata": {}, "temp_accuracy": 80}"#).unwrap();
        let tables = client.upper_air_tables(&verification).await.unwrap();
        assert!(tables.get(ResultTable::UpperAirVerification).is_none());
        assert!(client.transport().calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_network_error_passes_through() {
        let client = Client::new(FakeTransport::with(vec![Err(FetchError::Network(
            "connection refused".into(),
        ))]));
        let err = client
            .download(Artifact::UpperAirCsv, "/tmp/x.csv")
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
    }
}
