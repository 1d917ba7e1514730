//! Verification runs: submit, print the report, then its tables.

use crate::table::render_csv;
use crate::ApiArgs;
use anyhow::Context;
use avwx_core::api::{format_accuracy, VerificationResult};
use avwx_core::csv_table::{ReportTables, ResultTable};
use avwx_core::datetime::{parse_date_time, SoundingTime, SurfaceRange};
use avwx_core::native::UploadFile;
use avwx_core::request::{SurfaceRequest, UpperAirRequest};
use avwx_core::upload::UploadSlot;
use log::info;
use std::path::Path;

async fn load(path: &Path, slot: UploadSlot) -> anyhow::Result<UploadFile> {
    let file = UploadFile::from_path(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    slot.validate(&file)?;
    Ok(file)
}

/// Header lines, accuracy figures and download paths as printed.
pub fn report_text(title: &[String], result: &VerificationResult) -> String {
    let mut out: Vec<String> = title.to_vec();
    out.push(String::new());
    for (metric, value) in &result.accuracy {
        out.push(format!("{}: {}", metric.label(), format_accuracy(*value)));
    }
    for (artifact, path) in &result.downloads {
        out.push(format!("{}: {}", artifact.as_str(), path));
    }
    out.join("\n")
}

fn print_tables(tables: &ReportTables, order: &[ResultTable]) {
    for target in order {
        if let Some(table) = tables.get(*target) {
            println!("\n{}\n{}", target.title(), render_csv(table));
        }
    }
}

pub async fn run_surface(
    api: &ApiArgs,
    icao: &str,
    forecast: &Path,
    observation: Option<&Path>,
    range: Option<(String, String)>,
) -> anyhow::Result<()> {
    let forecast = load(forecast, UploadSlot::SurfaceForecast).await?;
    let observation = match observation {
        Some(path) => Some(load(path, UploadSlot::SurfaceObservation).await?),
        None => None,
    };
    let range = match range {
        Some((start, end)) => {
            SurfaceRange::from_date_times(&parse_date_time(&start)?, &parse_date_time(&end)?)
        }
        None => SurfaceRange::default(),
    };
    let request = SurfaceRequest::build(&icao.to_uppercase(), Some(forecast), observation, &range)?;

    let client = api.client()?;
    info!("Submitting surface verification for {}", request.icao);
    let verification = client.submit_surface(request).await?;
    let result = VerificationResult::from(&verification);
    println!("{}", report_text(&result.surface_title(), &result));

    let tables = client
        .surface_tables(&verification.file_paths)
        .await
        .context("Failed to load comparison data")?;
    print_tables(
        &tables,
        &[ResultTable::Comparison, ResultTable::DetailedComparison],
    );
    Ok(())
}

pub async fn run_upper_air(
    api: &ApiArgs,
    station: &str,
    forecast: &Path,
    observation: Option<&Path>,
    time: Option<(String, String)>,
) -> anyhow::Result<()> {
    let forecast = load(forecast, UploadSlot::UpperAirForecast).await?;
    let observation = match observation {
        Some(path) => Some(load(path, UploadSlot::UpperAirObservation).await?),
        None => None,
    };
    let time = time
        .map(|(date, hour)| SoundingTime { date, hour })
        .unwrap_or_default();
    let request = UpperAirRequest::build(station.trim(), Some(forecast), observation, &time)?;

    let client = api.client()?;
    info!("Submitting upper air verification for {}", request.station);
    let verification = client.submit_upper_air(request).await?;
    let result = VerificationResult::from(&verification);
    println!("{}", report_text(&result.upper_air_title(), &result));

    let tables = client
        .upper_air_tables(&verification)
        .await
        .context("Failed to load verification data")?;
    print_tables(&tables, &[ResultTable::UpperAirVerification]);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use avwx_core::api::{Artifact, Metric, ResultMetadata};

    #[test]
    fn test_report_text() {
        let result = VerificationResult {
            metadata: ResultMetadata::default(),
            accuracy: vec![(Metric::Temperature, Some(85.5)), (Metric::Weather, None)],
            downloads: vec![(Artifact::UpperAirCsv, "out/v.csv".to_string())],
        };
        let text = report_text(&["TITLE".to_string()], &result);
        assert_eq!(
            text,
            "TITLE\n\nTemperature Accuracy: 85.5%\nWeather Accuracy: --\nupper_air_csv: out/v.csv"
        );
    }
}
