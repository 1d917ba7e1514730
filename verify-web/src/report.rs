//! Result section shared by both panels.

use avwx_core::api::VerificationResult;
use avwx_core::csv_table::{ParsedCsvTable, ResultTable};
use avwx_ui::components::{
    AccuracySummary, CsvTable, DownloadLink, ErrorDisplay, LoadingSpinner, ReportHeader,
};
use avwx_ui::state::ReportState;
use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Surface,
    UpperAir,
}

impl ReportKind {
    fn title(&self, result: &VerificationResult) -> Vec<String> {
        match self {
            ReportKind::Surface => result.surface_title(),
            ReportKind::UpperAir => result.upper_air_title(),
        }
    }

    fn tables(&self) -> &'static [ResultTable] {
        match self {
            ReportKind::Surface => &[ResultTable::Comparison, ResultTable::DetailedComparison],
            ReportKind::UpperAir => &[ResultTable::UpperAirVerification],
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ReportViewProps {
    pub report: ReportState,
    pub kind: ReportKind,
}

#[component]
pub fn ReportView(props: ReportViewProps) -> Element {
    let progress = props.report.progress.read().clone();
    let submitting = progress.submitting;
    let validation = progress.validation.clone();
    let result = progress.shown().cloned();
    let loaded = progress.tables;
    let tables: Vec<(&'static str, &'static str, ParsedCsvTable)> = props
        .kind
        .tables()
        .iter()
        .filter_map(|target| {
            loaded
                .get(*target)
                .map(|t| (target.dom_id(), target.title(), t.clone()))
        })
        .collect();

    rsx! {
        if let Some(message) = validation {
            ErrorDisplay { message }
        }
        if submitting {
            LoadingSpinner { label: "Processing verification..." }
        }
        if let Some(result) = result {
            div {
                class: "report",
                style: "margin-top: 16px; padding: 16px; border: 1px solid #CFD8DC; border-radius: 6px;",
                ReportHeader { lines: props.kind.title(&result) }
                AccuracySummary { accuracy: result.accuracy.clone() }
                div {
                    style: "margin: 8px 0;",
                    for (artifact, path) in result.downloads.iter().cloned() {
                        DownloadLink { artifact, file_path: path }
                    }
                }
                for (dom_id, title, table) in tables {
                    div {
                        key: "{dom_id}",
                        h4 { style: "margin: 12px 0 4px 0;", "{title}" }
                        CsvTable { id: dom_id.to_string(), table }
                    }
                }
            }
        }
    }
}
