//! Upper winds extracted from the forecast PDF.

use super::{ErrorDisplay, LoadingSpinner};
use avwx_core::winds::{WindExtraction, NO_WINDS_FOUND, WIND_HEADERS};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct WindTableViewProps {
    pub extraction: WindExtraction,
}

#[component]
pub fn WindTableView(props: WindTableViewProps) -> Element {
    match props.extraction {
        WindExtraction::Idle => rsx! {},
        WindExtraction::Running => rsx! {
            LoadingSpinner { label: "Extracting upper winds..." }
        },
        WindExtraction::NotFound => rsx! {
            p { style: "color: #666; font-style: italic;", "{NO_WINDS_FOUND}" }
        },
        WindExtraction::Failed(message) => rsx! {
            ErrorDisplay { message: format!("Could not read the forecast PDF: {}", message) }
        },
        WindExtraction::Found(table) => rsx! {
            div {
                style: "overflow-x: auto; margin: 8px 0;",
                h4 { style: "margin: 8px 0;", "Upper Winds" }
                table {
                    id: "upper-winds-table",
                    style: "border-collapse: collapse; font-size: 13px;",
                    thead {
                        tr {
                            for header in WIND_HEADERS {
                                th {
                                    key: "{header}",
                                    style: "padding: 6px 8px; background: #ECEFF1; border: 1px solid #CFD8DC;",
                                    "{header}"
                                }
                            }
                        }
                    }
                    tbody {
                        for (r, row) in table.rows.iter().enumerate() {
                            tr {
                                key: "{r}",
                                for (c, cell) in row.iter().enumerate() {
                                    td {
                                        key: "{c}",
                                        style: "padding: 4px 8px; border: 1px solid #ECEFF1; font-family: monospace;",
                                        "{cell}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    }
}
