//! Accuracy figures of a report.

use avwx_core::api::{format_accuracy, Metric};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct AccuracySummaryProps {
    pub accuracy: Vec<(Metric, Option<f64>)>,
}

#[component]
pub fn AccuracySummary(props: AccuracySummaryProps) -> Element {
    let cards: Vec<(&'static str, String)> = props
        .accuracy
        .iter()
        .map(|(metric, value)| (metric.label(), format_accuracy(*value)))
        .collect();

    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 12px; margin: 8px 0;",
            for (label, value) in cards {
                div {
                    key: "{label}",
                    style: "padding: 10px 14px; border: 1px solid #CFD8DC; border-radius: 4px; min-width: 160px;",
                    div { style: "font-size: 12px; color: #666;", "{label}" }
                    div { style: "font-size: 20px; font-weight: bold;", "{value}" }
                }
            }
        }
    }
}
