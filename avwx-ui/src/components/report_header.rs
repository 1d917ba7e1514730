//! Report header: a title line with detail lines under it.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ReportHeaderProps {
    pub lines: Vec<String>,
}

#[component]
pub fn ReportHeader(props: ReportHeaderProps) -> Element {
    let mut lines = props.lines.into_iter();
    let title = lines.next().unwrap_or_default();
    let details: Vec<String> = lines.collect();

    rsx! {
        div {
            style: "margin-bottom: 12px; text-align: center;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{title}"
            }
            for (i, line) in details.iter().enumerate() {
                p {
                    key: "{i}",
                    style: "margin: 0; font-size: 13px; color: #444;",
                    "{line}"
                }
            }
        }
    }
}
