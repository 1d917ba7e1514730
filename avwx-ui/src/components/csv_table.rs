//! HTML table for a downloaded CSV.

use avwx_core::csv_table::ParsedCsvTable;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct CsvTableProps {
    pub id: String,
    pub table: ParsedCsvTable,
}

/// Humanized header row, then every data row as written, short rows padded
/// with empty cells. Cells are text nodes, never markup.
#[component]
pub fn CsvTable(props: CsvTableProps) -> Element {
    if props.table.is_empty() {
        return rsx! {};
    }
    let padded = props.table.padded();
    let headers = padded.humanized_headers();

    rsx! {
        div {
            class: "table-responsive",
            style: "overflow-x: auto; margin: 8px 0;",
            table {
                id: "{props.id}",
                style: "border-collapse: collapse; font-size: 13px; width: 100%;",
                thead {
                    tr {
                        for (i, header) in headers.iter().enumerate() {
                            th {
                                key: "{i}",
                                style: "text-align: left; padding: 6px 8px; background: #ECEFF1; border: 1px solid #CFD8DC;",
                                "{header}"
                            }
                        }
                    }
                }
                tbody {
                    for (r, row) in padded.rows.iter().enumerate() {
                        tr {
                            key: "{r}",
                            for (c, cell) in row.iter().enumerate() {
                                td {
                                    key: "{c}",
                                    style: "padding: 4px 8px; border: 1px solid #ECEFF1;",
                                    "{cell}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
