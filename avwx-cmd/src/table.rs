//! Plain-text rendering of report and wind tables.

use avwx_core::csv_table::ParsedCsvTable;
use avwx_core::winds::{WindTable, WIND_HEADERS};
use std::iter;

const COLUMN_GAP: &str = "  ";

/// Left-aligned columns, a dashed rule under the header. Short rows leave
/// their trailing columns blank.
pub fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let all_rows = || iter::once(headers).chain(rows.iter().map(Vec::as_slice));
    let columns = all_rows().map(<[String]>::len).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in all_rows() {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let format_row = |row: &[String]| {
        let cells: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, width)| {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                format!("{:<width$}", cell, width = *width)
            })
            .collect();
        cells.join(COLUMN_GAP).trim_end().to_string()
    };

    let mut out = vec![format_row(headers)];
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push(rule.join(COLUMN_GAP));
    out.extend(rows.iter().map(|r| format_row(r.as_slice())));
    out.join("\n")
}

pub fn render_csv(table: &ParsedCsvTable) -> String {
    render_table(&table.humanized_headers(), &table.rows)
}

pub fn render_winds(table: &WindTable) -> String {
    let headers: Vec<String> = WIND_HEADERS.iter().map(|h| h.to_string()).collect();
    let rows: Vec<Vec<String>> = table.rows.iter().map(|r| r.to_vec()).collect();
    render_table(&headers, &rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(c: &[&str]) -> Vec<String> {
        c.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_columns_aligned() {
        let out = render_table(&cells(&["A", "Long Header"]), &[cells(&["value", "x"])]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "A      Long Header");
        assert_eq!(lines[1], "-----  -----------");
        assert_eq!(lines[2], "value  x");
    }

    #[test]
    fn test_ragged_rows_padded() {
        let out = render_table(&cells(&["a"]), &[cells(&["1", "2", "3"]), cells(&[])]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "a");
        assert_eq!(lines[1], "-  -  -");
        assert_eq!(lines[2], "1  2  3");
        assert!(out.ends_with("1  2  3\n"));
    }

    #[test]
    fn test_csv_headers_humanized() {
        let table = ParsedCsvTable::parse("wind_speed,temp\n10,20").unwrap();
        let out = render_csv(&table);
        assert!(out.starts_with("Wind Speed  Temp"));
    }
}
