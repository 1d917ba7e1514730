//! CSV payloads from the download endpoints, tokenized for table rendering.
//!
//! The backend writes plain comma-separated text. Quoting is not honoured:
//! a `"` is an ordinary character and a comma always splits a field, so
//! commas inside values are not supported. Rows may differ in width (the
//! upper-air report stacks a summary block on top of the data block).

use csv::ReaderBuilder;
use std::collections::BTreeMap;

/// A header row plus data rows, each cell as written in the payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ParsedCsvTable {
    /// Tokenize `text`. The first record is the header row. Blank and
    /// whitespace-only lines are skipped.
    pub fn parse(text: &str) -> Result<Self, csv::Error> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(text.as_bytes());

        let mut records = Vec::new();
        for result in rdr.records() {
            let record = result?;
            if record.len() == 1 && record.get(0).unwrap_or("").trim().is_empty() {
                continue;
            }
            records.push(record.iter().map(str::to_string).collect::<Vec<String>>());
        }

        let mut records = records.into_iter();
        let headers = records.next().unwrap_or_default();
        Ok(Self {
            headers,
            rows: records.collect(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn humanized_headers(&self) -> Vec<String> {
        self.headers.iter().map(|h| humanize_header(h)).collect()
    }

    /// Widest row, header included.
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0)
    }

    /// Copy with the header and every row filled out to `column_count` cells.
    pub fn padded(&self) -> Self {
        let columns = self.column_count();
        let pad = |cells: &Vec<String>| {
            let mut cells = cells.clone();
            cells.resize(columns, String::new());
            cells
        };
        Self {
            headers: pad(&self.headers),
            rows: self.rows.iter().map(pad).collect(),
        }
    }
}

/// `wind_dir_accuracy` -> `Wind Dir Accuracy`.
///
/// Underscores become spaces. In each whitespace-separated word, everything
/// from the first alphanumeric character on is title-cased (first letter
/// upper, rest lower); leading punctuation is left alone, so `(deg)` becomes
/// `(Deg)`.
pub fn humanize_header(header: &str) -> String {
    let spaced = header.replace('_', " ");
    let mut out = String::with_capacity(spaced.len());
    let mut in_word = false;
    for ch in spaced.chars() {
        if ch.is_whitespace() {
            in_word = false;
            out.push(ch);
        } else if in_word {
            out.extend(ch.to_lowercase());
        } else if ch.is_alphanumeric() {
            in_word = true;
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// The three tables a report can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResultTable {
    Comparison,
    DetailedComparison,
    UpperAirVerification,
}

impl ResultTable {
    pub fn dom_id(&self) -> &'static str {
        match self {
            ResultTable::Comparison => "comparison-table",
            ResultTable::DetailedComparison => "detailed-comparison-table",
            ResultTable::UpperAirVerification => "verification-table",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ResultTable::Comparison => "Comparison",
            ResultTable::DetailedComparison => "Detailed Comparison",
            ResultTable::UpperAirVerification => "Verification",
        }
    }
}

/// Rendered tables keyed by target. Rendering into a target replaces what
/// was there.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportTables {
    tables: BTreeMap<ResultTable, ParsedCsvTable>,
}

impl ReportTables {
    pub fn render(&mut self, target: ResultTable, csv_text: &str) -> Result<(), csv::Error> {
        let table = ParsedCsvTable::parse(csv_text)?;
        self.tables.insert(target, table);
        Ok(())
    }

    pub fn get(&self, target: ResultTable) -> Option<&ParsedCsvTable> {
        self.tables.get(&target)
    }

    pub fn clear(&mut self) {
        self.tables.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_parse_simple_table() {
        let table = ParsedCsvTable::parse("a,b\n1,2\n3,4").unwrap();
        assert_eq!(table.humanized_headers(), vec!["A", "B"]);
        assert_eq!(table.rows, vec![row(&["1", "2"]), row(&["3", "4"])]);
    }

    #[test]
    fn test_rerender_replaces_rows() {
        let mut tables = ReportTables::default();
        tables
            .render(ResultTable::Comparison, "a,b\n1,2\n3,4\n5,6")
            .unwrap();
        tables.render(ResultTable::Comparison, "x,y\n7,8").unwrap();
        let table = tables.get(ResultTable::Comparison).unwrap();
        assert_eq!(table.headers, row(&["x", "y"]));
        assert_eq!(table.rows, vec![row(&["7", "8"])]);
        assert!(tables.get(ResultTable::DetailedComparison).is_none());
    }

    #[test]
    fn test_blank_lines_skipped() {
        let table = ParsedCsvTable::parse("a,b\r\n1,2\r\n\r\n   \n3,4\n\n").unwrap();
        assert_eq!(table.rows, vec![row(&["1", "2"]), row(&["3", "4"])]);
    }

    #[test]
    fn test_quotes_are_ordinary_characters() {
        let table = ParsedCsvTable::parse("name,remark\nVABB,\"gusty, low cloud\"").unwrap();
        assert_eq!(table.rows[0], row(&["VABB", "\"gusty", " low cloud\""]));
        assert_eq!(table.column_count(), 3);
    }

    #[test]
    fn test_ragged_rows_kept() {
        let text = "Temperature Accuracy, Wind Speed Accuracy\n85.5, 70\n,\n,\nAltitude,Dir,Speed,Temp\n";
        let table = ParsedCsvTable::parse(text).unwrap();
        assert_eq!(table.headers.len(), 2);
        assert_eq!(table.rows.len(), 4);
        assert_eq!(table.rows[1], row(&["", ""]));
        assert_eq!(table.column_count(), 4);
    }

    #[test]
    fn test_padded_to_widest_row() {
        let table = ParsedCsvTable::parse("a,b\n1,2,3,4\n5\n").unwrap();
        let padded = table.padded();
        assert_eq!(padded.headers, row(&["a", "b", "", ""]));
        assert_eq!(padded.rows[0], row(&["1", "2", "3", "4"]));
        assert_eq!(padded.rows[1], row(&["5", "", "", ""]));
        assert_eq!(padded.humanized_headers()[0], "A");
    }

    #[test]
    fn test_empty_payload() {
        let table = ParsedCsvTable::parse("").unwrap();
        assert!(table.is_empty());
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_humanize_header() {
        assert_eq!(humanize_header("wind_dir_accuracy"), "Wind Dir Accuracy");
        assert_eq!(humanize_header("METAR_TIME"), "Metar Time");
        assert_eq!(humanize_header("temp (deg)"), "Temp (Deg)");
        assert_eq!(humanize_header("Altitude (m)"), "Altitude (M)");
        assert_eq!(humanize_header(""), "");
    }

    #[test]
    fn test_dom_ids_are_distinct() {
        assert_ne!(
            ResultTable::Comparison.dom_id(),
            ResultTable::DetailedComparison.dom_id()
        );
    }
}
