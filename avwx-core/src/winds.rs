//! Upper-winds table extraction from forecast PDF text.
//!
//! Best effort and layout dependent: the forecast bulletin is expected to
//! contain an `UPPER WINDS` section followed later by a `WEATHER` section,
//! with the wind groups laid out as whitespace-separated tokens, six per
//! table row. Any change to the bulletin layout breaks this; the result is
//! informational only and never used for verification.

use crate::generation::{Generation, Ticket};

/// Cells per row.
pub const WIND_COLUMNS: usize = 6;

pub const WIND_HEADERS: [&str; WIND_COLUMNS] = [
    "Altitude",
    "Dir/Speed",
    "Temp",
    "Altitude",
    "Dir/Speed",
    "Temp",
];

const START_MARKER: &str = "upper winds";
const END_MARKER: &str = "weather";

pub const NO_WINDS_FOUND: &str = "No 'Upper Winds' data found.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindTable {
    pub rows: Vec<[String; WIND_COLUMNS]>,
}

/// Join extracted text runs: runs within a page with one space, each page
/// terminated by a newline.
pub fn join_pages(pages: &[Vec<String>]) -> String {
    pages
        .iter()
        .map(|runs| format!("{}\n", runs.join(" ")))
        .collect()
}

/// Text between the first `UPPER WINDS` and the next `WEATHER` after it
/// (both case-insensitive). At least one character must sit between them.
pub fn upper_winds_block(text: &str) -> Option<&str> {
    // ASCII lowercasing keeps byte offsets aligned with `text`.
    let lower = text.to_ascii_lowercase();
    let start = lower.find(START_MARKER)? + START_MARKER.len();
    let search_from = start + lower[start..].chars().next()?.len_utf8();
    let end = search_from + lower[search_from..].find(END_MARKER)?;
    Some(&text[start..end])
}

/// Extract the wind table, or `None` if the markers are missing or the block
/// holds no tokens.
pub fn extract_upper_winds(text: &str) -> Option<WindTable> {
    let block = upper_winds_block(text)?;
    let cleaned = block.replace('=', "");
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }
    let rows = tokens
        .chunks(WIND_COLUMNS)
        .map(|chunk| std::array::from_fn(|i| chunk.get(i).map(|t| t.to_string()).unwrap_or_default()))
        .collect();
    Some(WindTable { rows })
}

/// Outcome of running the extraction on an uploaded forecast.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WindExtraction {
    #[default]
    Idle,
    Running,
    Found(WindTable),
    NotFound,
    Failed(String),
}

impl WindExtraction {
    /// Classify extracted pages.
    pub fn from_pages(pages: &[Vec<String>]) -> Self {
        match extract_upper_winds(&join_pages(pages)) {
            Some(table) => WindExtraction::Found(table),
            None => WindExtraction::NotFound,
        }
    }
}

/// Extraction state for the forecast upload zone. Each attached file starts
/// one extraction; only the newest one may report, and only once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindsTracker {
    extraction: WindExtraction,
    generation: Generation,
}

impl WindsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extraction(&self) -> &WindExtraction {
        &self.extraction
    }

    /// A new forecast was attached; supersedes any running extraction.
    pub fn start(&mut self) -> Ticket {
        self.extraction = WindExtraction::Running;
        self.generation.issue()
    }

    /// Record the outcome of the extraction started with `ticket`. Returns
    /// false (and changes nothing) if it was superseded or already recorded.
    pub fn finish(&mut self, ticket: Ticket, outcome: WindExtraction) -> bool {
        if !self.generation.is_current(ticket) {
            return false;
        }
        self.generation.invalidate();
        self.extraction = outcome;
        true
    }

    /// The forecast was removed.
    pub fn reset(&mut self) {
        self.generation.invalidate();
        self.extraction = WindExtraction::Idle;
    }
}
