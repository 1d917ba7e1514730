//! Result section of a verification panel.

use crate::api::VerificationResult;
use crate::csv_table::ReportTables;
use crate::generation::{Generation, Ticket};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportProgress {
    /// A verification request is in flight.
    pub submitting: bool,
    pub visible: bool,
    pub result: Option<VerificationResult>,
    pub tables: ReportTables,
    /// Client-side validation message shown under the submit button.
    pub validation: Option<String>,
    generation: Generation,
}

impl ReportProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hide the previous report and enter the loading state.
    pub fn begin(&mut self) -> Ticket {
        let ticket = self.generation.issue();
        self.validation = None;
        self.visible = false;
        self.result = None;
        self.tables.clear();
        self.submitting = true;
        ticket
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.is_current(ticket)
    }

    /// Show the header, accuracy figures and downloads.
    pub fn show_result(&mut self, ticket: Ticket, result: VerificationResult) {
        if self.is_current(ticket) {
            self.result = Some(result);
            self.submitting = false;
            self.visible = true;
        }
    }

    pub fn show_tables(&mut self, ticket: Ticket, tables: ReportTables) {
        if self.is_current(ticket) {
            self.tables = tables;
        }
    }

    /// Leave the loading state without a report.
    pub fn fail(&mut self, ticket: Ticket) {
        if self.is_current(ticket) {
            self.submitting = false;
            self.visible = false;
        }
    }

    pub fn reject(&mut self, message: String) {
        self.validation = Some(message);
    }

    /// The result to render, if the section is showing.
    pub fn shown(&self) -> Option<&VerificationResult> {
        self.result.as_ref().filter(|_| self.visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Metric, ResultMetadata};
    use crate::csv_table::ResultTable;

    fn result() -> VerificationResult {
        VerificationResult {
            metadata: ResultMetadata::default(),
            accuracy: vec![(Metric::Overall, Some(91.5))],
            downloads: Vec::new(),
        }
    }

    #[test]
    fn test_fail_clears_loading_and_report() {
        let mut report = ReportProgress::new();
        let ticket = report.begin();
        assert!(report.submitting);
        report.fail(ticket);
        assert!(!report.submitting);
        assert!(!report.visible);
        assert!(report.shown().is_none());
    }

    #[test]
    fn test_begin_hides_previous_report() {
        let mut report = ReportProgress::new();
        let ticket = report.begin();
        report.show_result(ticket, result());
        let mut tables = ReportTables::default();
        tables.render(ResultTable::Comparison, "a,b\n1,2\n").unwrap();
        report.show_tables(ticket, tables);
        report.reject("old message".to_string());
        assert!(report.shown().is_some());

        report.begin();
        assert!(report.submitting);
        assert!(report.shown().is_none());
        assert!(report.tables.get(ResultTable::Comparison).is_none());
        assert_eq!(report.validation, None);
    }

    #[test]
    fn test_superseded_submission_ignored() {
        let mut report = ReportProgress::new();
        let first = report.begin();
        let second = report.begin();

        report.show_result(first, result());
        report.fail(first);
        assert!(report.submitting);
        assert!(report.shown().is_none());

        report.show_result(second, result());
        assert!(!report.submitting);
        assert_eq!(report.shown().map(|r| r.accuracy[0].1), Some(Some(91.5)));
    }
}
