//! Preview model for upload zones and live-fetch panels.

use crate::generation::{Generation, Ticket};
use std::fmt::Display;

/// Number of lines shown from a text file.
pub const PREVIEW_LINE_LIMIT: usize = 10;

pub const PDF_NOTICE: &str =
    "PDF uploaded successfully. Upper winds data will be extracted for verification.";

pub const READ_ERROR: &str = "Error reading file";

/// First `limit` lines of `text`, split on `\n` and re-joined unchanged.
pub fn head_lines(text: &str, limit: usize) -> String {
    text.split('\n').take(limit).collect::<Vec<_>>().join("\n")
}

/// State of one preview box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewState {
    pub visible: bool,
    pub loading: bool,
    pub content: String,
    /// Name of the file being previewed, if this preview belongs to an upload.
    pub file_name: Option<String>,
    pub is_error: bool,
}

impl PreviewState {
    pub fn hidden() -> Self {
        Self::default()
    }

    /// Show the box with the loading indicator and no content.
    pub fn loading(file_name: Option<String>) -> Self {
        Self {
            visible: true,
            loading: true,
            content: String::new(),
            file_name,
            is_error: false,
        }
    }

    /// Loaded successfully.
    pub fn ready(&mut self, content: String) {
        self.loading = false;
        self.is_error = false;
        self.content = content;
    }

    /// Load failed; the box stays visible with `message`.
    pub fn failed(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.is_error = true;
        self.content = message.into();
    }

    /// Settle a text read: first lines on success, the read error message on
    /// failure. Always clears the loading indicator.
    pub fn settle_text<E: Display>(&mut self, read: Result<String, E>) {
        match read {
            Ok(text) => self.ready(head_lines(&text, PREVIEW_LINE_LIMIT)),
            Err(e) => {
                log::warn!("preview read failed: {}", e);
                self.failed(READ_ERROR);
            }
        }
    }

    /// Settled state for a PDF: no read, fixed notice.
    pub fn pdf_notice(file_name: String) -> Self {
        let mut state = Self::loading(Some(file_name));
        state.ready(PDF_NOTICE.to_string());
        state
    }

    pub fn clear(&mut self) {
        *self = Self::hidden();
    }
}

/// A preview settled by async loads. Only the newest load may touch it, and
/// hiding it drops whatever is still in flight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackedPreview {
    state: PreviewState,
    generation: Generation,
}

impl TrackedPreview {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PreviewState {
        &self.state
    }

    /// Show the loading indicator and take a ticket for the load.
    pub fn begin(&mut self, file_name: Option<String>) -> Ticket {
        let ticket = self.generation.issue();
        self.state = PreviewState::loading(file_name);
        ticket
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.is_current(ticket)
    }

    /// Apply a fetch result. A failure hides the box and is handed back for
    /// reporting; a superseded result is dropped.
    pub fn settle_fetch<E>(&mut self, ticket: Ticket, result: Result<String, E>) -> Result<(), E> {
        if !self.is_current(ticket) {
            log::debug!("discarding superseded preview response");
            return Ok(());
        }
        match result {
            Ok(text) => {
                self.state.ready(text);
                Ok(())
            }
            Err(e) => {
                self.state = PreviewState::hidden();
                Err(e)
            }
        }
    }

    /// Apply a file read; returns false when the read was superseded.
    pub fn settle_read<E: Display>(&mut self, ticket: Ticket, read: Result<String, E>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.state.settle_text(read);
        true
    }

    /// Replace the preview with an already settled state.
    pub fn show(&mut self, state: PreviewState) {
        self.generation.invalidate();
        self.state = state;
    }

    pub fn hide(&mut self) {
        self.show(PreviewState::hidden());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_lines_limits_to_ten() {
        let text: String = (1..=25).map(|i| format!("line {i}\n")).collect();
        let head = head_lines(&text, PREVIEW_LINE_LIMIT);
        assert_eq!(head.lines().count(), 10);
        assert!(head.starts_with("line 1\n"));
        assert!(head.ends_with("line 10"));
    }

    #[test]
    fn test_head_lines_short_file() {
        assert_eq!(head_lines("a\nb", 10), "a\nb");
        assert_eq!(head_lines("", 10), "");
    }

    #[test]
    fn test_settle_text_success() {
        let mut state = PreviewState::loading(Some("obs.csv".to_string()));
        assert!(state.visible && state.loading);
        state.settle_text::<String>(Ok("h1,h2\n1,2\n".to_string()));
        assert!(!state.loading);
        assert!(!state.is_error);
        assert_eq!(state.content, "h1,h2\n1,2\n");
    }

    #[test]
    fn test_settle_text_error_never_leaves_spinner() {
        let mut state = PreviewState::loading(Some("obs.csv".to_string()));
        state.settle_text::<&str>(Err("boom"));
        assert!(state.visible);
        assert!(!state.loading);
        assert!(state.is_error);
        assert_eq!(state.content, READ_ERROR);
    }

    #[test]
    fn test_pdf_notice() {
        let state = PreviewState::pdf_notice("tafor.pdf".to_string());
        assert!(state.visible && !state.loading);
        assert_eq!(state.content, PDF_NOTICE);
    }

    #[test]
    fn test_fetch_failure_hides_spinner() {
        use crate::api::{classify_text, RawResponse};

        let mut preview = TrackedPreview::new();
        let ticket = preview.begin(None);
        assert!(preview.state().visible && preview.state().loading);

        let result = classify_text(
            RawResponse::new(400, r#"{"error": "bad request"}"#),
            "Failed to fetch METAR data",
        );
        let err = preview.settle_fetch(ticket, result).unwrap_err();
        assert_eq!(err.to_string(), "bad request");
        assert!(!preview.state().visible);
        assert!(!preview.state().loading);
    }

    #[test]
    fn test_stale_fetch_dropped_after_newer_begin() {
        let mut preview = TrackedPreview::new();
        let first = preview.begin(None);
        let second = preview.begin(None);

        assert!(preview.settle_fetch::<String>(first, Ok("old".to_string())).is_ok());
        assert!(preview.state().loading);
        assert_eq!(preview.state().content, "");

        // a late failure for the superseded request is not reported either
        assert!(preview.settle_fetch(first, Err("late".to_string())).is_ok());
        assert!(preview.state().visible);

        preview.settle_fetch::<String>(second, Ok("METAR VABB".to_string())).unwrap();
        assert!(!preview.state().loading);
        assert_eq!(preview.state().content, "METAR VABB");
    }

    #[test]
    fn test_hide_drops_pending_load() {
        let mut preview = TrackedPreview::new();
        let ticket = preview.begin(Some("obs.csv".to_string()));
        preview.hide();
        assert!(!preview.settle_read::<&str>(ticket, Ok("a,b".to_string())));
        assert_eq!(preview.state(), &PreviewState::hidden());
    }

    #[test]
    fn test_pdf_notice_supersedes_text_read() {
        let mut preview = TrackedPreview::new();
        let ticket = preview.begin(Some("obs.csv".to_string()));
        preview.show(PreviewState::pdf_notice("tafor.pdf".to_string()));
        assert!(!preview.settle_read::<&str>(ticket, Ok("a,b".to_string())));
        assert_eq!(preview.state().content, PDF_NOTICE);

        let ticket = preview.begin(Some("obs.csv".to_string()));
        assert!(preview.settle_read::<&str>(ticket, Ok("a,b\n1,2".to_string())));
        assert_eq!(preview.state().content, "a,b\n1,2");
    }

    #[test]
    fn test_clear() {
        let mut state = PreviewState::loading(None);
        state.clear();
        assert_eq!(state, PreviewState::hidden());
    }
}
