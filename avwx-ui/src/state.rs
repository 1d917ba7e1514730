//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! Each panel gets its own bundle; the bundles are `Copy` so event handlers
//! and spawned tasks can capture them freely.

use crate::browser::BrowserFile;
use crate::dom;
use avwx_core::api::VerificationResult;
use avwx_core::csv_table::ReportTables;
use avwx_core::datetime::{SoundingTime, SurfaceRange};
use avwx_core::error::FetchError;
use avwx_core::generation::Ticket;
use avwx_core::mode::ModeController;
use avwx_core::preview::{PreviewState, TrackedPreview};
use avwx_core::report::ReportProgress;
use avwx_core::upload::UploadSlot;
use avwx_core::winds::WindsTracker;
use dioxus::prelude::*;
use log::{error, warn};

/// Transient notices stay up this long unless dismissed.
pub const NOTICE_TIMEOUT_MS: i32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Surface,
    UpperAir,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Surface => "Surface Verification",
            Tab::UpperAir => "Upper Air Verification",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub message: String,
}

/// Stack of dismissible notices, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeBoard {
    next_id: u64,
    notices: Vec<Notice>,
}

impl NoticeBoard {
    pub fn push(&mut self, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.notices.push(Notice {
            id: self.next_id,
            message: message.into(),
        });
        self.next_id
    }

    /// Remove a notice. Unknown ids (already dismissed) are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.notices.retain(|n| n.id != id);
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }
}

/// Post a notice that dismisses itself after `NOTICE_TIMEOUT_MS`.
pub fn notify(mut board: Signal<NoticeBoard>, message: impl Into<String>) {
    let message = message.into();
    log::info!("notice: {}", message);
    let id = board.write().push(message);
    spawn(async move {
        dom::sleep_ms(NOTICE_TIMEOUT_MS).await;
        board.write().dismiss(id);
    });
}

/// Post a failed fetch as `"{context}: {error}"`. An empty result is an
/// expected outcome and only logged as a warning.
pub fn notify_fetch_error(board: Signal<NoticeBoard>, context: &str, e: &FetchError) {
    if e.is_no_data() {
        warn!("{}: {}", context, e);
    } else {
        error!("{}: {}", context, e);
    }
    notify(board, format!("{}: {}", context, e));
}

/// One upload zone: the attached file and its preview.
#[derive(Clone, Copy, PartialEq)]
pub struct UploadState {
    pub file: Signal<Option<BrowserFile>>,
    pub preview: Signal<TrackedPreview>,
}

impl UploadState {
    pub fn new() -> Self {
        Self {
            file: Signal::new(None),
            preview: Signal::new(TrackedPreview::new()),
        }
    }

    /// Detach the file, hide its preview and empty the DOM input.
    pub fn clear(&mut self, slot: UploadSlot) {
        self.file.set(None);
        self.preview.write().hide();
        dom::clear_file_input(slot.input_id());
    }
}

/// A preview filled from a live fetch (METAR or sounding text).
#[derive(Clone, Copy, PartialEq)]
pub struct LivePreview {
    pub preview: Signal<TrackedPreview>,
}

impl LivePreview {
    pub fn new() -> Self {
        Self {
            preview: Signal::new(TrackedPreview::new()),
        }
    }

    pub fn state(&self) -> PreviewState {
        self.preview.read().state().clone()
    }

    pub fn begin(&mut self) -> Ticket {
        self.preview.write().begin(None)
    }

    /// Apply a fetch result; a failure is handed back for reporting.
    pub fn settle(&mut self, ticket: Ticket, result: Result<String, FetchError>) -> Result<(), FetchError> {
        self.preview.write().settle_fetch(ticket, result)
    }

    pub fn hide(&mut self) {
        self.preview.write().hide();
    }
}

/// The result section of a panel.
#[derive(Clone, Copy, PartialEq)]
pub struct ReportState {
    pub progress: Signal<ReportProgress>,
}

impl ReportState {
    pub fn new() -> Self {
        Self {
            progress: Signal::new(ReportProgress::new()),
        }
    }

    pub fn begin(&mut self) -> Ticket {
        self.progress.write().begin()
    }

    pub fn submitting(&self) -> bool {
        self.progress.read().submitting
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.progress.read().is_current(ticket)
    }

    pub fn show_result(&mut self, ticket: Ticket, result: VerificationResult) {
        self.progress.write().show_result(ticket, result);
    }

    pub fn show_tables(&mut self, ticket: Ticket, tables: ReportTables) {
        self.progress.write().show_tables(ticket, tables);
    }

    pub fn fail(&mut self, ticket: Ticket) {
        self.progress.write().fail(ticket);
    }

    pub fn reject(&mut self, message: String) {
        self.progress.write().reject(message);
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct SurfacePanel {
    pub icao: Signal<String>,
    pub range: Signal<SurfaceRange>,
    pub mode: Signal<ModeController>,
    pub forecast: UploadState,
    pub observation: UploadState,
    pub metar: LivePreview,
    pub report: ReportState,
}

impl SurfacePanel {
    pub fn new() -> Self {
        Self {
            icao: Signal::new(String::new()),
            range: Signal::new(SurfaceRange::default()),
            mode: Signal::new(ModeController::new()),
            forecast: UploadState::new(),
            observation: UploadState::new(),
            metar: LivePreview::new(),
            report: ReportState::new(),
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct UpperAirPanel {
    pub station: Signal<String>,
    pub time: Signal<SoundingTime>,
    pub mode: Signal<ModeController>,
    pub forecast: UploadState,
    pub observation: UploadState,
    pub sounding: LivePreview,
    pub winds: Signal<WindsTracker>,
    pub report: ReportState,
}

impl UpperAirPanel {
    pub fn new() -> Self {
        Self {
            station: Signal::new(String::new()),
            time: Signal::new(SoundingTime::default()),
            mode: Signal::new(ModeController::new()),
            forecast: UploadState::new(),
            observation: UploadState::new(),
            sounding: LivePreview::new(),
            winds: Signal::new(WindsTracker::new()),
            report: ReportState::new(),
        }
    }

    /// Forget any extraction result and drop a pending one.
    pub fn reset_winds(&mut self) {
        self.winds.write().reset();
    }
}

/// Shared application state for the verification app.
#[derive(Clone, Copy)]
pub struct AppState {
    pub tab: Signal<Tab>,
    pub notices: Signal<NoticeBoard>,
    pub surface: SurfacePanel,
    pub upper_air: UpperAirPanel,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            tab: Signal::new(Tab::default()),
            notices: Signal::new(NoticeBoard::default()),
            surface: SurfacePanel::new(),
            upper_air: UpperAirPanel::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notices_stack_in_order() {
        let mut board = NoticeBoard::default();
        let first = board.push("one");
        let second = board.push("two");
        assert_ne!(first, second);
        let messages: Vec<&str> = board.notices().iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["one", "two"]);
    }

    #[test]
    fn test_dismiss_is_idempotent() {
        let mut board = NoticeBoard::default();
        let id = board.push("gone soon");
        board.push("stays");
        board.dismiss(id);
        board.dismiss(id);
        assert_eq!(board.notices().len(), 1);
        assert_eq!(board.notices()[0].message, "stays");
    }

    #[test]
    fn test_ids_not_reused_after_dismiss() {
        let mut board = NoticeBoard::default();
        let id = board.push("a");
        board.dismiss(id);
        assert_ne!(board.push("b"), id);
    }

    #[test]
    fn test_tab_labels() {
        assert_eq!(Tab::default(), Tab::Surface);
        assert_eq!(Tab::UpperAir.label(), "Upper Air Verification");
    }
}
