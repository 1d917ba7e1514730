//! Range/upload mode controller for one verification panel.
//!
//! A panel collects its observations either from a date/time range (fetched
//! live from the backend) or from an uploaded observation file, never both.
//! The controller is a small state machine: the UI reports what changed and
//! applies the returned [`Transition`].

use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Both options offered.
    #[default]
    Neutral,
    /// Date/time fields in use; upload zone hidden.
    Range,
    /// Observation file attached; date/time section hidden.
    Upload,
}

/// Effects the UI must apply after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Transition {
    pub mode: InputMode,
    /// Detach the observation file and clear its input and preview.
    pub clear_observation_file: bool,
    /// Empty every date/time field.
    pub clear_range: bool,
    /// Hide the live-fetch preview (and invalidate any pending fetch).
    pub hide_range_preview: bool,
    /// Start a live-fetch preview for the current range.
    pub fetch_preview: bool,
}

/// What is visible for the current mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeView {
    pub show_range_section: bool,
    pub show_upload_zone: bool,
    pub show_divider: bool,
    pub show_reset: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModeController {
    mode: InputMode,
    range_set: bool,
    file_attached: bool,
}

impl ModeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// A date/time field changed. `any_set` is true if any range field is
    /// non-empty; `ready` if the range (and station) is complete and valid.
    pub fn range_changed(&mut self, any_set: bool, ready: bool) -> Transition {
        self.range_set = any_set;
        let transition = if any_set {
            let had_file = self.file_attached;
            self.file_attached = false;
            self.mode = InputMode::Range;
            Transition {
                mode: InputMode::Range,
                clear_observation_file: had_file,
                fetch_preview: ready,
                hide_range_preview: !ready,
                ..Transition::default()
            }
        } else {
            self.mode = if self.file_attached {
                InputMode::Upload
            } else {
                InputMode::Neutral
            };
            Transition {
                mode: self.mode,
                hide_range_preview: true,
                ..Transition::default()
            }
        };
        debug!("range changed (set={any_set}, ready={ready}) -> {:?}", self.mode);
        transition
    }

    /// The station code changed while in range mode. Re-evaluates whether a
    /// preview fetch should start; has no effect in other modes.
    pub fn station_changed(&mut self, ready: bool) -> Transition {
        if self.mode != InputMode::Range {
            return Transition {
                mode: self.mode,
                ..Transition::default()
            };
        }
        self.range_changed(self.range_set, ready)
    }

    /// A validated observation file was attached.
    pub fn file_attached_event(&mut self) -> Transition {
        self.file_attached = true;
        self.mode = InputMode::Upload;
        debug!("observation file attached -> Upload");
        Transition {
            mode: InputMode::Upload,
            hide_range_preview: true,
            ..Transition::default()
        }
    }

    /// The observation file was removed via its close control.
    pub fn file_cleared(&mut self) -> Transition {
        self.file_attached = false;
        self.mode = if self.range_set {
            InputMode::Range
        } else {
            InputMode::Neutral
        };
        Transition {
            mode: self.mode,
            clear_observation_file: true,
            ..Transition::default()
        }
    }

    /// Back to neutral: no file, no range, no preview.
    pub fn reset(&mut self) -> Transition {
        *self = Self::default();
        Transition {
            mode: InputMode::Neutral,
            clear_observation_file: true,
            clear_range: true,
            hide_range_preview: true,
            fetch_preview: false,
        }
    }

    pub fn view(&self) -> ModeView {
        match self.mode {
            InputMode::Neutral => ModeView {
                show_range_section: true,
                show_upload_zone: true,
                show_divider: true,
                show_reset: false,
            },
            InputMode::Range => ModeView {
                show_range_section: true,
                show_upload_zone: false,
                show_divider: false,
                show_reset: true,
            },
            InputMode::Upload => ModeView {
                show_range_section: false,
                show_upload_zone: true,
                show_divider: false,
                show_reset: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_neutral_with_both_options() {
        let ctl = ModeController::new();
        assert_eq!(ctl.mode(), InputMode::Neutral);
        let view = ctl.view();
        assert!(view.show_range_section && view.show_upload_zone && !view.show_reset);
    }

    #[test]
    fn test_range_field_switches_to_range_mode() {
        let mut ctl = ModeController::new();
        let t = ctl.range_changed(true, false);
        assert_eq!(t.mode, InputMode::Range);
        assert!(!t.fetch_preview);
        assert!(!ctl.view().show_upload_zone);
        assert!(ctl.view().show_reset);
    }

    #[test]
    fn test_complete_range_triggers_fetch() {
        let mut ctl = ModeController::new();
        ctl.range_changed(true, false);
        let t = ctl.range_changed(true, true);
        assert!(t.fetch_preview);
        assert!(!t.hide_range_preview);
    }

    #[test]
    fn test_clearing_all_fields_returns_to_neutral() {
        let mut ctl = ModeController::new();
        ctl.range_changed(true, false);
        let t = ctl.range_changed(false, false);
        assert_eq!(t.mode, InputMode::Neutral);
        assert!(t.hide_range_preview);
    }

    #[test]
    fn test_date_after_file_switches_fully_to_range() {
        let mut ctl = ModeController::new();
        ctl.file_attached_event();
        assert_eq!(ctl.mode(), InputMode::Upload);
        let t = ctl.range_changed(true, false);
        assert_eq!(t.mode, InputMode::Range);
        assert!(t.clear_observation_file);
        assert!(!ctl.view().show_upload_zone);
    }

    #[test]
    fn test_file_after_date_switches_fully_to_upload() {
        let mut ctl = ModeController::new();
        ctl.range_changed(true, true);
        let t = ctl.file_attached_event();
        assert_eq!(t.mode, InputMode::Upload);
        assert!(t.hide_range_preview);
        let view = ctl.view();
        assert!(!view.show_range_section);
        assert!(view.show_upload_zone);
    }

    #[test]
    fn test_clearing_file_restores_previous_range() {
        let mut ctl = ModeController::new();
        ctl.range_changed(true, false);
        ctl.file_attached_event();
        let t = ctl.file_cleared();
        assert_eq!(t.mode, InputMode::Range);

        let mut ctl = ModeController::new();
        ctl.file_attached_event();
        assert_eq!(ctl.file_cleared().mode, InputMode::Neutral);
    }

    #[test]
    fn test_station_change_only_matters_in_range_mode() {
        let mut ctl = ModeController::new();
        assert!(!ctl.station_changed(true).fetch_preview);
        ctl.range_changed(true, false);
        assert!(ctl.station_changed(true).fetch_preview);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut ctl = ModeController::new();
        ctl.range_changed(true, true);
        ctl.file_attached_event();
        let t = ctl.reset();
        assert_eq!(t.mode, InputMode::Neutral);
        assert!(t.clear_observation_file && t.clear_range && t.hide_range_preview);
        assert_eq!(ctl, ModeController::new());
    }
}
