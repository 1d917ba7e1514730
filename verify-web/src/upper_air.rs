//! Upper air verification panel.
//!
//! The forecast PDF is read twice over: once as the upload (notice only, no
//! text preview) and once by pdf.js to pull out the upper-winds table.

use crate::report::{ReportKind, ReportView};
use avwx_core::api::VerificationResult;
use avwx_core::datetime::{DateTimeFields, SoundingTime};
use avwx_core::error::ValidationError;
use avwx_core::mode::Transition;
use avwx_core::request::UpperAirRequest;
use avwx_core::station::{is_valid_station_id, StationId, STATION_ID_EXAMPLES, STATION_ID_LEN};
use avwx_core::upload::UploadSlot;
use avwx_core::winds::{WindExtraction, NO_WINDS_FOUND};
use avwx_ui::browser::{self, BrowserFile};
use avwx_ui::components::{
    DateTimePicker, PreviewBox, StationInput, UploadZone, WindTableView,
};
use avwx_ui::dom;
use avwx_ui::js_bridge;
use avwx_ui::state::{notify, notify_fetch_error, AppState, NoticeBoard, UpperAirPanel};
use dioxus::prelude::*;
use log::{error, info, warn};

fn sounding_ready(panel: &UpperAirPanel) -> bool {
    is_valid_station_id(&panel.station.read()) && panel.time.read().to_wire().is_ok()
}

fn apply(mut panel: UpperAirPanel, notices: Signal<NoticeBoard>, transition: Transition) {
    if transition.clear_observation_file {
        panel.observation.clear(UploadSlot::UpperAirObservation);
    }
    if transition.clear_range {
        panel.time.set(SoundingTime::default());
    }
    if transition.hide_range_preview {
        panel.sounding.hide();
    }
    if transition.fetch_preview {
        fetch_sounding(panel, notices);
    }
}

fn fetch_sounding(panel: UpperAirPanel, notices: Signal<NoticeBoard>) {
    let Ok(station) = panel.station.read().parse::<StationId>() else {
        return;
    };
    let Ok(datetime) = panel.time.read().to_wire() else {
        return;
    };
    let mut sounding = panel.sounding;
    let ticket = sounding.begin();
    info!("fetching sounding for {} at {}", station, datetime);
    spawn(async move {
        let result = browser::client().upper_air_preview(&datetime, &station).await;
        if let Err(e) = sounding.settle(ticket, result) {
            notify_fetch_error(notices, "Error fetching upper air data", &e);
        }
    });
}

fn time_changed(mut panel: UpperAirPanel, notices: Signal<NoticeBoard>) {
    let any_set = panel.time.read().any_set();
    let ready = sounding_ready(&panel);
    let transition = panel.mode.write().range_changed(any_set, ready);
    apply(panel, notices, transition);
}

fn station_changed(mut panel: UpperAirPanel, notices: Signal<NoticeBoard>, raw: String) {
    panel.station.set(raw.trim().to_string());
    let ready = sounding_ready(&panel);
    let transition = panel.mode.write().station_changed(ready);
    apply(panel, notices, transition);
}

/// The "Fetch" button: an explicit preview request with validation.
fn fetch_clicked(panel: UpperAirPanel, notices: Signal<NoticeBoard>) {
    if !sounding_ready(&panel) {
        notify(notices, ValidationError::IncompleteSoundingRequest.to_string());
        return;
    }
    fetch_sounding(panel, notices);
}

/// Run the upper-winds extraction on a newly attached forecast.
fn extract_winds(mut panel: UpperAirPanel, notices: Signal<NoticeBoard>, file: BrowserFile) {
    let ticket = panel.winds.write().start();
    spawn(async move {
        let outcome = match file.read_bytes().await {
            Ok(bytes) => match js_bridge::pdf_pages(&bytes).await {
                Ok(pages) => WindExtraction::from_pages(&pages),
                Err(e) => WindExtraction::Failed(e),
            },
            Err(e) => WindExtraction::Failed(dom::js_error_message(e)),
        };
        if !panel.winds.write().finish(ticket, outcome.clone()) {
            return;
        }
        match outcome {
            WindExtraction::NotFound => notify(notices, NO_WINDS_FOUND),
            WindExtraction::Failed(e) => warn!("upper winds extraction failed: {}", e),
            _ => {}
        }
    });
}

fn submit(panel: UpperAirPanel, notices: Signal<NoticeBoard>) {
    let mut report = panel.report;
    let built = UpperAirRequest::build(
        &panel.station.read(),
        panel.forecast.file.read().clone(),
        panel.observation.file.read().clone(),
        &panel.time.read(),
    );
    let request = match built {
        Ok(request) => request,
        Err(e) => {
            report.reject(e.to_string());
            return;
        }
    };

    let ticket = report.begin();
    spawn(async move {
        let client = browser::client();
        let verification = match client.submit_upper_air(request).await {
            Ok(verification) => verification,
            Err(e) => {
                error!("upper air verification failed: {}", e);
                report.fail(ticket);
                notify(notices, format!("Error processing upper air data: {}", e));
                return;
            }
        };
        report.show_result(ticket, VerificationResult::from(&verification));
        if !report.is_current(ticket) {
            return;
        }
        match client.upper_air_tables(&verification).await {
            Ok(tables) => report.show_tables(ticket, tables),
            Err(e) => {
                error!("Error loading verification data: {}", e);
                notify(notices, "Failed to load verification data. Please try again.");
            }
        }
    });
}

#[component]
pub fn UpperAirPanelView() -> Element {
    let state = use_context::<AppState>();
    let mut panel = state.upper_air;
    let notices = state.notices;

    let view = panel.mode.read().view();
    let station = (panel.station)();
    let time = (panel.time)();
    let sounding = panel.sounding.state();
    let winds = panel.winds.read().extraction().clone();
    let submitting = panel.report.submitting();
    let range_display = if view.show_range_section { "block" } else { "none" };
    let time_fields = DateTimeFields {
        date: time.date.clone(),
        hour: time.hour.clone(),
        minute: String::new(),
    };

    rsx! {
        section {
            class: "panel",
            h2 { style: "margin: 0 0 12px 0;", "Upper Air Forecast Verification" }
            StationInput {
                label: "Station ID",
                value: station,
                placeholder: "e.g. 43003",
                max_length: STATION_ID_LEN,
                examples: STATION_ID_EXAMPLES,
                on_input: move |raw: String| station_changed(panel, notices, raw),
            }
            UploadZone {
                slot: UploadSlot::UpperAirForecast,
                upload: panel.forecast,
                on_attached: move |file: BrowserFile| extract_winds(panel, notices, file),
                on_cleared: move |_: ()| panel.reset_winds(),
            }
            WindTableView { extraction: winds }

            h3 { style: "margin: 16px 0 4px 0;", "Observations" }
            div {
                id: "upper-air-datetime-section",
                style: "display: {range_display};",
                div {
                    style: "display: flex; gap: 12px; align-items: center;",
                    DateTimePicker {
                        label: "Sounding",
                        fields: time_fields,
                        show_minute: false,
                        on_change: move |fields: DateTimeFields| {
                            panel.time.set(SoundingTime {
                                date: fields.date,
                                hour: fields.hour,
                            });
                            time_changed(panel, notices);
                        },
                    }
                    button {
                        style: "padding: 4px 12px; cursor: pointer;",
                        onclick: move |_| fetch_clicked(panel, notices),
                        "Fetch"
                    }
                }
                PreviewBox { preview: sounding, title: "Upper Air Data" }
            }
            if view.show_divider {
                div {
                    class: "or-divider",
                    style: "text-align: center; color: #888; margin: 8px 0;",
                    "OR"
                }
            }
            UploadZone {
                slot: UploadSlot::UpperAirObservation,
                upload: panel.observation,
                visible: view.show_upload_zone,
                on_attached: move |_: BrowserFile| {
                    let transition = panel.mode.write().file_attached_event();
                    apply(panel, notices, transition);
                },
                on_cleared: move |_: ()| {
                    let transition = panel.mode.write().file_cleared();
                    apply(panel, notices, transition);
                },
            }
            if view.show_reset {
                button {
                    class: "reset-mode",
                    style: "margin: 4px 0; padding: 4px 10px; cursor: pointer;",
                    onclick: move |_| {
                        let transition = panel.mode.write().reset();
                        apply(panel, notices, transition);
                    },
                    "Reset observation input"
                }
            }

            div {
                style: "margin-top: 16px;",
                button {
                    style: "padding: 8px 20px; background: #1565C0; color: #fff; border: none; border-radius: 4px; cursor: pointer;",
                    disabled: submitting,
                    onclick: move |_| submit(panel, notices),
                    "Verify"
                }
            }
            ReportView { report: panel.report, kind: ReportKind::UpperAir }
        }
    }
}
