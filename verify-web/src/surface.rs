//! Surface (take-off forecast) verification panel.

use crate::report::{ReportKind, ReportView};
use avwx_core::api::VerificationResult;
use avwx_core::datetime::{DateTimeFields, SurfaceRange};
use avwx_core::mode::Transition;
use avwx_core::request::SurfaceRequest;
use avwx_core::station::{is_valid_icao, normalize_icao_input, Icao, ICAO_EXAMPLES, ICAO_LEN};
use avwx_core::upload::UploadSlot;
use avwx_ui::browser::{self, BrowserFile};
use avwx_ui::components::{DateTimePicker, PreviewBox, StationInput, UploadZone};
use avwx_ui::state::{notify, notify_fetch_error, AppState, NoticeBoard, SurfacePanel};
use dioxus::prelude::*;
use log::{error, info};

/// Station and range are complete and well ordered.
fn range_ready(panel: &SurfacePanel) -> bool {
    is_valid_icao(&panel.icao.read()) && panel.range.read().to_wire().is_ok()
}

fn apply(mut panel: SurfacePanel, notices: Signal<NoticeBoard>, transition: Transition) {
    if transition.clear_observation_file {
        panel.observation.clear(UploadSlot::SurfaceObservation);
    }
    if transition.clear_range {
        panel.range.set(SurfaceRange::default());
    }
    if transition.hide_range_preview {
        panel.metar.hide();
    }
    if transition.fetch_preview {
        fetch_metar(panel, notices);
    }
}

fn fetch_metar(panel: SurfacePanel, notices: Signal<NoticeBoard>) {
    let Ok(icao) = panel.icao.read().parse::<Icao>() else {
        return;
    };
    let Ok((start, end)) = panel.range.read().to_wire() else {
        return;
    };
    let mut metar = panel.metar;
    let ticket = metar.begin();
    info!("fetching METAR for {} {}..{}", icao, start, end);
    spawn(async move {
        let result = browser::client().metar_preview(&start, &end, &icao).await;
        if let Err(e) = metar.settle(ticket, result) {
            notify_fetch_error(notices, "Error fetching METAR data", &e);
        }
    });
}

fn range_changed(mut panel: SurfacePanel, notices: Signal<NoticeBoard>) {
    let any_set = panel.range.read().any_set();
    let ready = range_ready(&panel);
    let transition = panel.mode.write().range_changed(any_set, ready);
    apply(panel, notices, transition);
}

fn icao_changed(mut panel: SurfacePanel, notices: Signal<NoticeBoard>, raw: String) {
    panel.icao.set(normalize_icao_input(&raw));
    let ready = range_ready(&panel);
    let transition = panel.mode.write().station_changed(ready);
    apply(panel, notices, transition);
}

fn submit(panel: SurfacePanel, notices: Signal<NoticeBoard>) {
    let mut report = panel.report;
    let built = SurfaceRequest::build(
        &panel.icao.read(),
        panel.forecast.file.read().clone(),
        panel.observation.file.read().clone(),
        &panel.range.read(),
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
        let verification = match client.submit_surface(request).await {
            Ok(verification) => verification,
            Err(e) => {
                error!("surface verification failed: {}", e);
                report.fail(ticket);
                notify(notices, format!("Error processing METAR data: {}", e));
                return;
            }
        };
        if !report.is_current(ticket) {
            return;
        }
        match client.surface_tables(&verification.file_paths).await {
            Ok(tables) => {
                report.show_result(ticket, VerificationResult::from(&verification));
                report.show_tables(ticket, tables);
            }
            Err(e) => {
                error!("Error loading comparison data: {}", e);
                report.fail(ticket);
                notify(notices, "Failed to load comparison data. Please try again.");
            }
        }
    });
}

#[component]
pub fn SurfacePanelView() -> Element {
    let state = use_context::<AppState>();
    let mut panel = state.surface;
    let notices = state.notices;

    let view = panel.mode.read().view();
    let icao = (panel.icao)();
    let range = (panel.range)();
    let metar = panel.metar.state();
    let submitting = panel.report.submitting();
    let range_display = if view.show_range_section { "block" } else { "none" };

    rsx! {
        section {
            class: "panel",
            h2 { style: "margin: 0 0 12px 0;", "Take-off Forecast Verification" }
            StationInput {
                label: "ICAO Code",
                value: icao,
                placeholder: "e.g. VABB",
                max_length: ICAO_LEN,
                examples: ICAO_EXAMPLES,
                on_input: move |raw: String| icao_changed(panel, notices, raw),
            }
            UploadZone {
                slot: UploadSlot::SurfaceForecast,
                upload: panel.forecast,
            }

            h3 { style: "margin: 16px 0 4px 0;", "Observations" }
            div {
                id: "datetime-section",
                style: "display: {range_display};",
                DateTimePicker {
                    label: "Start",
                    fields: range.start.clone(),
                    on_change: move |fields: DateTimeFields| {
                        panel.range.write().start = fields;
                        range_changed(panel, notices);
                    },
                }
                DateTimePicker {
                    label: "End",
                    fields: range.end.clone(),
                    on_change: move |fields: DateTimeFields| {
                        panel.range.write().end = fields;
                        range_changed(panel, notices);
                    },
                }
                PreviewBox { preview: metar, title: "METAR Data" }
            }
            if view.show_divider {
                div {
                    class: "or-divider",
                    style: "text-align: center; color: #888; margin: 8px 0;",
                    "OR"
                }
            }
            UploadZone {
                slot: UploadSlot::SurfaceObservation,
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
            ReportView { report: panel.report, kind: ReportKind::Surface }
        }
    }
}
