//! Forecast verification front end.
//!
//! Two panels behind a tab bar:
//! - Surface: a take-off forecast (`DDMMYYYY.txt`) checked against METAR
//!   observations, either fetched for a date/time range or uploaded.
//! - Upper air: a PDF forecast checked against a sounding, either fetched
//!   for a date and hour or uploaded as CSV. The PDF's upper-winds table is
//!   extracted in the browser for display.
//!
//! The host page provides the `verify-root` element and loads pdf.js
//! (global `pdfjsLib`) before this bundle. All requests go to the page's
//! own origin under `/api/`.

mod report;
mod surface;
mod upper_air;

use avwx_ui::components::NoticeStack;
use avwx_ui::js_bridge;
use avwx_ui::state::{AppState, Tab};
use dioxus::prelude::*;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("verify-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    use_effect(move || {
        js_bridge::load_pdf_scripts();
    });

    let active = (state.tab)();
    let tabs: Vec<(Tab, &'static str, &'static str)> = [Tab::Surface, Tab::UpperAir]
        .into_iter()
        .map(|tab| {
            let style = if tab == active {
                "padding: 8px 16px; border: none; border-bottom: 3px solid #1565C0; background: none; font-weight: bold; cursor: pointer;"
            } else {
                "padding: 8px 16px; border: none; border-bottom: 3px solid transparent; background: none; color: #666; cursor: pointer;"
            };
            (tab, tab.label(), style)
        })
        .collect();
    let surface_display = if active == Tab::Surface { "block" } else { "none" };
    let upper_air_display = if active == Tab::UpperAir { "block" } else { "none" };

    rsx! {
        div {
            style: "font-family: sans-serif; max-width: 1100px; margin: 0 auto; padding: 16px;",
            nav {
                style: "display: flex; gap: 4px; border-bottom: 1px solid #ddd; margin-bottom: 16px;",
                for (tab, label, style) in tabs {
                    button {
                        key: "{label}",
                        style: "{style}",
                        onclick: move |_| state.tab.set(tab),
                        "{label}"
                    }
                }
            }
            // Panels stay mounted so inputs and drop listeners survive tab switches.
            div {
                style: "display: {surface_display};",
                surface::SurfacePanelView {}
            }
            div {
                style: "display: {upper_air_display};",
                upper_air::UpperAirPanelView {}
            }
            NoticeStack {}
        }
    }
}
