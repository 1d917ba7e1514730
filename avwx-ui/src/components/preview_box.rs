//! Preview box shared by upload zones and live fetches.

use super::LoadingSpinner;
use avwx_core::preview::PreviewState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PreviewBoxProps {
    pub preview: PreviewState,
    #[props(default = String::new())]
    pub title: String,
    /// Shows a close control when set.
    pub on_close: Option<EventHandler<()>>,
}

#[component]
pub fn PreviewBox(props: PreviewBoxProps) -> Element {
    let preview = props.preview;
    if !preview.visible {
        return rsx! {};
    }
    let heading = preview.file_name.clone().unwrap_or(props.title);
    let content_color = if preview.is_error { "#C62828" } else { "#222" };

    rsx! {
        div {
            class: "preview-box",
            style: "margin: 8px 0; border: 1px solid #ddd; border-radius: 4px; background: #fafafa;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; padding: 6px 10px; border-bottom: 1px solid #eee;",
                strong { style: "font-size: 13px;", "{heading}" }
                if let Some(on_close) = props.on_close {
                    button {
                        class: "close-preview",
                        style: "background: none; border: none; cursor: pointer; font-size: 16px;",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
            }
            if preview.loading {
                LoadingSpinner {}
            } else {
                pre {
                    style: "margin: 0; padding: 10px; max-height: 240px; overflow: auto; font-size: 12px; color: {content_color};",
                    "{preview.content}"
                }
            }
        }
    }
}
