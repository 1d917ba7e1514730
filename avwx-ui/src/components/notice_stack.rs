//! Dismissible notices in the corner of the page.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn NoticeStack() -> Element {
    let state = use_context::<AppState>();
    let mut board = state.notices;
    let notices = board.read().notices().to_vec();

    rsx! {
        div {
            style: "position: fixed; right: 16px; bottom: 16px; display: flex; flex-direction: column; gap: 8px; z-index: 1000; max-width: 360px;",
            for notice in notices {
                div {
                    key: "{notice.id}",
                    class: "notification",
                    style: "display: flex; gap: 12px; align-items: flex-start; padding: 12px 16px; background: #323232; color: #fff; border-radius: 4px; box-shadow: 0 2px 6px rgba(0,0,0,0.3);",
                    span { style: "flex: 1;", "{notice.message}" }
                    button {
                        style: "background: none; border: none; color: #fff; cursor: pointer; font-size: 16px;",
                        onclick: move |_| board.write().dismiss(notice.id),
                        "×"
                    }
                }
            }
        }
    }
}
