//! Small DOM helpers shared by components and the drop-zone adapter.

use crate::browser::BrowserFile;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, FileList, HtmlInputElement};

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

pub fn file_input(id: &str) -> Option<HtmlInputElement> {
    document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlInputElement>()
        .ok()
}

/// The first file currently selected in the input with `id`.
pub fn selected_file(id: &str) -> Option<BrowserFile> {
    file_input(id)?.files()?.get(0).map(BrowserFile)
}

/// Empty the input so re-selecting the same file fires `change` again.
pub fn clear_file_input(id: &str) {
    if let Some(input) = file_input(id) {
        input.set_value("");
    }
}

/// Put dropped files on the input and fire a bubbling `change`, so a drop
/// runs the same handler as picking a file.
pub fn attach_files(id: &str, files: &FileList) -> Result<(), JsValue> {
    let input = file_input(id).ok_or_else(|| JsValue::from_str("file input not found"))?;
    input.set_files(Some(files));
    let init = web_sys::EventInit::new();
    init.set_bubbles(true);
    let event = web_sys::Event::new_with_event_init_dict("change", &init)?;
    input.dispatch_event(&event)?;
    Ok(())
}

/// Resolve after `ms` milliseconds.
pub async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        }
    });
    let _ = JsFuture::from(promise).await;
}

/// Readable text for a thrown JS value.
pub fn js_error_message(value: JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
