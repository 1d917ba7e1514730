//! pdf.js interop via `js_sys::eval()`.
//!
//! The page loads pdf.js itself (global `pdfjsLib`). The helper script in
//! `assets/js/pdf-text.js` is evaluated once at startup and exposed as
//! `window.__avwxPdfPages`; this module calls it and decodes its JSON.

use crate::dom::js_error_message;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

static PDF_TEXT_JS: &str = include_str!("../assets/js/pdf-text.js");

const PDF_PAGES_FN: &str = "__avwxPdfPages";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('AVWX JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Install the pdf.js helper. Call once at app startup.
pub fn load_pdf_scripts() {
    call_js(PDF_TEXT_JS);
}

/// Text runs of every page of the PDF in `bytes`.
pub async fn pdf_pages(bytes: &[u8]) -> Result<Vec<Vec<String>>, String> {
    let window = web_sys::window().ok_or("no window")?;
    let func = js_sys::Reflect::get(&window, &JsValue::from_str(PDF_PAGES_FN))
        .map_err(js_error_message)?;
    let func: js_sys::Function = func
        .dyn_into()
        .map_err(|_| "PDF text extraction is not available".to_string())?;

    let data = js_sys::Uint8Array::from(bytes);
    let promise: js_sys::Promise = func
        .call1(&JsValue::NULL, &data)
        .map_err(js_error_message)?
        .dyn_into()
        .map_err(|_| "PDF text extraction did not return a promise".to_string())?;

    let json = JsFuture::from(promise).await.map_err(js_error_message)?;
    let json = json
        .as_string()
        .ok_or("PDF text extraction returned no text")?;
    parse_pages(&json)
}

/// Decode the helper's JSON: an array of pages, each an array of strings.
pub fn parse_pages(json: &str) -> Result<Vec<Vec<String>>, String> {
    serde_json::from_str(json).map_err(|e| format!("malformed PDF text: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pages() {
        let pages = parse_pages(r#"[["UPPER WINDS", "FL050"], []]"#).unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0], vec!["UPPER WINDS", "FL050"]);
        assert!(pages[1].is_empty());
    }

    #[test]
    fn test_parse_pages_rejects_nulls() {
        assert!(parse_pages("[[null]]").is_err());
        assert!(parse_pages("not json").is_err());
    }
}
