//! Shared Dioxus components and browser plumbing for the verification app.
//!
//! This crate provides:
//! - `state`: per-panel signal bundles collected in `AppState`
//! - `browser`: `Transport` over `web-sys` fetch, and the browser file handle
//! - `js_bridge`: pdf.js text extraction via `js_sys::eval()`
//! - `dropzone`: drag-and-drop adapter for upload zones
//! - `dom`: small DOM helpers
//! - `components`: reusable RSX components (upload zones, previews, tables)

pub mod browser;
pub mod components;
pub mod dom;
pub mod dropzone;
pub mod js_bridge;
pub mod state;
