//! Core types and REST client contract for the aviation weather verification
//! front end.
//!
//! Everything here is platform-neutral so it can run in the browser (WASM) and
//! natively (CLI, tests):
//! - `station` / `upload`: input validators
//! - `datetime`: the two wire date-time formats the backend expects
//! - `mode`: per-panel range/upload mode controller
//! - `preview` / `report`: file, fetch and result-section models, each
//!   guarded against out-of-order responses
//! - `csv_table`: CSV tokenizer and header humanizing
//! - `winds`: best-effort upper-winds block extraction from PDF text
//! - `api` / `request` / `client`: endpoints, models, multipart builders and
//!   the generic `Client<T: Transport>`

pub mod api;
pub mod client;
pub mod config;
pub mod csv_table;
pub mod datetime;
pub mod error;
pub mod generation;
pub mod mode;
pub mod preview;
pub mod report;
pub mod request;
pub mod station;
pub mod upload;
pub mod winds;

#[cfg(feature = "api")]
pub mod native;
