//! Reusable Dioxus RSX components for the verification panels.

mod accuracy_summary;
mod csv_table;
mod date_time_picker;
mod download_link;
mod error_display;
mod loading_spinner;
mod notice_stack;
mod preview_box;
mod report_header;
mod station_input;
mod upload_zone;
mod wind_table;

pub use accuracy_summary::AccuracySummary;
pub use csv_table::CsvTable;
pub use date_time_picker::DateTimePicker;
pub use download_link::DownloadLink;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use notice_stack::NoticeStack;
pub use preview_box::PreviewBox;
pub use report_header::ReportHeader;
pub use station_input::StationInput;
pub use upload_zone::UploadZone;
pub use wind_table::WindTableView;
