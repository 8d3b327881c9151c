//! PDF rendering of service reports.

pub mod layout;
pub mod service_report;

pub use service_report::{ServiceReportData, file_name, render_service_report};
