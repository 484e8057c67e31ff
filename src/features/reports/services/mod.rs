pub mod report_intake;
pub mod report_service;
pub mod time_accounting;

pub use report_service::ReportService;
