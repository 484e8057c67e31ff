mod report_dto;

pub use report_dto::{ReportFormDto, ReportResponseDto};
