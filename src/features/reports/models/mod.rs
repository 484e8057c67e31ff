mod report;

pub use report::{DailyReport, NewDailyReport, ReportWithCreator};
