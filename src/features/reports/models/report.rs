use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a daily site report.
///
/// Clock times are kept as the strings the worker submitted; `net_hours`
/// is derived at intake and is NULL when a time was unparsable. Every
/// crew role carries an optional name plus a non-negative hours figure.
#[derive(Debug, Clone, FromRow)]
pub struct DailyReport {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
    pub report_date: String,
    pub work_start: Option<String>,
    pub work_end: Option<String>,
    pub break_hours: f64,
    pub net_hours: Option<f64>,
    pub weather: Option<String>,
    pub site: String,
    pub team: Option<String>,
    pub foreman_name: Option<String>,
    pub foreman_hours: f64,
    pub lead_worker_name: Option<String>,
    pub lead_worker_hours: f64,
    pub skilled_worker_name: Option<String>,
    pub skilled_worker_hours: f64,
    pub electrician_name: Option<String>,
    pub electrician_hours: f64,
    pub helper_name: Option<String>,
    pub helper_hours: f64,
    pub truck_driver_name: Option<String>,
    pub truck_driver_hours: f64,
    pub work_description: Option<String>,
    pub materials: Option<String>,
    pub remarks: Option<String>,
}

/// Report row joined with the creator's name for list/detail views
#[derive(Debug, Clone, FromRow)]
pub struct ReportWithCreator {
    #[sqlx(flatten)]
    pub report: DailyReport,
    pub created_by_name: Option<String>,
}

/// Normalized, validation-passed record ready for persistence.
/// Produced exclusively by report intake; `net_hours` is computed, never
/// taken from the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDailyReport {
    pub report_date: String,
    pub work_start: Option<String>,
    pub work_end: Option<String>,
    pub break_hours: f64,
    pub net_hours: Option<f64>,
    pub weather: Option<String>,
    pub site: String,
    pub team: Option<String>,
    pub foreman_name: Option<String>,
    pub foreman_hours: f64,
    pub lead_worker_name: Option<String>,
    pub lead_worker_hours: f64,
    pub skilled_worker_name: Option<String>,
    pub skilled_worker_hours: f64,
    pub electrician_name: Option<String>,
    pub electrician_hours: f64,
    pub helper_name: Option<String>,
    pub helper_hours: f64,
    pub truck_driver_name: Option<String>,
    pub truck_driver_hours: f64,
    pub work_description: Option<String>,
    pub materials: Option<String>,
    pub remarks: Option<String>,
}
