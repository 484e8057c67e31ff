use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::reports::models::{DailyReport, ReportWithCreator};

/// Raw report form as submitted. Everything is an optional string here;
/// intake normalization decides what each field means.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ReportFormDto {
    /// Calendar date of the reported day (required)
    pub report_date: Option<String>,
    /// Shift start, HH:MM
    pub work_start: Option<String>,
    /// Shift end, HH:MM
    pub work_end: Option<String>,
    /// Break duration in hours, e.g. "0,5"
    pub break_hours: Option<String>,
    pub weather: Option<String>,
    /// Site identifier (required)
    pub site: Option<String>,
    pub team: Option<String>,
    pub foreman_name: Option<String>,
    pub foreman_hours: Option<String>,
    pub lead_worker_name: Option<String>,
    pub lead_worker_hours: Option<String>,
    pub skilled_worker_name: Option<String>,
    pub skilled_worker_hours: Option<String>,
    pub electrician_name: Option<String>,
    pub electrician_hours: Option<String>,
    pub helper_name: Option<String>,
    pub helper_hours: Option<String>,
    pub truck_driver_name: Option<String>,
    pub truck_driver_hours: Option<String>,
    pub work_description: Option<String>,
    pub materials: Option<String>,
    pub remarks: Option<String>,
}

/// Response DTO for a report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportResponseDto {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
    pub created_by_name: Option<String>,
    pub report_date: String,
    pub work_start: Option<String>,
    pub work_end: Option<String>,
    pub break_hours: f64,
    /// Derived from start/end/break; null when a clock time was unparsable
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

impl ReportResponseDto {
    pub fn from_report(r: DailyReport, created_by_name: Option<String>) -> Self {
        Self {
            id: r.id,
            created_at: r.created_at,
            created_by: r.created_by,
            created_by_name,
            report_date: r.report_date,
            work_start: r.work_start,
            work_end: r.work_end,
            break_hours: r.break_hours,
            net_hours: r.net_hours,
            weather: r.weather,
            site: r.site,
            team: r.team,
            foreman_name: r.foreman_name,
            foreman_hours: r.foreman_hours,
            lead_worker_name: r.lead_worker_name,
            lead_worker_hours: r.lead_worker_hours,
            skilled_worker_name: r.skilled_worker_name,
            skilled_worker_hours: r.skilled_worker_hours,
            electrician_name: r.electrician_name,
            electrician_hours: r.electrician_hours,
            helper_name: r.helper_name,
            helper_hours: r.helper_hours,
            truck_driver_name: r.truck_driver_name,
            truck_driver_hours: r.truck_driver_hours,
            work_description: r.work_description,
            materials: r.materials,
            remarks: r.remarks,
        }
    }
}

impl From<ReportWithCreator> for ReportResponseDto {
    fn from(row: ReportWithCreator) -> Self {
        Self::from_report(row.report, row.created_by_name)
    }
}
