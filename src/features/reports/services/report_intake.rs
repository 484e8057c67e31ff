//! Normalization and validation of submitted report forms.
//!
//! Free-text fields are trimmed and empty-after-trim means absent. Hours
//! fields silently coerce to non-negative floats. Only `report_date` and
//! `site` are hard requirements; everything else may be blank.

use thiserror::Error;

use crate::features::reports::dtos::ReportFormDto;
use crate::features::reports::models::NewDailyReport;
use crate::features::reports::services::time_accounting::{compute_net_hours, to_float_nonneg};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntakeError {
    /// Required text field(s) empty after trimming. Nothing is persisted.
    #[error("Missing required field(s): {}", .0.join(", "))]
    MissingRequiredField(Vec<&'static str>),
}

fn text(value: Option<&String>) -> Option<String> {
    value
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn hours(value: Option<&String>) -> f64 {
    value.map(|s| to_float_nonneg(s)).unwrap_or(0.0)
}

/// Turn a raw form into a persistence-ready record, or report every
/// missing required field at once. Net hours is always recomputed here,
/// never taken from the form.
pub fn normalize(form: &ReportFormDto) -> Result<NewDailyReport, IntakeError> {
    let report_date = text(form.report_date.as_ref());
    let site = text(form.site.as_ref());

    let mut missing = Vec::new();
    if report_date.is_none() {
        missing.push("report_date");
    }
    if site.is_none() {
        missing.push("site");
    }
    if !missing.is_empty() {
        return Err(IntakeError::MissingRequiredField(missing));
    }

    let work_start = text(form.work_start.as_ref());
    let work_end = text(form.work_end.as_ref());
    let break_hours = hours(form.break_hours.as_ref());

    let net_hours = compute_net_hours(
        work_start.as_deref().unwrap_or(""),
        work_end.as_deref().unwrap_or(""),
        break_hours,
    );

    Ok(NewDailyReport {
        report_date: report_date.unwrap(),
        work_start,
        work_end,
        break_hours,
        net_hours,
        weather: text(form.weather.as_ref()),
        site: site.unwrap(),
        team: text(form.team.as_ref()),
        foreman_name: text(form.foreman_name.as_ref()),
        foreman_hours: hours(form.foreman_hours.as_ref()),
        lead_worker_name: text(form.lead_worker_name.as_ref()),
        lead_worker_hours: hours(form.lead_worker_hours.as_ref()),
        skilled_worker_name: text(form.skilled_worker_name.as_ref()),
        skilled_worker_hours: hours(form.skilled_worker_hours.as_ref()),
        electrician_name: text(form.electrician_name.as_ref()),
        electrician_hours: hours(form.electrician_hours.as_ref()),
        helper_name: text(form.helper_name.as_ref()),
        helper_hours: hours(form.helper_hours.as_ref()),
        truck_driver_name: text(form.truck_driver_name.as_ref()),
        truck_driver_hours: hours(form.truck_driver_hours.as_ref()),
        work_description: text(form.work_description.as_ref()),
        materials: text(form.materials.as_ref()),
        remarks: text(form.remarks.as_ref()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_form() -> ReportFormDto {
        ReportFormDto {
            report_date: Some("21.08.2026".to_string()),
            site: Some("BS Nord".to_string()),
            ..Default::default()
        }
    }

    /// Render a normalized record back into form shape, the way an edit
    /// page would re-submit it.
    fn as_form(record: &NewDailyReport) -> ReportFormDto {
        ReportFormDto {
            report_date: Some(record.report_date.clone()),
            work_start: record.work_start.clone(),
            work_end: record.work_end.clone(),
            break_hours: Some(record.break_hours.to_string()),
            weather: record.weather.clone(),
            site: Some(record.site.clone()),
            team: record.team.clone(),
            foreman_name: record.foreman_name.clone(),
            foreman_hours: Some(record.foreman_hours.to_string()),
            lead_worker_name: record.lead_worker_name.clone(),
            lead_worker_hours: Some(record.lead_worker_hours.to_string()),
            skilled_worker_name: record.skilled_worker_name.clone(),
            skilled_worker_hours: Some(record.skilled_worker_hours.to_string()),
            electrician_name: record.electrician_name.clone(),
            electrician_hours: Some(record.electrician_hours.to_string()),
            helper_name: record.helper_name.clone(),
            helper_hours: Some(record.helper_hours.to_string()),
            truck_driver_name: record.truck_driver_name.clone(),
            truck_driver_hours: Some(record.truck_driver_hours.to_string()),
            work_description: record.work_description.clone(),
            materials: record.materials.clone(),
            remarks: record.remarks.clone(),
        }
    }

    #[test]
    fn accepts_report_with_only_required_fields() {
        let record = normalize(&minimal_form()).unwrap();
        assert_eq!(record.report_date, "21.08.2026");
        assert_eq!(record.site, "BS Nord");
        assert_eq!(record.break_hours, 0.0);
        assert_eq!(record.net_hours, None);
        assert_eq!(record.weather, None);
    }

    #[test]
    fn rejects_missing_date_and_site_naming_both() {
        let err = normalize(&ReportFormDto::default()).unwrap_err();
        assert_eq!(
            err,
            IntakeError::MissingRequiredField(vec!["report_date", "site"])
        );
    }

    #[test]
    fn whitespace_only_required_field_counts_as_missing() {
        let mut form = minimal_form();
        form.site = Some("   ".to_string());
        let err = normalize(&form).unwrap_err();
        assert_eq!(err, IntakeError::MissingRequiredField(vec!["site"]));
    }

    #[test]
    fn trims_free_text_and_blanks_become_absent() {
        let mut form = minimal_form();
        form.weather = Some("  sonnig  ".to_string());
        form.team = Some("   ".to_string());

        let record = normalize(&form).unwrap();
        assert_eq!(record.weather.as_deref(), Some("sonnig"));
        assert_eq!(record.team, None);
    }

    #[test]
    fn computes_net_hours_from_normalized_times() {
        let mut form = minimal_form();
        form.work_start = Some("08:00".to_string());
        form.work_end = Some("16:30".to_string());
        form.break_hours = Some("0,5".to_string());

        let record = normalize(&form).unwrap();
        assert_eq!(record.break_hours, 0.5);
        assert_eq!(record.net_hours, Some(8.0));
    }

    #[test]
    fn unparsable_time_is_stored_with_null_net_hours() {
        let mut form = minimal_form();
        form.work_start = Some("ca. acht".to_string());
        form.work_end = Some("16:30".to_string());

        let record = normalize(&form).unwrap();
        assert_eq!(record.work_start.as_deref(), Some("ca. acht"));
        assert_eq!(record.net_hours, None);
    }

    #[test]
    fn crew_hours_coerce_silently() {
        let mut form = minimal_form();
        form.helper_name = Some("Ivan".to_string());
        form.helper_hours = Some("7,5".to_string());
        form.electrician_hours = Some("-3".to_string());
        form.foreman_hours = Some("k.A.".to_string());

        let record = normalize(&form).unwrap();
        assert_eq!(record.helper_hours, 7.5);
        assert_eq!(record.electrician_hours, 0.0);
        assert_eq!(record.foreman_hours, 0.0);
    }

    #[test]
    fn normalization_is_idempotent() {
        let mut form = minimal_form();
        form.work_start = Some(" 22:00".to_string());
        form.work_end = Some("06:00 ".to_string());
        form.break_hours = Some("0,5".to_string());
        form.weather = Some(" Regen ".to_string());
        form.helper_name = Some("Ivan".to_string());
        form.helper_hours = Some("7,5".to_string());

        let once = normalize(&form).unwrap();
        let twice = normalize(&as_form(&once)).unwrap();
        assert_eq!(once, twice);
    }
}
