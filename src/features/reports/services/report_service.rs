use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::reports::dtos::{ReportFormDto, ReportResponseDto};
use crate::features::reports::repository::ReportStore;
use crate::features::reports::services::report_intake;
use crate::shared::types::PaginationQuery;

/// Report CRUD on top of intake normalization. Validation always runs
/// before anything touches the store.
pub struct ReportService {
    reports: Arc<dyn ReportStore>,
}

impl ReportService {
    pub fn new(reports: Arc<dyn ReportStore>) -> Self {
        Self { reports }
    }

    /// Validate and persist a new report for the current user.
    pub async fn create(
        &self,
        user: &AuthenticatedUser,
        form: ReportFormDto,
    ) -> Result<ReportResponseDto> {
        let record = report_intake::normalize(&form)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let report = self.reports.insert(user.id, record).await?;
        tracing::info!(report_id = %report.id, user_id = %user.id, "Report created");

        Ok(ReportResponseDto::from_report(
            report,
            Some(user.name.clone()),
        ))
    }

    pub async fn list(
        &self,
        pagination: &PaginationQuery,
    ) -> Result<(Vec<ReportResponseDto>, i64)> {
        let rows = self
            .reports
            .list(pagination.limit(), pagination.offset())
            .await?;
        let total = self.reports.count().await?;

        Ok((rows.into_iter().map(|r| r.into()).collect(), total))
    }

    pub async fn get(&self, id: Uuid) -> Result<ReportResponseDto> {
        let row = self.reports.find(id).await?;
        row.map(|r| r.into())
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))
    }

    /// Full overwrite of the mutable fields. Authorship and creation
    /// timestamp are never touched.
    pub async fn update(&self, id: Uuid, form: ReportFormDto) -> Result<ReportResponseDto> {
        let existing = self
            .reports
            .find(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))?;

        let record = report_intake::normalize(&form)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let updated = self
            .reports
            .update(id, record)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))?;

        tracing::info!(report_id = %id, "Report updated");

        Ok(ReportResponseDto::from_report(
            updated,
            existing.created_by_name,
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.reports.delete(id).await? {
            return Err(AppError::NotFound(format!("Report {} not found", id)));
        }
        tracing::info!(report_id = %id, "Report deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::constants::ROLE_WORKER;
    use crate::shared::test_helpers::InMemoryReportStore;

    fn worker() -> AuthenticatedUser {
        AuthenticatedUser {
            id: Uuid::new_v4(),
            name: "Mirko".to_string(),
            role: ROLE_WORKER.to_string(),
        }
    }

    fn valid_form() -> ReportFormDto {
        ReportFormDto {
            report_date: Some("21.08.2026".to_string()),
            site: Some("BS Nord".to_string()),
            work_start: Some("08:00".to_string()),
            work_end: Some("16:30".to_string()),
            break_hours: Some("0,5".to_string()),
            ..Default::default()
        }
    }

    fn service() -> (Arc<InMemoryReportStore>, ReportService) {
        let store = Arc::new(InMemoryReportStore::default());
        (Arc::clone(&store), ReportService::new(store))
    }

    #[tokio::test]
    async fn create_computes_and_stores_net_hours() {
        let (_, service) = service();
        let report = service.create(&worker(), valid_form()).await.unwrap();

        assert_eq!(report.net_hours, Some(8.0));
        assert_eq!(report.created_by_name.as_deref(), Some("Mirko"));
    }

    #[tokio::test]
    async fn create_rejects_invalid_form_without_persisting() {
        let (store, service) = service();
        let err = service
            .create(&worker(), ReportFormDto::default())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(store.all().len(), 0);
    }

    #[tokio::test]
    async fn update_overwrites_fields_but_not_authorship() {
        let (_, service) = service();
        let user = worker();
        let created = service.create(&user, valid_form()).await.unwrap();

        let mut form = valid_form();
        form.site = Some("BS Süd".to_string());
        form.work_end = Some("17:00".to_string());
        let updated = service.update(created.id, form).await.unwrap();

        assert_eq!(updated.site, "BS Süd");
        assert_eq!(updated.net_hours, Some(8.5));
        assert_eq!(updated.created_by, created.created_by);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let (_, service) = service();
        let err = service.get(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_removes_the_report() {
        let (store, service) = service();
        let created = service.create(&worker(), valid_form()).await.unwrap();

        service.delete(created.id).await.unwrap();
        assert_eq!(store.all().len(), 0);

        let err = service.delete(created.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn list_is_newest_first_with_total() {
        let (_, service) = service();
        let user = worker();

        let mut first = valid_form();
        first.site = Some("Alt".to_string());
        service.create(&user, first).await.unwrap();

        let mut second = valid_form();
        second.site = Some("Neu".to_string());
        service.create(&user, second).await.unwrap();

        let (reports, total) = service.list(&PaginationQuery::default()).await.unwrap();
        assert_eq!(total, 2);
        assert_eq!(reports[0].site, "Neu");
        assert_eq!(reports[1].site, "Alt");
    }
}
