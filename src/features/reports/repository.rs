use async_trait::async_trait;
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::reports::models::{DailyReport, NewDailyReport, ReportWithCreator};

/// Storage interface for daily reports. `created_by` and `created_at`
/// are fixed at insert; update overwrites only the mutable fields.
#[async_trait]
pub trait ReportStore: Send + Sync {
    async fn insert(&self, created_by: Uuid, report: NewDailyReport) -> Result<DailyReport>;
    /// Newest first, with the creator's name joined in.
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<ReportWithCreator>>;
    async fn count(&self) -> Result<i64>;
    async fn find(&self, id: Uuid) -> Result<Option<ReportWithCreator>>;
    async fn update(&self, id: Uuid, report: NewDailyReport) -> Result<Option<DailyReport>>;
    /// Returns false when no row existed.
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

/// Postgres-backed report store
pub struct PgReportStore {
    pool: PgPool,
}

impl PgReportStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const REPORT_COLUMNS: &str = "id, created_at, created_by, report_date, work_start, work_end, \
    break_hours, net_hours, weather, site, team, \
    foreman_name, foreman_hours, lead_worker_name, lead_worker_hours, \
    skilled_worker_name, skilled_worker_hours, electrician_name, electrician_hours, \
    helper_name, helper_hours, truck_driver_name, truck_driver_hours, \
    work_description, materials, remarks";

/// Bind the 23 mutable report fields in declaration order.
fn bind_report_fields<'q, O>(
    query: QueryAs<'q, Postgres, O, PgArguments>,
    r: &'q NewDailyReport,
) -> QueryAs<'q, Postgres, O, PgArguments> {
    query
        .bind(&r.report_date)
        .bind(&r.work_start)
        .bind(&r.work_end)
        .bind(r.break_hours)
        .bind(r.net_hours)
        .bind(&r.weather)
        .bind(&r.site)
        .bind(&r.team)
        .bind(&r.foreman_name)
        .bind(r.foreman_hours)
        .bind(&r.lead_worker_name)
        .bind(r.lead_worker_hours)
        .bind(&r.skilled_worker_name)
        .bind(r.skilled_worker_hours)
        .bind(&r.electrician_name)
        .bind(r.electrician_hours)
        .bind(&r.helper_name)
        .bind(r.helper_hours)
        .bind(&r.truck_driver_name)
        .bind(r.truck_driver_hours)
        .bind(&r.work_description)
        .bind(&r.materials)
        .bind(&r.remarks)
}

#[async_trait]
impl ReportStore for PgReportStore {
    async fn insert(&self, created_by: Uuid, report: NewDailyReport) -> Result<DailyReport> {
        let sql = format!(
            "INSERT INTO reports (created_by, report_date, work_start, work_end, \
             break_hours, net_hours, weather, site, team, \
             foreman_name, foreman_hours, lead_worker_name, lead_worker_hours, \
             skilled_worker_name, skilled_worker_hours, electrician_name, electrician_hours, \
             helper_name, helper_hours, truck_driver_name, truck_driver_hours, \
             work_description, materials, remarks) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, \
             $17, $18, $19, $20, $21, $22, $23, $24) \
             RETURNING {REPORT_COLUMNS}"
        );

        let query = sqlx::query_as::<_, DailyReport>(&sql).bind(created_by);
        let inserted = bind_report_fields(query, &report)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert report: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(inserted)
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<ReportWithCreator>> {
        let sql = format!(
            "SELECT r.{}, u.name AS created_by_name \
             FROM reports r \
             LEFT JOIN users u ON u.id = r.created_by \
             ORDER BY r.created_at DESC \
             LIMIT $1 OFFSET $2",
            REPORT_COLUMNS.replace(", ", ", r.")
        );

        let rows = sqlx::query_as::<_, ReportWithCreator>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list reports: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(rows)
    }

    async fn count(&self) -> Result<i64> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reports")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count reports: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(total)
    }

    async fn find(&self, id: Uuid) -> Result<Option<ReportWithCreator>> {
        let sql = format!(
            "SELECT r.{}, u.name AS created_by_name \
             FROM reports r \
             LEFT JOIN users u ON u.id = r.created_by \
             WHERE r.id = $1",
            REPORT_COLUMNS.replace(", ", ", r.")
        );

        let row = sqlx::query_as::<_, ReportWithCreator>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch report: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(row)
    }

    async fn update(&self, id: Uuid, report: NewDailyReport) -> Result<Option<DailyReport>> {
        let sql = format!(
            "UPDATE reports SET \
             report_date = $1, work_start = $2, work_end = $3, break_hours = $4, \
             net_hours = $5, weather = $6, site = $7, team = $8, \
             foreman_name = $9, foreman_hours = $10, \
             lead_worker_name = $11, lead_worker_hours = $12, \
             skilled_worker_name = $13, skilled_worker_hours = $14, \
             electrician_name = $15, electrician_hours = $16, \
             helper_name = $17, helper_hours = $18, \
             truck_driver_name = $19, truck_driver_hours = $20, \
             work_description = $21, materials = $22, remarks = $23 \
             WHERE id = $24 \
             RETURNING {REPORT_COLUMNS}"
        );

        let query = sqlx::query_as::<_, DailyReport>(&sql);
        let updated = bind_report_fields(query, &report)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update report: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM reports WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete report: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
