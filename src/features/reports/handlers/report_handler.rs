use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireAdmin;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::reports::dtos::{ReportFormDto, ReportResponseDto};
use crate::features::reports::services::ReportService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// Submit a daily report
///
/// The form is normalized and validated; net hours is computed from
/// start/end/break and never taken from the request.
#[utoipa::path(
    post,
    path = "/api/reports",
    request_body = ReportFormDto,
    responses(
        (status = 200, description = "Report stored", body = ApiResponse<ReportResponseDto>),
        (status = 400, description = "Required field missing")
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn create_report(
    State(service): State<Arc<ReportService>>,
    user: AuthenticatedUser,
    AppJson(form): AppJson<ReportFormDto>,
) -> Result<Json<ApiResponse<ReportResponseDto>>> {
    let report = service.create(&user, form).await?;
    Ok(Json(ApiResponse::success(
        Some(report),
        Some("Report stored".to_string()),
        None,
    )))
}

/// List reports, newest first
#[utoipa::path(
    get,
    path = "/api/reports",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Reports with creator names", body = ApiResponse<Vec<ReportResponseDto>>)
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn list_reports(
    State(service): State<Arc<ReportService>>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<ReportResponseDto>>>> {
    let (reports, total) = service.list(&pagination).await?;
    Ok(Json(ApiResponse::success(
        Some(reports),
        None,
        Some(Meta { total }),
    )))
}

/// Get one report
#[utoipa::path(
    get,
    path = "/api/reports/{id}",
    params(("id" = Uuid, Path, description = "Report id")),
    responses(
        (status = 200, description = "Report found", body = ApiResponse<ReportResponseDto>),
        (status = 404, description = "Report not found")
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn get_report(
    State(service): State<Arc<ReportService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ReportResponseDto>>> {
    let report = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(report), None, None)))
}

/// Update a report (full overwrite of mutable fields)
#[utoipa::path(
    put,
    path = "/api/reports/{id}",
    params(("id" = Uuid, Path, description = "Report id")),
    request_body = ReportFormDto,
    responses(
        (status = 200, description = "Report updated", body = ApiResponse<ReportResponseDto>),
        (status = 400, description = "Required field missing"),
        (status = 404, description = "Report not found")
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn update_report(
    State(service): State<Arc<ReportService>>,
    Path(id): Path<Uuid>,
    AppJson(form): AppJson<ReportFormDto>,
) -> Result<Json<ApiResponse<ReportResponseDto>>> {
    let report = service.update(id, form).await?;
    Ok(Json(ApiResponse::success(
        Some(report),
        Some("Report updated".to_string()),
        None,
    )))
}

/// Delete a report (admin only)
#[utoipa::path(
    delete,
    path = "/api/reports/{id}",
    params(("id" = Uuid, Path, description = "Report id")),
    responses(
        (status = 200, description = "Report deleted"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Report not found")
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn delete_report(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<ReportService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Report deleted".to_string()),
        None,
    )))
}
