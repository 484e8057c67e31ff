use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireAdmin;
use crate::features::users::dtos::{CreateUserDto, UserResponseDto};
use crate::features::users::services::UserService;
use crate::shared::types::{ApiResponse, Meta};

/// Create a user (admin only)
#[utoipa::path(
    post,
    path = "/api/admin/users",
    request_body = CreateUserDto,
    responses(
        (status = 200, description = "User created", body = ApiResponse<UserResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Admin access required"),
        (status = 409, description = "Name already taken")
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
pub async fn create_user(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<UserService>>,
    AppJson(dto): AppJson<CreateUserDto>,
) -> Result<Json<ApiResponse<UserResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let user = service.create(dto).await?;
    Ok(Json(ApiResponse::success(
        Some(user),
        Some("User created".to_string()),
        None,
    )))
}

/// List all users (admin only)
#[utoipa::path(
    get,
    path = "/api/admin/users",
    responses(
        (status = 200, description = "All users, newest first", body = ApiResponse<Vec<UserResponseDto>>),
        (status = 403, description = "Admin access required")
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
pub async fn list_users(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<UserService>>,
) -> Result<Json<ApiResponse<Vec<UserResponseDto>>>> {
    let users = service.list().await?;
    let total = users.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(users),
        None,
        Some(Meta { total }),
    )))
}
