use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::dtos::{AuthResponseDto, AuthUserDto, LoginRequestDto};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::auth::services::AuthService;
use crate::shared::types::ApiResponse;

/// Log in with name + PIN
///
/// Returns a bearer token for subsequent requests. Unknown name and wrong
/// PIN produce the same 401 response.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<AuthResponseDto>),
        (status = 400, description = "Name or PIN missing"),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "auth"
)]
pub async fn login(
    State(service): State<Arc<AuthService>>,
    AppJson(dto): AppJson<LoginRequestDto>,
) -> Result<Json<ApiResponse<AuthResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let response = service.login(dto).await?;
    Ok(Json(ApiResponse::success(Some(response), None, None)))
}

/// Get the current identity
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current user", body = ApiResponse<AuthUserDto>),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = [])),
    tag = "auth"
)]
pub async fn get_me(user: AuthenticatedUser) -> Result<Json<ApiResponse<AuthUserDto>>> {
    Ok(Json(ApiResponse::success(
        Some(AuthUserDto::from(user)),
        None,
        None,
    )))
}
