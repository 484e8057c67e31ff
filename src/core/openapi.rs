use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::auth::{self, dtos as auth_dtos};
use crate::features::reports::{dtos as reports_dtos, handlers as reports_handlers};
use crate::features::users::{dtos as users_dtos, handlers as users_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth::handlers::login,
        auth::handlers::get_me,
        // Users (admin)
        users_handlers::create_user,
        users_handlers::list_users,
        // Reports
        reports_handlers::create_report,
        reports_handlers::list_reports,
        reports_handlers::get_report,
        reports_handlers::update_report,
        reports_handlers::delete_report,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Auth
            auth::model::AuthenticatedUser,
            auth_dtos::LoginRequestDto,
            auth_dtos::AuthUserDto,
            auth_dtos::AuthResponseDto,
            ApiResponse<auth_dtos::AuthResponseDto>,
            ApiResponse<auth_dtos::AuthUserDto>,
            // Users
            users_dtos::CreateUserDto,
            users_dtos::UserResponseDto,
            ApiResponse<users_dtos::UserResponseDto>,
            ApiResponse<Vec<users_dtos::UserResponseDto>>,
            // Reports
            reports_dtos::ReportFormDto,
            reports_dtos::ReportResponseDto,
            ApiResponse<reports_dtos::ReportResponseDto>,
            ApiResponse<Vec<reports_dtos::ReportResponseDto>>,
        )
    ),
    tags(
        (name = "auth", description = "Name + PIN authentication"),
        (name = "users", description = "User management (admin only)"),
        (name = "reports", description = "Daily construction-site reports"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Tagesbericht API",
        version = "0.1.0",
        description = "API documentation for the daily construction-site report service",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
