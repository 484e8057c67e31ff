use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::auth::model::AuthenticatedUser;

/// Request DTO for login
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequestDto {
    /// Worker or admin name
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// PIN as entered on the keypad
    #[validate(length(min = 1, max = 100))]
    pub pin: String,
}

/// User identity as returned by auth endpoints
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthUserDto {
    pub id: Uuid,
    pub name: String,
    pub role: String,
}

impl From<AuthenticatedUser> for AuthUserDto {
    fn from(u: AuthenticatedUser) -> Self {
        Self {
            id: u.id,
            name: u.name,
            role: u.role,
        }
    }
}

/// Response DTO for successful login
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthResponseDto {
    pub access_token: String,
    pub token_type: String,
    /// Seconds until the token expires
    pub expires_in: i64,
    pub user: AuthUserDto,
}
