use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::users::models::User;

/// Request DTO for creating a user (admin only)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUserDto {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub pin: String,
    /// "admin" or "worker"; defaults to "worker"
    pub role: Option<String>,
}

/// Response DTO for a user. The PIN hash never leaves the service layer.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponseDto {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponseDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            role: u.role,
            created_at: u.created_at,
        }
    }
}
