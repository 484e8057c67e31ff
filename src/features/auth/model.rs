use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::constants::ROLE_ADMIN;

/// Request-scoped identity decoded from the bearer token. Inserted into
/// request extensions by the auth middleware; never stored globally.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub name: String,
    pub role: String,
}

impl AuthenticatedUser {
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}

/// JWT claims carried by the session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub name: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}
