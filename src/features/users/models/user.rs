use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a user (worker or admin)
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub pin_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// Data for inserting a new user. The PIN is already hashed by the time
/// it reaches the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub pin_hash: String,
    pub role: String,
}
