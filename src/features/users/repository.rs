use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::users::models::{NewUser, User};
use crate::shared::constants::ROLE_ADMIN;

/// Storage interface for users. Injected into services so the persistence
/// backend stays a collaborator rather than a baked-in conditional.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_name(&self, name: &str) -> Result<Option<User>>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>>;
    async fn insert(&self, new_user: NewUser) -> Result<User>;
    /// All users, newest first.
    async fn list(&self) -> Result<Vec<User>>;
    async fn admin_exists(&self) -> Result<bool>;
}

/// Postgres-backed user store
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const USER_COLUMNS: &str = "id, name, pin_hash, role, created_at";

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE name = $1"
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to look up user by name: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let user =
            sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to look up user by id: {:?}", e);
                    AppError::Database(e)
                })?;

        Ok(user)
    }

    async fn insert(&self, new_user: NewUser) -> Result<User> {
        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (name, pin_hash, role) VALUES ($1, $2, $3) RETURNING {USER_COLUMNS}"
        ))
        .bind(&new_user.name)
        .bind(&new_user.pin_hash)
        .bind(&new_user.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert user: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(user)
    }

    async fn list(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list users: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(users)
    }

    async fn admin_exists(&self) -> Result<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE role = $1)")
                .bind(ROLE_ADMIN)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to check for admin user: {:?}", e);
                    AppError::Database(e)
                })?;

        Ok(exists)
    }
}
