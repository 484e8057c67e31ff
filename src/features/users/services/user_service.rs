use std::sync::Arc;

use crate::core::config::AdminConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::pin::hash_pin;
use crate::features::users::dtos::{CreateUserDto, UserResponseDto};
use crate::features::users::models::NewUser;
use crate::features::users::repository::UserStore;
use crate::shared::constants::{ROLE_ADMIN, ROLE_WORKER};

/// User management: admin-created accounts, never deleted.
pub struct UserService {
    users: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Create a user with a hashed PIN. Names are unique.
    pub async fn create(&self, dto: CreateUserDto) -> Result<UserResponseDto> {
        let name = dto.name.trim().to_string();
        let pin = dto.pin.trim().to_string();

        if name.is_empty() || pin.is_empty() {
            return Err(AppError::BadRequest("Name and PIN are required".to_string()));
        }

        let role = match dto.role.as_deref().map(str::trim) {
            None | Some("") => ROLE_WORKER.to_string(),
            Some(r) if r == ROLE_ADMIN || r == ROLE_WORKER => r.to_string(),
            Some(other) => {
                return Err(AppError::BadRequest(format!("Unknown role '{}'", other)));
            }
        };

        if self.users.find_by_name(&name).await?.is_some() {
            return Err(AppError::Conflict(
                "A user with this name already exists".to_string(),
            ));
        }

        let user = self
            .users
            .insert(NewUser {
                name,
                pin_hash: hash_pin(&pin)?,
                role,
            })
            .await?;

        tracing::info!(user_id = %user.id, role = %user.role, "User created");

        Ok(user.into())
    }

    pub async fn list(&self) -> Result<Vec<UserResponseDto>> {
        let users = self.users.list().await?;
        Ok(users.into_iter().map(|u| u.into()).collect())
    }

    /// First-run bootstrap: create the admin account once, and only when a
    /// PIN is configured. Subsequent startups are a no-op.
    pub async fn ensure_admin(&self, config: &AdminConfig) -> Result<()> {
        let Some(pin) = config.pin.as_deref() else {
            tracing::debug!("ADMIN_PIN not set, skipping admin bootstrap");
            return Ok(());
        };

        if self.users.admin_exists().await? {
            return Ok(());
        }

        self.users
            .insert(NewUser {
                name: config.name.clone(),
                pin_hash: hash_pin(pin)?,
                role: ROLE_ADMIN.to_string(),
            })
            .await?;

        tracing::info!(name = %config.name, "Bootstrap admin user created");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::InMemoryUserStore;

    fn service() -> (Arc<InMemoryUserStore>, UserService) {
        let store = Arc::new(InMemoryUserStore::default());
        (Arc::clone(&store), UserService::new(store))
    }

    fn dto(name: &str, pin: &str, role: Option<&str>) -> CreateUserDto {
        CreateUserDto {
            name: name.to_string(),
            pin: pin.to_string(),
            role: role.map(|r| r.to_string()),
        }
    }

    #[tokio::test]
    async fn create_defaults_to_worker_role() {
        let (_, service) = service();
        let user = service.create(dto("Mirko", "4711", None)).await.unwrap();
        assert_eq!(user.role, ROLE_WORKER);
    }

    #[tokio::test]
    async fn create_rejects_duplicate_names() {
        let (_, service) = service();
        service.create(dto("Mirko", "4711", None)).await.unwrap();

        let err = service.create(dto("Mirko", "9999", None)).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn create_rejects_unknown_roles() {
        let (_, service) = service();
        let err = service
            .create(dto("Mirko", "4711", Some("superuser")))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn create_rejects_blank_name_or_pin() {
        let (_, service) = service();
        let err = service.create(dto("  ", "4711", None)).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn ensure_admin_is_idempotent() {
        let (store, service) = service();
        let config = AdminConfig {
            name: "Admin".to_string(),
            pin: Some("0000".to_string()),
        };

        service.ensure_admin(&config).await.unwrap();
        service.ensure_admin(&config).await.unwrap();

        let admins: Vec<_> = store
            .all()
            .into_iter()
            .filter(|u| u.role == ROLE_ADMIN)
            .collect();
        assert_eq!(admins.len(), 1);
    }

    #[tokio::test]
    async fn ensure_admin_without_pin_creates_nothing() {
        let (store, service) = service();
        let config = AdminConfig {
            name: "Admin".to_string(),
            pin: None,
        };

        service.ensure_admin(&config).await.unwrap();
        assert!(store.all().is_empty());
    }
}
