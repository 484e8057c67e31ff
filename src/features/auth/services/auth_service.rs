use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::auth::dtos::{AuthResponseDto, AuthUserDto, LoginRequestDto};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::auth::pin::verify_pin;
use crate::features::auth::services::TokenService;
use crate::features::users::repository::UserStore;

/// One message for both unknown name and wrong PIN, so the response does
/// not reveal which one it was.
const INVALID_CREDENTIALS: &str = "Invalid name or PIN";

/// Name/PIN authentication against the user store.
pub struct AuthService {
    users: Arc<dyn UserStore>,
    tokens: Arc<TokenService>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>, tokens: Arc<TokenService>) -> Self {
        Self { users, tokens }
    }

    /// Log in with name + PIN and receive a bearer token.
    pub async fn login(&self, dto: LoginRequestDto) -> Result<AuthResponseDto> {
        let name = dto.name.trim();
        let pin = dto.pin.trim();

        if name.is_empty() || pin.is_empty() {
            return Err(AppError::BadRequest("Name and PIN are required".to_string()));
        }

        let user = self.authenticate(name, pin).await?;
        let (access_token, expires_in) = self.tokens.issue(&user)?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(AuthResponseDto {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user: AuthUserDto::from(user),
        })
    }

    /// Look up the user by exact name and compare the PIN against the
    /// stored hash. Both failure paths yield the same outcome.
    pub async fn authenticate(&self, name: &str, pin: &str) -> Result<AuthenticatedUser> {
        let user = self.users.find_by_name(name).await?;

        match user {
            Some(u) if verify_pin(pin, &u.pin_hash) => Ok(AuthenticatedUser {
                id: u.id,
                name: u.name,
                role: u.role,
            }),
            _ => Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::AuthConfig;
    use crate::features::auth::pin::hash_pin;
    use crate::features::users::models::NewUser;
    use crate::shared::constants::ROLE_WORKER;
    use crate::shared::test_helpers::InMemoryUserStore;
    use std::time::Duration;

    fn service_with_user(name: &str, pin: &str) -> AuthService {
        let store = Arc::new(InMemoryUserStore::default());
        store.seed(NewUser {
            name: name.to_string(),
            pin_hash: hash_pin(pin).unwrap(),
            role: ROLE_WORKER.to_string(),
        });

        let tokens = Arc::new(TokenService::new(&AuthConfig {
            token_secret: "a-secret-long-enough-for-testing".to_string(),
            token_ttl: Duration::from_secs(3600),
        }));

        AuthService::new(store, tokens)
    }

    #[tokio::test]
    async fn correct_credentials_authenticate() {
        let service = service_with_user("Mirko", "4711");
        let user = service.authenticate("Mirko", "4711").await.unwrap();
        assert_eq!(user.name, "Mirko");
        assert_eq!(user.role, ROLE_WORKER);
    }

    #[tokio::test]
    async fn unknown_name_and_wrong_pin_are_indistinguishable() {
        let service = service_with_user("Mirko", "4711");

        let unknown = service.authenticate("Niko", "4711").await.unwrap_err();
        let wrong_pin = service.authenticate("Mirko", "9999").await.unwrap_err();

        assert_eq!(unknown.to_string(), wrong_pin.to_string());
    }

    #[tokio::test]
    async fn login_rejects_blank_input_before_lookup() {
        let service = service_with_user("Mirko", "4711");
        let err = service
            .login(LoginRequestDto {
                name: "   ".to_string(),
                pin: String::new(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn login_issues_a_verifiable_token() {
        let service = service_with_user("Mirko", "4711");
        let response = service
            .login(LoginRequestDto {
                name: "Mirko".to_string(),
                pin: "4711".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.user.name, "Mirko");
        assert!(!response.access_token.is_empty());
    }
}
