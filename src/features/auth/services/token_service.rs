use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::core::config::AuthConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::model::{AuthenticatedUser, Claims};

/// Issues and verifies HS256 session tokens. Token lifetime comes from
/// configuration; there is no refresh flow, a worker simply logs in again.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_secs: i64,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.token_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.token_secret.as_bytes()),
            ttl_secs: config.token_ttl.as_secs() as i64,
        }
    }

    /// Create a signed token for the user. Returns (token, expires_in_secs).
    pub fn issue(&self, user: &AuthenticatedUser) -> Result<(String, i64)> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user.id.to_string(),
            name: user.name.clone(),
            role: user.role.clone(),
            iat: now,
            exp: now + self.ttl_secs,
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))?;

        Ok((token, self.ttl_secs))
    }

    /// Decode and validate a bearer token into the request-scoped identity.
    pub fn verify(&self, token: &str) -> Result<AuthenticatedUser> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::new(Algorithm::HS256))
            .map_err(|e| {
                tracing::debug!("Token validation failed: {}", e);
                AppError::Unauthorized("Invalid or expired token".to_string())
            })?;

        let id = data
            .claims
            .sub
            .parse()
            .map_err(|_| AppError::Unauthorized("Invalid or expired token".to_string()))?;

        Ok(AuthenticatedUser {
            id,
            name: data.claims.name,
            role: data.claims.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::constants::ROLE_WORKER;
    use std::time::Duration;
    use uuid::Uuid;

    fn test_config(secret: &str) -> AuthConfig {
        AuthConfig {
            token_secret: secret.to_string(),
            token_ttl: Duration::from_secs(3600),
        }
    }

    fn worker() -> AuthenticatedUser {
        AuthenticatedUser {
            id: Uuid::new_v4(),
            name: "Mirko".to_string(),
            role: ROLE_WORKER.to_string(),
        }
    }

    #[test]
    fn issue_and_verify_round_trip() {
        let service = TokenService::new(&test_config("a-secret-long-enough-for-testing"));
        let user = worker();

        let (token, expires_in) = service.issue(&user).unwrap();
        assert_eq!(expires_in, 3600);

        let decoded = service.verify(&token).unwrap();
        assert_eq!(decoded.id, user.id);
        assert_eq!(decoded.name, "Mirko");
        assert_eq!(decoded.role, ROLE_WORKER);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let issuer = TokenService::new(&test_config("a-secret-long-enough-for-testing"));
        let verifier = TokenService::new(&test_config("another-secret-entirely-different"));

        let (token, _) = issuer.issue(&worker()).unwrap();
        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn garbage_token_is_rejected() {
        let service = TokenService::new(&test_config("a-secret-long-enough-for-testing"));
        assert!(service.verify("not.a.token").is_err());
    }
}
