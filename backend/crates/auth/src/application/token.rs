//! Token Service
//!
//! Stateless HS256 JWTs carrying the user ID and role. There is no
//! revocation list; a token stays valid until `exp`.

use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use kernel::id::UserId;
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::domain::value_object::user_role::UserRole;
use crate::error::{AuthError, AuthResult};

/// Authenticated identity attached to request extensions by the auth gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: UserId,
    pub role: UserRole,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    role: String,
    iat: i64,
    exp: i64,
}

/// Issues and verifies signed tokens
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(&config.token_secret, config.token_ttl)
    }

    /// Sign a token for `user_id` that expires after the configured TTL
    pub fn issue(&self, user_id: UserId, role: UserRole) -> AuthResult<String> {
        let now = Utc::now().timestamp();
        let exp = i64::try_from(self.ttl.as_secs())
            .ok()
            .and_then(|ttl| now.checked_add(ttl))
            .ok_or_else(|| {
                AuthError::Internal(format!("Token TTL out of range: {:?}", self.ttl))
            })?;
        let claims = Claims {
            sub: user_id.to_string(),
            role: role.code().to_string(),
            iat: now,
            exp,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("Token signing failed: {}", e)))
    }

    /// Check signature, expiry and claim shape
    pub fn verify(&self, token: &str) -> AuthResult<AuthUser> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            tracing::debug!(error = %e, "Token verification failed");
            AuthError::InvalidToken
        })?;

        let user_id = UserId::parse(&data.claims.sub).map_err(|_| AuthError::InvalidToken)?;
        let role = UserRole::from_code(&data.claims.role).ok_or(AuthError::InvalidToken)?;

        Ok(AuthUser { user_id, role })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new(b"test-secret", Duration::from_secs(3600))
    }

    fn sign(claims: &Claims, secret: &[u8]) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret),
        )
        .unwrap()
    }

    #[test]
    fn test_issue_and_verify() {
        let service = service();
        let user_id = UserId::new();

        let token = service.issue(user_id, UserRole::Admin).unwrap();
        let identity = service.verify(&token).unwrap();

        assert_eq!(identity.user_id, user_id);
        assert_eq!(identity.role, UserRole::Admin);
    }

    #[test]
    fn test_out_of_range_ttl_is_an_error() {
        for secs in [u64::MAX, i64::MAX as u64] {
            let service = TokenService::new(b"test-secret", Duration::from_secs(secs));
            let result = service.issue(UserId::new(), UserRole::User);
            assert!(matches!(result, Err(AuthError::Internal(_))), "ttl {}", secs);
        }
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = service().issue(UserId::new(), UserRole::User).unwrap();
        let other = TokenService::new(b"other-secret", Duration::from_secs(3600));
        assert!(matches!(other.verify(&token), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_expired_token_rejected() {
        let now = Utc::now().timestamp();
        let token = sign(
            &Claims {
                sub: UserId::new().to_string(),
                role: "user".into(),
                iat: now - 7200,
                exp: now - 3600,
            },
            b"test-secret",
        );
        assert!(matches!(service().verify(&token), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_malformed_claims_rejected() {
        let now = Utc::now().timestamp();
        let bad_sub = sign(
            &Claims {
                sub: "not-a-uuid".into(),
                role: "user".into(),
                iat: now,
                exp: now + 60,
            },
            b"test-secret",
        );
        let bad_role = sign(
            &Claims {
                sub: UserId::new().to_string(),
                role: "root".into(),
                iat: now,
                exp: now + 60,
            },
            b"test-secret",
        );

        assert!(service().verify(&bad_sub).is_err());
        assert!(service().verify(&bad_role).is_err());
        assert!(service().verify("garbage").is_err());
    }
}
