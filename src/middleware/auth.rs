//! Authentication middleware
//!
//! The judging core does not implement registration or login; it only
//! requires that requests carry a verifiable user identity. Tokens are
//! issued by the surrounding auth system and verified here.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::{error::AppError, state::AppState};

/// JWT claims carried by access tokens
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Expiry (unix timestamp)
    pub exp: i64,
}

/// Authenticated user extracted from JWT
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: Uuid,
}

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            debug!("Auth failed: Invalid Authorization format (expected 'Bearer <token>')");
            AppError::Unauthorized
        })?;

        let claims = verify_token(token, &state.config().jwt.secret)?;

        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| {
            debug!(sub = %claims.sub, "Auth failed: Invalid user ID in token");
            AppError::InvalidToken
        })?;

        Ok(AuthenticatedUser { id: user_id })
    }
}

/// Verify a JWT and return its claims
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;

    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use jsonwebtoken::{EncodingKey, Header, encode};

    use super::*;

    fn issue_token(sub: &str, secret: &str, exp: i64) -> String {
        let claims = Claims {
            sub: sub.to_string(),
            exp,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_verify_valid_token() {
        let exp = chrono::Utc::now().timestamp() + 3600;
        let token = issue_token("d2b1f1d4-0000-0000-0000-000000000000", "secret", exp);

        let claims = verify_token(&token, "secret").unwrap();
        assert_eq!(claims.sub, "d2b1f1d4-0000-0000-0000-000000000000");
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let exp = chrono::Utc::now().timestamp() + 3600;
        let token = issue_token("user", "secret", exp);

        assert!(matches!(
            verify_token(&token, "other-secret"),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn test_expired_token_rejected() {
        let exp = chrono::Utc::now().timestamp() - 3600;
        let token = issue_token("user", "secret", exp);

        assert!(matches!(
            verify_token(&token, "secret"),
            Err(AppError::TokenExpired)
        ));
    }
}
