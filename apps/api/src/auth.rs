//! Caller identity: verifies the identity provider's session JWT.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// External user id, matched against `users.clerk_user_id`.
    pub sub: String,
    pub exp: i64,
}

/// Verified caller. Handlers take `Option<AuthUser>` and let the service
/// decide what an absent identity means.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: String,
}

/// HS256 verifier built once from config and shared through `AppState`.
#[derive(Clone)]
pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(secret: &str) -> Self {
        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    pub fn verify(&self, token: &str) -> Result<Claims, String> {
        decode::<Claims>(token, &self.key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| format!("Invalid JWT token: {e}"))
    }
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, String> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| "Missing Authorization header".to_string())?
        .to_str()
        .map_err(|_| "Invalid Authorization header format".to_string())?;

    match value.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.trim()),
        Some(_) => Err("Empty JWT token".to_string()),
        None => Err("Authorization header must use Bearer token format".to_string()),
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let claims = bearer_token(&parts.headers)
            .and_then(|token| state.verifier.verify(token))
            .map_err(|reason| {
                debug!("Rejecting caller identity: {reason}");
                AppError::Unauthorized
            })?;

        debug!(
            "Authenticated {} (token expires at {})",
            claims.sub, claims.exp
        );
        Ok(AuthUser {
            user_id: claims.sub,
        })
    }
}
