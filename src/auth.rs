// ABOUTME: Authentication manager for password hashing and JWT session tokens
// ABOUTME: bcrypt verification off the async runtime, HS256 token issue/validate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitSphere

//! Authentication and session management
//!
//! Passwords are hashed with bcrypt on a blocking thread. Sessions are
//! stateless HS256 JWTs carrying the user id and email; routes extract the
//! bearer token from the `Authorization` header.

use axum::http::{header, HeaderMap};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::User;

/// JWT claims for user authentication
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// User email
    pub email: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
}

/// Authenticated caller context extracted from a request
#[derive(Debug, Clone)]
pub struct AuthResult {
    /// Authenticated user ID
    pub user_id: Uuid,
    /// Email from the token claims
    pub email: String,
}

/// Authentication manager for JWT tokens and password credentials
#[derive(Clone)]
pub struct AuthManager {
    jwt_secret: String,
    token_expiry_hours: i64,
}

impl AuthManager {
    /// Create a new authentication manager
    #[must_use]
    pub fn new(jwt_secret: impl Into<String>, token_expiry_hours: i64) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            token_expiry_hours,
        }
    }

    /// Configured token lifetime
    #[must_use]
    pub fn token_expiry(&self) -> Duration {
        Duration::hours(self.token_expiry_hours)
    }

    /// Generate a signed session token for a user
    ///
    /// # Errors
    ///
    /// Returns an error if JWT encoding fails.
    pub fn generate_token(&self, user: &User) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            iat: now.timestamp(),
            exp: (now + self.token_expiry()).timestamp(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| AppError::internal("failed to sign session token").with_source(e))
    }

    /// Validate a session token and return its claims
    ///
    /// # Errors
    ///
    /// Returns an auth error when the token is expired, malformed, or
    /// carries an invalid signature.
    pub fn validate_token(&self, token: &str) -> AppResult<Claims> {
        let validation = Validation::new(Algorithm::HS256);
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &validation,
        )
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::auth_expired(),
            _ => AppError::auth_invalid("Invalid session token").with_source(e),
        })?;
        Ok(data.claims)
    }

    /// Authenticate a request from its headers
    ///
    /// # Errors
    ///
    /// Returns an auth error when the `Authorization` header is missing,
    /// not a bearer token, or fails validation.
    pub fn authenticate(&self, headers: &HeaderMap) -> AppResult<AuthResult> {
        let header_value = headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(AppError::auth_required)?;

        let token = header_value
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::auth_invalid("Authorization header must be a bearer token"))?;

        let claims = self.validate_token(token)?;
        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::auth_invalid("Session token carries an invalid user id"))?;

        Ok(AuthResult {
            user_id,
            email: claims.email,
        })
    }
}

/// Hash a password with bcrypt on a blocking thread
///
/// # Errors
///
/// Returns an error if the hashing task fails or bcrypt rejects the input.
pub async fn hash_password(password: String) -> AppResult<String> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, bcrypt::DEFAULT_COST))
        .await
        .map_err(|e| AppError::internal("password hashing task failed").with_source(e))?
        .map_err(|e| AppError::internal("password hashing failed").with_source(e))
}

/// Verify a password against a bcrypt hash on a blocking thread
///
/// # Errors
///
/// Returns an error if the verification task fails or the stored hash is
/// malformed.
pub async fn verify_password(password: String, hash: String) -> AppResult<bool> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| AppError::internal("password verification task failed").with_source(e))?
        .map_err(|e| AppError::internal("password verification failed").with_source(e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> AuthManager {
        AuthManager::new("test-secret", 24)
    }

    #[test]
    fn test_token_round_trip() {
        let user = User::new("a@example.com".into(), "hash".into(), None);
        let token = match manager().generate_token(&user) {
            Ok(token) => token,
            Err(e) => unreachable!("token generation must succeed: {e}"),
        };

        let claims = match manager().validate_token(&token) {
            Ok(claims) => claims,
            Err(e) => unreachable!("token validation must succeed: {e}"),
        };
        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.email, user.email);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let user = User::new("a@example.com".into(), "hash".into(), None);
        let token = manager().generate_token(&user).unwrap_or_default();

        let other = AuthManager::new("different-secret", 24);
        assert!(other.validate_token(&token).is_err());
    }

    #[test]
    fn test_authenticate_requires_bearer_scheme() {
        let mut headers = HeaderMap::new();
        assert!(manager().authenticate(&headers).is_err());

        if let Ok(value) = "Basic abc".parse() {
            headers.insert(header::AUTHORIZATION, value);
        }
        assert!(manager().authenticate(&headers).is_err());
    }
}
