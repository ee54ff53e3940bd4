// ABOUTME: User authentication route handlers for registration and login
// ABOUTME: Issues HS256 session tokens and exposes the current-user summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitSphere

//! Authentication routes for user account management

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    auth::{hash_password, verify_password},
    constants::limits,
    database_plugins::DatabaseProvider,
    errors::AppError,
    models::User,
    server::ServerResources,
};

/// User registration request
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Email address
    pub email: String,
    /// Plain-text password, hashed before storage
    pub password: String,
    /// Optional display name
    pub display_name: Option<String>,
}

/// User login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Email address
    pub email: String,
    /// Plain-text password
    pub password: String,
}

/// User summary returned by auth endpoints
#[derive(Debug, Serialize)]
pub struct UserSummary {
    /// User ID
    pub id: String,
    /// Email address
    pub email: String,
    /// Display name
    pub display_name: Option<String>,
    /// Accumulated experience points
    pub xp: i64,
    /// Current daily streak
    pub streak: i64,
    /// Earned badges
    pub badges: Vec<String>,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.clone(),
            display_name: user.display_name.clone(),
            xp: user.xp,
            streak: user.streak,
            badges: user.badges.clone(),
        }
    }
}

/// Session response with token and user summary
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    /// Signed session token
    pub token: String,
    /// Token expiry as RFC 3339
    pub expires_at: String,
    /// Authenticated user
    pub user: UserSummary,
}

/// Current-user response
#[derive(Debug, Serialize)]
pub struct MeResponse {
    /// Authenticated user
    pub user: UserSummary,
}

fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Authentication routes handler
pub struct AuthRoutes;

impl AuthRoutes {
    /// Create all authentication routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/auth/register", post(Self::handle_register))
            .route("/api/auth/login", post(Self::handle_login))
            .route("/api/auth/me", get(Self::handle_me))
            .with_state(resources)
    }

    fn session_response(
        resources: &Arc<ServerResources>,
        user: &User,
    ) -> Result<SessionResponse, AppError> {
        let token = resources.auth_manager.generate_token(user)?;
        let expires_at = (Utc::now() + resources.auth_manager.token_expiry()).to_rfc3339();
        Ok(SessionResponse {
            token,
            expires_at,
            user: user.into(),
        })
    }

    /// Handle POST /api/auth/register
    async fn handle_register(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<RegisterRequest>,
    ) -> Result<Response, AppError> {
        let email = normalize_email(&request.email);
        if !email.contains('@') || !email.contains('.') {
            return Err(AppError::invalid_input("Please provide a valid email"));
        }
        if request.password.len() < limits::MIN_PASSWORD_LENGTH {
            return Err(AppError::invalid_input(format!(
                "Password must be at least {} characters",
                limits::MIN_PASSWORD_LENGTH
            )));
        }

        if resources.database.get_user_by_email(&email).await?.is_some() {
            return Err(AppError::invalid_input(
                "User already exists with this email",
            ));
        }

        let password_hash = hash_password(request.password).await?;
        let user = User::new(email, password_hash, request.display_name);
        resources.database.create_user(&user).await?;
        info!("registered user {}", user.id);

        let response = Self::session_response(&resources, &user)?;
        Ok((StatusCode::CREATED, Json(response)).into_response())
    }

    /// Handle POST /api/auth/login
    async fn handle_login(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<LoginRequest>,
    ) -> Result<Response, AppError> {
        let email = normalize_email(&request.email);
        let user = resources
            .database
            .get_user_by_email(&email)
            .await?
            .ok_or_else(|| AppError::auth_invalid("Invalid email or password"))?;

        let password_matches =
            verify_password(request.password, user.password_hash.clone()).await?;
        if !password_matches {
            return Err(AppError::auth_invalid("Invalid email or password"));
        }

        resources.database.update_last_active(user.id).await?;

        let response = Self::session_response(&resources, &user)?;
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle GET /api/auth/me
    async fn handle_me(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = resources.auth_manager.authenticate(&headers)?;
        let user = resources
            .database
            .get_user(auth.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User"))?;

        let response = MeResponse {
            user: (&user).into(),
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
