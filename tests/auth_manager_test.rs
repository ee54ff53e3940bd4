// ABOUTME: Integration tests for password hashing and session token handling
// ABOUTME: bcrypt round trips, token validation, and expiry rejection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitSphere

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use axum::http::{header, HeaderMap};
use fitsphere::auth::{hash_password, verify_password, AuthManager};
use fitsphere::models::User;

fn test_user() -> User {
    User::new("auth@example.com".into(), "hash".into(), None)
}

#[tokio::test]
async fn test_password_hash_round_trip() {
    let hash = hash_password("correct horse battery".into()).await.unwrap();
    assert_ne!(hash, "correct horse battery");

    assert!(verify_password("correct horse battery".into(), hash.clone())
        .await
        .unwrap());
    assert!(!verify_password("wrong password".into(), hash)
        .await
        .unwrap());
}

#[tokio::test]
async fn test_authenticate_extracts_bearer_token() {
    let manager = AuthManager::new("secret", 24);
    let user = test_user();
    let token = manager.generate_token(&user).unwrap();

    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        format!("Bearer {token}").parse().unwrap(),
    );

    let auth = manager.authenticate(&headers).unwrap();
    assert_eq!(auth.user_id, user.id);
    assert_eq!(auth.email, user.email);
}

#[test]
fn test_expired_token_is_rejected() {
    // A negative expiry backdates the token beyond the validation leeway
    let manager = AuthManager::new("secret", -2);
    let user = test_user();
    let token = manager.generate_token(&user).unwrap();

    let error = manager.validate_token(&token).unwrap_err();
    assert_eq!(error.http_status(), 403);
}

#[test]
fn test_tampered_token_is_rejected() {
    let manager = AuthManager::new("secret", 24);
    let user = test_user();
    let mut token = manager.generate_token(&user).unwrap();
    token.push('x');

    assert!(manager.validate_token(&token).is_err());
}
