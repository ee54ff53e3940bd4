// ABOUTME: Main library entry point for the FitSphere fitness tracking backend
// ABOUTME: REST API with workout/nutrition recommendation and a gamification ledger
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitSphere

#![deny(unsafe_code)]

//! # FitSphere Backend
//!
//! Backend for a fitness-tracking application: user accounts, profile-driven
//! workout and nutrition recommendation, workout and progress logging,
//! challenges, and a gamification ledger (XP, streaks, badges).
//!
//! ## Architecture
//!
//! - **Intelligence**: the recommendation core: energy formulas, meal
//!   tables, difficulty progression, the exercise catalog, workout assembly,
//!   and the gamification ledger computation. Pure functions over domain
//!   values.
//! - **Models**: common data structures for users, profiles, workouts,
//!   challenges, and progress entries.
//! - **Database**: SQLite storage behind a provider trait, including the
//!   compare-and-swap ledger write.
//! - **Routes**: axum handlers, thin wrappers over the core.
//! - **Config**: environment-driven server configuration.
//!
//! ## Example
//!
//! ```rust,no_run
//! use fitsphere::config::ServerConfig;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = ServerConfig::from_env()?;
//! println!("FitSphere configured: {}", config.summary());
//! # Ok(())
//! # }
//! ```

/// Authentication and session management
pub mod auth;

/// Configuration management
pub mod config;

/// Application constants and policy values
pub mod constants;

/// Multi-table SQLite storage
pub mod database;

/// Database abstraction layer with plugin support
pub mod database_plugins;

/// Unified error handling with standard error codes and HTTP responses
pub mod errors;

/// Recommendation and progression engine
pub mod intelligence;

/// Production logging and structured output
pub mod logging;

/// Common data models
pub mod models;

/// HTTP route handlers
pub mod routes;

/// Server resources and router assembly
pub mod server;
