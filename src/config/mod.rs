// ABOUTME: Configuration module for the FitSphere backend
// ABOUTME: Environment-driven server, database, and auth settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitSphere

//! Configuration management

/// Environment-based configuration parsing
pub mod environment;

pub use environment::{AuthConfig, DatabaseConfig, DatabaseUrl, Environment, ServerConfig};
