//! Shared types and configuration for Penny.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Domain model types mirroring the backend wire shapes
//! - Configuration management

pub mod config;
pub mod types;

pub use config::AppConfig;
pub use types::{Account, AccountType, Folder, HealthStatus, InsightBundle, Transaction, UserId};
