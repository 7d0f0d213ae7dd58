//! Shared errors and configuration for the fleet backend.
//!
//! This crate provides common pieces used across all other crates:
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;

pub use config::{AppConfig, CalendarConfig, LoggingConfig};
pub use error::{AppError, AppResult};
