//! NLQ Core Library
//!
//! This crate provides the foundational utilities shared by every NLQ crate:
//! - Error handling (`AppError`, `AppResult`)
//! - Logging infrastructure
//! - Configuration management
//! - The `Filter` type shared by translation and the record stores

pub mod config;
pub mod error;
pub mod filter;
pub mod logging;

// Re-export commonly used types
pub use config::{AppConfig, ConfigOverrides};
pub use error::{AppError, AppResult};
pub use filter::{Filter, EMPTY_QUERY_MESSAGE};
