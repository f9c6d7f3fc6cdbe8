//! Shared configuration for the field report service.
//!
//! Every binary in the workspace loads its settings through [`AppConfig`],
//! so file and environment layering behaves the same everywhere.

pub mod config;

pub use config::{AppConfig, ConfigError, DatabaseConfig, ReportsConfig, ServerConfig};
