//! Monthly field-worker reports.
//!
//! This module provides the pure business logic behind the report API:
//! - Domain types and request validation
//! - Per-series averaging
//! - The `ReportStore` persistence contract and `ReportService`
//! - Spreadsheet export

pub mod error;
pub mod export;
pub mod service;
pub mod types;


pub use error::ReportError;
pub use service::{ReportService, ReportStore};
pub use types::*;
