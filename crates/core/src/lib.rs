//! Core business logic for field-worker reports.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Domain types, validation rules, averaging and the spreadsheet export live here.
//!
//! # Modules
//!
//! - `report` - Monthly report service, store contract and export

pub mod report;
