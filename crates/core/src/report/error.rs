//! Report error types.

use thiserror::Error;
use validator::ValidationErrors;

use super::types::ReportId;

/// Errors that can occur while handling reports.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Malformed or missing input.
    #[error("{0}")]
    Validation(String),

    /// No report exists with the given identifier.
    #[error("report not found: {0}")]
    NotFound(ReportId),

    /// The report store failed.
    #[error("persistence error: {0}")]
    Persistence(String),

    /// The spreadsheet could not be built or serialized.
    #[error("render error: {0}")]
    Render(String),
}

impl ReportError {
    /// Create a persistence error.
    #[must_use]
    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }
}

impl From<ValidationErrors> for ReportError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    e.message
                        .as_ref()
                        .map_or_else(|| format!("{field} is invalid"), ToString::to_string)
                })
            })
            .collect();
        messages.sort();
        Self::Validation(messages.join("; "))
    }
}

impl From<rust_xlsxwriter::XlsxError> for ReportError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Self::Render(err.to_string())
    }
}
