//! Report service implementation.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use chrono_tz::Tz;
use validator::Validate;

use super::error::ReportError;
use super::export;
use super::types::{NewReport, ReportId, ReportRequest, ReportView, WorkerReport};

/// Repository trait for report persistence.
///
/// This trait is implemented by the db crate to provide actual database operations.
pub trait ReportStore: Send + Sync {
    /// Insert a new report and return it with its assigned identifier.
    fn save(
        &self,
        report: NewReport,
    ) -> impl std::future::Future<Output = Result<WorkerReport, ReportError>> + Send;

    /// Find a report by ID.
    fn find_by_id(
        &self,
        id: ReportId,
    ) -> impl std::future::Future<Output = Result<Option<WorkerReport>, ReportError>> + Send;

    /// List every report.
    fn find_all(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<WorkerReport>, ReportError>> + Send;

    /// Replace all stored fields of an existing report.
    fn update(
        &self,
        report: WorkerReport,
    ) -> impl std::future::Future<Output = Result<WorkerReport, ReportError>> + Send;

    /// Delete a report by ID.
    fn delete(
        &self,
        id: ReportId,
    ) -> impl std::future::Future<Output = Result<(), ReportError>> + Send;
}

/// Service owning report business rules: timestamps, validation, averages.
pub struct ReportService<R: ReportStore> {
    store: Arc<R>,
    timezone: Tz,
}

impl<R: ReportStore> ReportService<R> {
    /// Create a new report service stamping times in `timezone`.
    #[must_use]
    pub fn new(store: Arc<R>, timezone: Tz) -> Self {
        Self { store, timezone }
    }

    fn now(&self) -> DateTime<FixedOffset> {
        self.localize(Utc::now())
    }

    fn localize<T: TimeZone>(&self, at: DateTime<T>) -> DateTime<FixedOffset> {
        at.with_timezone(&self.timezone).fixed_offset()
    }

    /// Maps a stored report to its averaged view with zone-local timestamps.
    fn view(&self, report: WorkerReport) -> ReportView {
        let mut view = ReportView::from(report);
        view.created_at = self.localize(view.created_at);
        view.updated_at = self.localize(view.updated_at);
        view
    }

    /// Validates and stores a new report.
    ///
    /// `createdAt` and `updatedAt` are both set to the current zone-local time.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The request fails validation
    /// - The store fails
    pub async fn create(&self, request: ReportRequest) -> Result<WorkerReport, ReportError> {
        request.validate()?;

        let now = self.now();
        self.store
            .save(NewReport {
                fields: request,
                created_at: now,
                updated_at: now,
            })
            .await
    }

    /// Fetches one report with its averages.
    pub async fn find_by_id(&self, id: ReportId) -> Result<ReportView, ReportError> {
        let report = self.fetch(id).await?;
        Ok(self.view(report))
    }

    /// Fetches every report with its averages. No reports is an empty list.
    pub async fn find_all(&self) -> Result<Vec<ReportView>, ReportError> {
        let reports = self.store.find_all().await?;
        Ok(reports.into_iter().map(|r| self.view(r)).collect())
    }

    /// Replaces every mutable field of an existing report.
    ///
    /// The identifier and `createdAt` are kept; `updatedAt` is refreshed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The request fails validation
    /// - No report exists with `id`
    /// - The store fails
    pub async fn update(
        &self,
        id: ReportId,
        request: ReportRequest,
    ) -> Result<WorkerReport, ReportError> {
        request.validate()?;

        let mut existing = self.fetch(id).await?;
        existing.fields = request;
        existing.updated_at = self.now();

        self.store.update(existing).await
    }

    /// Deletes a report after confirming it exists.
    pub async fn delete(&self, id: ReportId) -> Result<(), ReportError> {
        let report = self.fetch(id).await?;
        self.store.delete(report.id).await
    }

    /// Renders one report as an xlsx workbook.
    pub async fn export(&self, id: ReportId) -> Result<Vec<u8>, ReportError> {
        let view = self.find_by_id(id).await?;
        export::render(&view)
    }

    async fn fetch(&self, id: ReportId) -> Result<WorkerReport, ReportError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(ReportError::NotFound(id))
    }
}
