//! Report repository for database operations.
//!
//! Implements the core `ReportStore` contract using SeaORM.

use chrono::{DateTime, FixedOffset};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Unchanged, DatabaseConnection, DbErr,
    EntityTrait, QueryOrder, Set,
};
use tracing::debug;

use crate::entities::reports;
use fieldreport_core::report::{
    ActivityCounts, NewReport, ReportError, ReportFields, ReportId, ReportStore, WorkerReport,
};

/// Report repository implementation.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    db: DatabaseConnection,
}

impl ReportRepository {
    /// Creates a new report repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ReportStore for ReportRepository {
    async fn save(&self, report: NewReport) -> Result<WorkerReport, ReportError> {
        let active_model = to_active_model(report.fields, report.created_at, report.updated_at)?;

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| ReportError::persistence(e.to_string()))?;

        debug!(report_id = model.id, "Inserted report");
        to_domain(model)
    }

    async fn find_by_id(&self, id: ReportId) -> Result<Option<WorkerReport>, ReportError> {
        let model = reports::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ReportError::persistence(e.to_string()))?;

        model.map(to_domain).transpose()
    }

    async fn find_all(&self) -> Result<Vec<WorkerReport>, ReportError> {
        let models = reports::Entity::find()
            .order_by_asc(reports::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ReportError::persistence(e.to_string()))?;

        debug!(count = models.len(), "Loaded reports");
        models.into_iter().map(to_domain).collect()
    }

    async fn update(&self, report: WorkerReport) -> Result<WorkerReport, ReportError> {
        let id = report.id;
        let mut active_model =
            to_active_model(report.fields, report.created_at, report.updated_at)?;
        active_model.id = Unchanged(id);

        let model = active_model.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => ReportError::NotFound(id),
            other => ReportError::persistence(other.to_string()),
        })?;

        debug!(report_id = id, "Updated report");
        to_domain(model)
    }

    async fn delete(&self, id: ReportId) -> Result<(), ReportError> {
        let result = reports::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ReportError::persistence(e.to_string()))?;

        debug!(
            report_id = id,
            rows_affected = result.rows_affected,
            "Deleted report"
        );
        Ok(())
    }
}

/// Convert report contents to an active model with no primary key set.
fn to_active_model(
    fields: ReportFields,
    created_at: DateTime<FixedOffset>,
    updated_at: DateTime<FixedOffset>,
) -> Result<reports::ActiveModel, ReportError> {
    let activities = serde_json::to_value(&fields.activities)
        .map_err(|e| ReportError::persistence(format!("failed to encode activities: {e}")))?;
    let names = serde_json::to_value(&fields.names)
        .map_err(|e| ReportError::persistence(format!("failed to encode names: {e}")))?;

    Ok(reports::ActiveModel {
        id: NotSet,
        month_of: Set(fields.month_of),
        worker_name: Set(fields.worker_name),
        area_of_assignment: Set(fields.area_of_assignment),
        name_of_church: Set(fields.name_of_church),
        activities: Set(activities),
        average_attendance: Set(fields.average_attendance),
        names: Set(names),
        narrative_report: Set(fields.narrative_report),
        challenges_and_problem_encountered: Set(fields.challenges_and_problem_encountered),
        prayer_request: Set(fields.prayer_request),
        created_at: Set(created_at),
        updated_at: Set(updated_at),
    })
}

/// Convert database model to domain model.
fn to_domain(model: reports::Model) -> Result<WorkerReport, ReportError> {
    let activities: ActivityCounts = serde_json::from_value(model.activities).map_err(|e| {
        ReportError::persistence(format!("corrupt activities for report {}: {e}", model.id))
    })?;
    let names: Vec<String> = serde_json::from_value(model.names).map_err(|e| {
        ReportError::persistence(format!("corrupt names for report {}: {e}", model.id))
    })?;

    Ok(WorkerReport {
        id: model.id,
        fields: ReportFields {
            month_of: model.month_of,
            worker_name: model.worker_name,
            area_of_assignment: model.area_of_assignment,
            name_of_church: model.name_of_church,
            activities,
            average_attendance: model.average_attendance,
            names,
            narrative_report: model.narrative_report,
            challenges_and_problem_encountered: model.challenges_and_problem_encountered,
            prayer_request: model.prayer_request,
        },
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}
