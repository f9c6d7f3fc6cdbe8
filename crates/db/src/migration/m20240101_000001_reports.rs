//! Reports migration.
//!
//! Creates the reports table holding one row per monthly worker submission.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(REPORTS_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared("DROP TABLE IF EXISTS reports CASCADE;")
            .await?;
        Ok(())
    }
}

const REPORTS_SQL: &str = r"
-- Monthly field-worker activity reports
CREATE TABLE reports (
    id SERIAL PRIMARY KEY,
    month_of TEXT NOT NULL,
    worker_name TEXT NOT NULL,
    area_of_assignment TEXT NOT NULL,
    name_of_church TEXT NOT NULL,
    activities JSONB NOT NULL DEFAULT '{}'::jsonb,
    average_attendance DOUBLE PRECISION NOT NULL DEFAULT 0,
    names JSONB NOT NULL DEFAULT '[]'::jsonb,
    narrative_report TEXT NOT NULL DEFAULT '',
    challenges_and_problem_encountered TEXT NOT NULL DEFAULT '',
    prayer_request TEXT NOT NULL DEFAULT '',
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_names_array CHECK (jsonb_typeof(names) = 'array'),
    CONSTRAINT chk_activities_object CHECK (jsonb_typeof(activities) = 'object')
);

-- Lookup by period and worker (duplicate detection is not enforced)
CREATE INDEX idx_reports_month_worker ON reports(month_of, worker_name);
";
