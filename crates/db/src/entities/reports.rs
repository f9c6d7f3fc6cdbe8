//! `SeaORM` Entity for reports table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reports")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub month_of: String,
    #[sea_orm(column_type = "Text")]
    pub worker_name: String,
    #[sea_orm(column_type = "Text")]
    pub area_of_assignment: String,
    #[sea_orm(column_type = "Text")]
    pub name_of_church: String,
    /// Weekly activity series keyed by their camelCase names.
    #[sea_orm(column_type = "JsonBinary")]
    pub activities: Json,
    #[sea_orm(column_type = "Double")]
    pub average_attendance: f64,
    #[sea_orm(column_type = "JsonBinary")]
    pub names: Json,
    #[sea_orm(column_type = "Text")]
    pub narrative_report: String,
    #[sea_orm(column_type = "Text")]
    pub challenges_and_problem_encountered: String,
    #[sea_orm(column_type = "Text")]
    pub prayer_request: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
