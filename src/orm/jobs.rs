//! SeaORM Entity for jobs table

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "jobs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub posted_by: i32,
    pub company_id: Option<i32>,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub requirements: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub responsibilities: Option<String>,
    #[sea_orm(column_name = "type")]
    pub job_type: JobType,
    pub level: JobLevel,
    pub location: Option<String>,
    pub is_remote: bool,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub salary_currency: String,
    /// JSON array of skill strings
    #[sea_orm(nullable)]
    pub skills: Option<Json>,
    /// JSON array of benefit strings
    #[sea_orm(nullable)]
    pub benefits: Option<Json>,
    pub is_active: bool,
    pub created_at: DateTime,
}

#[derive(Debug, Clone, PartialEq, EnumIter, DeriveActiveEnum, serde::Serialize, serde::Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "job_type")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobType {
    #[sea_orm(string_value = "FULL_TIME")]
    FullTime,
    #[sea_orm(string_value = "PART_TIME")]
    PartTime,
    #[sea_orm(string_value = "CONTRACT")]
    Contract,
    #[sea_orm(string_value = "INTERNSHIP")]
    Internship,
    #[sea_orm(string_value = "FREELANCE")]
    Freelance,
}

#[derive(Debug, Clone, PartialEq, EnumIter, DeriveActiveEnum, serde::Serialize, serde::Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "job_level")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobLevel {
    #[sea_orm(string_value = "ENTRY")]
    Entry,
    #[sea_orm(string_value = "JUNIOR")]
    Junior,
    #[sea_orm(string_value = "MID")]
    Mid,
    #[sea_orm(string_value = "SENIOR")]
    Senior,
    #[sea_orm(string_value = "LEAD")]
    Lead,
    #[sea_orm(string_value = "EXECUTIVE")]
    Executive,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::PostedBy",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Poster,
    #[sea_orm(
        belongs_to = "super::companies::Entity",
        from = "Column::CompanyId",
        to = "super::companies::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Company,
    #[sea_orm(has_many = "super::applications::Entity")]
    Applications,
    #[sea_orm(has_many = "super::saved_jobs::Entity")]
    SavedJobs,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Poster.def()
    }
}

impl Related<super::companies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl Related<super::applications::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Applications.def()
    }
}

impl Related<super::saved_jobs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SavedJobs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
