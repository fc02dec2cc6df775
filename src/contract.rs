//! Typed GraphQL operation contracts.
//!
//! The frontend consumes fixed query/mutation documents; these structs are
//! the field selections and input shapes those documents bind to, validated
//! at the boundary before anything reaches a resolver. Field names
//! serialize in camelCase to match the wire format.

use crate::orm::campaigns::{self, CampaignCategory, CampaignStatus};
use crate::orm::jobs::{self, JobLevel, JobType};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Operation names, binding between client documents and resolvers.
pub mod ops {
    pub const GET_JOBS: &str = "GetJobs";
    pub const GET_JOB: &str = "GetJob";
    pub const CREATE_JOB: &str = "CreateJob";
    pub const APPLY_JOB: &str = "ApplyJob";
    pub const TOGGLE_SAVE_JOB: &str = "ToggleSaveJob";
    pub const GET_CAMPAIGNS: &str = "GetCampaigns";
    pub const GET_CAMPAIGN: &str = "GetCampaign";
    pub const CREATE_CAMPAIGN: &str = "CreateCampaign";
    pub const DONATE_TO_CAMPAIGN: &str = "DonateToCampaign";
    pub const GET_PENDING_CAMPAIGNS: &str = "GetPendingCampaigns";
    pub const APPROVE_CAMPAIGN: &str = "ApproveCampaign";
    pub const REJECT_CAMPAIGN: &str = "RejectCampaign";
    pub const GET_CAMPAIGN_HISTORY: &str = "GetCampaignHistory";
}

pub const DEFAULT_PAGE_LIMIT: u64 = 10;

/// The pagination envelope every list query returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
    pub has_more: bool,
}

impl Pagination {
    pub fn new(total: u64, limit: u64, offset: u64) -> Self {
        Self {
            total,
            limit,
            offset,
            has_more: offset + limit < total,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct JobFilter {
    #[validate(length(max = 255))]
    pub search: Option<String>,
    pub job_type: Option<JobType>,
    pub level: Option<JobLevel>,
    pub location: Option<String>,
    pub is_remote: Option<bool>,
    pub offset: Option<u64>,
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<u64>,
}

impl JobFilter {
    pub fn limit(&self) -> u64 {
        self.limit.unwrap_or(DEFAULT_PAGE_LIMIT)
    }

    pub fn offset(&self) -> u64 {
        self.offset.unwrap_or(0)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_salary_range", skip_on_field_errors = true))]
pub struct CreateJobInput {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    pub requirements: Option<String>,
    pub responsibilities: Option<String>,
    pub company_id: Option<i32>,
    pub job_type: JobType,
    pub level: JobLevel,
    pub location: Option<String>,
    #[serde(default)]
    pub is_remote: bool,
    #[validate(range(min = 0))]
    pub salary_min: Option<i64>,
    #[validate(range(min = 0))]
    pub salary_max: Option<i64>,
    #[validate(length(min = 3, max = 3))]
    pub salary_currency: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
}

fn validate_salary_range(input: &CreateJobInput) -> Result<(), ValidationError> {
    if let (Some(min), Some(max)) = (input.salary_min, input.salary_max) {
        if min > max {
            return Err(ValidationError::new("salary_min_exceeds_max"));
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ApplyJobInput {
    #[validate(length(max = 5000))]
    pub cover_letter: Option<String>,
    #[validate(url)]
    pub resume_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct CampaignFilter {
    pub category: Option<CampaignCategory>,
    pub status: Option<CampaignStatus>,
    pub offset: Option<u64>,
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCampaignInput {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    pub category: CampaignCategory,
    #[validate(range(min = 1))]
    pub goal_amount: i64,
    pub end_date: NaiveDateTime,
    #[validate(url)]
    pub cover_image: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DonationInput {
    pub campaign_id: i32,
    #[validate(range(min = 1))]
    pub amount: i64,
    #[validate(length(max = 500))]
    pub message: Option<String>,
    #[serde(default)]
    pub anonymous: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RejectCampaignInput {
    #[validate(length(min = 1, max = 1000))]
    pub reason: String,
}

/// Job list item as selected by the `GetJobs` document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSummary {
    pub id: i32,
    pub title: String,
    pub company_id: Option<i32>,
    pub job_type: JobType,
    pub level: JobLevel,
    pub location: Option<String>,
    pub is_remote: bool,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub salary_currency: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

impl From<jobs::Model> for JobSummary {
    fn from(m: jobs::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            company_id: m.company_id,
            job_type: m.job_type,
            level: m.level,
            location: m.location,
            is_remote: m.is_remote,
            salary_min: m.salary_min,
            salary_max: m.salary_max,
            salary_currency: m.salary_currency,
            is_active: m.is_active,
            created_at: m.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobsPage {
    pub jobs: Vec<JobSummary>,
    pub pagination: Pagination,
}

/// Campaign list item as selected by the campaign documents.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignSummary {
    pub id: i32,
    pub title: String,
    pub category: CampaignCategory,
    pub goal_amount: i64,
    pub current_amount: i64,
    pub status: CampaignStatus,
    pub end_date: NaiveDateTime,
}

impl From<campaigns::Model> for CampaignSummary {
    fn from(m: campaigns::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            category: m.category,
            goal_amount: m.goal_amount,
            current_amount: m.current_amount,
            status: m.status,
            end_date: m.end_date,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignsPage {
    pub campaigns: Vec<CampaignSummary>,
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_has_more_arithmetic() {
        assert!(Pagination::new(25, 10, 0).has_more);
        assert!(Pagination::new(25, 10, 10).has_more);
        assert!(!Pagination::new(25, 10, 20).has_more);
        assert!(!Pagination::new(0, 10, 0).has_more);
        assert!(!Pagination::new(10, 10, 0).has_more);
    }

    #[test]
    fn pagination_envelope_wire_shape() {
        let page = Pagination::new(42, 10, 20);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "total": 42,
                "limit": 10,
                "offset": 20,
                "hasMore": true
            })
        );
    }

    #[test]
    fn job_filter_deserializes_wire_enums() {
        let filter: JobFilter = serde_json::from_str(
            r#"{"jobType":"FULL_TIME","level":"SENIOR","isRemote":true,"limit":20}"#,
        )
        .unwrap();
        assert_eq!(filter.job_type, Some(JobType::FullTime));
        assert_eq!(filter.level, Some(JobLevel::Senior));
        assert_eq!(filter.limit(), 20);
        assert_eq!(filter.offset(), 0);
        filter.validate().unwrap();
    }

    #[test]
    fn create_job_rejects_inverted_salary_range() {
        let input: CreateJobInput = serde_json::from_str(
            r#"{
                "title": "Backend Engineer",
                "description": "Build services",
                "jobType": "FULL_TIME",
                "level": "MID",
                "salaryMin": 20000000,
                "salaryMax": 10000000,
                "salaryCurrency": "IDR"
            }"#,
        )
        .unwrap();
        assert!(input.validate().is_err());
    }

    #[test]
    fn create_campaign_rejects_zero_goal() {
        let input: CreateCampaignInput = serde_json::from_str(
            r#"{
                "title": "Scholarship Fund",
                "description": "Help students",
                "category": "EDUCATION",
                "goalAmount": 0,
                "endDate": "2024-12-31T00:00:00"
            }"#,
        )
        .unwrap();
        assert!(input.validate().is_err());
    }

    #[test]
    fn donation_requires_positive_amount() {
        let ok = DonationInput {
            campaign_id: 1,
            amount: 50_000,
            message: None,
            anonymous: false,
        };
        ok.validate().unwrap();

        let bad = DonationInput { amount: 0, ..ok };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn campaign_status_round_trips_wire_names() {
        let status: CampaignStatus = serde_json::from_str(r#""PENDING_APPROVAL""#).unwrap();
        assert_eq!(status, CampaignStatus::PendingApproval);
        assert_eq!(
            serde_json::to_string(&CampaignStatus::Active).unwrap(),
            r#""ACTIVE""#
        );
    }

    #[test]
    fn jobs_page_serializes_the_full_envelope() {
        let page = JobsPage {
            jobs: vec![JobSummary {
                id: 1,
                title: "Backend Engineer".into(),
                company_id: Some(2),
                job_type: JobType::FullTime,
                level: JobLevel::Mid,
                location: None,
                is_remote: true,
                salary_min: None,
                salary_max: None,
                salary_currency: "IDR".into(),
                is_active: true,
                created_at: chrono::Utc::now().naive_utc(),
            }],
            pagination: Pagination::new(25, 10, 0),
        };
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["jobs"][0]["isRemote"], true);
        assert_eq!(json["jobs"][0]["jobType"], "FULL_TIME");
        assert_eq!(json["pagination"]["total"], 25);
        assert_eq!(json["pagination"]["hasMore"], true);
    }

    #[test]
    fn campaigns_page_serializes_the_full_envelope() {
        let page = CampaignsPage {
            campaigns: vec![CampaignSummary {
                id: 9,
                title: "Scholarship Fund".into(),
                category: CampaignCategory::Education,
                goal_amount: 100_000_000,
                current_amount: 0,
                status: CampaignStatus::PendingApproval,
                end_date: chrono::Utc::now().naive_utc(),
            }],
            pagination: Pagination::new(1, 10, 0),
        };
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["campaigns"][0]["category"], "EDUCATION");
        assert_eq!(json["campaigns"][0]["status"], "PENDING_APPROVAL");
        assert_eq!(json["campaigns"][0]["currentAmount"], 0);
        assert_eq!(json["pagination"]["hasMore"], false);
    }

    #[test]
    fn operation_names_match_the_client_documents() {
        // Renaming any of these breaks the frontend binding silently, so
        // pin the full table.
        let names = [
            ops::GET_JOBS,
            ops::GET_JOB,
            ops::CREATE_JOB,
            ops::APPLY_JOB,
            ops::TOGGLE_SAVE_JOB,
            ops::GET_CAMPAIGNS,
            ops::GET_CAMPAIGN,
            ops::CREATE_CAMPAIGN,
            ops::DONATE_TO_CAMPAIGN,
            ops::GET_PENDING_CAMPAIGNS,
            ops::APPROVE_CAMPAIGN,
            ops::REJECT_CAMPAIGN,
            ops::GET_CAMPAIGN_HISTORY,
        ];
        assert_eq!(
            names,
            [
                "GetJobs",
                "GetJob",
                "CreateJob",
                "ApplyJob",
                "ToggleSaveJob",
                "GetCampaigns",
                "GetCampaign",
                "CreateCampaign",
                "DonateToCampaign",
                "GetPendingCampaigns",
                "ApproveCampaign",
                "RejectCampaign",
                "GetCampaignHistory",
            ]
        );
    }

    #[test]
    fn job_summary_carries_model_fields() {
        let model = jobs::Model {
            id: 7,
            posted_by: 1,
            company_id: Some(3),
            title: "Data Analyst".into(),
            description: "...".into(),
            requirements: None,
            responsibilities: None,
            job_type: JobType::FullTime,
            level: JobLevel::Mid,
            location: Some("Jakarta, Indonesia".into()),
            is_remote: false,
            salary_min: Some(12_000_000),
            salary_max: Some(20_000_000),
            salary_currency: "IDR".into(),
            skills: None,
            benefits: None,
            is_active: true,
            created_at: chrono::Utc::now().naive_utc(),
        };
        let summary = JobSummary::from(model);
        assert_eq!(summary.id, 7);
        assert_eq!(summary.company_id, Some(3));
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["jobType"], "FULL_TIME");
        assert_eq!(json["salaryCurrency"], "IDR");
    }
}
