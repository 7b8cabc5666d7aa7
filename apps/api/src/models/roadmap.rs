use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::user::User;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub step: String,
    pub description: String,
    pub estimated_time_months: f64,
}

/// Roadmap as produced by the model, before it is tied to a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedRoadmap {
    pub milestones: Vec<Milestone>,
    pub required_skills: Vec<String>,
    pub recommended_certifications: Vec<String>,
    pub job_opportunities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CareerRoadmapRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub milestones: Json<Vec<Milestone>>,
    pub required_skills: Vec<String>,
    pub recommended_certifications: Vec<String>,
    pub job_opportunities: Vec<String>,
    /// Written on creation; nothing reads it yet.
    pub next_update: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A user joined with their (optional) roadmap.
#[derive(Debug, Clone)]
pub struct UserWithRoadmap {
    pub user: User,
    pub roadmap: Option<CareerRoadmapRow>,
}
