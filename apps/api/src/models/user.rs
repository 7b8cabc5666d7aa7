use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A user profile row. Owned by the account side of the product; read-only here.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    /// Subject id issued by the identity provider.
    pub clerk_user_id: String,
    pub skills: Option<String>,
    pub experience: Option<String>,
    pub career_goal: Option<String>,
    pub interests: Option<String>,
    pub created_at: DateTime<Utc>,
}
