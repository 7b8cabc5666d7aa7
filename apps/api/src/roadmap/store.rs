use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::roadmap::{CareerRoadmapRow, GeneratedRoadmap, UserWithRoadmap};
use crate::models::user::User;

/// Persistence seam for the roadmap action.
///
/// Carried in `AppState` as `Arc<dyn RoadmapStore>`.
#[async_trait]
pub trait RoadmapStore: Send + Sync {
    /// Looks a user up by identity-provider subject, along with any stored roadmap.
    async fn find_user_with_roadmap(
        &self,
        external_id: &str,
    ) -> Result<Option<UserWithRoadmap>, AppError>;

    /// Stores the roadmap for `user_id`. If another request already created
    /// one, that row is returned instead and nothing is written.
    async fn create_roadmap(
        &self,
        user_id: Uuid,
        roadmap: &GeneratedRoadmap,
        next_update: DateTime<Utc>,
    ) -> Result<CareerRoadmapRow, AppError>;
}

/// Postgres-backed store. Relies on the unique index on `career_roadmaps.user_id`.
pub struct PgRoadmapStore {
    pool: PgPool,
}

impl PgRoadmapStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoadmapStore for PgRoadmapStore {
    async fn find_user_with_roadmap(
        &self,
        external_id: &str,
    ) -> Result<Option<UserWithRoadmap>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE clerk_user_id = $1")
            .bind(external_id)
            .fetch_optional(&self.pool)
            .await?;

        let Some(user) = user else {
            return Ok(None);
        };

        let roadmap = sqlx::query_as::<_, CareerRoadmapRow>(
            "SELECT * FROM career_roadmaps WHERE user_id = $1",
        )
        .bind(user.id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(Some(UserWithRoadmap { user, roadmap }))
    }

    async fn create_roadmap(
        &self,
        user_id: Uuid,
        roadmap: &GeneratedRoadmap,
        next_update: DateTime<Utc>,
    ) -> Result<CareerRoadmapRow, AppError> {
        let inserted = sqlx::query_as::<_, CareerRoadmapRow>(
            r#"
            INSERT INTO career_roadmaps
                (user_id, milestones, required_skills, recommended_certifications,
                 job_opportunities, next_update)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (user_id) DO NOTHING
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(Json(&roadmap.milestones))
        .bind(roadmap.required_skills.as_slice())
        .bind(roadmap.recommended_certifications.as_slice())
        .bind(roadmap.job_opportunities.as_slice())
        .bind(next_update)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(row) = inserted {
            info!("Created career roadmap {} for user {user_id}", row.id);
            return Ok(row);
        }

        // Lost the race to a concurrent first call; hand back the winner's row.
        info!("Career roadmap for user {user_id} already exists, re-fetching");
        let existing = sqlx::query_as::<_, CareerRoadmapRow>(
            "SELECT * FROM career_roadmaps WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(existing)
    }
}
