use chrono::{Duration, Utc};
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::models::roadmap::CareerRoadmapRow;
use crate::roadmap::generator::generate_career_roadmap;
use crate::roadmap::store::RoadmapStore;

/// How far ahead `next_update` is stamped on a freshly created roadmap.
pub const NEXT_UPDATE_DAYS: i64 = 30;

/// Returns the caller's roadmap, generating and storing it on first use.
///
/// 1. no identity → `Unauthorized` (the store is never touched)
/// 2. unknown identity → `NotFound`
/// 3. stored roadmap → returned as-is, no model call
/// 4. otherwise → generate once, persist with `next_update = now + 30d`, return the row
pub async fn get_career_roadmap(
    identity: Option<&str>,
    store: &dyn RoadmapStore,
    generator: &dyn TextGenerator,
) -> Result<CareerRoadmapRow, AppError> {
    let external_id = identity.ok_or(AppError::Unauthorized)?;

    let record = store
        .find_user_with_roadmap(external_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    if let Some(roadmap) = record.roadmap {
        return Ok(roadmap);
    }

    let user = record.user;
    info!("No career roadmap for user {}, generating one", user.id);

    let generated = generate_career_roadmap(
        generator,
        user.skills.as_deref().unwrap_or_default(),
        user.experience.as_deref().unwrap_or_default(),
        user.career_goal.as_deref().unwrap_or_default(),
        user.interests.as_deref().unwrap_or_default(),
    )
    .await?;

    let next_update = Utc::now() + Duration::days(NEXT_UPDATE_DAYS);
    store.create_roadmap(user.id, &generated, next_update).await
}
