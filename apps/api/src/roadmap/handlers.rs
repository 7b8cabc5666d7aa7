//! Axum route handlers for the Roadmap API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::roadmap::{CareerRoadmapRow, GeneratedRoadmap};
use crate::roadmap::generator::generate_career_roadmap;
use crate::roadmap::service::get_career_roadmap;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRoadmapRequest {
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub career_goal: String,
    #[serde(default)]
    pub interests: String,
}

impl PreviewRoadmapRequest {
    fn is_blank(&self) -> bool {
        [
            &self.skills,
            &self.experience,
            &self.career_goal,
            &self.interests,
        ]
        .iter()
        .all(|field| field.trim().is_empty())
    }
}

/// GET /api/v1/roadmap
///
/// Returns the caller's stored roadmap, generating it on the first request.
pub async fn handle_get_roadmap(
    State(state): State<AppState>,
    auth: Option<AuthUser>,
) -> Result<Json<CareerRoadmapRow>, AppError> {
    let identity = auth.as_ref().map(|a| a.user_id.as_str());
    let roadmap =
        get_career_roadmap(identity, state.store.as_ref(), state.llm.as_ref()).await?;
    Ok(Json(roadmap))
}

/// POST /api/v1/roadmap/preview
///
/// Generates a roadmap from ad-hoc profile fields without storing it.
pub async fn handle_preview_roadmap(
    State(state): State<AppState>,
    auth: Option<AuthUser>,
    Json(request): Json<PreviewRoadmapRequest>,
) -> Result<Json<GeneratedRoadmap>, AppError> {
    if auth.is_none() {
        return Err(AppError::Unauthorized);
    }
    if request.is_blank() {
        return Err(AppError::Validation(
            "At least one profile field must be provided".to_string(),
        ));
    }

    let roadmap = generate_career_roadmap(
        state.llm.as_ref(),
        &request.skills,
        &request.experience,
        &request.career_goal,
        &request.interests,
    )
    .await?;

    Ok(Json(roadmap))
}
