//! Roadmap generator: turns four free-text profile fields into a `GeneratedRoadmap`.
//!
//! Flow: build prompt → one model call → strip code fences → parse.
//! There is no retry and no fallback; any failure is returned to the caller.

use tracing::debug;

use crate::errors::AppError;
use crate::llm_client::{strip_json_fences, TextGenerator};
use crate::models::roadmap::GeneratedRoadmap;
use crate::roadmap::prompts::build_roadmap_prompt;

/// Asks the model for a roadmap and parses its answer.
pub async fn generate_career_roadmap(
    generator: &dyn TextGenerator,
    skills: &str,
    experience: &str,
    career_goal: &str,
    interests: &str,
) -> Result<GeneratedRoadmap, AppError> {
    let prompt = build_roadmap_prompt(skills, experience, career_goal, interests);

    let raw = generator
        .generate(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Roadmap generation failed: {e}")))?;
    debug!("Roadmap model response: {} bytes", raw.len());

    parse_roadmap(&raw)
}

/// Sanitize-then-parse. Serde enforces the shape: all four sections must be
/// present with the right types. Values are taken as the model gave them.
pub fn parse_roadmap(raw: &str) -> Result<GeneratedRoadmap, AppError> {
    let cleaned = strip_json_fences(raw);

    serde_json::from_str(&cleaned)
        .map_err(|e| AppError::MalformedResponse(format!("Roadmap JSON did not parse: {e}")))
}
