//! In-memory fakes for the roadmap seams, shared by unit and router tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::{LlmError, TextGenerator};
use crate::models::roadmap::{CareerRoadmapRow, GeneratedRoadmap, UserWithRoadmap};
use crate::models::user::User;
use crate::roadmap::store::RoadmapStore;

pub const SAMPLE_ROADMAP_JSON: &str = r#"{
  "milestones": [
    {"step": "Deepen Rust", "description": "Build two async services", "estimatedTimeMonths": 4},
    {"step": "Own an on-call rotation", "description": "Lead incident reviews", "estimatedTimeMonths": 6}
  ],
  "requiredSkills": ["Rust", "Kubernetes", "Observability"],
  "recommendedCertifications": ["CKA"],
  "jobOpportunities": ["Senior Backend Engineer", "Site Reliability Engineer"]
}"#;

pub fn sample_user(external_id: &str) -> User {
    User {
        id: Uuid::new_v4(),
        clerk_user_id: external_id.to_string(),
        skills: Some("Rust, Go".to_string()),
        experience: Some("4 years building payment APIs".to_string()),
        career_goal: Some("Staff engineer".to_string()),
        interests: Some("distributed systems".to_string()),
        created_at: Utc::now(),
    }
}

pub fn sample_roadmap() -> GeneratedRoadmap {
    serde_json::from_str(SAMPLE_ROADMAP_JSON).unwrap()
}

fn build_row(
    user_id: Uuid,
    roadmap: &GeneratedRoadmap,
    next_update: DateTime<Utc>,
) -> CareerRoadmapRow {
    let now = Utc::now();
    CareerRoadmapRow {
        id: Uuid::new_v4(),
        user_id,
        milestones: Json(roadmap.milestones.clone()),
        required_skills: roadmap.required_skills.clone(),
        recommended_certifications: roadmap.recommended_certifications.clone(),
        job_opportunities: roadmap.job_opportunities.clone(),
        next_update,
        created_at: now,
        updated_at: now,
    }
}

/// Store that mirrors the Postgres unique-per-user behaviour.
#[derive(Default)]
pub struct InMemoryStore {
    users: Mutex<Vec<User>>,
    roadmaps: Mutex<HashMap<Uuid, CareerRoadmapRow>>,
    lookups: AtomicUsize,
    creates: AtomicUsize,
    hide_next: AtomicBool,
}

impl InMemoryStore {
    pub fn insert_user(&self, user: User) -> User {
        self.users.lock().unwrap().push(user.clone());
        user
    }

    pub fn seed_roadmap(&self, user_id: Uuid) -> CareerRoadmapRow {
        let row = build_row(user_id, &sample_roadmap(), Utc::now());
        self.roadmaps.lock().unwrap().insert(user_id, row.clone());
        row
    }

    /// Makes the next lookup report "no roadmap" even if one exists,
    /// simulating a concurrent request that inserts in between.
    pub fn hide_roadmaps_on_next_lookup(&self) {
        self.hide_next.store(true, Ordering::SeqCst);
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn creates(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }

    pub fn roadmap_count(&self) -> usize {
        self.roadmaps.lock().unwrap().len()
    }
}

#[async_trait]
impl RoadmapStore for InMemoryStore {
    async fn find_user_with_roadmap(
        &self,
        external_id: &str,
    ) -> Result<Option<UserWithRoadmap>, AppError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);

        let user = self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.clerk_user_id == external_id)
            .cloned();

        Ok(user.map(|user| {
            let roadmap = if self.hide_next.swap(false, Ordering::SeqCst) {
                None
            } else {
                self.roadmaps.lock().unwrap().get(&user.id).cloned()
            };
            UserWithRoadmap { user, roadmap }
        }))
    }

    async fn create_roadmap(
        &self,
        user_id: Uuid,
        roadmap: &GeneratedRoadmap,
        next_update: DateTime<Utc>,
    ) -> Result<CareerRoadmapRow, AppError> {
        self.creates.fetch_add(1, Ordering::SeqCst);

        let mut roadmaps = self.roadmaps.lock().unwrap();
        let row = roadmaps
            .entry(user_id)
            .or_insert_with(|| build_row(user_id, roadmap, next_update));
        Ok(row.clone())
    }
}

/// Generator returning a canned reply and recording what it was asked.
pub struct FakeGenerator {
    reply: Option<String>,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl FakeGenerator {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    /// Behaves like an unreachable upstream.
    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());

        self.reply.clone().ok_or(LlmError::Api {
            status: 503,
            message: "upstream unavailable".to_string(),
        })
    }
}
