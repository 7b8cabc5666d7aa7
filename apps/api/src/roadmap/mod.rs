// Career roadmap: prompt, generation, persistence and the fetch-or-create action.
// All model calls go through llm_client::TextGenerator.

pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod service;
pub mod store;

#[cfg(test)]
pub mod testing;
