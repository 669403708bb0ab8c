// Report Generation Engine
// Implements: format selection, prompt loading, timed LLM generation, quality assessment.
// All LLM calls go through llm_client::TextGenerator; no direct HTTP calls here.

pub mod formats;
pub mod generator;
pub mod handlers;
pub mod prompts;
