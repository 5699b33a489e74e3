// Resume analysis: document text extraction, prompt composition, the single
// provider call, and mapping of the reply onto dashboard records.
// All LLM calls go through llm_client; no direct provider calls here.

pub mod extract;
pub mod handlers;
pub mod mapping;
pub mod models;
pub mod prompts;
pub mod service;
