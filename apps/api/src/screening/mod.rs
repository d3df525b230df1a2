// Resume Screening pipeline.
// Flow: extract text → analyze against the JD via llm_client → rank → export.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod analyzer;
pub mod export;
pub mod handlers;
pub mod models;
pub mod pipeline;
pub mod prompts;
pub mod ranking;
