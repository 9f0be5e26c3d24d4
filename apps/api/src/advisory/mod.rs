// Crop analysis: prompt building, the single Gemini call, and JSON extraction.
// All Gemini calls go through llm_client — nothing here talks HTTP to Google.

pub mod advisor;
pub mod extractor;
pub mod handlers;
pub mod models;
pub mod prompts;
