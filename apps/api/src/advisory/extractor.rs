//! Response Extractor — recovers the JSON object embedded in a free-text model reply.
//!
//! Heuristic: slice from the first `{` to the last `}` and parse that.
//!
//! - no `{` or no `}` at all: succeed with a `raw_response` + `note` fallback payload
//! - a slice that does not parse (prose braces around the object, two objects,
//!   truncated output, `}` before `{`): fail
//!
//! Markdown fences and surrounding prose are tolerated only because the slice
//! skips them. A balanced-brace scan would accept more replies but changes
//! which replies fail, so the naive slice is kept.

use serde_json::{json, Value};

use crate::advisory::models::RecommendationResult;

/// Note attached to the fallback payload when no JSON object was found.
pub const NOT_JSON_NOTE: &str = "AI response was not in expected JSON format";

/// Prefix shared by every analysis failure message.
pub const FAILURE_PREFIX: &str = "Error generating recommendations";

/// Returns the first-`{`-to-last-`}` slice, or `None` if either brace is missing.
/// A `}` that precedes the first `{` yields an empty slice.
pub fn json_candidate(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    Some(if end >= start { &text[start..=end] } else { "" })
}

/// Turns a raw model reply into an analysis result.
pub fn extract_recommendations(text: &str) -> RecommendationResult {
    let Some(candidate) = json_candidate(text) else {
        return RecommendationResult::success(json!({
            "raw_response": text,
            "note": NOT_JSON_NOTE,
        }));
    };

    match serde_json::from_str::<Value>(candidate) {
        Ok(recommendations) => RecommendationResult::success(recommendations),
        Err(e) => RecommendationResult::failure(format!("{FAILURE_PREFIX}: {e}")),
    }
}
