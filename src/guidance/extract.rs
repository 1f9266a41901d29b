//! Recovers the JSON object from a model's free-form text reply.
//!
//! Two stages: strip a leading/trailing code fence, then take the span from
//! the first `{` to the last `}` and parse it.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::models::RawGuidance;

use super::GuidanceError;

/// First `{` through the last `}`, across newlines.
static OUTER_BRACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{[\s\S]*\}").unwrap());

/// Remove a leading ```` ```json ```` or ```` ``` ```` fence and a trailing ```` ``` ````.
pub fn strip_code_fences(text: &str) -> &str {
    let mut body = text.trim();
    if let Some(rest) = body.strip_prefix("```json") {
        body = rest;
    }
    if let Some(rest) = body.strip_prefix("```") {
        body = rest;
    }
    if let Some(rest) = body.strip_suffix("```") {
        body = rest;
    }
    body
}

/// Parse the outer-brace span of a model reply as JSON.
pub fn extract_json(text: &str) -> Result<Value, GuidanceError> {
    let body = strip_code_fences(text);

    let span = OUTER_BRACES.find(body).ok_or_else(|| {
        tracing::error!(chars = body.len(), "Could not find JSON in provider response");
        GuidanceError::MalformedResponse("No JSON object found".into())
    })?;

    serde_json::from_str(span.as_str()).map_err(|e| {
        tracing::error!(error = %e, "Provider response JSON did not parse");
        GuidanceError::MalformedResponse(format!("Invalid JSON: {e}"))
    })
}

/// Extract and shape-check a [`RawGuidance`] from a model reply.
pub fn parse_raw_guidance(text: &str) -> Result<RawGuidance, GuidanceError> {
    let value = extract_json(text)?;
    if !value.is_object() {
        return Err(GuidanceError::MalformedResponse(
            "Response JSON is not an object".into(),
        ));
    }
    serde_json::from_value(value).map_err(|e| GuidanceError::MalformedResponse(e.to_string()))
}
