use crate::models::{Guidance, GuidanceRequest};

use super::client::LlmClient;
use super::normalize::normalize;
use super::requester::request_guidance;
use super::GuidanceError;

/// Minimum symptom description length, in characters after trimming.
pub const MIN_SYMPTOM_CHARS: usize = 3;

pub fn validate_request(request: &GuidanceRequest) -> Result<(), GuidanceError> {
    if request.free_text.trim().chars().count() < MIN_SYMPTOM_CHARS {
        return Err(GuidanceError::Validation(format!(
            "Please describe your symptoms (at least {MIN_SYMPTOM_CHARS} characters)."
        )));
    }
    Ok(())
}

/// Validate → request → normalize.
pub async fn analyze(
    client: &dyn LlmClient,
    request: &GuidanceRequest,
) -> Result<Guidance, GuidanceError> {
    validate_request(request)?;
    let raw = request_guidance(client, request).await?;
    let guidance = normalize(&raw);

    tracing::info!(
        severity = %guidance.severity_level,
        care_setting = %guidance.recommended_care_setting,
        specialties = guidance.recommended_specialties.len(),
        "Symptom check analyzed"
    );
    Ok(guidance)
}
