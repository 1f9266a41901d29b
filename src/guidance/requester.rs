use crate::models::{GuidanceRequest, RawGuidance};

use super::client::LlmClient;
use super::extract::parse_raw_guidance;
use super::prompt::build_prompt;
use super::GuidanceError;

/// Ask the provider for guidance and recover its raw JSON object.
///
/// One round trip, no retries. Provider failures and unparseable replies
/// are logged here with their detail and returned as typed errors.
pub async fn request_guidance(
    client: &dyn LlmClient,
    request: &GuidanceRequest,
) -> Result<RawGuidance, GuidanceError> {
    let prompt = build_prompt(request);

    let text = client.generate(&prompt).await.map_err(|e| {
        tracing::error!(error = %e, "Guidance provider call failed");
        GuidanceError::from(e)
    })?;

    tracing::debug!(chars = text.len(), "Guidance provider replied");
    parse_raw_guidance(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guidance::{MockLlmClient, ProviderError};
    use serde_json::json;

    #[tokio::test]
    async fn returns_raw_object_from_fenced_reply() {
        let client = MockLlmClient::new("```json\n{\"severity_level\": \"low\"}\n```");
        let raw = request_guidance(&client, &GuidanceRequest::new("mild headache"))
            .await
            .unwrap();
        assert_eq!(raw.severity_level, Some(json!("low")));
    }

    #[tokio::test]
    async fn sends_system_and_user_sections() {
        let client = MockLlmClient::new("{}");
        let mut request = GuidanceRequest::new("knee pain after running");
        request.chronic_conditions = vec!["Arthritis".into()];
        request_guidance(&client, &request).await.unwrap();

        let prompts = client.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("You are NOT a doctor"));
        assert!(prompts[0].contains("User symptoms: knee pain after running"));
        assert!(prompts[0].contains("Chronic conditions: Arthritis"));
    }

    #[tokio::test]
    async fn provider_failure_is_provider_error() {
        let client = MockLlmClient::failing(ProviderError::Timeout(15));
        let err = request_guidance(&client, &GuidanceRequest::new("fever"))
            .await
            .unwrap_err();
        assert_eq!(err, GuidanceError::Provider(ProviderError::Timeout(15)));
    }

    #[tokio::test]
    async fn reply_without_json_is_malformed() {
        let client = MockLlmClient::new("I cannot help with that request.");
        let err = request_guidance(&client, &GuidanceRequest::new("fever"))
            .await
            .unwrap_err();
        assert!(matches!(err, GuidanceError::MalformedResponse(_)));
    }
}
