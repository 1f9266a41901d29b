use std::sync::Mutex;
use std::time::Duration;

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use serde::{Deserialize, Serialize};

use super::ProviderError;

/// Default request budget for one guidance call.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Text-completion provider abstraction (allows mocking).
///
/// One prompt in, the provider's raw text payload out. Any transport
/// failure or missing payload is a `ProviderError`; the text itself is
/// not interpreted here.
pub trait LlmClient: Send + Sync {
    fn generate<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, Result<String, ProviderError>>;
}

// ═══════════════════════════════════════════════════════════
// Gemini generateContent client
// ═══════════════════════════════════════════════════════════

/// HTTP client for a Gemini-style `generateContent` endpoint.
pub struct GeminiClient {
    api_url: String,
    api_key: String,
    client: reqwest::Client,
    timeout_secs: u64,
}

impl GeminiClient {
    pub fn new(api_url: &str, api_key: &str, timeout_secs: u64) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ProviderError::HttpClient(e.to_string()))?;

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client,
            timeout_secs,
        })
    }

    async fn generate_content(&self, prompt: &str) -> Result<String, ProviderError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&self.api_url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout(self.timeout_secs)
                } else if e.is_connect() {
                    ProviderError::Connection(self.api_url.clone())
                } else {
                    ProviderError::HttpClient(e.without_url().to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ResponseParsing(e.without_url().to_string()))?;

        parsed.into_text().ok_or_else(|| {
            tracing::error!("Guidance provider response has no text payload");
            ProviderError::MissingText
        })
    }
}

impl LlmClient for GeminiClient {
    fn generate<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, Result<String, ProviderError>> {
        self.generate_content(prompt).boxed()
    }
}

/// Request body for generateContent
#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

/// Response envelope from generateContent. Only the path to the first
/// text part is read: `candidates[0].content.parts[0].text`.
#[derive(Deserialize, Default)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
            .filter(|t| !t.is_empty())
    }
}

// ═══════════════════════════════════════════════════════════
// Placeholder and mock clients
// ═══════════════════════════════════════════════════════════

/// Stands in when no provider URL or key is configured: every call fails.
pub struct UnconfiguredClient {
    missing: &'static str,
}

impl UnconfiguredClient {
    pub fn new(missing: &'static str) -> Self {
        Self { missing }
    }
}

impl LlmClient for UnconfiguredClient {
    fn generate<'a>(&'a self, _prompt: &'a str) -> BoxFuture<'a, Result<String, ProviderError>> {
        futures_util::future::ready(Err(ProviderError::NotConfigured(self.missing))).boxed()
    }
}

/// Mock LLM client for testing. Returns a configurable response and
/// records the prompts it was given.
pub struct MockLlmClient {
    response: Result<String, ProviderError>,
    prompts: Mutex<Vec<String>>,
}

impl MockLlmClient {
    pub fn new(response: &str) -> Self {
        Self {
            response: Ok(response.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: ProviderError) -> Self {
        Self {
            response: Err(error),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

impl LlmClient for MockLlmClient {
    fn generate<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, Result<String, ProviderError>> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        futures_util::future::ready(self.response.clone()).boxed()
    }
}
