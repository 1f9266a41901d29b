pub mod api;
pub mod config;
pub mod directory;
pub mod guidance;
pub mod history;
pub mod models;
pub mod profiles;

use std::sync::Arc;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::api::{start_api_server, ApiContext};
use crate::config::{AppConfig, ConfigError, ProviderConfig};
use crate::directory::{DirectoryError, HospitalDirectory};
use crate::guidance::{GeminiClient, LlmClient, ProviderError, UnconfiguredClient};

#[derive(Error, Debug)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Hospital directory error: {0}")]
    Directory(#[from] DirectoryError),

    #[error("Provider client error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Pick the provider client. Missing URL or key leaves the service up
/// but every analysis fails with a provider error.
pub fn build_llm_client(provider: &ProviderConfig) -> Result<Arc<dyn LlmClient>, ProviderError> {
    match (provider.api_url.as_deref(), provider.api_key.as_deref()) {
        (Some(url), Some(key)) => {
            tracing::info!(timeout_secs = provider.timeout_secs, "Generative model client configured");
            Ok(Arc::new(GeminiClient::new(url, key, provider.timeout_secs)?))
        }
        (None, _) => {
            tracing::warn!("GEMINI_API_URL is not set; symptom analysis will fail");
            Ok(Arc::new(UnconfiguredClient::new("GEMINI_API_URL")))
        }
        (_, None) => {
            tracing::warn!("GEMINI_API_KEY is not set; symptom analysis will fail");
            Ok(Arc::new(UnconfiguredClient::new("GEMINI_API_KEY")))
        }
    }
}

/// Initialize tracing, load configuration and data, then serve until Ctrl-C.
pub async fn run() -> Result<(), StartupError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let config = AppConfig::from_env()?;
    let directory = HospitalDirectory::load_or_bundled(config.hospitals_path.as_deref())?;
    let llm = build_llm_client(&config.provider)?;

    let ctx = ApiContext::new(llm, directory);
    let mut server = start_api_server(ctx, config.bind_addr).await?;

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
    server.shutdown();
    server.stopped().await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(url: Option<&str>, key: Option<&str>) -> ProviderConfig {
        ProviderConfig {
            api_url: url.map(String::from),
            api_key: key.map(String::from),
            timeout_secs: 15,
        }
    }

    #[tokio::test]
    async fn missing_key_yields_not_configured_client() {
        let client = build_llm_client(&provider(Some("http://127.0.0.1:9/x"), None)).unwrap();
        let err = client.generate("hi").await.unwrap_err();
        assert_eq!(err, ProviderError::NotConfigured("GEMINI_API_KEY"));
    }

    #[tokio::test]
    async fn missing_url_yields_not_configured_client() {
        let client = build_llm_client(&provider(None, Some("k"))).unwrap();
        let err = client.generate("hi").await.unwrap_err();
        assert_eq!(err, ProviderError::NotConfigured("GEMINI_API_URL"));
    }

    #[test]
    fn full_config_builds_client() {
        assert!(build_llm_client(&provider(Some("http://127.0.0.1:9/x"), Some("k"))).is_ok());
    }
}
