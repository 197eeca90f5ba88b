//! External text generation backends.
//!
//! The composer only sees the [`InterpretationGenerator`] trait; the shipped
//! implementation talks to the Google Generative Language REST API
//! (`models/{model}:generateContent`).

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::config::GeneratorSettings;

/// Result type for generator calls
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Why a generator call produced no usable text.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Network, TLS or connection failure.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("Backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response could not be decoded or carried no text.
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// No answer within the configured time.
    #[error("Timed out after {0:?}")]
    Timeout(Duration),

    /// The client could not be set up.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// A backend that turns a prompt into free-form text.
#[async_trait]
pub trait InterpretationGenerator: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    async fn generate(&self, prompt: &str) -> GeneratorResult<String>;
}

/// Build the configured generator, or `None` when generation is disabled or
/// cannot be set up. Callers then rely on the fallback composer alone.
pub fn build_generator(settings: &GeneratorSettings) -> Option<Arc<dyn InterpretationGenerator>> {
    if !settings.enabled {
        info!("Interpretation generator disabled by configuration");
        return None;
    }

    let api_key = match std::env::var(&settings.api_key_env) {
        Ok(key) if !key.trim().is_empty() => key,
        _ => {
            warn!(
                "{} is not set; interpretations will use the local fallback",
                settings.api_key_env
            );
            return None;
        }
    };

    build_remote(settings, api_key)
}

#[cfg(feature = "gemini")]
fn build_remote(
    settings: &GeneratorSettings,
    api_key: String,
) -> Option<Arc<dyn InterpretationGenerator>> {
    match gemini::GeminiGenerator::new(
        &settings.base_url,
        &settings.model,
        api_key,
        settings.timeout(),
    ) {
        Ok(generator) => {
            info!(model = %settings.model, "Gemini interpretation generator ready");
            Some(Arc::new(generator))
        }
        Err(e) => {
            warn!("Failed to build Gemini client: {}", e);
            None
        }
    }
}

#[cfg(not(feature = "gemini"))]
fn build_remote(
    _settings: &GeneratorSettings,
    _api_key: String,
) -> Option<Arc<dyn InterpretationGenerator>> {
    warn!("Built without the `gemini` feature; interpretations will use the local fallback");
    None
}

#[cfg(feature = "gemini")]
pub mod gemini {
    //! Client for the Generative Language `generateContent` endpoint.

    use async_trait::async_trait;
    use reqwest::Client;
    use serde::{Deserialize, Serialize};
    use std::time::Duration;
    use tracing::debug;

    use super::{GeneratorError, GeneratorResult, InterpretationGenerator};

    #[derive(Debug, Serialize)]
    struct GenerateContentRequest<'a> {
        contents: Vec<RequestContent<'a>>,
    }

    #[derive(Debug, Serialize)]
    struct RequestContent<'a> {
        parts: Vec<RequestPart<'a>>,
    }

    #[derive(Debug, Serialize)]
    struct RequestPart<'a> {
        text: &'a str,
    }

    #[derive(Debug, Deserialize)]
    struct GenerateContentResponse {
        #[serde(default)]
        candidates: Vec<Candidate>,
    }

    #[derive(Debug, Deserialize)]
    struct Candidate {
        #[serde(default)]
        content: Option<ResponseContent>,
    }

    #[derive(Debug, Deserialize)]
    struct ResponseContent {
        #[serde(default)]
        parts: Vec<ResponsePart>,
    }

    #[derive(Debug, Deserialize)]
    struct ResponsePart {
        #[serde(default)]
        text: Option<String>,
    }

    /// Gemini-backed interpretation generator.
    #[derive(Debug, Clone)]
    pub struct GeminiGenerator {
        client: Client,
        endpoint: String,
        model: String,
        api_key: String,
        timeout: Duration,
    }

    impl GeminiGenerator {
        pub fn new(
            base_url: &str,
            model: &str,
            api_key: String,
            timeout: Duration,
        ) -> GeneratorResult<Self> {
            let client = Client::builder()
                .timeout(timeout)
                .build()
                .map_err(|e| GeneratorError::Configuration(e.to_string()))?;

            Ok(Self {
                client,
                endpoint: format!(
                    "{}/v1beta/models/{}:generateContent",
                    base_url.trim_end_matches('/'),
                    model
                ),
                model: model.to_string(),
                api_key,
                timeout,
            })
        }

        pub fn endpoint(&self) -> &str {
            &self.endpoint
        }
    }

    fn classify(err: reqwest::Error, timeout: Duration) -> GeneratorError {
        if err.is_timeout() {
            GeneratorError::Timeout(timeout)
        } else if err.is_decode() {
            GeneratorError::Malformed(err.to_string())
        } else {
            GeneratorError::Transport(err.to_string())
        }
    }

    #[async_trait]
    impl InterpretationGenerator for GeminiGenerator {
        fn name(&self) -> &str {
            &self.model
        }

        async fn generate(&self, prompt: &str) -> GeneratorResult<String> {
            let body = GenerateContentRequest {
                contents: vec![RequestContent {
                    parts: vec![RequestPart { text: prompt }],
                }],
            };

            debug!(endpoint = %self.endpoint, "Requesting interpretation");
            let response = self
                .client
                .post(&self.endpoint)
                .header("x-goog-api-key", &self.api_key)
                .json(&body)
                .send()
                .await
                .map_err(|e| classify(e, self.timeout))?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(GeneratorError::Status {
                    status: status.as_u16(),
                    body,
                });
            }

            let parsed: GenerateContentResponse = response
                .json()
                .await
                .map_err(|e| GeneratorError::Malformed(e.to_string()))?;

            let text: String = parsed
                .candidates
                .into_iter()
                .next()
                .and_then(|candidate| candidate.content)
                .map(|content| {
                    content
                        .parts
                        .into_iter()
                        .filter_map(|part| part.text)
                        .collect()
                })
                .unwrap_or_default();

            if text.trim().is_empty() {
                return Err(GeneratorError::Malformed(
                    "response carried no candidate text".to_string(),
                ));
            }

            Ok(text)
        }
    }
}
