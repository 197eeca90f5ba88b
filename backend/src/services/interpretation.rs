//! Interpretation composer.
//!
//! Asks the configured generator for a personalized reading and falls back to
//! [`compose_fallback`] on any failure. A single attempt is made per request;
//! generator errors are logged and never reach the caller.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::models::KinResult;
use crate::services::descriptions::DescriptionTable;
use crate::services::fallback::compose_fallback;
use crate::services::generator::{GeneratorError, GeneratorResult, InterpretationGenerator};
use crate::services::prompt::build_prompt;

/// Where an interpretation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpretationSource {
    Generated,
    Fallback,
}

/// Narrative text attached to a kin result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interpretation {
    pub text: String,
    pub source: InterpretationSource,
}

impl Interpretation {
    pub fn fallback(kin: &KinResult) -> Self {
        Self {
            text: compose_fallback(kin),
            source: InterpretationSource::Fallback,
        }
    }
}

/// Produces interpretations, with or without an external generator.
#[derive(Clone)]
pub struct InterpretationComposer {
    generator: Option<Arc<dyn InterpretationGenerator>>,
    timeout: Duration,
}

impl InterpretationComposer {
    pub fn new(generator: Option<Arc<dyn InterpretationGenerator>>, timeout: Duration) -> Self {
        Self { generator, timeout }
    }

    /// Composer that always uses the local fallback.
    pub fn fallback_only() -> Self {
        Self::new(None, Duration::ZERO)
    }

    pub fn has_generator(&self) -> bool {
        self.generator.is_some()
    }

    /// Interpretation for `kin`; never fails.
    pub async fn compose(
        &self,
        birth_date: NaiveDate,
        kin: &KinResult,
        descriptions: &DescriptionTable,
    ) -> Interpretation {
        let Some(generator) = self.generator.as_deref() else {
            return Interpretation::fallback(kin);
        };

        let prompt = build_prompt(birth_date, kin, descriptions);
        match self.generate(generator, &prompt).await {
            Ok(text) => {
                debug!(generator = generator.name(), kin = %kin.kin_number, "Generated interpretation");
                Interpretation {
                    text,
                    source: InterpretationSource::Generated,
                }
            }
            Err(e) => {
                warn!(
                    generator = generator.name(),
                    kin = %kin.kin_number,
                    "Interpretation generator failed, using fallback: {}",
                    e
                );
                Interpretation::fallback(kin)
            }
        }
    }

    async fn generate(
        &self,
        generator: &dyn InterpretationGenerator,
        prompt: &str,
    ) -> GeneratorResult<String> {
        let text = tokio::time::timeout(self.timeout, generator.generate(prompt))
            .await
            .map_err(|_| GeneratorError::Timeout(self.timeout))??;

        if text.trim().is_empty() {
            return Err(GeneratorError::Malformed("empty interpretation".to_string()));
        }
        Ok(text)
    }
}

impl std::fmt::Debug for InterpretationComposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterpretationComposer")
            .field("generator", &self.generator.as_ref().map(|g| g.name().to_string()))
            .field("timeout", &self.timeout)
            .finish()
    }
}
