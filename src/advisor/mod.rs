//! Insight Advisor Bridge: turns recent records into a prompt and asks an
//! external text generator for advice. Failures never reach the caller; they
//! collapse into [`FALLBACK_MESSAGE`].

pub mod gemini;
pub mod prompt;

pub use gemini::GeminiClient;
pub use prompt::{PromptBuilder, DEFAULT_TRANSACTION_LIMIT};

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::Config;
use crate::domain::{Debt, Transaction};

pub const FALLBACK_MESSAGE: &str =
    "Unable to generate AI insights. Please check your API configuration.";

#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("no API credential configured")]
    MissingCredential,
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("service responded with status {0}")]
    Status(u16),
    #[error("service returned no text")]
    EmptyResponse,
}

/// Anything able to turn a prompt into free text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, AdvisorError>;
}

/// Result of a guarded [`InsightAdvisor::analyze`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvisorOutcome {
    /// Advice text, or the fallback message when generation failed.
    Ready(String),
    /// Another analysis is still running; nothing was sent.
    Busy,
}

pub struct InsightAdvisor {
    generator: Option<Arc<dyn TextGenerator>>,
    prompt: PromptBuilder,
    in_flight: AtomicBool,
}

struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl InsightAdvisor {
    /// `generator` is `None` when no credential is available.
    pub fn new(generator: Option<Arc<dyn TextGenerator>>, prompt: PromptBuilder) -> Self {
        Self {
            generator,
            prompt,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Wires a [`GeminiClient`] when the configured credential is present.
    pub fn from_config(config: &Config) -> Self {
        let prompt = PromptBuilder::new(
            config.currency_symbol.clone(),
            config.prompt_transaction_limit,
        );
        let generator = config.api_key().and_then(|key| {
            match GeminiClient::new(key, &config.advisor_endpoint, &config.advisor_model) {
                Ok(client) => Some(Arc::new(client) as Arc<dyn TextGenerator>),
                Err(err) => {
                    warn!(error = %err, "failed to build advisor client");
                    None
                }
            }
        });
        Self::new(generator, prompt)
    }

    pub fn is_configured(&self) -> bool {
        self.generator.is_some()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Generated advice verbatim, or [`FALLBACK_MESSAGE`] on any failure.
    /// Does not touch the records.
    pub async fn generate_insights(&self, transactions: &[Transaction], debts: &[Debt]) -> String {
        match self.try_generate(transactions, debts).await {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "insight generation failed");
                FALLBACK_MESSAGE.to_string()
            }
        }
    }

    /// Like [`generate_insights`](Self::generate_insights) but refuses to
    /// start while a previous request is outstanding.
    pub async fn analyze(&self, transactions: &[Transaction], debts: &[Debt]) -> AdvisorOutcome {
        let Some(_guard) = self.begin() else {
            info!("insight request already in flight");
            return AdvisorOutcome::Busy;
        };
        AdvisorOutcome::Ready(self.generate_insights(transactions, debts).await)
    }

    fn begin(&self) -> Option<InFlight<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlight(&self.in_flight))
    }

    async fn try_generate(
        &self,
        transactions: &[Transaction],
        debts: &[Debt],
    ) -> Result<String, AdvisorError> {
        let generator = self.generator.as_ref().ok_or(AdvisorError::MissingCredential)?;
        let prompt = self.prompt.build(transactions, debts);
        let text = generator.generate(&prompt).await?;
        if text.trim().is_empty() {
            return Err(AdvisorError::EmptyResponse);
        }
        Ok(text)
    }
}
