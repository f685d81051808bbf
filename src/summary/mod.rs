pub mod ollama;
pub mod prompt;

use std::future::Future;
use std::time::Duration;
use serde::{Deserialize, Serialize};
use tokio::time::timeout;
use crate::circuit_breaker::CircuitBreaker;
use crate::config::SummarySettings;
use crate::guidance::{fallback_day_note, FALLBACK_SUMMARY};
use crate::perf::PerfTimer;
use crate::plan::Plan;

pub use ollama::OllamaSummarizer;

/// A text-generation backend that turns a prompt into narrative text.
pub trait Summarizer {
    fn name(&self) -> &str;

    fn summarize(&self, prompt: &str) -> impl Future<Output = anyhow::Result<String>> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrativeSource {
    Generated,
    Fallback,
}

/// Text shown alongside the plan, and where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narrative {
    pub text: String,
    pub source: NarrativeSource,
}

impl Narrative {
    pub fn generated<S: Into<String>>(text: S) -> Self {
        Narrative {
            text: text.into(),
            source: NarrativeSource::Generated,
        }
    }

    pub fn fallback<S: Into<String>>(text: S) -> Self {
        Narrative {
            text: text.into(),
            source: NarrativeSource::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == NarrativeSource::Fallback
    }
}

/// Static narratives for a plan, used when the backend is disabled.
pub fn fallback_narratives(plan: &Plan) -> (Narrative, Vec<Narrative>) {
    let days = plan
        .days
        .iter()
        .map(|day| Narrative::fallback(fallback_day_note(day)))
        .collect();
    (Narrative::fallback(FALLBACK_SUMMARY), days)
}

/// Wraps a backend so that it can never fail or stall plan output:
/// every call is bounded by a timeout and degrades to static text.
pub struct SummaryService<S> {
    backend: S,
    timeout: Duration,
    breaker: CircuitBreaker,
}

impl<S: Summarizer> SummaryService<S> {
    pub fn new(backend: S, timeout: Duration, breaker: CircuitBreaker) -> Self {
        SummaryService {
            backend,
            timeout,
            breaker,
        }
    }

    pub fn from_settings(backend: S, settings: &SummarySettings) -> Self {
        SummaryService::new(
            backend,
            settings.timeout(),
            CircuitBreaker::new(settings.failure_threshold, settings.cooldown()),
        )
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn breaker(&self) -> &CircuitBreaker {
        &self.breaker
    }

    /// Overall encouragement for the whole plan.
    pub async fn summarize_plan(&self, plan: &Plan) -> Narrative {
        let prompt = prompt::plan_summary_prompt(plan);
        self.generate(&prompt, FALLBACK_SUMMARY).await
    }

    /// One note per day, in day order. Rest days never hit the backend.
    pub async fn day_notes(&self, plan: &Plan) -> Vec<Narrative> {
        let mut notes = Vec::with_capacity(plan.days.len());
        for day in &plan.days {
            let fallback = fallback_day_note(day);
            if day.is_empty() {
                notes.push(Narrative::fallback(fallback));
                continue;
            }
            let prompt = prompt::day_prompt(plan, day);
            notes.push(self.generate(&prompt, &fallback).await);
        }
        notes
    }

    async fn generate(&self, prompt: &str, fallback: &str) -> Narrative {
        if self.breaker.is_open() {
            tracing::debug!(
                backend = self.backend.name(),
                failures = self.breaker.failure_count(),
                "Summary backend skipped, breaker open"
            );
            return Narrative::fallback(fallback);
        }

        let perf = PerfTimer::new("summary_call");
        match timeout(self.timeout, self.backend.summarize(prompt)).await {
            Ok(Ok(text)) if !text.trim().is_empty() => {
                self.breaker.record_success();
                tracing::info!(
                    backend = self.backend.name(),
                    latency_ms = perf.elapsed_ms(),
                    "Summary generated"
                );
                Narrative::generated(text.trim())
            }
            Ok(Ok(_)) => {
                self.breaker.record_failure();
                tracing::warn!(backend = self.backend.name(), "Summary backend returned empty text, using fallback");
                Narrative::fallback(fallback)
            }
            Ok(Err(e)) => {
                self.breaker.record_failure();
                tracing::warn!(
                    backend = self.backend.name(),
                    error = %e,
                    "Summary backend failed, using fallback"
                );
                Narrative::fallback(fallback)
            }
            Err(_) => {
                self.breaker.record_failure();
                tracing::warn!(
                    backend = self.backend.name(),
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Summary backend timed out, using fallback"
                );
                Narrative::fallback(fallback)
            }
        }
    }
}
