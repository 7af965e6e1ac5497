//! Mock title classifier for testing
//!
//! Deterministic, API-free stand-in for the classification service so the
//! parser's fallback path can be exercised without network access.

use async_trait::async_trait;
use std::time::Duration;

use crate::classify::classifier::{Classification, TitleClassifier};
use crate::classify::error::{ClassifyError, ClassifyResult};

/// Mock classification scenarios
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Always answer with this classification
    Fixed(Classification),
    /// Simulate a service failure
    Error(String),
}

/// Mock classifier returning canned answers.
#[derive(Debug, Clone)]
pub struct MockClassifier {
    mode: MockMode,
    /// Optional simulated latency (in milliseconds)
    delay_ms: u64,
}

impl MockClassifier {
    pub fn new(mode: MockMode) -> Self {
        Self { mode, delay_ms: 0 }
    }

    /// Answer `source -> target` at the given confidence.
    pub fn answering(source: &str, target: &str, confidence: f64) -> Self {
        Self::new(MockMode::Fixed(Classification {
            source_code: source.to_string(),
            target_code: target.to_string(),
            confidence,
        }))
    }

    pub fn failing(message: &str) -> Self {
        Self::new(MockMode::Error(message.to_string()))
    }

    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }
}

#[async_trait]
impl TitleClassifier for MockClassifier {
    async fn classify(
        &self,
        _title: &str,
        _attachment: Option<&str>,
    ) -> ClassifyResult<Classification> {
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
        match &self.mode {
            MockMode::Fixed(classification) => Ok(classification.clone()),
            MockMode::Error(message) => Err(ClassifyError::ApiError(message.clone())),
        }
    }

    fn provider_name(&self) -> &str {
        "Mock Title Classifier"
    }
}
