//! HTTP title-classification provider
//!
//! Talks to the external classification service over JSON. The endpoint
//! and API key come from the environment:
//!
//! - `TITLE_CLASSIFIER_ENDPOINT` - base URL of the service
//! - `TITLE_CLASSIFIER_API_KEY` - bearer token
//!
//! The wire format is owned by the service, not by this crate:
//! request `{"title": ..., "attachment": ...}`, response
//! `{"source": {"code": ...}, "target": {"code": ...}, "confidence": ...}`.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::classify::classifier::{Classification, TitleClassifier};
use crate::classify::error::{ClassifyError, ClassifyResult};

#[derive(Debug, Deserialize)]
struct WireLanguage {
    code: String,
}

#[derive(Debug, Deserialize)]
struct WireResponse {
    source: WireLanguage,
    target: WireLanguage,
    confidence: f64,
}

/// Remote classification provider.
#[derive(Clone)]
pub struct RemoteClassifier {
    api_key: String,
    client: reqwest::Client,
    base_url: String,
}

impl RemoteClassifier {
    /// Request timeout; classification is rare and off the hot path, so a
    /// generous bound is fine.
    const TIMEOUT_SECS: u64 = 30;

    /// Create a provider with an explicit endpoint and key.
    pub fn new(base_url: String, api_key: String) -> ClassifyResult<Self> {
        if base_url.trim().is_empty() {
            return Err(ClassifyError::ConfigError(
                "Endpoint URL cannot be empty".to_string(),
            ));
        }
        if api_key.trim().is_empty() {
            return Err(ClassifyError::ConfigError(
                "API key cannot be empty".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(Self::TIMEOUT_SECS))
            .build()
            .map_err(|e| {
                ClassifyError::NetworkError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            api_key,
            client,
            base_url,
        })
    }

    /// Create a provider from `TITLE_CLASSIFIER_ENDPOINT` and
    /// `TITLE_CLASSIFIER_API_KEY`.
    pub fn from_env() -> ClassifyResult<Self> {
        let base_url = std::env::var("TITLE_CLASSIFIER_ENDPOINT").map_err(|_| {
            ClassifyError::ConfigError(
                "TITLE_CLASSIFIER_ENDPOINT environment variable not set".to_string(),
            )
        })?;
        let api_key = std::env::var("TITLE_CLASSIFIER_API_KEY").map_err(|_| {
            ClassifyError::ConfigError(
                "TITLE_CLASSIFIER_API_KEY environment variable not set".to_string(),
            )
        })?;
        Self::new(base_url, api_key)
    }
}

#[async_trait]
impl TitleClassifier for RemoteClassifier {
    async fn classify(
        &self,
        title: &str,
        attachment: Option<&str>,
    ) -> ClassifyResult<Classification> {
        let body = json!({
            "title": title,
            "attachment": attachment,
        });

        let response = self
            .client
            .post(&self.base_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ClassifyError::NetworkError(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(ClassifyError::ApiError(format!(
                "Service returned {}: {}",
                status, detail
            )));
        }

        let wire: WireResponse = response
            .json()
            .await
            .map_err(|e| ClassifyError::InvalidResponse(format!("Bad response body: {}", e)))?;

        if !(0.0..=1.0).contains(&wire.confidence) {
            return Err(ClassifyError::InvalidResponse(format!(
                "Confidence out of range: {}",
                wire.confidence
            )));
        }

        Ok(Classification {
            source_code: wire.source.code,
            target_code: wire.target.code,
            confidence: wire.confidence,
        })
    }

    fn provider_name(&self) -> &str {
        "Remote Title Classifier"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_config() {
        assert!(matches!(
            RemoteClassifier::new(String::new(), "key".to_string()),
            Err(ClassifyError::ConfigError(_))
        ));
        assert!(matches!(
            RemoteClassifier::new("https://example.test".to_string(), "  ".to_string()),
            Err(ClassifyError::ConfigError(_))
        ));
    }

    #[test]
    fn test_wire_response_decodes() {
        let wire: WireResponse = serde_json::from_str(
            r#"{"source": {"code": "ja"}, "target": {"code": "en"}, "confidence": 0.92}"#,
        )
        .unwrap();
        assert_eq!(wire.source.code, "ja");
        assert_eq!(wire.target.code, "en");
        assert!((wire.confidence - 0.92).abs() < f64::EPSILON);
    }
}
