//! Title classifier trait
//!
//! The title parser falls back to an external classification service when a
//! title resolves to nothing beyond the canonical language. This trait is
//! the seam: the parser only sees the trait object, so tests run against
//! the deterministic mock and production wires in the HTTP provider.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::classify::error::ClassifyResult;

/// A structured classification of a request title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Preferred code of the assessed source language
    pub source_code: String,
    /// Preferred code of the assessed target language
    pub target_code: String,
    /// Service confidence in [0.0, 1.0]
    pub confidence: f64,
}

/// Generic trait for title-classification providers.
///
/// All methods are async to support I/O-bound providers; the mock resolves
/// immediately.
#[async_trait]
pub trait TitleClassifier: Send + Sync {
    /// Classify a title, optionally with an attachment reference (image or
    /// gallery URL) the service may inspect.
    ///
    /// # Returns
    ///
    /// * `Ok(Classification)` - The service produced a structured answer
    /// * `Err(ClassifyError)` - Configuration, transport, or protocol failure
    async fn classify(
        &self,
        title: &str,
        attachment: Option<&str>,
    ) -> ClassifyResult<Classification>;

    /// Name of this provider, for logging.
    fn provider_name(&self) -> &str;
}
