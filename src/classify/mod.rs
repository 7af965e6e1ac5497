//! Title-classification collaborator boundary
//!
//! When the title parser cannot find any language beyond the canonical one,
//! it defers to an external classification service that looks at the title
//! text and, when available, the attached image. This module owns the trait
//! for that seam, an HTTP provider, and a deterministic mock; the service
//! itself stays external.

pub mod classifier;
pub mod error;
pub mod mock;
pub mod remote;

pub use classifier::{Classification, TitleClassifier};
pub use error::{ClassifyError, ClassifyResult};
pub use mock::{MockClassifier, MockMode};
pub use remote::RemoteClassifier;
