//! Lifecycle status and the central transition rule

use serde::{Deserialize, Serialize};

use crate::request::error::{RequestError, RequestResult};

/// Lifecycle status of a translation request (or of one language slot of a
/// defined-multiple request).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Untranslated,
    InProgress,
    NeedsReview,
    Translated,
    MissingAssets,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Untranslated => "untranslated",
            Status::InProgress => "in-progress",
            Status::NeedsReview => "needs-review",
            Status::Translated => "translated",
            Status::MissingAssets => "missing-assets",
        }
    }

    pub fn parse(text: &str) -> Option<Status> {
        let status = match text {
            "untranslated" => Status::Untranslated,
            "in-progress" => Status::InProgress,
            "needs-review" => Status::NeedsReview,
            "translated" => Status::Translated,
            "missing-assets" => Status::MissingAssets,
            _ => return None,
        };
        Some(status)
    }

    /// Terminal status admits no further transition.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Status::Translated)
    }

    /// The transition rule every mutation goes through: a terminal status
    /// never changes, needs-review only completes, everything else is open.
    pub fn check_transition(from: Status, to: Status) -> RequestResult<()> {
        if from.is_terminal() {
            return Err(RequestError::IllegalTransition { from, to });
        }
        if from == Status::NeedsReview && to != Status::Translated {
            return Err(RequestError::IllegalTransition { from, to });
        }
        Ok(())
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
