//! Request State Machine
//!
//! A [`Request`] tracks one post over its multi-day lifetime: which
//! language it concerns right now, where it stands in the translation
//! lifecycle, who worked on it and who was told about it. Identity fields
//! are fixed at construction; everything else mutates only through the
//! operations here, all of which enforce the transition invariants.
//!
//! Requests are built from a fresh [`ParseResult`] on first observation of
//! a post, or rehydrated from a persisted flattened record (see
//! [`record::FlatRecord`]).

use std::collections::{BTreeMap, HashMap};

use crate::catalog::{Catalog, Descriptor};
use crate::title::{Direction, ParseResult};

pub mod error;
pub mod record;
pub mod status;

pub use error::{RequestError, RequestResult};
pub use record::FlatRecord;
pub use status::Status;

/// Platform metadata fixed at submission time.
#[derive(Debug, Clone)]
pub struct PostMeta {
    pub id: String,
    pub created_utc: i64,
    pub author: String,
}

/// A request is exactly one of these. Only defined-multiple requests carry
/// the per-language status map.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState {
    Single(Status),
    Multiple(BTreeMap<String, Status>),
}

/// Flair a request should wear right now.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestFlair {
    pub code: String,
    pub text: String,
    /// Template from the supplied map, if one matches the code.
    pub template_id: Option<String>,
}

/// One tracked translation request.
#[derive(Debug, Clone)]
pub struct Request {
    // Write-once identity, no public mutators.
    id: String,
    created_utc: i64,
    author: String,

    language_code: String,
    state: RequestState,
    history: Vec<String>,
    identified: bool,
    long: bool,
    country: Option<String>,
    status_times: BTreeMap<String, i64>,
    translators: Vec<String>,
    notified: Vec<String>,

    // Transient; re-resolved from language_code on demand, never persisted.
    language_cache: Option<Descriptor>,
}

impl Request {
    /// Build a request from a fresh parse and the platform metadata.
    pub fn from_parse(catalog: &Catalog, parse: &ParseResult, meta: PostMeta) -> Self {
        let (language_code, state, country) = derive_shape(catalog, parse);
        Request {
            id: meta.id,
            created_utc: meta.created_utc,
            author: meta.author,
            language_code,
            state,
            history: Vec::new(),
            identified: false,
            long: false,
            country,
            status_times: BTreeMap::new(),
            translators: Vec::new(),
            notified: Vec::new(),
            language_cache: None,
        }
    }

    // Identity accessors.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_utc(&self) -> i64 {
        self.created_utc
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// Preferred code of the request's current language. The durable truth;
    /// the resolved descriptor is only a cache over it.
    pub fn language_code(&self) -> &str {
        &self.language_code
    }

    /// Current language, lazily re-resolved from the stored code.
    pub fn language(&mut self, catalog: &Catalog) -> Option<&Descriptor> {
        if self.language_cache.is_none() {
            self.language_cache = catalog.resolve_with(&self.language_code, false);
        }
        self.language_cache.as_ref()
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self.state, RequestState::Multiple(_))
    }

    /// Status of a single request. `None` for defined-multiple requests.
    pub fn status(&self) -> Option<Status> {
        match &self.state {
            RequestState::Single(status) => Some(*status),
            RequestState::Multiple(_) => None,
        }
    }

    /// Status of one language slot of a defined-multiple request.
    pub fn language_status(&self, code: &str) -> Option<Status> {
        match &self.state {
            RequestState::Single(_) => None,
            RequestState::Multiple(map) => map.get(code).copied(),
        }
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn is_identified(&self) -> bool {
        self.identified
    }

    pub fn is_long(&self) -> bool {
        self.long
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    pub fn status_times(&self) -> &BTreeMap<String, i64> {
        &self.status_times
    }

    pub fn translators(&self) -> &[String] {
        &self.translators
    }

    pub fn notified(&self) -> &[String] {
        &self.notified
    }

    /// Change the status of a single request.
    ///
    /// # Errors
    /// - [`RequestError::WrongKind`] on a defined-multiple request
    /// - [`RequestError::IllegalTransition`] when the transition rule forbids it
    pub fn set_status(&mut self, status: Status) -> RequestResult<()> {
        match &mut self.state {
            RequestState::Single(current) => {
                Status::check_transition(*current, status)?;
                *current = status;
                Ok(())
            }
            RequestState::Multiple(_) => Err(RequestError::WrongKind(
                "set_status on a defined-multiple request".to_string(),
            )),
        }
    }

    /// Change the status of one language slot of a defined-multiple
    /// request. Slots transition independently under the same rule.
    ///
    /// # Errors
    /// - [`RequestError::WrongKind`] on a single request
    /// - [`RequestError::UnknownLanguage`] when no such slot exists
    /// - [`RequestError::IllegalTransition`] when the transition rule forbids it
    pub fn set_language_status(&mut self, code: &str, status: Status) -> RequestResult<()> {
        match &mut self.state {
            RequestState::Single(_) => Err(RequestError::WrongKind(
                "set_language_status on a single request".to_string(),
            )),
            RequestState::Multiple(map) => {
                let Some(current) = map.get_mut(code) else {
                    return Err(RequestError::UnknownLanguage(code.to_string()));
                };
                Status::check_transition(*current, status)?;
                *current = status;
                Ok(())
            }
        }
    }

    /// Reassign the current language. The prior code goes to the history
    /// and the request counts as identified unless suppressed (title
    /// re-parses reassign too, but say nothing about identification).
    pub fn set_language(&mut self, descriptor: &Descriptor, suppress_identified: bool) {
        let new_code = descriptor.preferred_code();
        if new_code == self.language_code {
            return;
        }
        self.history.push(self.language_code.clone());
        self.language_code = new_code;
        self.language_cache = None;
        if descriptor.country.is_some() {
            self.country = descriptor.country.clone();
        }
        if !suppress_identified {
            self.identified = true;
        }
    }

    pub fn toggle_long(&mut self) {
        self.long = !self.long;
    }

    /// Record when a status was first reached. Later calls for the same
    /// status are no-ops, so the recorded time stays the first occurrence.
    pub fn record_status_time(&mut self, status: Status, at: i64) {
        self.status_times
            .entry(status.as_str().to_string())
            .or_insert(at);
    }

    /// Credit a translator. Duplicates are dropped.
    pub fn add_translator(&mut self, username: &str) {
        if !self.translators.iter().any(|u| u == username) {
            self.translators.push(username.to_string());
        }
    }

    /// Remember a notified user. Duplicates are dropped.
    pub fn add_notified(&mut self, username: &str) {
        if !self.notified.iter().any(|u| u == username) {
            self.notified.push(username.to_string());
        }
    }

    /// Full reset from a freshly re-parsed title: language, kind, and flags
    /// are re-derived; recorded status, history, and first-occurrence times
    /// are discarded. Identity and the translator/notified records stay.
    pub fn reset(&mut self, catalog: &Catalog, parse: &ParseResult) {
        let (language_code, state, country) = derive_shape(catalog, parse);
        self.language_code = language_code;
        self.state = state;
        self.country = country;
        self.history.clear();
        self.status_times.clear();
        self.identified = false;
        self.language_cache = None;
    }

    /// Flair this request should wear, derived from status, kind,
    /// identification, and country. `templates` maps flair codes to the
    /// platform's template ids; an unmatched code falls back to the
    /// generic template when one is supplied.
    pub fn flair(&self, catalog: &Catalog, templates: &HashMap<String, String>) -> RequestFlair {
        let (code, text) = match &self.state {
            RequestState::Multiple(map) => {
                let mut slots: Vec<String> = Vec::new();
                for (code, status) in map {
                    let mut slot = code.to_uppercase();
                    if status.is_terminal() {
                        slot.push('✓');
                    }
                    slots.push(slot);
                }
                (
                    "multiple".to_string(),
                    format!("Multiple Languages [{}]", slots.join(", ")),
                )
            }
            RequestState::Single(status) => {
                let language = self.language_label(catalog);
                match status {
                    Status::Untranslated => (self.language_code.clone(), language),
                    Status::InProgress => {
                        ("in-progress".to_string(), format!("In Progress [{}]", language))
                    }
                    Status::NeedsReview => (
                        "needs-review".to_string(),
                        format!("Needs Review [{}]", language),
                    ),
                    Status::Translated => {
                        ("translated".to_string(), format!("Translated [{}]", language))
                    }
                    Status::MissingAssets => (
                        "missing-assets".to_string(),
                        format!("Missing Assets [{}]", language),
                    ),
                }
            }
        };

        let template_id = templates
            .get(&code)
            .or_else(|| templates.get("generic"))
            .cloned();

        RequestFlair {
            code,
            text,
            template_id,
        }
    }

    fn language_label(&self, catalog: &Catalog) -> String {
        let mut label = catalog
            .resolve_with(&self.language_code, false)
            .map(|d| d.name)
            .unwrap_or_else(|| self.language_code.to_uppercase());
        if let Some(country) = &self.country {
            if !label.contains('{') {
                label.push_str(&format!(" {{{}}}", country));
            }
        }
        if self.identified {
            label.push_str(" (Identified)");
        }
        label
    }
}

/// Language code, state shape, and country a parse result implies.
fn derive_shape(
    catalog: &Catalog,
    parse: &ParseResult,
) -> (String, RequestState, Option<String>) {
    let canonical = catalog.canonical_code();

    let slots: Vec<String> = parse
        .target
        .iter()
        .map(|d| d.preferred_code())
        .filter(|code| *code != canonical)
        .collect();

    let state = if slots.len() > 1 && parse.direction != Direction::Both {
        RequestState::Multiple(
            slots
                .iter()
                .map(|code| (code.clone(), Status::Untranslated))
                .collect(),
        )
    } else {
        RequestState::Single(Status::Untranslated)
    };

    let language_code = parse
        .notify
        .first()
        .or_else(|| parse.source.first())
        .map(|d| d.preferred_code())
        .unwrap_or_else(|| "unknown".to_string());

    (language_code, state, parse.country.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::title::TitleParser;

    fn meta(id: &str) -> PostMeta {
        PostMeta {
            id: id.to_string(),
            created_utc: 1_700_000_000,
            author: "requester".to_string(),
        }
    }

    async fn request_for(title: &str) -> (Catalog, Request) {
        let catalog = Catalog::core();
        let parse = TitleParser::new(&catalog).parse(title, None).await;
        let request = Request::from_parse(&catalog, &parse, meta("abc123"));
        (catalog, request)
    }

    #[tokio::test]
    async fn test_single_request_shape() {
        let (_, request) = request_for("[German > English] a letter").await;
        assert_eq!(request.language_code(), "de");
        assert!(!request.is_multiple());
        assert_eq!(request.status(), Some(Status::Untranslated));
    }

    #[tokio::test]
    async fn test_multiple_request_shape() {
        let (_, request) = request_for("[English > Japanese, Korean] a menu").await;
        assert!(request.is_multiple());
        assert_eq!(request.language_status("ja"), Some(Status::Untranslated));
        assert_eq!(request.language_status("ko"), Some(Status::Untranslated));
    }

    #[tokio::test]
    async fn test_status_transitions_single() {
        let (_, mut request) = request_for("[German > English] a letter").await;
        request.set_status(Status::InProgress).unwrap();
        request.set_status(Status::NeedsReview).unwrap();

        // From needs-review, only translated succeeds.
        let err = request.set_status(Status::MissingAssets).unwrap_err();
        assert!(matches!(err, RequestError::IllegalTransition { .. }));
        request.set_status(Status::Translated).unwrap();

        // Terminal admits nothing further.
        for status in [
            Status::Untranslated,
            Status::InProgress,
            Status::NeedsReview,
            Status::Translated,
            Status::MissingAssets,
        ] {
            assert!(request.set_status(status).is_err());
        }
    }

    #[tokio::test]
    async fn test_multiple_slots_are_independent() {
        let (_, mut request) = request_for("[English > Japanese, Korean] a menu").await;
        request.set_language_status("ja", Status::Translated).unwrap();
        assert_eq!(request.language_status("ja"), Some(Status::Translated));
        assert_eq!(request.language_status("ko"), Some(Status::Untranslated));
    }

    #[tokio::test]
    async fn test_wrong_kind_raises() {
        let (_, mut single) = request_for("[German > English] a letter").await;
        assert!(matches!(
            single.set_language_status("de", Status::Translated),
            Err(RequestError::WrongKind(_))
        ));

        let (_, mut multiple) = request_for("[English > Japanese, Korean] a menu").await;
        assert!(matches!(
            multiple.set_status(Status::Translated),
            Err(RequestError::WrongKind(_))
        ));
        assert!(matches!(
            multiple.set_language_status("de", Status::Translated),
            Err(RequestError::UnknownLanguage(_))
        ));
    }

    #[tokio::test]
    async fn test_language_reassignment_history() {
        let (catalog, mut request) = request_for("[Unknown > English] old coin").await;
        assert_eq!(request.language_code(), "unknown");

        let japanese = catalog.resolve("japanese").unwrap();
        request.set_language(&japanese, false);
        assert_eq!(request.language_code(), "ja");
        assert_eq!(request.history(), ["unknown"]);
        assert!(request.is_identified());

        // Reassigning to the same language changes nothing.
        request.set_language(&japanese, false);
        assert_eq!(request.history(), ["unknown"]);
    }

    #[tokio::test]
    async fn test_suppressed_identification() {
        let (catalog, mut request) = request_for("[Unknown > English] old coin").await;
        let korean = catalog.resolve("korean").unwrap();
        request.set_language(&korean, true);
        assert!(!request.is_identified());
        assert_eq!(request.history(), ["unknown"]);
    }

    #[tokio::test]
    async fn test_lazy_language_accessor() {
        let (catalog, mut request) = request_for("[German > English] a letter").await;
        let descriptor = request.language(&catalog).unwrap();
        assert_eq!(descriptor.name, "German");
    }

    #[tokio::test]
    async fn test_status_time_first_occurrence_wins() {
        let (_, mut request) = request_for("[German > English] a letter").await;
        request.record_status_time(Status::InProgress, 100);
        request.record_status_time(Status::InProgress, 200);
        assert_eq!(request.status_times()["in-progress"], 100);
    }

    #[tokio::test]
    async fn test_deduplicated_lists() {
        let (_, mut request) = request_for("[German > English] a letter").await;
        request.add_translator("alice");
        request.add_translator("alice");
        request.add_notified("bob");
        request.add_notified("bob");
        assert_eq!(request.translators(), ["alice"]);
        assert_eq!(request.notified(), ["bob"]);
    }

    #[tokio::test]
    async fn test_reset_discards_progress() {
        let catalog = Catalog::core();
        let parse = TitleParser::new(&catalog)
            .parse("[Unknown > English] old coin", None)
            .await;
        let mut request = Request::from_parse(&catalog, &parse, meta("abc123"));

        let japanese = catalog.resolve("japanese").unwrap();
        request.set_language(&japanese, false);
        request.set_status(Status::Translated).unwrap();
        request.record_status_time(Status::Translated, 123);
        request.add_translator("alice");

        let reparse = TitleParser::new(&catalog)
            .parse("[Japanese > English] old coin", None)
            .await;
        request.reset(&catalog, &reparse);

        assert_eq!(request.language_code(), "ja");
        assert_eq!(request.status(), Some(Status::Untranslated));
        assert!(request.history().is_empty());
        assert!(request.status_times().is_empty());
        assert!(!request.is_identified());
        // Real events survive a reset.
        assert_eq!(request.translators(), ["alice"]);
        assert_eq!(request.id(), "abc123");
    }

    #[tokio::test]
    async fn test_flair_output() {
        let (catalog, mut request) = request_for("[German > English] a letter").await;
        let mut templates = HashMap::new();
        templates.insert("de".to_string(), "tpl-german".to_string());
        templates.insert("translated".to_string(), "tpl-done".to_string());
        templates.insert("generic".to_string(), "tpl-generic".to_string());

        let flair = request.flair(&catalog, &templates);
        assert_eq!(flair.code, "de");
        assert_eq!(flair.text, "German");
        assert_eq!(flair.template_id.as_deref(), Some("tpl-german"));

        request.set_status(Status::Translated).unwrap();
        let flair = request.flair(&catalog, &templates);
        assert_eq!(flair.code, "translated");
        assert_eq!(flair.text, "Translated [German]");
        assert_eq!(flair.template_id.as_deref(), Some("tpl-done"));

        // Unmatched code falls back to the generic template.
        let sparse: HashMap<String, String> =
            [("generic".to_string(), "tpl-generic".to_string())].into();
        let flair = request.flair(&catalog, &sparse);
        assert_eq!(flair.template_id.as_deref(), Some("tpl-generic"));
    }

    #[tokio::test]
    async fn test_multiple_flair_marks_translated_slots() {
        let (catalog, mut request) = request_for("[English > Japanese, Korean] a menu").await;
        request.set_language_status("ja", Status::Translated).unwrap();
        let flair = request.flair(&catalog, &HashMap::new());
        assert_eq!(flair.code, "multiple");
        assert_eq!(flair.text, "Multiple Languages [JA✓, KO]");
        assert!(flair.template_id.is_none());
    }
}
