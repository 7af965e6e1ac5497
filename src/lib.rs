//! Moderation core for a language-translation-request community
//!
//! Three pieces work together:
//!
//! 1. **Catalog & Resolver** ([`catalog`]) - every recognized language and
//!    script, loaded once at startup, with staged resolution of free text
//!    to a descriptor.
//! 2. **Title Parser** ([`title`]) - raw post titles to structured parse
//!    results: languages, direction, flair.
//! 3. **Request State Machine** ([`request`]) - the lifecycle of one post,
//!    mutated by many independent callers under strict transition rules.
//!
//! The [`classify`] module is the seam to the external AI-classification
//! service the parser falls back to for titles that name no language.
//!
//! # Example
//!
//! ```ignore
//! use babelmod::{Catalog, PostMeta, Request, TitleParser};
//!
//! #[tokio::main]
//! async fn main() {
//!     let catalog = Catalog::core();
//!     let parser = TitleParser::new(&catalog);
//!     let parse = parser.parse("[German > English] Grandma's letter", None).await;
//!     let request = Request::from_parse(&catalog, &parse, PostMeta {
//!         id: "abc123".to_string(),
//!         created_utc: 1_700_000_000,
//!         author: "requester".to_string(),
//!     });
//!     assert_eq!(request.language_code(), "de");
//! }
//! ```

pub mod catalog;
pub mod classify;
pub mod request;
pub mod title;

pub use catalog::{Catalog, Descriptor};
pub use classify::{
    Classification, ClassifyError, MockClassifier, RemoteClassifier, TitleClassifier,
};
pub use request::{
    FlatRecord, PostMeta, Request, RequestError, RequestFlair, RequestResult, RequestState,
    Status,
};
pub use title::{Direction, ParseResult, TitleParser};
