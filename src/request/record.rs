//! Persisted flattened records and the versioned decode chain
//!
//! The persistence collaborator stores a request as a flat attribute map.
//! The current encoding is tagged `schema = "2"` and keeps composite
//! attributes as JSON strings; the prior generation was untagged and joined
//! composites with delimiters. Rehydration tries the current schema first,
//! then each legacy schema, and only fails once all are exhausted.
//!
//! The transient resolved-language descriptor is never persisted; only the
//! preferred code is, and rehydration re-resolves from it on demand.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::request::error::{RequestError, RequestResult};
use crate::request::status::Status;
use crate::request::{Request, RequestState};

/// A request flattened for storage: identity plus a flat attribute map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatRecord {
    pub id: String,
    pub created_utc: i64,
    pub attributes: BTreeMap<String, String>,
}

impl Request {
    /// Flatten into the current record encoding.
    pub fn flatten(&self) -> FlatRecord {
        let mut attributes = BTreeMap::new();
        attributes.insert("schema".to_string(), "2".to_string());
        attributes.insert("author".to_string(), self.author.clone());
        attributes.insert("language_code".to_string(), self.language_code.clone());

        match &self.state {
            RequestState::Single(status) => {
                attributes.insert("kind".to_string(), "single".to_string());
                attributes.insert("status".to_string(), status.as_str().to_string());
            }
            RequestState::Multiple(map) => {
                let by_name: BTreeMap<&String, &str> =
                    map.iter().map(|(code, status)| (code, status.as_str())).collect();
                attributes.insert("kind".to_string(), "multiple".to_string());
                attributes.insert("status".to_string(), to_json(&by_name));
            }
        }

        attributes.insert("history".to_string(), to_json(&self.history));
        attributes.insert("identified".to_string(), self.identified.to_string());
        attributes.insert("long".to_string(), self.long.to_string());
        if let Some(country) = &self.country {
            attributes.insert("country".to_string(), country.clone());
        }
        attributes.insert("status_times".to_string(), to_json(&self.status_times));
        attributes.insert("translators".to_string(), to_json(&self.translators));
        attributes.insert("notified".to_string(), to_json(&self.notified));

        FlatRecord {
            id: self.id.clone(),
            created_utc: self.created_utc,
            attributes,
        }
    }

    /// Rebuild a request from a persisted record, trying the current
    /// encoding first and falling back through the known legacy encodings.
    pub fn rehydrate(record: &FlatRecord) -> RequestResult<Request> {
        let current_error = match decode_current(record) {
            Ok(request) => return Ok(request),
            Err(error) => error,
        };
        match decode_legacy(record) {
            Ok(request) => {
                debug!(id = %record.id, "decoded request from legacy record encoding");
                Ok(request)
            }
            Err(legacy_error) => Err(RequestError::Decode(format!(
                "current: {}; legacy: {}",
                current_error, legacy_error
            ))),
        }
    }
}

// serde_json cannot fail on string-keyed maps and string/integer values.
fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

fn required(attributes: &BTreeMap<String, String>, key: &str) -> RequestResult<String> {
    attributes
        .get(key)
        .cloned()
        .ok_or_else(|| RequestError::Decode(format!("missing attribute '{}'", key)))
}

fn parse_status(text: &str) -> RequestResult<Status> {
    Status::parse(text)
        .ok_or_else(|| RequestError::Decode(format!("unknown status '{}'", text)))
}

fn decode_current(record: &FlatRecord) -> RequestResult<Request> {
    let attributes = &record.attributes;
    if attributes.get("schema").map(String::as_str) != Some("2") {
        return Err(RequestError::Decode("missing schema tag".to_string()));
    }

    let author = required(attributes, "author")?;
    let language_code = required(attributes, "language_code")?;
    let kind = required(attributes, "kind")?;
    let status_raw = required(attributes, "status")?;

    let state = match kind.as_str() {
        "single" => RequestState::Single(parse_status(&status_raw)?),
        "multiple" => {
            let by_name: BTreeMap<String, String> = serde_json::from_str(&status_raw)
                .map_err(|e| RequestError::Decode(format!("bad status map: {}", e)))?;
            let mut map = BTreeMap::new();
            for (code, status) in by_name {
                map.insert(code, parse_status(&status)?);
            }
            RequestState::Multiple(map)
        }
        other => {
            return Err(RequestError::Decode(format!("unknown kind '{}'", other)));
        }
    };

    Ok(Request {
        id: record.id.clone(),
        created_utc: record.created_utc,
        author,
        language_code,
        state,
        history: json_field(attributes, "history")?,
        identified: attributes.get("identified").map(String::as_str) == Some("true"),
        long: attributes.get("long").map(String::as_str) == Some("true"),
        country: attributes.get("country").cloned(),
        status_times: json_field(attributes, "status_times")?,
        translators: json_field(attributes, "translators")?,
        notified: json_field(attributes, "notified")?,
        language_cache: None,
    })
}

fn json_field<T: Default + for<'de> Deserialize<'de>>(
    attributes: &BTreeMap<String, String>,
    key: &str,
) -> RequestResult<T> {
    match attributes.get(key) {
        None => Ok(T::default()),
        Some(raw) => serde_json::from_str(raw)
            .map_err(|e| RequestError::Decode(format!("bad attribute '{}': {}", key, e))),
    }
}

/// The untagged first-generation encoding: `language`/`type`/`time_delta`
/// keys, delimiter-joined composites, `1`/`0` booleans.
fn decode_legacy(record: &FlatRecord) -> RequestResult<Request> {
    let attributes = &record.attributes;
    if attributes.contains_key("schema") {
        return Err(RequestError::Decode(
            "schema tag present, not a legacy record".to_string(),
        ));
    }

    let author = required(attributes, "author")?;
    let language_code = required(attributes, "language")?;
    let kind = required(attributes, "type")?;
    let status_raw = required(attributes, "status")?;

    let state = match kind.as_str() {
        "single" => RequestState::Single(parse_status(&status_raw)?),
        "multiple" => {
            let mut map = BTreeMap::new();
            for pair in status_raw.split(';').filter(|p| !p.is_empty()) {
                let (code, status) = pair.split_once(':').ok_or_else(|| {
                    RequestError::Decode(format!("bad status pair '{}'", pair))
                })?;
                map.insert(code.to_string(), parse_status(status)?);
            }
            if map.is_empty() {
                return Err(RequestError::Decode("empty status map".to_string()));
            }
            RequestState::Multiple(map)
        }
        other => {
            return Err(RequestError::Decode(format!("unknown type '{}'", other)));
        }
    };

    let mut status_times = BTreeMap::new();
    if let Some(raw) = attributes.get("time_delta") {
        for pair in raw.split(',').filter(|p| !p.is_empty()) {
            let (name, time) = pair.split_once('=').ok_or_else(|| {
                RequestError::Decode(format!("bad time pair '{}'", pair))
            })?;
            let time: i64 = time
                .parse()
                .map_err(|_| RequestError::Decode(format!("bad timestamp '{}'", time)))?;
            status_times.insert(name.to_string(), time);
        }
    }

    Ok(Request {
        id: record.id.clone(),
        created_utc: record.created_utc,
        author,
        language_code,
        state,
        history: comma_list(attributes.get("history")),
        identified: attributes.get("identified").map(String::as_str) == Some("1"),
        long: attributes.get("long").map(String::as_str) == Some("1"),
        country: attributes.get("country").cloned(),
        status_times,
        translators: comma_list(attributes.get("translators")),
        notified: comma_list(attributes.get("notified")),
        language_cache: None,
    })
}

fn comma_list(raw: Option<&String>) -> Vec<String> {
    raw.map(|joined| {
        joined
            .split(',')
            .filter(|item| !item.is_empty())
            .map(|item| item.to_string())
            .collect()
    })
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::request::PostMeta;
    use crate::title::TitleParser;

    async fn build(title: &str) -> Request {
        let catalog = Catalog::core();
        let parse = TitleParser::new(&catalog).parse(title, None).await;
        Request::from_parse(
            &catalog,
            &parse,
            PostMeta {
                id: "abc123".to_string(),
                created_utc: 1_700_000_000,
                author: "requester".to_string(),
            },
        )
    }

    #[tokio::test]
    async fn test_round_trip_single() {
        let mut request = build("[German > English] a letter").await;
        request.set_status(Status::InProgress).unwrap();
        request.record_status_time(Status::InProgress, 1_700_000_100);
        request.add_translator("alice");
        request.toggle_long();

        let flat = request.flatten();
        let rebuilt = Request::rehydrate(&flat).unwrap();
        assert_eq!(rebuilt.flatten(), flat);
    }

    #[tokio::test]
    async fn test_round_trip_multiple() {
        let mut request = build("[English > Japanese, Korean] a menu").await;
        request.set_language_status("ja", Status::Translated).unwrap();

        let flat = request.flatten();
        let rebuilt = Request::rehydrate(&flat).unwrap();
        assert_eq!(rebuilt.flatten(), flat);
        assert_eq!(rebuilt.language_status("ja"), Some(Status::Translated));
        assert_eq!(rebuilt.language_status("ko"), Some(Status::Untranslated));
    }

    #[test]
    fn test_legacy_record_decodes() {
        let mut attributes = BTreeMap::new();
        attributes.insert("author".to_string(), "requester".to_string());
        attributes.insert("language".to_string(), "de".to_string());
        attributes.insert("type".to_string(), "single".to_string());
        attributes.insert("status".to_string(), "in-progress".to_string());
        attributes.insert("history".to_string(), "unknown,fr".to_string());
        attributes.insert("identified".to_string(), "1".to_string());
        attributes.insert("time_delta".to_string(), "untranslated=100,in-progress=200".to_string());
        attributes.insert("translators".to_string(), "alice,bob".to_string());

        let record = FlatRecord {
            id: "old42".to_string(),
            created_utc: 1_600_000_000,
            attributes,
        };

        let request = Request::rehydrate(&record).unwrap();
        assert_eq!(request.language_code(), "de");
        assert_eq!(request.status(), Some(Status::InProgress));
        assert_eq!(request.history(), ["unknown", "fr"]);
        assert!(request.is_identified());
        assert_eq!(request.status_times()["in-progress"], 200);
        assert_eq!(request.translators(), ["alice", "bob"]);

        // Re-flattening writes the current encoding.
        let flat = request.flatten();
        assert_eq!(flat.attributes["schema"], "2");
        assert_eq!(Request::rehydrate(&flat).unwrap().flatten(), flat);
    }

    #[test]
    fn test_legacy_multiple_status_map() {
        let mut attributes = BTreeMap::new();
        attributes.insert("author".to_string(), "requester".to_string());
        attributes.insert("language".to_string(), "ja".to_string());
        attributes.insert("type".to_string(), "multiple".to_string());
        attributes.insert(
            "status".to_string(),
            "ja:translated;ko:untranslated".to_string(),
        );

        let record = FlatRecord {
            id: "old43".to_string(),
            created_utc: 1_600_000_000,
            attributes,
        };

        let request = Request::rehydrate(&record).unwrap();
        assert_eq!(request.language_status("ja"), Some(Status::Translated));
        assert_eq!(request.language_status("ko"), Some(Status::Untranslated));
    }

    #[test]
    fn test_exhausted_decode_chain_errors() {
        let record = FlatRecord {
            id: "broken".to_string(),
            created_utc: 0,
            attributes: BTreeMap::new(),
        };
        let error = Request::rehydrate(&record).unwrap_err();
        assert!(matches!(error, RequestError::Decode(_)));

        // A tagged record with garbage inside does not fall back to legacy.
        let mut attributes = BTreeMap::new();
        attributes.insert("schema".to_string(), "2".to_string());
        attributes.insert("author".to_string(), "requester".to_string());
        let record = FlatRecord {
            id: "broken2".to_string(),
            created_utc: 0,
            attributes,
        };
        assert!(matches!(
            Request::rehydrate(&record),
            Err(RequestError::Decode(_))
        ));
    }
}
