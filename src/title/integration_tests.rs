//! End-to-end title parsing scenarios
//!
//! These exercise the full pipeline: pre-clean, chunk extraction and
//! resolution, direction classification, notification derivation, the
//! classifier fallback, and flair derivation.

use crate::catalog::Catalog;
use crate::classify::MockClassifier;
use crate::title::{Direction, TitleParser};

#[tokio::test]
async fn test_plain_request_into_canonical() {
    let catalog = Catalog::core();
    let parser = TitleParser::new(&catalog);
    let result = parser
        .parse("[German > English] Need help with a letter", None)
        .await;

    assert_eq!(result.source.len(), 1);
    assert_eq!(result.source[0].name, "German");
    assert_eq!(result.target.len(), 1);
    assert_eq!(result.target[0].name, "English");
    assert_eq!(result.direction, Direction::ToCanonical);
    assert_eq!(result.flair_code.as_deref(), Some("de"));
    assert_eq!(result.flair_text.as_deref(), Some("German"));
    let notify: Vec<String> = result.notify.iter().map(|d| d.preferred_code()).collect();
    assert_eq!(notify, ["de"]);
    assert!(!result.ai_assessed);
}

#[tokio::test]
async fn test_synthesized_bracket_between_third_languages() {
    let catalog = Catalog::core();
    let parser = TitleParser::new(&catalog);
    let result = parser.parse("Korean to Spanish - menu", None).await;

    assert_eq!(result.source[0].name, "Korean");
    assert_eq!(result.target[0].name, "Spanish");
    assert_eq!(result.direction, Direction::Neither);
    assert!(result.cleaned_title.starts_with("[Korean > Spanish]"));
    assert_eq!(result.flair_code.as_deref(), Some("es"));
}

#[tokio::test]
async fn test_direction_boundaries() {
    let catalog = Catalog::core();
    let parser = TitleParser::new(&catalog);

    let into = parser.parse("[Japanese > English] sign", None).await;
    assert_eq!(into.direction, Direction::ToCanonical);

    let out_of = parser.parse("[English > Japanese] tattoo idea", None).await;
    assert_eq!(out_of.direction, Direction::FromCanonical);
}

#[tokio::test]
async fn test_multiple_targets() {
    let catalog = Catalog::core();
    let parser = TitleParser::new(&catalog);
    let result = parser
        .parse("[English > Japanese, Korean, French] product label", None)
        .await;

    assert_eq!(result.direction, Direction::FromCanonical);
    let targets: Vec<String> = result.target.iter().map(|d| d.preferred_code()).collect();
    assert_eq!(targets, ["ja", "ko", "fr"]);
    assert_eq!(result.flair_code.as_deref(), Some("multiple"));
    assert_eq!(
        result.flair_text.as_deref(),
        Some("Multiple Languages [JA, KO, FR]")
    );
    // Nobody is notified about the canonical side.
    let notify: Vec<String> = result.notify.iter().map(|d| d.preferred_code()).collect();
    assert_eq!(notify, ["ja", "ko", "fr"]);
}

#[tokio::test]
async fn test_compound_code_carries_country() {
    let catalog = Catalog::core();
    let parser = TitleParser::new(&catalog);
    let result = parser.parse("[zh-CN > English] shop receipt", None).await;

    assert_eq!(result.source[0].preferred_code(), "zh");
    assert_eq!(result.country.as_deref(), Some("China"));
    assert!(result.source[0].name.ends_with("{China}"));
}

#[tokio::test]
async fn test_incidental_canonical_mention_dropped() {
    let catalog = Catalog::core();
    let parser = TitleParser::new(&catalog);
    // Canonical on both sides plus enough distinct languages: the fuller
    // side loses its canonical entry instead of reporting "both".
    let result = parser
        .parse("[English > English, Middle English, German] old verse", None)
        .await;

    assert_ne!(result.direction, Direction::Both);
    let targets: Vec<String> = result.target.iter().map(|d| d.preferred_code()).collect();
    assert!(!targets.contains(&"en".to_string()));
}

#[tokio::test]
async fn test_true_both_direction_has_no_notify_targets() {
    let catalog = Catalog::core();
    let parser = TitleParser::new(&catalog);
    let result = parser.parse("[English > English] proofread my essay", None).await;

    assert_eq!(result.direction, Direction::Both);
    assert!(result.notify.is_empty());
}

#[tokio::test]
async fn test_classifier_fallback_overrides_empty_parse() {
    let catalog = Catalog::core();
    let mock = MockClassifier::answering("ja", "en", 0.92);
    let parser = TitleParser::new(&catalog).with_classifier(&mock);
    let result = parser
        .parse("what does my grandmother's vase say?", Some("https://img.example/vase.jpg"))
        .await;

    assert!(result.ai_assessed);
    assert_eq!(result.source[0].preferred_code(), "ja");
    assert_eq!(result.direction, Direction::ToCanonical);
    let notify: Vec<String> = result.notify.iter().map(|d| d.preferred_code()).collect();
    assert_eq!(notify, ["ja"]);
}

#[tokio::test]
async fn test_low_confidence_classifier_is_ignored() {
    let catalog = Catalog::core();
    let mock = MockClassifier::answering("ja", "en", 0.4);
    let parser = TitleParser::new(&catalog).with_classifier(&mock);
    let result = parser.parse("what does this say?", None).await;

    assert!(!result.ai_assessed);
    assert!(result.is_empty());
}

#[tokio::test]
async fn test_classifier_failure_degrades_silently() {
    let catalog = Catalog::core();
    let mock = MockClassifier::failing("service down");
    let parser = TitleParser::new(&catalog).with_classifier(&mock);
    let result = parser.parse("what does this say?", None).await;

    assert!(!result.ai_assessed);
    assert!(result.is_empty());
}

#[tokio::test]
async fn test_unresolvable_placeholder_yields_sentinel() {
    let catalog = Catalog::core();
    let parser = TitleParser::new(&catalog);
    let result = parser.parse("[??] not sure what this is", None).await;

    assert!(result.is_empty());
    assert_eq!(result.direction, Direction::Neither);
    assert!(result.flair_code.is_none());
}

#[tokio::test]
async fn test_parse_never_panics_on_junk() {
    let catalog = Catalog::core();
    let parser = TitleParser::new(&catalog);
    for junk in ["", "    ", ">>>", "[", "]", "[]", "to to to", "日本語のタイトル"] {
        let _ = parser.parse(junk, None).await;
    }
}
