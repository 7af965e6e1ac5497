//! Flair derivation from a parse result
//!
//! The flair code keys into the platform's flair-template map; the text is
//! what readers see. Unsupported languages share a generic code but keep
//! their own display text.

use crate::catalog::Descriptor;
use crate::title::Direction;

/// Upper bound on the synthesized multi-language code list.
const CODE_LIST_LIMIT: usize = 64;

/// Preferred code of the "many languages at once" pseudo-descriptor.
const MULTIPLE_CODE: &str = "mul";

pub(crate) fn derive(
    source: &[Descriptor],
    target: &[Descriptor],
    direction: Direction,
) -> (Option<String>, Option<String>) {
    match direction {
        Direction::ToCanonical if !source.is_empty() => from_descriptor(&source[0]),
        Direction::FromCanonical | Direction::Neither if target.len() == 1 => {
            let descriptor = &target[0];
            if descriptor.preferred_code() == MULTIPLE_CODE {
                generic_multiple()
            } else {
                from_descriptor(descriptor)
            }
        }
        _ if target.len() > 1 => multiple_with_codes(target),
        _ if target.is_empty() && !source.is_empty() => from_descriptor(&source[0]),
        _ => (None, None),
    }
}

fn from_descriptor(descriptor: &Descriptor) -> (Option<String>, Option<String>) {
    let code = if descriptor.supported {
        descriptor.preferred_code()
    } else {
        "generic".to_string()
    };
    (Some(code), Some(descriptor.name.clone()))
}

fn generic_multiple() -> (Option<String>, Option<String>) {
    (
        Some("multiple".to_string()),
        Some("Multiple Languages".to_string()),
    )
}

/// "Multiple Languages [DE, FR, JA]" with the code list ellipsis-truncated
/// to its length bound.
fn multiple_with_codes(target: &[Descriptor]) -> (Option<String>, Option<String>) {
    let mut list = String::new();
    let mut truncated = false;
    for descriptor in target {
        let code = descriptor.preferred_code().to_uppercase();
        let addition = if list.is_empty() {
            code.len()
        } else {
            code.len() + 2
        };
        if list.len() + addition > CODE_LIST_LIMIT {
            truncated = true;
            break;
        }
        if !list.is_empty() {
            list.push_str(", ");
        }
        list.push_str(&code);
    }
    if truncated {
        list.push_str("...");
    }
    (
        Some("multiple".to_string()),
        Some(format!("Multiple Languages [{}]", list)),
    )
}
