//! Placement of prop values as JSX attributes.
//!
//! `string` props are emitted as bare quoted literals when their text is a
//! complete double-quoted string. Single quotes at either end are swapped for
//! double quotes first. Anything else, including a default that is typed
//! `string` but is really an expression, is embedded in braces.

use crate::descriptor::PropKind;
use crate::value::AttrValue;

/// Attribute value for `text` under the given prop kind.
#[must_use]
pub fn attr_value(kind: PropKind, text: &str) -> AttrValue {
    if kind == PropKind::String {
        string_attr(text)
    } else {
        AttrValue::Expression(text.to_string())
    }
}

/// Normalize a `string`-kind value and decide how to embed it.
///
/// Only the first and last characters are touched, so an escaped quote inside
/// the text survives verbatim (`'it\'s'` becomes `"it\'s"`).
#[must_use]
pub fn string_attr(text: &str) -> AttrValue {
    let mut normalized = String::with_capacity(text.len());
    let body = match text.strip_prefix('\'') {
        Some(rest) => {
            normalized.push('"');
            rest
        }
        None => text,
    };
    match body.strip_suffix('\'') {
        Some(rest) => {
            normalized.push_str(rest);
            normalized.push('"');
        }
        None => normalized.push_str(body),
    }

    if is_fully_quoted(&normalized) {
        AttrValue::Quoted(normalized)
    } else {
        AttrValue::Expression(normalized)
    }
}

fn is_fully_quoted(text: &str) -> bool {
    text.len() >= 2
        && text.starts_with('"')
        && text.ends_with('"')
        && !text.contains(['\n', '\r', '\u{2028}', '\u{2029}'])
}
