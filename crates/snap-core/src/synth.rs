//! Fake value synthesis.
//!
//! [`synthesize`] walks an ordered rule list and returns the first match:
//!
//! 1. shape fields present → nested object, each field synthesized on its own
//! 2. primitive kind (`number`, `string`, `bool`, `array`, `node`, `func`)
//! 3. the prop's own name read as a primitive
//! 4. raw type expression, `.isRequired` stripped: bare `PropTypes.*` or
//!    `React.PropTypes.*`
//!    primitives, then the domain fixture catalog
//! 5. raw `node`, else the opaque `{}`
//!
//! Every rule is a separate function returning `Option<FakeValue>` so each one
//! can be exercised alone. The function is total and has no side effects.

use crate::descriptor::{PropDescriptor, PropKind};
use crate::fixtures::{FixtureCatalog, strip_required};
use crate::value::{FakeValue, LOREM_IPSUM};

/// Rule signature: a rule either claims the descriptor or passes.
type Rule = fn(&PropDescriptor, &FixtureCatalog) -> Option<FakeValue>;

const RULES: &[Rule] = &[
    shape_rule,
    kind_rule,
    name_rule,
    raw_primitive_rule,
    catalog_rule,
    raw_node_rule,
];

/// Produce a fake value for `prop`.
#[must_use]
pub fn synthesize(prop: &PropDescriptor, catalog: &FixtureCatalog) -> FakeValue {
    RULES
        .iter()
        .find_map(|rule| rule(prop, catalog))
        .unwrap_or(FakeValue::Opaque)
}

// ── rule 1: shape ──────────────────────────────────────────────────

pub(crate) fn shape_rule(prop: &PropDescriptor, catalog: &FixtureCatalog) -> Option<FakeValue> {
    let fields = prop.type_info.as_ref()?.shape.as_ref()?;
    Some(FakeValue::Object(
        fields
            .iter()
            .map(|field| (field.name.clone(), synthesize(field, catalog)))
            .collect(),
    ))
}

// ── rule 2: primitive kind ─────────────────────────────────────────

pub(crate) fn kind_rule(prop: &PropDescriptor, _: &FixtureCatalog) -> Option<FakeValue> {
    match prop.kind()? {
        PropKind::Number => Some(FakeValue::Number(42)),
        PropKind::String => Some(FakeValue::Str(LOREM_IPSUM.to_string())),
        PropKind::Bool => Some(FakeValue::Bool(true)),
        PropKind::Array => Some(FakeValue::EmptyArray),
        PropKind::Node => Some(FakeValue::Node),
        PropKind::Func => Some(FakeValue::Noop),
        _ => None,
    }
}

// ── rule 3: conventional name ──────────────────────────────────────

pub(crate) fn name_rule(prop: &PropDescriptor, _: &FixtureCatalog) -> Option<FakeValue> {
    primitive_by_tag(&prop.name)
}

// ── rule 4: raw type expression ────────────────────────────────────

pub(crate) fn raw_primitive_rule(prop: &PropDescriptor, _: &FixtureCatalog) -> Option<FakeValue> {
    let raw = strip_required(prop.raw()?);
    let tag = raw
        .strip_prefix("React.PropTypes.")
        .or_else(|| raw.strip_prefix("PropTypes."))?;
    match tag {
        "func" | "number" | "string" | "bool" | "array" => primitive_by_tag(tag),
        _ => None,
    }
}

pub(crate) fn catalog_rule(prop: &PropDescriptor, catalog: &FixtureCatalog) -> Option<FakeValue> {
    catalog
        .lookup(prop.raw()?)
        .map(|entry| FakeValue::Fixture(entry.identifier.clone()))
}

// ── rule 5: raw node ───────────────────────────────────────────────

pub(crate) fn raw_node_rule(prop: &PropDescriptor, _: &FixtureCatalog) -> Option<FakeValue> {
    (strip_required(prop.raw()?) == "node").then_some(FakeValue::Node)
}

fn primitive_by_tag(tag: &str) -> Option<FakeValue> {
    match tag {
        "number" => Some(FakeValue::Number(42)),
        "string" => Some(FakeValue::Str(LOREM_IPSUM.to_string())),
        "bool" => Some(FakeValue::Bool(true)),
        "array" => Some(FakeValue::EmptyArray),
        "node" => Some(FakeValue::Node),
        "func" => Some(FakeValue::Noop),
        _ => None,
    }
}
