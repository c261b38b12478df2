//! `propTypes` object parsing.

use snap_core::{PropDescriptor, PropKind, TypeInfo};

use super::components::ModuleScan;
use super::helpers::{call_arguments, property_key, unwrap_parens};
use crate::parser::SyntaxNode;

const PROP_TYPES_NAMESPACES: &[&str] = &["PropTypes", "React.PropTypes"];

/// Parse the members of a `propTypes` object into descriptors, in source order.
pub(super) fn parse_prop_types<'r>(
    object: &SyntaxNode<'r>,
    scan: &ModuleScan<'r>,
) -> Vec<PropDescriptor> {
    let mut props = Vec::new();
    for member in object.children() {
        match member.kind().as_ref() {
            "pair" => {
                let Some(name) = member.field("key").and_then(|k| property_key(&k)) else {
                    continue;
                };
                let Some(value) = member.field("value") else {
                    continue;
                };
                props.push(parse_prop(name, &value, scan));
            }
            "shorthand_property_identifier" => {
                let name = member.text().to_string();
                props.push(
                    PropDescriptor::new(name.clone())
                        .with_type(TypeInfo::of_kind(PropKind::Custom).with_raw(name)),
                );
            }
            "spread_element" => {
                tracing::debug!(spread = %member.text(), "skipping spread in propTypes");
            }
            _ => {}
        }
    }
    props
}

fn parse_prop<'r>(name: String, value: &SyntaxNode<'r>, scan: &ModuleScan<'r>) -> PropDescriptor {
    let raw = value.text().to_string();
    let (expression, required) = strip_is_required(value);
    let type_info = classify(&expression, scan).with_raw(raw);
    let prop = PropDescriptor::new(name).with_type(type_info);
    if required { prop.required() } else { prop }
}

/// `X.isRequired` → (`X`, true).
fn strip_is_required<'r>(value: &SyntaxNode<'r>) -> (SyntaxNode<'r>, bool) {
    let value = unwrap_parens(value.clone());
    if value.kind().as_ref() == "member_expression"
        && value
            .field("property")
            .is_some_and(|p| p.text().as_ref() == "isRequired")
        && let Some(object) = value.field("object")
    {
        return (object, true);
    }
    (value, false)
}

fn classify<'r>(expression: &SyntaxNode<'r>, scan: &ModuleScan<'r>) -> TypeInfo {
    match expression.kind().as_ref() {
        "member_expression" => {
            let Some(tag) = prop_types_member(expression) else {
                return TypeInfo::of_kind(PropKind::Custom);
            };
            TypeInfo::of_kind(tag.parse().unwrap_or(PropKind::Custom))
        }
        "call_expression" => classify_call(expression, scan),
        _ => TypeInfo::of_kind(PropKind::Custom),
    }
}

fn classify_call<'r>(call: &SyntaxNode<'r>, scan: &ModuleScan<'r>) -> TypeInfo {
    let Some(tag) = call.field("function").and_then(|f| prop_types_member(&f)) else {
        return TypeInfo::of_kind(PropKind::Custom);
    };
    let kind = match tag.as_str() {
        "shape" => PropKind::Shape,
        "exact" => PropKind::Exact,
        "arrayOf" => PropKind::ArrayOf,
        "objectOf" => PropKind::ObjectOf,
        "oneOf" => PropKind::Enum,
        "oneOfType" => PropKind::Union,
        "instanceOf" => PropKind::InstanceOf,
        _ => return TypeInfo::of_kind(PropKind::Custom),
    };
    let info = TypeInfo::of_kind(kind);
    if !matches!(kind, PropKind::Shape | PropKind::Exact) {
        return info;
    }
    let fields = call_arguments(call)
        .first()
        .and_then(|argument| scan.resolve_object(argument))
        .map(|object| parse_prop_types(&object, scan));
    match fields {
        Some(fields) => info.with_shape(fields),
        None => info,
    }
}

/// `PropTypes.tag` or `React.PropTypes.tag` → `tag`.
fn prop_types_member(node: &SyntaxNode<'_>) -> Option<String> {
    if node.kind().as_ref() != "member_expression" {
        return None;
    }
    let object = node.field("object")?;
    if !PROP_TYPES_NAMESPACES.contains(&object.text().as_ref()) {
        return None;
    }
    Some(node.field("property")?.text().to_string())
}
