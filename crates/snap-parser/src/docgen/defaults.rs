//! Declared defaults: `defaultProps` and destructured parameter defaults.

use snap_core::PropDescriptor;

use super::components::{Candidate, ComponentForm, ModuleScan};
use super::helpers::{property_key, unwrap_parens};
use crate::parser::SyntaxNode;

/// Attach declared defaults to `props`.
///
/// Parameter defaults are read first and `defaultProps` entries override
/// them. A default for a prop missing from `propTypes` appends an untyped prop.
pub(super) fn apply_defaults<'r>(
    props: &mut Vec<PropDescriptor>,
    component: &Candidate<'r>,
    scan: &ModuleScan<'r>,
) {
    let mut defaults = Vec::new();
    if component.form != ComponentForm::Class {
        defaults.extend(parameter_defaults(&component.node));
    }
    if let Some(object) = scan
        .static_value(component, "defaultProps")
        .and_then(|value| scan.resolve_object(&value))
    {
        defaults.extend(object_defaults(&object));
    }

    for (name, value) in defaults {
        match props.iter_mut().find(|p| p.name == name) {
            Some(prop) => prop.declared_default = Some(value),
            None => props.push(PropDescriptor::new(name).with_default(value)),
        }
    }
}

fn object_defaults(object: &SyntaxNode<'_>) -> Vec<(String, String)> {
    object
        .children()
        .filter(|member| member.kind().as_ref() == "pair")
        .filter_map(|pair| {
            let name = property_key(&pair.field("key")?)?;
            let value = pair.field("value")?.text().to_string();
            Some((name, value))
        })
        .collect()
}

/// `function X({ a = 1, b: renamed = 'x' })` → `[("a", "1"), ("b", "'x'")]`.
fn parameter_defaults(function: &SyntaxNode<'_>) -> Vec<(String, String)> {
    let Some(pattern) = first_parameter(function).and_then(|p| object_pattern(&p)) else {
        return Vec::new();
    };
    let mut defaults = Vec::new();
    for member in pattern.children() {
        match member.kind().as_ref() {
            "object_assignment_pattern" => {
                let (Some(left), Some(right)) = (member.field("left"), member.field("right"))
                else {
                    continue;
                };
                if let Some(name) = property_key(&left) {
                    defaults.push((name, right.text().to_string()));
                }
            }
            "pair_pattern" => {
                let (Some(key), Some(value)) = (member.field("key"), member.field("value")) else {
                    continue;
                };
                if value.kind().as_ref() != "assignment_pattern" {
                    continue;
                }
                if let (Some(name), Some(right)) = (property_key(&key), value.field("right")) {
                    defaults.push((name, right.text().to_string()));
                }
            }
            _ => {}
        }
    }
    defaults
}

fn first_parameter<'r>(function: &SyntaxNode<'r>) -> Option<SyntaxNode<'r>> {
    if let Some(single) = function.field("parameter") {
        return Some(single);
    }
    function
        .field("parameters")?
        .children()
        .find(|c| c.is_named() && c.kind().as_ref() != "comment")
}

/// Unwrap `({ … } = {})` and TS parameter wrappers down to the object pattern.
fn object_pattern<'r>(parameter: &SyntaxNode<'r>) -> Option<SyntaxNode<'r>> {
    let parameter = unwrap_parens(parameter.clone());
    match parameter.kind().as_ref() {
        "object_pattern" => Some(parameter),
        "assignment_pattern" => object_pattern(&parameter.field("left")?),
        "required_parameter" | "optional_parameter" => object_pattern(&parameter.field("pattern")?),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use ast_grep_language::SupportLang;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::parser::parse_source;

    fn defaults_of(source: &str, lang: SupportLang) -> Vec<(String, String)> {
        let tree = parse_source(source, lang);
        let root = tree.root();
        let scan = ModuleScan::new(&root);
        let component = scan.resolve().expect("candidate");
        parameter_defaults(&component.node)
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(a, b)| ((*a).to_string(), (*b).to_string()))
            .collect()
    }

    #[test]
    fn shorthand_and_renamed_defaults() {
        let source = "function Tag({ label = 'new', size: s = 2, color }) { return <i />; }";
        assert_eq!(
            defaults_of(source, SupportLang::JavaScript),
            pairs(&[("label", "'new'"), ("size", "2")])
        );
    }

    #[test]
    fn arrow_with_whole_pattern_default() {
        let source = "const Tag = ({ open = false } = {}) => <i />;";
        assert_eq!(
            defaults_of(source, SupportLang::JavaScript),
            pairs(&[("open", "false")])
        );
    }

    #[test]
    fn typescript_parameter_pattern() {
        let source = "const Tag = ({ count = 3 }: Props) => <i />;";
        assert_eq!(defaults_of(source, SupportLang::Tsx), pairs(&[("count", "3")]));
    }

    #[test]
    fn props_identifier_has_no_defaults() {
        let source = "function Tag(props) { return <i />; }";
        assert!(defaults_of(source, SupportLang::JavaScript).is_empty());
    }
}
