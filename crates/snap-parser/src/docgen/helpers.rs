use crate::parser::SyntaxNode;

const CREATE_ELEMENT_CALLEES: &[&str] = &["React.createElement", "createElement"];

// ── tree shape ─────────────────────────────────────────────────────

pub(super) fn has_syntax_error(node: &SyntaxNode<'_>) -> bool {
    node.kind().as_ref() == "ERROR" || node.children().any(|child| has_syntax_error(&child))
}

/// Returns `true` if the subtree renders anything: JSX or a `createElement` call.
pub(super) fn has_jsx(node: &SyntaxNode<'_>) -> bool {
    match node.kind().as_ref() {
        "jsx_element" | "jsx_self_closing_element" | "jsx_fragment" => return true,
        "call_expression" => {
            if let Some(callee) = node.field("function")
                && CREATE_ELEMENT_CALLEES.contains(&callee.text().as_ref())
            {
                return true;
            }
        }
        _ => {}
    }
    node.children().any(|child| has_jsx(&child))
}

pub(super) fn is_static(member: &SyntaxNode<'_>) -> bool {
    member.children().any(|c| c.kind().as_ref() == "static")
}

/// Strip any number of wrapping parentheses.
pub(super) fn unwrap_parens<'r>(node: SyntaxNode<'r>) -> SyntaxNode<'r> {
    let mut current = node;
    while current.kind().as_ref() == "parenthesized_expression" {
        let Some(inner) = current
            .children()
            .find(|c| c.is_named() && c.kind().as_ref() != "comment")
        else {
            break;
        };
        current = inner;
    }
    current
}

/// Named, non-comment arguments of a call expression.
pub(super) fn call_arguments<'r>(call: &SyntaxNode<'r>) -> Vec<SyntaxNode<'r>> {
    call.field("arguments")
        .map(|args| {
            args.children()
                .filter(|c| c.is_named() && c.kind().as_ref() != "comment")
                .collect()
        })
        .unwrap_or_default()
}

// ── names and literals ─────────────────────────────────────────────

/// React treats a capitalized binding as a component.
pub(super) fn is_component_name(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

/// The textual key of an object member or class field name.
pub(super) fn property_key(key: &SyntaxNode<'_>) -> Option<String> {
    match key.kind().as_ref() {
        "property_identifier"
        | "identifier"
        | "shorthand_property_identifier"
        | "shorthand_property_identifier_pattern"
        | "private_property_identifier"
        | "number" => Some(key.text().to_string()),
        "string" => string_value(key),
        _ => None,
    }
}

/// Contents of a string literal without its quotes.
pub(super) fn string_value(node: &SyntaxNode<'_>) -> Option<String> {
    if node.kind().as_ref() != "string" {
        return None;
    }
    let text = node.text();
    let inner = text.get(1..text.len().saturating_sub(1))?;
    Some(inner.to_string())
}

// ── JSDoc extraction ───────────────────────────────────────────────

pub(super) fn extract_jsdoc_before(anchor: &SyntaxNode<'_>) -> String {
    if let Some(prev) = anchor.prev()
        && prev.kind().as_ref() == "comment"
    {
        let text = prev.text().to_string();
        if text.starts_with("/**") {
            return parse_jsdoc_text(&text);
        }
    }
    String::new()
}

fn parse_jsdoc_text(text: &str) -> String {
    let text = text.trim_start_matches("/**").trim_end_matches("*/").trim();
    text.lines()
        .map(|line| {
            let trimmed = line.trim();
            let stripped = trimmed.trim_start_matches('*');
            stripped.strip_prefix(' ').unwrap_or(stripped)
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
