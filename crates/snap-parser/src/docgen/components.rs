//! Module scan and component resolution.
//!
//! One pass over the top-level statements records every component candidate,
//! every `X.prop = value` assignment, and every `const` binding. Resolution and
//! static property lookup then work from that scan alone.

use std::collections::HashMap;

use super::helpers::{
    call_arguments, has_jsx, is_component_name, is_static, property_key, unwrap_parens,
};
use crate::parser::SyntaxNode;

const COMPONENT_BASES: &[&str] = &[
    "Component",
    "PureComponent",
    "React.Component",
    "React.PureComponent",
];

/// Limit on `const a = b` chains followed while resolving an object.
const MAX_BINDING_DEPTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ComponentForm {
    Class,
    Function,
    /// Only known through a `X.propTypes = …` assignment.
    Assigned,
}

#[derive(Clone)]
pub(super) struct Candidate<'r> {
    /// Binding name; empty for an anonymous default export.
    pub name: String,
    /// Class or function node carrying the component body.
    pub node: SyntaxNode<'r>,
    /// Top-level statement a leading doc comment attaches to.
    pub anchor: SyntaxNode<'r>,
    pub form: ComponentForm,
}

struct Assignment<'r> {
    target: String,
    property: String,
    value: SyntaxNode<'r>,
}

/// What a default export points at.
enum DefaultTarget<'r> {
    Name(String),
    Inline(SyntaxNode<'r>, ComponentForm),
}

#[derive(Default)]
pub(super) struct ModuleScan<'r> {
    candidates: Vec<Candidate<'r>>,
    assignments: Vec<Assignment<'r>>,
    bindings: HashMap<String, SyntaxNode<'r>>,
    definitions: HashMap<String, (SyntaxNode<'r>, SyntaxNode<'r>)>,
    default_names: Vec<String>,
}

impl<'r> ModuleScan<'r> {
    /// Scan the top-level statements of `program`.
    pub(super) fn new(program: &SyntaxNode<'r>) -> Self {
        let mut scan = Self::default();
        for statement in program.children() {
            scan.visit_statement(&statement);
        }
        scan
    }

    /// The default-exported candidate, else the first one in source order.
    pub(super) fn resolve(&self) -> Option<&Candidate<'r>> {
        self.default_names
            .iter()
            .find_map(|name| self.candidates.iter().find(|c| c.name == *name))
            .or_else(|| self.candidates.first())
    }

    /// The value assigned to a static property of `component`.
    ///
    /// `X.prop = …` assignments win over class members; the last assignment
    /// in the file wins over earlier ones.
    pub(super) fn static_value(
        &self,
        component: &Candidate<'r>,
        property: &str,
    ) -> Option<SyntaxNode<'r>> {
        if !component.name.is_empty()
            && let Some(assignment) = self
                .assignments
                .iter()
                .rev()
                .find(|a| a.target == component.name && a.property == property)
        {
            return Some(assignment.value.clone());
        }
        if component.form == ComponentForm::Class {
            return class_static_member(&component.node, property);
        }
        None
    }

    /// Follow parentheses and `const` bindings down to an object literal.
    pub(super) fn resolve_object(&self, node: &SyntaxNode<'r>) -> Option<SyntaxNode<'r>> {
        self.resolve_object_at(node.clone(), 0)
    }

    fn resolve_object_at(&self, node: SyntaxNode<'r>, depth: usize) -> Option<SyntaxNode<'r>> {
        let node = unwrap_parens(node);
        match node.kind().as_ref() {
            "object" => Some(node),
            "identifier" if depth < MAX_BINDING_DEPTH => {
                let bound = self.bindings.get(node.text().as_ref())?;
                self.resolve_object_at(bound.clone(), depth + 1)
            }
            _ => None,
        }
    }

    // ── statements ─────────────────────────────────────────────────

    fn visit_statement(&mut self, statement: &SyntaxNode<'r>) {
        match statement.kind().as_ref() {
            "export_statement" => self.visit_export(statement),
            "expression_statement" => self.visit_expression_statement(statement),
            _ => {
                self.visit_declaration(statement, statement);
            }
        }
    }

    /// Record a declaration; returns the name it binds, if it is a class or function.
    fn visit_declaration(
        &mut self,
        declaration: &SyntaxNode<'r>,
        anchor: &SyntaxNode<'r>,
    ) -> Option<String> {
        match declaration.kind().as_ref() {
            "class_declaration" | "abstract_class_declaration" => {
                let name = declaration.field("name")?.text().to_string();
                self.define(&name, declaration, anchor);
                if is_react_class(declaration) {
                    self.push_candidate(&name, declaration, anchor, ComponentForm::Class);
                }
                Some(name)
            }
            "function_declaration" => {
                let name = declaration.field("name")?.text().to_string();
                self.define(&name, declaration, anchor);
                if is_component_name(&name) && has_jsx(declaration) {
                    self.push_candidate(&name, declaration, anchor, ComponentForm::Function);
                }
                Some(name)
            }
            "lexical_declaration" | "variable_declaration" => {
                for declarator in declaration.children() {
                    if declarator.kind().as_ref() == "variable_declarator" {
                        self.visit_declarator(&declarator, anchor);
                    }
                }
                None
            }
            _ => None,
        }
    }

    fn visit_declarator(&mut self, declarator: &SyntaxNode<'r>, anchor: &SyntaxNode<'r>) {
        let Some(name_node) = declarator.field("name") else {
            return;
        };
        if name_node.kind().as_ref() != "identifier" {
            return;
        }
        let name = name_node.text().to_string();
        let Some(value) = declarator.field("value") else {
            return;
        };
        self.bindings.insert(name.clone(), value.clone());

        if let Some((node, form)) = component_expression(&value) {
            self.define(&name, &node, anchor);
            if is_component_name(&name) {
                self.push_candidate(&name, &node, anchor, form);
            }
        }
    }

    fn visit_export(&mut self, export: &SyntaxNode<'r>) {
        let is_default = export.children().any(|c| c.kind().as_ref() == "default");

        if let Some(declaration) = export.field("declaration") {
            let name = self.visit_declaration(&declaration, export);
            if is_default {
                self.default_names.push(name.unwrap_or_default());
            }
            return;
        }

        if is_default && let Some(value) = export.field("value") {
            self.visit_default_value(&value, export);
        }
    }

    fn visit_default_value(&mut self, value: &SyntaxNode<'r>, anchor: &SyntaxNode<'r>) {
        match default_target(value) {
            Some(DefaultTarget::Name(name)) => self.default_names.push(name),
            Some(DefaultTarget::Inline(node, form)) => {
                self.push_candidate("", &node, anchor, form);
                self.default_names.push(String::new());
            }
            None => {}
        }
    }

    fn visit_expression_statement(&mut self, statement: &SyntaxNode<'r>) {
        let Some(expression) = statement
            .children()
            .find(|c| c.kind().as_ref() == "assignment_expression")
        else {
            return;
        };
        let (Some(left), Some(right)) = (expression.field("left"), expression.field("right"))
        else {
            return;
        };
        if left.kind().as_ref() != "member_expression" {
            return;
        }
        let (Some(object), Some(property)) = (left.field("object"), left.field("property")) else {
            return;
        };
        let target = object.text().to_string();
        let property = property.text().to_string();

        if target == "module" && property == "exports" {
            self.visit_default_value(&right, statement);
            return;
        }
        if object.kind().as_ref() != "identifier" {
            return;
        }

        if property == "propTypes" && !self.candidates.iter().any(|c| c.name == target) {
            let (node, anchor) = self
                .definitions
                .get(&target)
                .cloned()
                .unwrap_or_else(|| (statement.clone(), statement.clone()));
            self.push_candidate(&target, &node, &anchor, ComponentForm::Assigned);
        }
        self.assignments.push(Assignment {
            target,
            property,
            value: right,
        });
    }

    // ── bookkeeping ────────────────────────────────────────────────

    fn define(&mut self, name: &str, node: &SyntaxNode<'r>, anchor: &SyntaxNode<'r>) {
        self.definitions
            .entry(name.to_string())
            .or_insert_with(|| (node.clone(), anchor.clone()));
    }

    fn push_candidate(
        &mut self,
        name: &str,
        node: &SyntaxNode<'r>,
        anchor: &SyntaxNode<'r>,
        form: ComponentForm,
    ) {
        if !name.is_empty() && self.candidates.iter().any(|c| c.name == name) {
            return;
        }
        self.candidates.push(Candidate {
            name: name.to_string(),
            node: node.clone(),
            anchor: anchor.clone(),
            form,
        });
    }
}

// ── expressions ────────────────────────────────────────────────────

/// A component defined inline by an expression, seen through HOC calls.
fn component_expression<'r>(value: &SyntaxNode<'r>) -> Option<(SyntaxNode<'r>, ComponentForm)> {
    let value = unwrap_parens(value.clone());
    match value.kind().as_ref() {
        "arrow_function" | "function_expression" | "function" => {
            has_jsx(&value).then_some((value, ComponentForm::Function))
        }
        "class" => is_react_class(&value).then_some((value, ComponentForm::Class)),
        "call_expression" => call_arguments(&value)
            .iter()
            .find_map(component_expression),
        _ => None,
    }
}

fn default_target<'r>(value: &SyntaxNode<'r>) -> Option<DefaultTarget<'r>> {
    let value = unwrap_parens(value.clone());
    match value.kind().as_ref() {
        "identifier" => Some(DefaultTarget::Name(value.text().to_string())),
        "call_expression" => {
            // connect(mapState)(Counter), withRouter(Counter), memo(() => …)
            for argument in call_arguments(&value) {
                if let Some(target) = default_target(&argument) {
                    return Some(target);
                }
            }
            value.field("function").and_then(|callee| {
                (callee.kind().as_ref() == "call_expression")
                    .then(|| default_target(&callee))
                    .flatten()
            })
        }
        _ => component_expression(&value).map(|(node, form)| DefaultTarget::Inline(node, form)),
    }
}

fn is_react_class(class: &SyntaxNode<'_>) -> bool {
    let extends_component = class
        .children()
        .find(|c| c.kind().as_ref() == "class_heritage")
        .is_some_and(|heritage| {
            let text = heritage.text();
            let base = text.trim().trim_start_matches("extends").trim_start();
            let base = base
                .split(|c: char| c == '<' || c == '(' || c.is_whitespace())
                .next()
                .unwrap_or_default();
            COMPONENT_BASES.contains(&base)
        });
    extends_component || class_method(class, "render").is_some()
}

fn class_method<'r>(class: &SyntaxNode<'r>, name: &str) -> Option<SyntaxNode<'r>> {
    class.field("body")?.children().find(|member| {
        member.kind().as_ref() == "method_definition"
            && !is_static(member)
            && member
                .field("name")
                .is_some_and(|n| n.text().as_ref() == name)
    })
}

/// `static name = value`, or a `static get name()` returning an expression.
fn class_static_member<'r>(class: &SyntaxNode<'r>, property: &str) -> Option<SyntaxNode<'r>> {
    let body = class.field("body")?;
    for member in body.children() {
        if !is_static(&member) {
            continue;
        }
        match member.kind().as_ref() {
            "field_definition" | "public_field_definition" => {
                let key = member.field("property").or_else(|| member.field("name"));
                if key.and_then(|k| property_key(&k)).as_deref() == Some(property) {
                    return member.field("value");
                }
            }
            "method_definition" => {
                let is_getter = member.children().any(|c| c.kind().as_ref() == "get");
                let named = member
                    .field("name")
                    .is_some_and(|n| n.text().as_ref() == property);
                if is_getter && named {
                    return returned_expression(&member.field("body")?);
                }
            }
            _ => {}
        }
    }
    None
}

fn returned_expression<'r>(block: &SyntaxNode<'r>) -> Option<SyntaxNode<'r>> {
    block
        .children()
        .find(|c| c.kind().as_ref() == "return_statement")?
        .children()
        .find(|c| c.is_named() && c.kind().as_ref() != "comment")
        .map(unwrap_parens)
}
