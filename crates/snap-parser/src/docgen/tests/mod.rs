use std::path::Path;

use ast_grep_language::SupportLang;
use snap_core::{ComponentDoc, PropDescriptor, PropExtractor, PropKind};

use super::*;

mod function_components;

fn extract_js(source: &str) -> ComponentDoc {
    extract_component(source, SupportLang::JavaScript).expect("extraction should succeed")
}

fn props(doc: &ComponentDoc) -> &[PropDescriptor] {
    doc.props.as_deref().unwrap_or_default()
}

fn find_prop<'a>(doc: &'a ComponentDoc, name: &str) -> &'a PropDescriptor {
    props(doc)
        .iter()
        .find(|p| p.name == name)
        .unwrap_or_else(|| panic!("should find prop named '{name}'"))
}

fn prop_names(doc: &ComponentDoc) -> Vec<&str> {
    props(doc).iter().map(|p| p.name.as_str()).collect()
}
