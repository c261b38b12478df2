//! React component documentation extraction.
//!
//! Resolves the component a file defines (default export first, else the
//! first candidate in source order) and reports its display name, leading
//! `JSDoc` description, and declared props with types and defaults.
//!
//! Recognized component forms:
//! - classes extending `Component` / `PureComponent` (or defining `render`)
//! - capitalized function declarations and arrow/function expressions that
//!   render JSX, also when wrapped in `memo`/`forwardRef`-style calls
//! - any identifier that receives a `X.propTypes = …` assignment

mod components;
mod defaults;
mod helpers;
mod prop_types;

use std::path::Path;

use ast_grep_language::SupportLang;
use snap_core::{ComponentDoc, PropExtractor};

use crate::error::ParserError;
use crate::parser::{detect_language, parse_source};
use components::ModuleScan;
use helpers::{extract_jsdoc_before, has_syntax_error, string_value};

/// [`PropExtractor`] backed by the ast-grep JavaScript/TypeScript grammars.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocgenExtractor;

impl DocgenExtractor {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Read and extract the component defined in `path`.
    ///
    /// # Errors
    /// Returns `ParserError::Io` if the file cannot be read, or any error
    /// [`extract_component`] reports.
    pub fn extract_file(&self, path: &Path) -> Result<ComponentDoc, ParserError> {
        let source = std::fs::read_to_string(path)?;
        self.extract(&source, path)
    }
}

impl PropExtractor for DocgenExtractor {
    type Error = ParserError;

    fn extract(&self, source: &str, path: &Path) -> Result<ComponentDoc, Self::Error> {
        let path_text = path.to_string_lossy();
        let lang = detect_language(&path_text)
            .ok_or_else(|| ParserError::UnsupportedLanguage(path_text.to_string()))?;
        extract_component(source, lang)
    }
}

/// Extract the component documented in `source`.
///
/// # Errors
/// Returns `ParserError::ParseFailed` if the source has syntax errors and
/// `ParserError::NoComponent` if no component definition is found.
pub fn extract_component(source: &str, lang: SupportLang) -> Result<ComponentDoc, ParserError> {
    let tree = parse_source(source, lang);
    let root = tree.root();
    if has_syntax_error(&root) {
        return Err(ParserError::ParseFailed {
            language: format!("{lang:?}"),
            message: "source contains syntax errors".to_string(),
        });
    }

    let scan = ModuleScan::new(&root);
    let component = scan.resolve().ok_or(ParserError::NoComponent)?;

    let mut props = scan
        .static_value(component, "propTypes")
        .and_then(|value| scan.resolve_object(&value))
        .map(|object| prop_types::parse_prop_types(&object, &scan))
        .unwrap_or_default();
    defaults::apply_defaults(&mut props, component, &scan);

    let display_name = scan
        .static_value(component, "displayName")
        .and_then(|value| string_value(&value))
        .unwrap_or_else(|| component.name.clone());

    tracing::debug!(
        component = %display_name,
        props = props.len(),
        "extracted component"
    );

    Ok(ComponentDoc {
        display_name: (!display_name.is_empty()).then_some(display_name),
        description: extract_jsdoc_before(&component.anchor),
        props: (!props.is_empty()).then_some(props),
    })
}

#[cfg(test)]
mod tests;
