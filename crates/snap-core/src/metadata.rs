//! Per-component metadata builder.
//!
//! Turns one component's [`ComponentDoc`] into the [`ComponentRenderModel`] a
//! template consumes: ordered attributes, the children flag, and the fixture
//! imports those attributes need.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::descriptor::{ComponentDoc, PropDescriptor, PropKind, TypeInfo};
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::errors::CoreError;
use crate::extractor::PropExtractor;
use crate::fixtures::{FixtureCatalog, resolve_import};
use crate::literal::attr_value;
use crate::synth::synthesize;
use crate::value::AttrValue;

/// Prop name that is rendered as a child node instead of an attribute.
pub const CHILDREN_PROP: &str = "children";

/// One attribute of the generated element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderProp {
    pub name: String,
    /// Kind tag the value was placed under, e.g. `number`.
    pub prop_type: String,
    pub value: AttrValue,
    /// Source file the prop was declared in, relative to the scanned root.
    pub source_file: String,
}

impl RenderProp {
    /// `name="..."` or `name={...}`.
    #[must_use]
    pub fn attribute(&self) -> String {
        self.value.attribute(&self.name)
    }
}

/// Template-ready description of one component's generated test.
///
/// Built once per source file and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentRenderModel {
    component_name: String,
    file_name: String,
    source_path: PathBuf,
    relative_import_path: String,
    properties: Vec<RenderProp>,
    has_children: bool,
    fixture_imports: Vec<String>,
}

impl ComponentRenderModel {
    #[must_use]
    pub fn component_name(&self) -> &str {
        &self.component_name
    }

    /// File stem of the component source, e.g. `Button` for `Button.js`.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Import path of the component as seen from its sibling test file.
    #[must_use]
    pub fn relative_import_path(&self) -> &str {
        &self.relative_import_path
    }

    #[must_use]
    pub fn properties(&self) -> &[RenderProp] {
        &self.properties
    }

    #[must_use]
    pub const fn has_children(&self) -> bool {
        self.has_children
    }

    /// Fixture import statements in first-seen order, without duplicates.
    #[must_use]
    pub fn fixture_imports(&self) -> &[String] {
        &self.fixture_imports
    }
}

/// Reads component files through an extractor and builds render models.
#[derive(Debug)]
pub struct MetadataBuilder<E> {
    extractor: E,
    catalog: FixtureCatalog,
}

impl<E: PropExtractor> MetadataBuilder<E> {
    /// Builder using the builtin fixture catalog.
    pub fn new(extractor: E) -> Self {
        Self {
            extractor,
            catalog: FixtureCatalog::builtin(),
        }
    }

    #[must_use]
    pub fn with_catalog(mut self, catalog: FixtureCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub const fn catalog(&self) -> &FixtureCatalog {
        &self.catalog
    }

    /// Read `source_path`, extract its component, and build the render model.
    ///
    /// `relative_path` is the file's path below the scanned root; it is
    /// recorded on each prop.
    ///
    /// # Errors
    /// Returns [`CoreError::Io`] if the file cannot be read and
    /// [`CoreError::Parse`] if the extractor does not recognize a component.
    pub fn build(
        &self,
        source_path: &Path,
        relative_path: &Path,
        diagnostics: &mut Diagnostics,
    ) -> Result<ComponentRenderModel, CoreError> {
        let source = std::fs::read_to_string(source_path).map_err(|source| CoreError::Io {
            path: source_path.to_path_buf(),
            source,
        })?;
        let doc = self
            .extractor
            .extract(&source, source_path)
            .map_err(|e| CoreError::Parse {
                path: source_path.to_path_buf(),
                message: e.to_string(),
            })?;
        Ok(build_model(
            &doc,
            source_path,
            relative_path,
            &self.catalog,
            diagnostics,
        ))
    }
}

/// Build the render model for an already extracted component.
#[must_use]
pub fn build_model(
    doc: &ComponentDoc,
    source_path: &Path,
    relative_path: &Path,
    catalog: &FixtureCatalog,
    diagnostics: &mut Diagnostics,
) -> ComponentRenderModel {
    let file_name = file_stem(source_path);
    let component_name = doc
        .display_name
        .clone()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| file_name.clone());
    let source_file = relative_path.to_string_lossy().into_owned();

    let mut model = ComponentRenderModel {
        relative_import_path: format!("./{file_name}"),
        component_name,
        file_name,
        source_path: source_path.to_path_buf(),
        properties: Vec::new(),
        has_children: false,
        fixture_imports: Vec::new(),
    };

    let props = doc.props.as_deref().unwrap_or_default();
    if props.is_empty() {
        diagnostics.push(Diagnostic::MissingProps {
            component: model.component_name.clone(),
            path: source_path.to_path_buf(),
        });
        return model;
    }

    for prop in props {
        if prop.name == CHILDREN_PROP {
            model.has_children = true;
            continue;
        }

        let render_prop = resolve_prop(prop, &model, &source_file, catalog, diagnostics);
        model.properties.push(render_prop);

        if let Some(import) = resolve_import(prop.raw(), catalog)
            && !model.fixture_imports.contains(&import)
        {
            model.fixture_imports.push(import);
        }
    }

    model
}

fn resolve_prop(
    prop: &PropDescriptor,
    model: &ComponentRenderModel,
    source_file: &str,
    catalog: &FixtureCatalog,
    diagnostics: &mut Diagnostics,
) -> RenderProp {
    let kind = if let Some(kind) = prop.kind() {
        kind
    } else {
        diagnostics.push(Diagnostic::MissingType {
            prop: prop.name.clone(),
            component: model.component_name.clone(),
            path: model.source_path.clone(),
        });
        PropKind::String
    };

    let text = if let Some(default) = &prop.declared_default {
        default.clone()
    } else {
        diagnostics.push(Diagnostic::MissingDefault {
            prop: prop.name.clone(),
            component: model.component_name.clone(),
            path: model.source_path.clone(),
        });
        let literal = if prop.type_info.is_some() {
            synthesize(prop, catalog).to_literal()
        } else {
            let as_string = prop.clone().with_type(TypeInfo::of_kind(PropKind::String));
            synthesize(&as_string, catalog).to_literal()
        };
        tracing::debug!(prop = %prop.name, %literal, "synthesized fake value");
        literal
    };

    RenderProp {
        name: prop.name.clone(),
        prop_type: kind.to_string(),
        value: attr_value(kind, &text),
        source_file: source_file.to_string(),
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
