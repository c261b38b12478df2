//! Tera-backed test file templates.

use std::path::Path;

use serde::Serialize;
use snap_core::{ComponentRenderModel, RenderProp};
use tera::{Context, Tera};

use crate::error::RenderError;

/// Name the builtin template is registered under.
pub const BUILTIN_TEMPLATE_NAME: &str = "index.test.js";

const BUILTIN_TEMPLATE: &str = include_str!("../templates/index.test.js.tera");

/// One compiled template.
#[derive(Debug)]
pub struct TemplateEngine {
    tera: Tera,
    name: String,
}

impl TemplateEngine {
    /// The embedded enzyme snapshot template.
    ///
    /// # Errors
    /// Returns `RenderError::Template` if the embedded template fails to compile.
    pub fn builtin() -> Result<Self, RenderError> {
        Self::from_source(BUILTIN_TEMPLATE_NAME, BUILTIN_TEMPLATE)
    }

    /// Load a user template from disk.
    ///
    /// # Errors
    /// Returns `RenderError::Io` if the file cannot be read and
    /// `RenderError::Template` if it does not compile.
    pub fn from_file(path: &Path) -> Result<Self, RenderError> {
        let source = std::fs::read_to_string(path).map_err(|source| RenderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_source(&path.to_string_lossy(), &source)
    }

    /// Compile template text registered under `name`. Output is never escaped.
    ///
    /// # Errors
    /// Returns `RenderError::Template` if the text does not compile.
    pub fn from_source(name: &str, source: &str) -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_raw_template(name, source)?;
        Ok(Self {
            tera,
            name: name.to_string(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render the test file text for one component.
    ///
    /// # Errors
    /// Returns `RenderError::Template` if rendering fails, e.g. when a custom
    /// template references an unknown variable.
    pub fn render(&self, model: &ComponentRenderModel) -> Result<String, RenderError> {
        let context = Context::from_serialize(TemplateView::new(model))?;
        Ok(self.tera.render(&self.name, &context)?)
    }
}

/// Variables visible to templates.
#[derive(Serialize)]
struct TemplateView<'a> {
    component_name: &'a str,
    file_name: &'a str,
    relative_import_path: &'a str,
    fixture_imports: &'a [String],
    has_children: bool,
    properties: Vec<PropView<'a>>,
}

#[derive(Serialize)]
struct PropView<'a> {
    name: &'a str,
    prop_type: &'a str,
    value: &'a str,
    attribute: String,
    source_file: &'a str,
}

impl<'a> TemplateView<'a> {
    fn new(model: &'a ComponentRenderModel) -> Self {
        Self {
            component_name: model.component_name(),
            file_name: model.file_name(),
            relative_import_path: model.relative_import_path(),
            fixture_imports: model.fixture_imports(),
            has_children: model.has_children(),
            properties: model.properties().iter().map(PropView::new).collect(),
        }
    }
}

impl<'a> PropView<'a> {
    fn new(prop: &'a RenderProp) -> Self {
        Self {
            name: &prop.name,
            prop_type: &prop.prop_type,
            value: prop.value.text(),
            attribute: prop.attribute(),
            source_file: &prop.source_file,
        }
    }
}
