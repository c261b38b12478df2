//! Advisory diagnostics collected while building a render model.
//!
//! None of these stop generation. The builder records them in an injected
//! [`Diagnostics`] value; the caller decides how to surface them.

use std::fmt;
use std::path::PathBuf;

/// A non-fatal finding about one component file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The component declares no props.
    MissingProps { component: String, path: PathBuf },
    /// A prop has no type information; it is treated as `string`.
    MissingType {
        prop: String,
        component: String,
        path: PathBuf,
    },
    /// A prop has no declared default; a fake value was synthesized.
    MissingDefault {
        prop: String,
        component: String,
        path: PathBuf,
    },
}

impl Diagnostic {
    /// Name of the prop concerned, if the diagnostic is about one prop.
    #[must_use]
    pub fn prop(&self) -> Option<&str> {
        match self {
            Self::MissingProps { .. } => None,
            Self::MissingType { prop, .. } | Self::MissingDefault { prop, .. } => Some(prop),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingProps { component, path } => {
                write!(f, "no props found in {component} at {}", path.display())
            }
            Self::MissingType {
                prop,
                component,
                path,
            } => write!(
                f,
                "propType not set for {prop} in {component} at {}, consider setting it in propTypes",
                path.display()
            ),
            Self::MissingDefault {
                prop,
                component,
                path,
            } => write!(
                f,
                "defaultProps value not set for {prop} in {component} at {}, generated fake data instead",
                path.display()
            ),
        }
    }
}

/// Collector passed explicitly into the metadata builder.
#[derive(Debug, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    #[must_use]
    pub fn items(&self) -> &[Diagnostic] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Take every collected diagnostic, leaving the collector empty.
    pub fn drain(&mut self) -> std::vec::Drain<'_, Diagnostic> {
        self.items.drain(..)
    }
}
