//! Prop descriptors: the extractor's view of one component's declared props.
//!
//! The nullable layers of a descriptor (type present or not, shape present or
//! not, declared default present or not) are plain `Option`s so the
//! synthesizer can match on them directly.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Primitive type tag of a declared prop, as named by `prop-types`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropKind {
    Number,
    String,
    Bool,
    Array,
    Node,
    Func,
    Object,
    Shape,
    Exact,
    ArrayOf,
    ObjectOf,
    Enum,
    Union,
    InstanceOf,
    Element,
    ElementType,
    Symbol,
    Any,
    Custom,
}

impl PropKind {
    /// Stable tag used in render models and templates.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::String => "string",
            Self::Bool => "bool",
            Self::Array => "array",
            Self::Node => "node",
            Self::Func => "func",
            Self::Object => "object",
            Self::Shape => "shape",
            Self::Exact => "exact",
            Self::ArrayOf => "arrayOf",
            Self::ObjectOf => "objectOf",
            Self::Enum => "enum",
            Self::Union => "union",
            Self::InstanceOf => "instanceOf",
            Self::Element => "element",
            Self::ElementType => "elementType",
            Self::Symbol => "symbol",
            Self::Any => "any",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for PropKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "number" => Ok(Self::Number),
            "string" => Ok(Self::String),
            "bool" => Ok(Self::Bool),
            "array" => Ok(Self::Array),
            "node" => Ok(Self::Node),
            "func" => Ok(Self::Func),
            "object" => Ok(Self::Object),
            "shape" => Ok(Self::Shape),
            "exact" => Ok(Self::Exact),
            "arrayOf" => Ok(Self::ArrayOf),
            "objectOf" => Ok(Self::ObjectOf),
            "enum" => Ok(Self::Enum),
            "union" => Ok(Self::Union),
            "instanceOf" => Ok(Self::InstanceOf),
            "element" => Ok(Self::Element),
            "elementType" => Ok(Self::ElementType),
            "symbol" => Ok(Self::Symbol),
            "any" => Ok(Self::Any),
            "custom" => Ok(Self::Custom),
            other => Err(format!("unknown prop kind: {other}")),
        }
    }
}

/// Type information attached to a prop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeInfo {
    /// Resolved primitive tag, if the extractor recognized one.
    pub kind: Option<PropKind>,
    /// Original type expression text, e.g. `RomanPropTypes.Order.isRequired`.
    pub raw: Option<String>,
    /// Ordered fields of a shape/exact type.
    pub shape: Option<Vec<PropDescriptor>>,
}

impl TypeInfo {
    #[must_use]
    pub const fn of_kind(kind: PropKind) -> Self {
        Self {
            kind: Some(kind),
            raw: None,
            shape: None,
        }
    }

    #[must_use]
    pub fn with_raw(mut self, raw: impl Into<String>) -> Self {
        self.raw = Some(raw.into());
        self
    }

    #[must_use]
    pub fn with_shape(mut self, fields: Vec<PropDescriptor>) -> Self {
        self.shape = Some(fields);
        self
    }
}

/// One declared prop of a component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropDescriptor {
    pub name: String,
    pub type_info: Option<TypeInfo>,
    pub required: bool,
    /// Author-supplied default, as source text. Always wins over synthesis.
    pub declared_default: Option<String>,
}

impl PropDescriptor {
    /// An untyped, optional prop with no default.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_info: None,
            required: false,
            declared_default: None,
        }
    }

    #[must_use]
    pub fn with_type(mut self, type_info: TypeInfo) -> Self {
        self.type_info = Some(type_info);
        self
    }

    #[must_use]
    pub fn with_kind(self, kind: PropKind) -> Self {
        self.with_type(TypeInfo::of_kind(kind))
    }

    #[must_use]
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.declared_default = Some(value.into());
        self
    }

    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Primitive tag, when both type info and a tag are present.
    #[must_use]
    pub fn kind(&self) -> Option<PropKind> {
        self.type_info.as_ref().and_then(|t| t.kind)
    }

    /// Raw type expression, when present.
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        self.type_info.as_ref().and_then(|t| t.raw.as_deref())
    }
}

/// Everything an extractor reports about one component file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDoc {
    pub display_name: Option<String>,
    pub description: String,
    /// Declared props in source order; `None` when the component declares none.
    pub props: Option<Vec<PropDescriptor>>,
}
