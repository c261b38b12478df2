//! Synthesized values and their rendering as JSX attribute values.

use std::fmt::Write as _;

use serde::Serialize;

/// Placeholder markup used wherever a `node` is expected.
pub const NODE_SENTINEL: &str = "<div>Some node</div>";

/// Placeholder string used for `string` props.
pub const LOREM_IPSUM: &str = "lorem ipsum";

/// A fake value produced by the synthesizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FakeValue {
    Number(i64),
    /// Unquoted string content; quoted on output.
    Str(String),
    Bool(bool),
    EmptyArray,
    Node,
    /// No-op callable, `() => {}`.
    Noop,
    /// Bare identifier bound by a fixture import.
    Fixture(String),
    /// Nested object literal, fields in declaration order.
    Object(Vec<(String, Self)>),
    /// Fallback empty object, `{}`.
    Opaque,
}

impl FakeValue {
    /// JavaScript source text for this value.
    #[must_use]
    pub fn to_literal(&self) -> String {
        let mut out = String::new();
        self.write_literal(&mut out);
        out
    }

    fn write_literal(&self, out: &mut String) {
        match self {
            Self::Number(n) => {
                let _ = write!(out, "{n}");
            }
            Self::Str(s) => {
                out.push('"');
                out.push_str(s);
                out.push('"');
            }
            Self::Bool(b) => {
                let _ = write!(out, "{b}");
            }
            Self::EmptyArray => out.push_str("[]"),
            Self::Node => out.push_str(NODE_SENTINEL),
            Self::Noop => out.push_str("() => {}"),
            Self::Fixture(ident) => out.push_str(ident),
            Self::Object(fields) if fields.is_empty() => out.push_str("{}"),
            Self::Object(fields) => {
                out.push_str("{ ");
                for (i, (name, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    out.push_str(name);
                    out.push_str(": ");
                    value.write_literal(out);
                }
                out.push_str(" }");
            }
            Self::Opaque => out.push_str("{}"),
        }
    }
}

/// How a prop value is placed on the generated element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "text", rename_all = "snake_case")]
pub enum AttrValue {
    /// A complete double-quoted literal, emitted as `name="..."`.
    Quoted(String),
    /// Any other source text, emitted as `name={...}`.
    Expression(String),
}

impl AttrValue {
    /// The value text without the embedding braces.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Quoted(text) | Self::Expression(text) => text,
        }
    }

    /// Full attribute for `name`.
    #[must_use]
    pub fn attribute(&self, name: &str) -> String {
        match self {
            Self::Quoted(text) => format!("{name}={text}"),
            Self::Expression(text) => format!("{name}={{{text}}}"),
        }
    }
}
