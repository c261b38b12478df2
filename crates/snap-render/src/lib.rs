//! # snap-render
//!
//! Turns a [`snap_core::ComponentRenderModel`] into a snapshot test file:
//! tera template rendering, an optional external formatter pass, and the
//! write to `<stem>.test.<ext>` beside the component.

pub mod error;
pub mod format;
pub mod template;
pub mod writer;

pub use error::{FormatError, RenderError};
pub use format::{CommandFormatter, Formatter, PATH_PLACEHOLDER};
pub use template::{BUILTIN_TEMPLATE_NAME, TemplateEngine};
pub use writer::{TestWriter, WriteOutcome, test_path_for};
