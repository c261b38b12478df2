//! # snap-core
//!
//! Core types and the value synthesis engine for snapgen.
//!
//! This crate provides the pieces every other snapgen crate builds on:
//! - Prop descriptors as produced by a component extractor
//! - The fake value synthesizer (ordered, first-match-wins rules)
//! - The closed domain fixture catalog and its import resolver
//! - The per-component metadata builder and render model
//! - An injected diagnostics collector for advisory warnings
//! - Cross-cutting error types

pub mod descriptor;
pub mod diagnostics;
pub mod errors;
pub mod extractor;
pub mod fixtures;
pub mod literal;
pub mod metadata;
pub mod synth;
pub mod value;

pub use descriptor::{ComponentDoc, PropDescriptor, PropKind, TypeInfo};
pub use diagnostics::{Diagnostic, Diagnostics};
pub use errors::CoreError;
pub use extractor::PropExtractor;
pub use fixtures::{DomainFixture, FixtureCatalog, resolve_import, strip_required};
pub use metadata::{ComponentRenderModel, MetadataBuilder, RenderProp, build_model};
pub use synth::synthesize;
pub use value::{AttrValue, FakeValue};
