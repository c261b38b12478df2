//! `MetadataBuilder` against a stub extractor and real files.

use std::fs;
use std::path::Path;

use snap_core::{
    ComponentDoc, CoreError, Diagnostics, MetadataBuilder, PropDescriptor, PropExtractor, PropKind,
};

#[derive(Debug, thiserror::Error)]
#[error("No suitable component definition found.")]
struct NotAComponent;

/// Treats files containing `propTypes` as a component with one number prop.
struct StubExtractor;

impl PropExtractor for StubExtractor {
    type Error = NotAComponent;

    fn extract(&self, source: &str, _path: &Path) -> Result<ComponentDoc, Self::Error> {
        if !source.contains("propTypes") {
            return Err(NotAComponent);
        }
        Ok(ComponentDoc {
            display_name: Some("Gauge".into()),
            description: String::new(),
            props: Some(vec![
                PropDescriptor::new("value").with_kind(PropKind::Number),
            ]),
        })
    }
}

#[test]
fn builds_model_from_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("Gauge.js");
    fs::write(&path, "Gauge.propTypes = { value: PropTypes.number };").expect("write");

    let builder = MetadataBuilder::new(StubExtractor);
    let mut diagnostics = Diagnostics::new();
    let model = builder
        .build(&path, Path::new("Gauge.js"), &mut diagnostics)
        .expect("model");

    assert_eq!(model.component_name(), "Gauge");
    assert_eq!(model.properties().len(), 1);
    assert_eq!(model.properties()[0].attribute(), "value={42}");
    assert_eq!(model.source_path(), path.as_path());
}

#[test]
fn extractor_failure_is_a_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("utils.js");
    fs::write(&path, "export const add = (a, b) => a + b;").expect("write");

    let builder = MetadataBuilder::new(StubExtractor);
    let err = builder
        .build(&path, Path::new("utils.js"), &mut Diagnostics::new())
        .expect_err("not a component");

    assert!(matches!(err, CoreError::Parse { .. }));
    assert_eq!(err.path(), path.as_path());
    assert!(err.to_string().contains("No suitable component"));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("Missing.js");

    let builder = MetadataBuilder::new(&StubExtractor);
    let err = builder
        .build(&path, Path::new("Missing.js"), &mut Diagnostics::new())
        .expect_err("missing file");

    assert!(matches!(err, CoreError::Io { .. }));
}
