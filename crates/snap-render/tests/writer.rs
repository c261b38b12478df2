//! `TestWriter` against real files and stub formatters.

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use snap_core::{ComponentDoc, Diagnostics, FixtureCatalog, PropDescriptor, PropKind, build_model};
use snap_render::{FormatError, Formatter, TemplateEngine, TestWriter};

struct Banner;

impl Formatter for Banner {
    fn format(&self, source: &str, _path: &Path) -> Result<String, FormatError> {
        Ok(format!("// formatted\n{source}"))
    }
}

struct Broken;

impl Formatter for Broken {
    fn format(&self, _source: &str, _path: &Path) -> Result<String, FormatError> {
        Err(FormatError::InvalidOutput {
            command: "broken".into(),
        })
    }
}

fn badge_doc() -> ComponentDoc {
    ComponentDoc {
        display_name: Some("Badge".into()),
        description: String::new(),
        props: Some(vec![PropDescriptor::new("count").with_kind(PropKind::Number)]),
    }
}

fn model_in(dir: &Path) -> snap_core::ComponentRenderModel {
    let source = dir.join("Badge.js");
    fs::write(&source, "// component").expect("write source");
    build_model(
        &badge_doc(),
        &source,
        Path::new("Badge.js"),
        &FixtureCatalog::builtin(),
        &mut Diagnostics::new(),
    )
}

#[test]
fn writes_sibling_test_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let model = model_in(dir.path());
    let writer = TestWriter::new(TemplateEngine::builtin().expect("builtin"));

    let outcome = writer.write(&model).expect("write");

    assert_eq!(outcome.path, dir.path().join("Badge.test.js"));
    assert!(!outcome.formatted);
    let written = fs::read_to_string(&outcome.path).expect("read");
    assert!(written.contains("        count={42}\n"), "{written}");
    assert!(written.ends_with("});\n"), "{written}");
}

#[test]
fn formatter_output_is_written() {
    let dir = tempfile::tempdir().expect("tempdir");
    let model = model_in(dir.path());
    let writer = TestWriter::new(TemplateEngine::builtin().expect("builtin")).with_formatter(Banner);

    let outcome = writer.write(&model).expect("write");

    assert!(outcome.formatted);
    let written = fs::read_to_string(&outcome.path).expect("read");
    assert!(written.starts_with("// formatted\nimport React"), "{written}");
}

#[test]
fn formatter_failure_falls_back_to_unformatted_text() {
    let dir = tempfile::tempdir().expect("tempdir");
    let model = model_in(dir.path());
    let plain = TemplateEngine::builtin()
        .expect("builtin")
        .render(&model)
        .expect("render");
    let writer = TestWriter::new(TemplateEngine::builtin().expect("builtin")).with_formatter(Broken);

    let outcome = writer.write(&model).expect("write");

    assert!(!outcome.formatted);
    assert_eq!(fs::read_to_string(&outcome.path).expect("read"), plain);
}

#[test]
fn custom_template_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let template = dir.path().join("custom.tera");
    fs::write(&template, "test('{{ component_name }}', () => {});\n").expect("write template");
    let model = model_in(dir.path());

    let writer = TestWriter::new(TemplateEngine::from_file(&template).expect("load"));
    let outcome = writer.write(&model).expect("write");

    assert_eq!(
        fs::read_to_string(&outcome.path).expect("read"),
        "test('Badge', () => {});\n"
    );
}

#[test]
fn missing_template_file_is_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = TemplateEngine::from_file(&dir.path().join("nope.tera")).expect_err("missing");
    assert!(matches!(err, snap_render::RenderError::Io { .. }));
}
