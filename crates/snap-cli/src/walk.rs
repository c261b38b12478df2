//! Component file discovery.
//!
//! Uses the `ignore` crate for gitignore-aware walking with support for a
//! custom `.snapgenignore` file. `node_modules` is always skipped, and existing
//! tests are skipped when requested so generated files never feed back in.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

/// Per-directory ignore file honored in addition to `.gitignore`.
pub const IGNORE_FILENAME: &str = ".snapgenignore";

const ALWAYS_SKIPPED_DIRS: &[&str] = &["node_modules"];

/// Build a walker over `root`.
pub fn build_walker(root: &Path, skip_tests: bool) -> ignore::Walk {
    let mut builder = WalkBuilder::new(root);
    builder.require_git(false);
    builder.add_custom_ignore_filename(IGNORE_FILENAME);

    builder.filter_entry(move |entry| {
        if entry.depth() == 0 {
            return true;
        }
        let file_name = entry.file_name().to_string_lossy();
        if entry.file_type().is_some_and(|ft| ft.is_dir()) {
            !ALWAYS_SKIPPED_DIRS.contains(&file_name.as_ref())
                && !(skip_tests && snap_parser::is_test_dir(&file_name))
        } else {
            !(skip_tests && snap_parser::is_test_file(&file_name))
        }
    });

    builder.build()
}

/// Every component source below `root` with one of `extensions`, sorted.
pub fn collect_components(root: &Path, extensions: &[String], skip_tests: bool) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = build_walker(root, skip_tests)
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(error) => {
                tracing::warn!(%error, "skipping unreadable path");
                None
            }
        })
        .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
        .map(ignore::DirEntry::into_path)
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| extensions.iter().any(|wanted| wanted == ext))
        })
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    fn create_fixture(dir: &Path) {
        let dirs = [
            "src/components",
            "src/components/__tests__",
            "node_modules/react",
            "build",
            "vendor",
        ];
        for d in &dirs {
            fs::create_dir_all(dir.join(d)).expect("mkdir should succeed");
        }

        let files = [
            ("src/components/Button.js", "export default () => <button />;"),
            ("src/components/Button.test.js", "it('works', () => {});"),
            ("src/components/Card.jsx", "export default () => <div />;"),
            ("src/components/__tests__/Card.js", "it('works', () => {});"),
            ("src/components/styles.css", ".a {}"),
            ("src/App.js", "export default () => <main />;"),
            ("node_modules/react/index.js", "module.exports = {};"),
            ("build/bundle.js", "!function(){}();"),
            ("vendor/legacy.js", "var a;"),
            (".gitignore", "build/\n"),
            (".snapgenignore", "vendor/\n"),
        ];
        for (path, content) in &files {
            fs::write(dir.join(path), content).expect("write should succeed");
        }
    }

    fn relative(root: &Path, files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|p| {
                p.strip_prefix(root)
                    .expect("below root")
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn finds_js_components_only() {
        let tmp = tempfile::tempdir().expect("tempdir");
        create_fixture(tmp.path());

        let files = collect_components(tmp.path(), &["js".to_string()], true);
        assert_eq!(
            relative(tmp.path(), &files),
            ["src/App.js", "src/components/Button.js"]
        );
    }

    #[test]
    fn extra_extensions_are_included() {
        let tmp = tempfile::tempdir().expect("tempdir");
        create_fixture(tmp.path());

        let files = collect_components(tmp.path(), &["js".to_string(), "jsx".to_string()], true);
        assert!(relative(tmp.path(), &files).contains(&"src/components/Card.jsx".to_string()));
    }

    #[test]
    fn tests_included_when_not_skipped() {
        let tmp = tempfile::tempdir().expect("tempdir");
        create_fixture(tmp.path());

        let files = relative(
            tmp.path(),
            &collect_components(tmp.path(), &["js".to_string()], false),
        );
        assert!(files.contains(&"src/components/Button.test.js".to_string()));
        assert!(files.contains(&"src/components/__tests__/Card.js".to_string()));
        assert!(!files.iter().any(|f| f.starts_with("node_modules")));
    }

    #[test]
    fn ignore_files_are_respected() {
        let tmp = tempfile::tempdir().expect("tempdir");
        create_fixture(tmp.path());

        let files = relative(
            tmp.path(),
            &collect_components(tmp.path(), &["js".to_string()], false),
        );
        assert!(!files.iter().any(|f| f.starts_with("build/")), "{files:?}");
        assert!(!files.iter().any(|f| f.starts_with("vendor/")), "{files:?}");
    }

    #[test]
    fn empty_directory_yields_nothing() {
        let tmp = tempfile::tempdir().expect("tempdir");
        assert!(collect_components(tmp.path(), &["js".to_string()], true).is_empty());
    }
}
