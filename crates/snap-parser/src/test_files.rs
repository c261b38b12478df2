//! Test file and directory detection.
//!
//! The component walker uses these to leave existing tests, mocks, and
//! snapshot folders alone so that generated files never feed back into a run.

/// Directory names conventionally holding tests or test support files.
const TEST_DIRS: &[&str] = &[
    "test",
    "tests",
    "spec",
    "specs",
    "__tests__",
    "__mocks__",
    "__snapshots__",
    "__fixtures__",
    "e2e",
];

const TEST_MARKERS: &[&str] = &[".test.", ".spec."];

const SCRIPT_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx", "mjs", "cjs"];

/// Returns `true` if `dir_name` matches a known test directory convention.
///
/// Comparison is case-sensitive.
///
/// # Examples
///
/// ```
/// use snap_parser::is_test_dir;
/// assert!(is_test_dir("__tests__"));
/// assert!(!is_test_dir("components"));
/// ```
#[must_use]
pub fn is_test_dir(dir_name: &str) -> bool {
    TEST_DIRS.contains(&dir_name)
}

/// Returns `true` for `*.test.<ext>` and `*.spec.<ext>` script files.
///
/// Comparison is case-insensitive.
///
/// # Examples
///
/// ```
/// use snap_parser::is_test_file;
/// assert!(is_test_file("Button.test.js"));
/// assert!(is_test_file("App.spec.tsx"));
/// assert!(!is_test_file("Button.js"));
/// ```
#[must_use]
pub fn is_test_file(file_name: &str) -> bool {
    let name = file_name.to_lowercase();
    let Some((stem, ext)) = name.rsplit_once('.') else {
        return false;
    };
    if !SCRIPT_EXTENSIONS.contains(&ext) {
        return false;
    }
    let with_dot = format!("{stem}.");
    TEST_MARKERS
        .iter()
        .any(|marker| with_dot.ends_with(marker) && with_dot.len() > marker.len())
}
