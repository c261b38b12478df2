//! # snap-parser
//!
//! ast-grep-based component documentation extraction for snapgen.
//!
//! Reads a JavaScript (or TypeScript/TSX) source file and reports the React
//! component it defines: display name, description, and declared props with
//! their `propTypes` and defaults. This is the static-analysis half of the
//! pipeline; value synthesis lives in `snap-core`.

pub mod docgen;
pub mod error;
pub mod parser;
pub mod test_files;

pub use docgen::{DocgenExtractor, extract_component};
pub use error::ParserError;
pub use parser::{detect_language, parse_source};
pub use test_files::{is_test_dir, is_test_file};
