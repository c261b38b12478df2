//! ast-grep wrapper and language detection from file extensions.

use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::SupportLang;

/// The concrete AST tree type returned by `parse_source`.
pub type AstTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

/// A node of an [`AstTree`].
pub type SyntaxNode<'r> = ast_grep_core::Node<'r, StrDoc<SupportLang>>;

/// Detect the component source language from a file path extension.
///
/// Returns `None` for anything that cannot hold a React component.
#[must_use]
pub fn detect_language(file_path: &str) -> Option<SupportLang> {
    let ext = file_path.rsplit('.').next()?;
    match ext {
        "js" | "jsx" | "mjs" | "cjs" => Some(SupportLang::JavaScript),
        "ts" => Some(SupportLang::TypeScript),
        "tsx" => Some(SupportLang::Tsx),
        _ => None,
    }
}

/// Parse source code into an ast-grep tree for the given language.
#[must_use]
pub fn parse_source(source: &str, lang: SupportLang) -> AstTree {
    use ast_grep_language::LanguageExt;
    lang.ast_grep(source)
}
