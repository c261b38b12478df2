//! Parser error types for snap-parser.

/// Errors that can occur while extracting a component from source.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Parse failed for {language}: {message}")]
    ParseFailed { language: String, message: String },

    #[error("Language not supported: {0}")]
    UnsupportedLanguage(String),

    #[error("No suitable component definition found.")]
    NoComponent,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
