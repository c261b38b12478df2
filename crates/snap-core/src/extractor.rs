//! The seam between the metadata builder and a component documentation parser.

use std::path::Path;

use crate::descriptor::ComponentDoc;

/// Turns the text of one source file into a [`ComponentDoc`].
///
/// Implementations fail when the file is not recognizable as a component
/// definition. The builder reports that failure for this file only.
pub trait PropExtractor {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Extract the component documented in `source`, read from `path`.
    ///
    /// # Errors
    /// Returns `Self::Error` when no component definition can be found.
    fn extract(&self, source: &str, path: &Path) -> Result<ComponentDoc, Self::Error>;
}

impl<T: PropExtractor + ?Sized> PropExtractor for &T {
    type Error = T::Error;

    fn extract(&self, source: &str, path: &Path) -> Result<ComponentDoc, Self::Error> {
        (**self).extract(source, path)
    }
}
