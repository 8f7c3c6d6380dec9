//! Traits at the two seams of a conversion: extraction and overwrite decisions.

use std::{fmt::Display, path::Path};

use crate::{
    diagnostics::Diagnostics,
    types::{ArtifactKind, ConversionOutput},
};

/// An artifact that can be extracted from Android resource text and
/// rendered into its Apple counterpart.
///
/// # Example
///
/// ```rust
/// use resconv::{Diagnostics, StringsTable, traits::Extractor};
///
/// let mut diagnostics = Diagnostics::new();
/// let table = StringsTable::extract(r#"<string name="greeting">Hello</string>"#, &mut diagnostics);
/// assert_eq!(table.to_output().contents, r#"greeting = "Hello";"#);
/// assert!(diagnostics.is_empty());
/// ```
pub trait Extractor: Display + Sized {
    /// Which file this artifact is written to.
    const KIND: ArtifactKind;

    /// Scans `source`, pushing a diagnostic for every match that is skipped.
    fn extract(source: &str, diagnostics: &mut Diagnostics) -> Self;

    /// Serializes the artifact.
    fn to_output(&self) -> ConversionOutput {
        ConversionOutput {
            kind: Self::KIND,
            contents: self.to_string(),
        }
    }
}

/// Decides whether an existing destination file may be replaced.
///
/// Asked at most once per artifact, and only when the file exists and the
/// run does not force overwrites. Any `FnMut(&Path) -> bool` closure works.
pub trait OverwriteDecider {
    fn should_overwrite(&mut self, path: &Path) -> bool;
}

impl<F> OverwriteDecider for F
where
    F: FnMut(&Path) -> bool,
{
    fn should_overwrite(&mut self, path: &Path) -> bool {
        self(path)
    }
}
