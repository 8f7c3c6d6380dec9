//! Loading of the Android `strings.xml` source text.

use std::{
    fmt,
    fs,
    path::{Path, PathBuf},
};

use crate::error::Error;

/// The raw source text of one conversion run.
///
/// The text is never mutated after loading; extractors only scan it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    path: Option<PathBuf>,
    text: String,
}

impl SourceDocument {
    /// Reads the file at `path` and decodes it as UTF-8.
    ///
    /// A leading byte-order mark is dropped. Missing files and invalid UTF-8
    /// both fail with [`Error::SourceLoad`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| Error::source_load(path, e))?;
        let text = String::from_utf8(bytes).map_err(|e| Error::source_load(path, e))?;
        let text = match text.strip_prefix('\u{feff}') {
            Some(stripped) => stripped.to_string(),
            None => text,
        };

        tracing::debug!(path = %path.display(), bytes = text.len(), "loaded source document");

        Ok(Self {
            path: Some(path.to_path_buf()),
            text,
        })
    }

    /// Wraps in-memory text, e.g. for tests or piped input.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            path: None,
            text: text.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The path this document was loaded from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl AsRef<str> for SourceDocument {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for SourceDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{}", path.display()),
            None => write!(f, "<memory>"),
        }
    }
}
