//! Non-fatal diagnostics collected while extracting entries.
//!
//! Extractors never print. Every skipped or suspicious match is pushed into
//! a [`Diagnostics`] sink owned by the caller, who decides how to report it.

use std::fmt::{self, Display};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A `<string>` match lacked its name or value and was dropped.
    SkippedString,
    /// A `<plurals>` match lacked its name and was dropped with all its items.
    SkippedPluralGroup,
    /// An `<item>` inside a plural group lacked its quantity or value.
    SkippedPluralItem,
    /// An `<item>` quantity is not a CLDR plural category. The item is kept.
    UnknownQuantity,
}

/// One diagnostic, anchored at the byte offset of the offending match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub offset: usize,
    pub message: String,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at byte {})", self.message, self.offset)
    }
}

/// Ordered sink of diagnostics, in the order they were raised.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: DiagnosticKind, offset: usize, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(?kind, offset, "{}", message);
        self.entries.push(Diagnostic {
            kind,
            offset,
            message,
        });
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of diagnostics of the given kind.
    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.entries.iter().filter(|d| d.kind == kind).count()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
