//! Apple `.strings` output: the flat key/value table built from `<string>` entries.

use std::fmt::{self, Display};

use crate::{
    diagnostics::{DiagnosticKind, Diagnostics},
    patterns::{STRING_PATTERN, capture, match_offset},
    traits::Extractor,
    types::{ArtifactKind, StringEntry},
};

/// Every simple string resource of a source document, in source order.
///
/// Duplicate names are kept as they appear; later entries simply come later.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringsTable {
    pub entries: Vec<StringEntry>,
}

impl Extractor for StringsTable {
    const KIND: ArtifactKind = ArtifactKind::StringsTable;

    fn extract(source: &str, diagnostics: &mut Diagnostics) -> Self {
        let entries = STRING_PATTERN
            .captures_iter(source)
            .filter_map(|caps| {
                let offset = match_offset(&caps);
                match (capture(&caps, "name"), capture(&caps, "value")) {
                    (Some(name), Some(value)) => Some(StringEntry::new(name, value)),
                    (None, _) => {
                        diagnostics.push(
                            DiagnosticKind::SkippedString,
                            offset,
                            "could not parse a match, ignoring: <string> has no name",
                        );
                        None
                    }
                    (Some(name), None) => {
                        diagnostics.push(
                            DiagnosticKind::SkippedString,
                            offset,
                            format!("could not parse a match, ignoring: <string name=\"{name}\"> has no value"),
                        );
                        None
                    }
                }
            })
            .collect::<Vec<_>>();

        tracing::debug!(count = entries.len(), "extracted string entries");

        StringsTable { entries }
    }
}

/// One `name = "value";` line per entry, joined by `\n` with no trailing newline.
impl Display for StringsTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}
