//! The conversion pipeline: extract both artifacts, then write them.
//!
//! Loading is kept out of here on purpose. Callers load a
//! [`SourceDocument`] first and decide how fatal a load failure is; only
//! write failures are returned from [`write_outputs`].

use std::path::Path;

use crate::{
    diagnostics::Diagnostics,
    error::Error,
    formats::{PluralRules, StringsTable},
    source::SourceDocument,
    traits::{Extractor, OverwriteDecider},
    types::ConversionOutput,
    writer::{WriteOutcome, write_output},
};

/// Run configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Replace existing destination files without asking.
    pub force_overwrite: bool,
}

/// Both artifacts of one run plus everything that was skipped on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// The strings table first, then the plural rules.
    pub outputs: Vec<ConversionOutput>,
    pub diagnostics: Diagnostics,
}

/// Extracts and renders both artifacts from `source`.
///
/// # Example
///
/// ```rust
/// use resconv::{SourceDocument, convert};
///
/// let source = SourceDocument::from_text(r#"<string name="greeting">Hello</string>"#);
/// let conversion = convert(&source);
/// assert_eq!(conversion.outputs[0].contents, r#"greeting = "Hello";"#);
/// assert!(conversion.outputs[1].contents.contains("<plist version=\"1.0\">"));
/// ```
pub fn convert(source: &SourceDocument) -> Conversion {
    let mut diagnostics = Diagnostics::new();
    let strings = StringsTable::extract(source.as_str(), &mut diagnostics);
    let plurals = PluralRules::extract(source.as_str(), &mut diagnostics);

    tracing::info!(
        source = %source,
        strings = strings.entries.len(),
        plurals = plurals.groups.len(),
        skipped = diagnostics.len(),
        "converted source document"
    );

    Conversion {
        outputs: vec![strings.to_output(), plurals.to_output()],
        diagnostics,
    }
}

/// Writes every output of `conversion` into `destination_dir`.
///
/// A declined overwrite only skips that artifact. The first I/O failure
/// stops the run and is returned.
pub fn write_outputs<P, D>(
    conversion: &Conversion,
    destination_dir: P,
    options: &ConvertOptions,
    decider: &mut D,
) -> Result<Vec<WriteOutcome>, Error>
where
    P: AsRef<Path>,
    D: OverwriteDecider + ?Sized,
{
    write_outputs_with(conversion, destination_dir, options, decider, |_, _| {})
}

/// Like [`write_outputs`], calling `on_outcome` after each artifact, before
/// the next one is looked at.
pub fn write_outputs_with<P, D, F>(
    conversion: &Conversion,
    destination_dir: P,
    options: &ConvertOptions,
    decider: &mut D,
    mut on_outcome: F,
) -> Result<Vec<WriteOutcome>, Error>
where
    P: AsRef<Path>,
    D: OverwriteDecider + ?Sized,
    F: FnMut(&ConversionOutput, &WriteOutcome),
{
    let destination_dir = destination_dir.as_ref();
    conversion
        .outputs
        .iter()
        .map(|output| {
            let outcome =
                write_output(output, destination_dir, options.force_overwrite, &mut *decider)?;
            on_outcome(output, &outcome);
            Ok(outcome)
        })
        .collect()
}
