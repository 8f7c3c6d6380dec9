#![forbid(unsafe_code)]
//! Android to Apple localization resource converter.
//!
//! Reads an Android `strings.xml` file and produces the two Apple
//! localization files that cover the same content:
//!
//! - **`Localizable.strings`**: one `name = "value";` line per `<string>`.
//! - **`Localizable.stringsdict`**: a property list with one plural rule
//!   dictionary per `<plurals>` group.
//!
//! Entries are recognised by pattern matching on the raw text, so partial or
//! slightly malformed documents still convert. Anything that cannot be parsed
//! is skipped and reported through [`Diagnostics`] instead of failing the run.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use resconv::{ConvertOptions, SourceDocument, convert, write_outputs};
//!
//! let source = SourceDocument::load("app/src/main/res/values/strings.xml")?;
//! let conversion = convert(&source);
//! for diagnostic in &conversion.diagnostics {
//!     eprintln!("{}", diagnostic);
//! }
//! let options = ConvertOptions { force_overwrite: false };
//! // Keep existing files untouched.
//! write_outputs(&conversion, "ios/en.lproj", &options, &mut |_: &Path| false)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod converter;
pub mod diagnostics;
pub mod error;
pub mod formats;
mod patterns;
pub mod source;
pub mod traits;
pub mod types;
pub mod writer;

// Re-export most used types for easy consumption
pub use crate::{
    converter::{Conversion, ConvertOptions, convert, write_outputs, write_outputs_with},
    diagnostics::{Diagnostic, DiagnosticKind, Diagnostics},
    error::Error,
    formats::{PluralRules, StringsTable},
    source::SourceDocument,
    traits::{Extractor, OverwriteDecider},
    types::{
        ArtifactKind, ConversionOutput, PluralCategory, PluralGroup, PluralItem, StringEntry,
    },
    writer::WriteOutcome,
};
