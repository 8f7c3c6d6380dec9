//! The Apple output formats resconv produces.
//!
//! Each format owns the extractor that reads its entries out of Android
//! resource text and the renderer that serializes them.

pub mod strings;
pub mod stringsdict;

// Reexporting the formats for easier access
pub use strings::StringsTable;
pub use stringsdict::PluralRules;
