//! Core types produced by the extractors and consumed by the writer.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::Serialize;

/// A simple `<string name="...">...</string>` resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringEntry {
    pub name: String,
    /// Raw value, carried through without escaping or unescaping.
    pub value: String,
}

impl StringEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Renders the entry as one `.strings` line: `name = "value";`.
impl Display for StringEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = \"{}\";", self.name, self.value)
    }
}

/// A `<plurals>` group and the items that could be parsed from it.
///
/// `items` may be empty; the group still renders its rule shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluralGroup {
    pub name: String,
    pub items: Vec<PluralItem>,
}

/// One quantity-tagged variant inside a plural group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluralItem {
    pub quantity: String,
    pub value: String,
    /// Normalized text of the comment right before the item, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl PluralItem {
    pub fn new(quantity: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            quantity: quantity.into(),
            value: value.into(),
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// The CLDR category of this item's quantity, if it names one.
    pub fn category(&self) -> Option<PluralCategory> {
        self.quantity.parse().ok()
    }
}

/// Standard CLDR plural forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl FromStr for PluralCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ZERO" => Ok(PluralCategory::Zero),
            "ONE" => Ok(PluralCategory::One),
            "TWO" => Ok(PluralCategory::Two),
            "FEW" => Ok(PluralCategory::Few),
            "MANY" => Ok(PluralCategory::Many),
            "OTHER" => Ok(PluralCategory::Other),
            _ => Err(format!("Unknown plural category: {}", s)),
        }
    }
}

/// The two files a conversion run can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    /// Flat `Localizable.strings` table.
    StringsTable,
    /// `Localizable.stringsdict` plural rule property list.
    PluralRules,
}

impl ArtifactKind {
    pub const STRINGS_FILE_NAME: &'static str = "Localizable.strings";
    pub const STRINGSDICT_FILE_NAME: &'static str = "Localizable.stringsdict";

    /// File name the artifact is written under in the destination directory.
    pub fn file_name(self) -> &'static str {
        match self {
            ArtifactKind::StringsTable => Self::STRINGS_FILE_NAME,
            ArtifactKind::PluralRules => Self::STRINGSDICT_FILE_NAME,
        }
    }
}

impl Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// A serialized artifact, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOutput {
    pub kind: ArtifactKind,
    pub contents: String,
}

impl ConversionOutput {
    pub fn file_name(&self) -> &'static str {
        self.kind.file_name()
    }
}
