//! Regex grammars and capture helpers shared by the extractors.
//!
//! Matching works on raw text rather than an XML tree, so partial or
//! malformed documents still yield whatever entries can be recognised.
//! Nested `<plurals>` groups and nested comments are not supported.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    /// `<string name="NAME">VALUE</string>`.
    ///
    /// The `name` attribute is optional in the grammar so that a nameless
    /// `<string>` still matches and can be reported. Self-closing tags never
    /// match.
    pub(crate) static ref STRING_PATTERN: Regex = Regex::new(
        r#"(?is)<string(?:\s+[^>]*?\bname\s*=\s*"(?P<name>[^"]*)")?(?:\s+(?:[^>"/]|"[^"]*")*)?>(?P<value>.*?)</string\s*>"#
    )
    .unwrap();

    /// `<plurals name="NAME">ITEMS</plurals>`, items captured as an opaque span.
    pub(crate) static ref PLURALS_PATTERN: Regex = Regex::new(
        r#"(?is)<plurals(?:\s+[^>]*?\bname\s*=\s*"(?P<name>[^"]*)")?(?:\s+(?:[^>"/]|"[^"]*")*)?>(?P<items>.*?)</plurals\s*>"#
    )
    .unwrap();

    /// An optional single XML comment followed by `<item quantity="Q">VALUE</item>`.
    ///
    /// The comment body may not contain `--`, which keeps one comment from
    /// swallowing the items that follow it.
    pub(crate) static ref PLURAL_ITEM_PATTERN: Regex = Regex::new(
        r#"(?is)(?:<!--(?P<comment>(?:[^-]|-[^-])*)-->\s*)?<item(?:\s+[^>]*?\bquantity\s*=\s*"(?P<quantity>[^"]*)")?(?:\s+(?:[^>"/]|"[^"]*")*)?>(?P<value>.*?)</item\s*>"#
    )
    .unwrap();
}

/// Returns the named capture, treating an absent or empty group as missing.
pub(crate) fn capture<'t>(caps: &Captures<'t>, name: &str) -> Option<&'t str> {
    caps.name(name)
        .map(|m| m.as_str())
        .filter(|text| !text.is_empty())
}

/// Byte offset of the whole match within the scanned text.
pub(crate) fn match_offset(caps: &Captures<'_>) -> usize {
    caps.get(0).map_or(0, |m| m.start())
}

/// Trims every comment line, drops blank ones and joins the rest with `\n`.
///
/// Returns `None` when nothing is left.
pub(crate) fn normalize_comment(raw: &str) -> Option<String> {
    let lines = raw
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>();

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}
