//! Apple `.stringsdict` output: plural rule dictionaries built from `<plurals>` groups.
//!
//! Every group becomes an `NSStringLocalizedFormatKey` dictionary whose
//! `COUNT` variable uses `NSStringPluralRuleType` with an integer (`d`)
//! value type, followed by one key/string pair per quantity.

use std::fmt::{self, Display};

use indoc::indoc;

use crate::{
    diagnostics::{DiagnosticKind, Diagnostics},
    patterns::{PLURAL_ITEM_PATTERN, PLURALS_PATTERN, capture, match_offset, normalize_comment},
    traits::Extractor,
    types::{ArtifactKind, PluralGroup, PluralItem},
};

const PLIST_HEADER: &str = indoc! {r#"
    <?xml version="1.0" encoding="UTF-8"?>
    <!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
    <plist version="1.0">
        <dict>
"#};

const PLIST_FOOTER: &str = indoc! {"
        </dict>
    </plist>
"};

const INDENT: &str = "    ";

/// All plural groups of a source document, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluralRules {
    pub groups: Vec<PluralGroup>,
}

impl Extractor for PluralRules {
    const KIND: ArtifactKind = ArtifactKind::PluralRules;

    fn extract(source: &str, diagnostics: &mut Diagnostics) -> Self {
        let groups = PLURALS_PATTERN
            .captures_iter(source)
            .filter_map(|caps| {
                let offset = match_offset(&caps);
                let Some(name) = capture(&caps, "name") else {
                    diagnostics.push(
                        DiagnosticKind::SkippedPluralGroup,
                        offset,
                        "could not parse a match, ignoring: <plurals> has no name",
                    );
                    return None;
                };

                let items = match caps.name("items") {
                    Some(span) => extract_items(span.as_str(), span.start(), name, diagnostics),
                    None => Vec::new(),
                };

                Some(PluralGroup {
                    name: name.to_string(),
                    items,
                })
            })
            .collect::<Vec<_>>();

        tracing::debug!(count = groups.len(), "extracted plural groups");

        PluralRules { groups }
    }
}

/// Scans one group's items span. `base` is the span's offset in the source.
fn extract_items(
    span: &str,
    base: usize,
    group: &str,
    diagnostics: &mut Diagnostics,
) -> Vec<PluralItem> {
    PLURAL_ITEM_PATTERN
        .captures_iter(span)
        .filter_map(|caps| {
            let offset = base + match_offset(&caps);
            let (Some(quantity), Some(value)) = (capture(&caps, "quantity"), capture(&caps, "value"))
            else {
                diagnostics.push(
                    DiagnosticKind::SkippedPluralItem,
                    offset,
                    format!("ignoring <item> in plurals \"{group}\": missing quantity or value"),
                );
                return None;
            };

            let mut item = PluralItem::new(quantity, value);
            if let Some(comment) = capture(&caps, "comment").and_then(normalize_comment) {
                item = item.with_comment(comment);
            }

            if item.category().is_none() {
                diagnostics.push(
                    DiagnosticKind::UnknownQuantity,
                    offset,
                    format!("plurals \"{group}\" uses unknown quantity \"{quantity}\""),
                );
            }

            Some(item)
        })
        .collect()
}

fn push_line(out: &mut fmt::Formatter<'_>, depth: usize, line: &str) -> fmt::Result {
    writeln!(out, "{}{}", INDENT.repeat(depth), line)
}

impl PluralGroup {
    fn fmt_entry(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        push_line(f, 2, &format!("<key>{}</key>", self.name))?;
        push_line(f, 2, "<dict>")?;
        push_line(f, 3, "<key>NSStringLocalizedFormatKey</key>")?;
        push_line(f, 3, "<string>%#@COUNT@</string>")?;
        push_line(f, 3, "<key>COUNT</key>")?;
        push_line(f, 3, "<dict>")?;
        push_line(f, 4, "<key>NSStringFormatSpecTypeKey</key>")?;
        push_line(f, 4, "<string>NSStringPluralRuleType</string>")?;
        push_line(f, 4, "<key>NSStringFormatValueTypeKey</key>")?;
        push_line(f, 4, "<string>d</string>")?;
        for item in &self.items {
            item.fmt_entry(f, 4)?;
        }
        push_line(f, 3, "</dict>")?;
        push_line(f, 2, "</dict>")
    }
}

impl PluralItem {
    fn fmt_entry(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        if let Some(comment) = &self.comment {
            push_line(f, depth, &format!("<!-- {} -->", comment))?;
        }
        push_line(f, depth, &format!("<key>{}</key>", self.quantity))?;
        push_line(f, depth, &format!("<string>{}</string>", self.value))
    }
}

/// The complete property-list document, ending with a newline.
impl Display for PluralRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(PLIST_HEADER)?;
        for group in &self.groups {
            group.fmt_entry(f)?;
        }
        f.write_str(PLIST_FOOTER)
    }
}
