use resconv::{
    Diagnostics, Extractor, PluralGroup, PluralRules, SourceDocument, StringEntry, StringsTable,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct InspectReport<'a> {
    pub source: String,
    pub strings: &'a [StringEntry],
    pub plurals: &'a [PluralGroup],
    pub diagnostics: &'a Diagnostics,
}

/// Run the inspect command: print what would be converted as JSON.
pub fn run_inspect_command(source: &SourceDocument) -> Result<(), String> {
    let mut diagnostics = Diagnostics::new();
    let strings = StringsTable::extract(source.as_str(), &mut diagnostics);
    let plurals = PluralRules::extract(source.as_str(), &mut diagnostics);

    let report = InspectReport {
        source: source.to_string(),
        strings: &strings.entries,
        plurals: &plurals.groups,
        diagnostics: &diagnostics,
    };

    let json = serde_json::to_string_pretty(&report)
        .map_err(|e| format!("Error serializing to JSON: {}", e))?;
    println!("{}", json);
    Ok(())
}
