use resconv::{
    ConvertOptions, Diagnostics, OverwriteDecider, SourceDocument, WriteOutcome, convert,
    write_outputs_with,
};

use crate::prompt::ConsolePrompt;

/// Loads the source document, terminating the process if that fails.
///
/// There is nothing to convert without a source, so this bypasses the
/// normal error path of the commands.
pub fn load_source_or_exit(path: &str) -> SourceDocument {
    match SourceDocument::load(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("❌ Fatal: {}", e);
            std::process::exit(1);
        }
    }
}

/// Print every diagnostic to stderr.
pub fn report_diagnostics(diagnostics: &Diagnostics) {
    for diagnostic in diagnostics {
        eprintln!("⚠️  {}", diagnostic);
    }
}

/// Run the `strings` command with the console prompt.
pub fn run_strings_command(
    source: &SourceDocument,
    destination: &str,
    options: ConvertOptions,
) -> Result<(), String> {
    run_strings_command_with(source, destination, options, &mut ConsolePrompt::stdio())
}

/// Run the `strings` command with any overwrite decider.
///
/// Each artifact is written, or skipped, before the next one is looked at,
/// so prompts and results appear in order.
pub fn run_strings_command_with<D: OverwriteDecider>(
    source: &SourceDocument,
    destination: &str,
    options: ConvertOptions,
    decider: &mut D,
) -> Result<(), String> {
    let conversion = convert(source);
    report_diagnostics(&conversion.diagnostics);

    write_outputs_with(&conversion, destination, &options, decider, |output, outcome| {
        match outcome {
            WriteOutcome::Written(path) => println!("✅ Wrote {}", path.display()),
            WriteOutcome::Skipped(_) => println!("Skipping {}...", output.file_name()),
        }
    })
    .map_err(|e| e.to_string())?;

    Ok(())
}
