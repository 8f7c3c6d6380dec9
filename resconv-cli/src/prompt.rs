//! Console overwrite confirmation.

use std::{
    io::{self, BufRead, StdinLock, Stdout, Write},
    path::Path,
};

use resconv::OverwriteDecider;

/// Answer to the overwrite question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Overwrite,
    Skip,
}

/// Asks on the console whether an existing destination file may be replaced.
///
/// Reads one answer per line. `Y`/`N` are accepted in any case, anything
/// else asks again, and end of input counts as `N`.
pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
}

impl ConsolePrompt<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn choose(&mut self, file_name: &str) -> io::Result<Choice> {
        loop {
            writeln!(
                self.output,
                "Strings file already exists at destination location."
            )?;
            writeln!(self.output, "Y: Overwrite existing {}", file_name)?;
            writeln!(self.output, "N: Skip this step")?;
            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(Choice::Skip);
            }

            match line.trim().to_ascii_uppercase().as_str() {
                "Y" | "YES" => return Ok(Choice::Overwrite),
                "N" | "NO" => return Ok(Choice::Skip),
                other => writeln!(self.output, "Unknown option `{}`", other)?,
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> OverwriteDecider for ConsolePrompt<R, W> {
    fn should_overwrite(&mut self, path: &Path) -> bool {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        match self.choose(&file_name) {
            Ok(choice) => choice == Choice::Overwrite,
            Err(e) => {
                tracing::warn!(error = %e, "could not read an answer, keeping {}", file_name);
                false
            }
        }
    }
}
