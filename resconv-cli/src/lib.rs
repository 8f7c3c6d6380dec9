//! CLI library for testing purposes

pub mod convert;
pub mod inspect;
pub mod logging;
pub mod prompt;

pub use convert::{load_source_or_exit, run_strings_command, run_strings_command_with};
pub use inspect::run_inspect_command;
pub use prompt::{Choice, ConsolePrompt};
