use clap::{ArgAction, Parser, Subcommand};
use resconv::ConvertOptions;
use resconv_cli::{
    load_source_or_exit, logging::init_logging, run_inspect_command, run_strings_command,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Converting Android resources to iOS resources.", long_about = None)]
struct Args {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a strings.xml file into Localizable.strings and Localizable.stringsdict files.
    Strings {
        /// The path to the strings.xml file to convert
        source_path: String,

        /// The destination directory for the generated Localizable.strings and Localizable.stringsdict
        destination_path: String,

        /// Overwrites the existing Localizable files
        #[arg(short = 'o', long)]
        overwrite: bool,
    },

    /// Print the entries found in a strings.xml file as JSON.
    Inspect {
        /// The path to the strings.xml file to inspect
        source_path: String,
    },
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    let result = match args.commands {
        Commands::Strings {
            source_path,
            destination_path,
            overwrite,
        } => {
            let source = load_source_or_exit(&source_path);
            let options = ConvertOptions {
                force_overwrite: overwrite,
            };
            run_strings_command(&source, &destination_path, options)
        }
        Commands::Inspect { source_path } => {
            let source = load_source_or_exit(&source_path);
            run_inspect_command(&source)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
