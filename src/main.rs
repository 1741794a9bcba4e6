//! test-summary - Command-line tool rendering unit test result summaries

use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use unit_test_summary::commands::*;
use unit_test_summary::config::SummaryFormat;
use unit_test_summary::ui::{CliUI, UI};

/// Environment variables naming the numeric locale, in order of precedence.
const LOCALE_VARIABLES: [&str; 2] = ["LC_ALL", "LC_NUMERIC"];

#[derive(Parser)]
#[command(name = "test-summary")]
#[command(about = "Markdown summaries of unit test results", long_about = None)]
struct Cli {
    /// Directory input files are relative to (defaults to current directory)
    #[arg(short = 'C', long, global = true)]
    directory: Option<String>,

    /// Configuration file (defaults to .summary.conf in the directory)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Long,
    Short,
}

impl From<Format> for SummaryFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Long => SummaryFormat::Long,
            Format::Short => SummaryFormat::Short,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render the Markdown summary of raw count JSON files
    Summary {
        /// Raw count JSON files, `-` for stdin (defaults to stdin)
        files: Vec<String>,

        /// Statistics or raw count JSON of the run to compare against
        #[arg(long)]
        reference: Option<String>,

        /// How the reference run was chosen, shown in the footnote
        #[arg(long, requires = "reference")]
        reference_type: Option<String>,

        /// Render the one-line summary
        #[arg(long, conflicts_with = "format")]
        short: bool,

        /// Summary to render
        #[arg(long, value_enum)]
        format: Option<Format>,

        /// Locale whose digit grouping to use, e.g. en_US.UTF-8
        /// (defaults to the configuration, then LC_ALL or LC_NUMERIC)
        #[arg(long)]
        locale: Option<String>,
    },

    /// Print the merged statistics of raw count JSON files
    Stats {
        /// Raw count JSON files, `-` for stdin (defaults to stdin)
        files: Vec<String>,
    },
}

/// Numeric locale of the process environment, if one is set
fn ambient_locale() -> Option<String> {
    LOCALE_VARIABLES
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|locale| !locale.is_empty())
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let mut ui = CliUI::new();

    let cmd: Box<dyn Command> = match cli.command {
        Commands::Summary {
            files,
            reference,
            reference_type,
            short,
            format,
            locale,
        } => {
            let mut cmd = SummaryCommand::new(cli.directory, files);
            if let Some(reference) = reference {
                cmd = cmd.with_reference(reference, reference_type);
            }
            if short {
                cmd = cmd.with_format(SummaryFormat::Short);
            } else if let Some(format) = format {
                cmd = cmd.with_format(format.into());
            }
            if let Some(locale) = locale.filter(|locale| !locale.is_empty()) {
                cmd = cmd.with_locale(locale);
            } else if let Some(locale) = ambient_locale() {
                cmd = cmd.with_ambient_locale(locale);
            }
            if let Some(config) = cli.config {
                cmd = cmd.with_config(config);
            }
            Box::new(cmd)
        }
        Commands::Stats { files } => Box::new(StatsCommand::new(cli.directory, files)),
    };

    log::debug!("Running {}", cmd.name());
    match cmd.execute(&mut ui) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            log::debug!("{} failed: {:?}", cmd.name(), e);
            if ui.error(&e.to_string()).is_err() {
                let _ = writeln!(std::io::stderr(), "Error: {}", e);
            }
            std::process::exit(1);
        }
    }
}
