mod expand;
mod schema;
mod select;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "logscope",
    version,
    about = "Select which loggers of a namespace to expose for runtime management",
    long_about = "logscope collapses the logger names known to an application into a bounded set of \
                  namespace loggers, truncated to a fixed depth below a base namespace and grouped \
                  by their first nested package, ready to be registered for runtime level control."
)]
pub struct Cli {
    /// Also log to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Selection settings given on the command line.
#[derive(clap::Args, Debug, Clone)]
pub struct SelectionArgs {
    /// Base namespace, e.g. org.springframework
    #[arg(long, value_name = "NAMESPACE")]
    pub base: Option<String>,
    /// Nesting depth below the base namespace
    #[arg(long, value_name = "DEPTH", allow_negative_numbers = true)]
    pub levels: Option<i64>,
    /// Drop a trailing class-like segment (starting uppercase) before truncating
    #[arg(long)]
    pub omit_class_loggers: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the candidate ancestors of a single logger name
    Expand {
        #[command(flatten)]
        selection: SelectionArgs,
        /// Fully-qualified logger name to expand
        #[arg(value_name = "LOGGER")]
        name: String,
    },
    /// Select loggers to expose from a list of logger names
    #[command(
        long_about = "Reads logger names (one per line, '#' starts a comment) from the given files, \
                      or from stdin when none are given, and prints the registration key of every \
                      logger that would be exposed."
    )]
    Select {
        /// JSON configuration file; command-line flags override its values
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
        #[command(flatten)]
        selection: SelectionArgs,
        /// Logging backend the names come from (log4j, logback)
        #[arg(long)]
        backend: Option<String>,
        /// Registration key prefix
        #[arg(long)]
        domain: Option<String>,
        /// Print the result as JSON instead of a table
        #[arg(long)]
        json: bool,
        /// Files containing logger names
        #[arg(value_name = "FILES")]
        files: Vec<PathBuf>,
    },
    /// Print the JSON schema of the configuration file
    Schema,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _guard = logscope_core::logging::init_logging("cli", cli.verbose);

    match cli.command {
        Commands::Expand { selection, name } => expand::run(selection, &name),
        Commands::Select {
            config,
            selection,
            backend,
            domain,
            json,
            files,
        } => select::run(
            select::SelectOptions {
                config,
                selection,
                backend,
                domain,
            },
            json,
            files,
        ),
        Commands::Schema => schema::run(),
    }
}
