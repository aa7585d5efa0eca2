mod commands;
mod ingest;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use coursecal_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "coursecal")]
#[command(about = "Convert course schedule spreadsheets into iCalendar files")]
struct Cli {
    /// Config file (default: ~/.config/coursecal/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log every row and event that gets converted
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a schedule spreadsheet to an .ics file
    Convert {
        #[command(flatten)]
        source: SourceArgs,

        /// Output file (default: the input path with an .ics extension)
        #[arg(short, long, conflicts_with = "stdout")]
        output: Option<PathBuf>,

        /// Print the calendar to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,

        /// Domain appended to event UIDs
        #[arg(long)]
        domain: Option<String>,
    },
    /// List every class meeting the schedule expands to
    Sessions {
        #[command(flatten)]
        source: SourceArgs,

        /// Maximum sessions listed per event
        #[arg(long, default_value_t = commands::DEFAULT_SESSION_LIMIT)]
        limit: u16,
    },
    /// Manage the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Write a default config file with every option commented out
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Show where the config file lives
    Path,
}

#[derive(Args)]
struct SourceArgs {
    /// Spreadsheet to read (.xlsx, .xls, .xlsb, .ods or .csv)
    input: PathBuf,

    /// Zero-based row holding the column names
    #[arg(long)]
    header_row: Option<usize>,

    /// Worksheet to read (default: the first one)
    #[arg(long)]
    sheet: Option<String>,
}

impl SourceArgs {
    fn apply(&self, config: &mut Config) {
        if let Some(header_row) = self.header_row {
            config.input.header_row = header_row;
        }
        if let Some(ref sheet) = self.sheet {
            config.input.sheet = Some(sheet.clone());
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Convert {
            source,
            output,
            stdout,
            domain,
        } => {
            let mut config = Config::load(cli.config.as_deref())?;
            source.apply(&mut config);
            if let Some(domain) = domain {
                config.calendar.uid_domain = domain;
            }
            commands::convert::run(&source.input, output, stdout, &config).await?;
            Ok(())
        }
        Commands::Sessions { source, limit } => {
            let mut config = Config::load(cli.config.as_deref())?;
            source.apply(&mut config);
            commands::sessions::run(&source.input, limit, &config).await
        }
        Commands::Config { command } => match command {
            ConfigCommands::Init { force } => commands::config::init(cli.config.as_deref(), force),
            ConfigCommands::Path => commands::config::show_path(cli.config.as_deref()),
        },
    }
}

/// Log to stderr so `convert --stdout` output stays a clean calendar.
///
/// Core diagnostics are already printed in the conversion report, so the
/// core crate stays quiet unless asked for with `-v` or `RUST_LOG`.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "coursecal=debug,coursecal_core=debug"
    } else {
        "coursecal=info,coursecal_core=error"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
