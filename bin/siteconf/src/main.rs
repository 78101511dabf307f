//! Siteconf CLI
//!
//! Validate, export and query the blog's site configuration registry.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;
use siteconf_core::Format;

/// Command-line interface for Siteconf.
#[derive(Parser)]
#[command(
    name = "siteconf",
    version,
    about = "Inspect the blog's site configuration registry"
)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Validate the built-in registry or a registry file
    Check {
        /// Registry file (TOML or JSON); SITECONF__SITE__* variables override its site metadata
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
    /// Write the built-in registry as JSON or TOML
    Export {
        /// Output format (defaults to the output file's extension, then JSON)
        #[arg(short, long, value_enum)]
        format: Option<ExportFormat>,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },
    /// Print the slug of each tag name, or the whole vocabulary
    Tag {
        /// Tag names as written in frontmatter (e.g. "Front-end")
        names: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum ExportFormat {
    Json,
    Toml,
}

impl From<ExportFormat> for Format {
    fn from(format: ExportFormat) -> Self {
        match format {
            ExportFormat::Json => Format::Json,
            ExportFormat::Toml => Format::Toml,
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    siteconf::init_tracing(cli.verbose);

    match cli.command {
        Commands::Check { config, strict } => {
            siteconf::cmd::check::run(config.as_deref(), strict)?;
        }
        Commands::Export { format, output } => {
            siteconf::cmd::export::run(format.map(Format::from), output.as_deref())?;
        }
        Commands::Tag { names } => {
            siteconf::cmd::tag::run(&names)?;
        }
    }

    Ok(())
}
