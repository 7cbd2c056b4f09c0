//! protoshadow CLI - Shadow property generator for C# serialization contracts
//!
//! Commands:
//! - `protoshadow generate` - Write generated sources for a declaration model
//! - `protoshadow analyze` - Report diagnostics for a declaration model
//! - `protoshadow check` - Validate a protoshadow.toml configuration

use clap::{Parser, Subcommand};
use protoshadow_core::LogLevel;

mod analyze;
mod check;
mod generate;
mod input;

#[derive(Parser)]
#[command(name = "protoshadow")]
#[command(author, version, about = "Shadow property generator for protobuf contracts", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error, off); RUST_LOG adds directives
    #[arg(long, global = true, default_value = "warn", value_parser = parse_log_level)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shadow properties for every contract root
    Generate {
        /// Path to the declaration model (JSON)
        #[arg(short, long)]
        input: String,

        /// Output directory for generated sources
        #[arg(short, long)]
        output: String,

        /// Path to protoshadow.toml (default: ./protoshadow.toml if present)
        #[arg(short, long)]
        config: Option<String>,

        /// List the files that would be written without writing them
        #[arg(long)]
        dry_run: bool,
    },

    /// Report diagnostics for a declaration model
    Analyze {
        /// Path to the declaration model (JSON)
        #[arg(short, long)]
        input: String,

        /// Path to protoshadow.toml (default: ./protoshadow.toml if present)
        #[arg(short, long)]
        config: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = analyze::OutputFormat::Text)]
        format: analyze::OutputFormat,
    },

    /// Validate a protoshadow.toml configuration
    Check {
        /// Path to protoshadow.toml (default: ./protoshadow.toml)
        #[arg(short, long)]
        config: Option<String>,
    },
}

fn parse_log_level(value: &str) -> Result<LogLevel, String> {
    LogLevel::parse(value).ok_or_else(|| format!("unknown log level '{value}'"))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    protoshadow_logging::init_logging(cli.log_level);

    match cli.command {
        Commands::Generate {
            input,
            output,
            config,
            dry_run,
        } => {
            generate::run(&input, &output, config, dry_run)?;
        }
        Commands::Analyze {
            input,
            config,
            format,
        } => {
            if analyze::run(&input, config, format)? {
                std::process::exit(1);
            }
        }
        Commands::Check { config } => {
            check::run(config)?;
        }
    }

    Ok(())
}
