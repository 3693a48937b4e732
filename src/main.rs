//! mdweb CLI - Literate Programming Processor

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mdweb::commands;
use mdweb::interface::Context;

#[derive(Parser)]
#[command(name = "mdweb")]
#[command(author, version, about = "Weave and tangle literate documents", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    directory: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Produce markdown from the input document
    Weave {
        /// Input file; reads from standard input if absent
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Tangle the named code fragment into code
    Tangle {
        /// Root fragment to expand
        #[arg(value_name = "ROOT")]
        root: String,

        /// Input file; reads from standard input if absent
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// List fragments that no other fragment references
    Roots {
        /// Input file; reads from standard input if absent
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Print a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Write every root fragment to a file named after it
    TangleAll {
        /// Input file; reads from standard input if absent
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Directory to write into (overrides config)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Dry run - show what would be done without doing it
        #[arg(short = 'n', long)]
        dry_run: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging; stdout is reserved for woven/tangled text
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Determine working directory
    let base_dir = cli
        .directory
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));

    // Read configuration from file or use defaults
    let config = match cli.config {
        Some(ref path) => mdweb::config::read_config_file(path),
        None => mdweb::config::read_config(&base_dir),
    };
    let mut config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Override output directory if specified on command line
    if let Commands::TangleAll {
        output_dir: Some(ref dir),
        ..
    } = cli.command
    {
        config.output_dir = Some(dir.clone());
    }

    let ctx = Context::new(config, base_dir);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    // Execute command
    let result = match cli.command {
        Commands::Weave { file } => commands::weave(&ctx, commands::WeaveOptions { file }, &mut out),

        Commands::Tangle { root, file } => {
            let options = commands::TangleOptions { root, file };
            commands::tangle(&ctx, options, &mut out)
        }

        Commands::Roots { file, json } => {
            let options = commands::RootsOptions { file, json };
            commands::roots(&ctx, options, &mut out)
        }

        Commands::TangleAll { file, dry_run, .. } => {
            let options = commands::TangleAllOptions { file, dry_run };
            commands::tangle_all(&ctx, options, &mut out)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
