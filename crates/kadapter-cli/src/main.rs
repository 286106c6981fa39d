mod commands;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use commands::{EXIT_FAILURE, EXIT_INPUT_ERROR};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "kadapter",
    version,
    about = "Normalize service descriptions for cluster manifests"
)]
struct Cli {
    /// Output results as structured JSON.
    #[arg(long, default_value_t = false, global = true)]
    json: bool,

    /// Enable verbose (debug) logging output.
    #[arg(short, long, default_value_t = false, global = true)]
    verbose: bool,

    /// Enable trace-level logging (more detailed than --verbose).
    #[arg(long, default_value_t = false, global = true)]
    trace: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the normalized form of each service in a document.
    Inspect {
        /// Path to a JSON or TOML service document.
        #[arg(default_value = "services.json")]
        file: PathBuf,
        /// Only show the service with this name (sanitized before matching).
        #[arg(long)]
        service: Option<String>,
    },
    /// Print name, scale, and primary port for each service.
    Summary {
        /// Path to a JSON or TOML service document.
        #[arg(default_value = "services.json")]
        file: PathBuf,
    },
    /// Print the resource-name-safe form of a name.
    Sanitize {
        /// Name to sanitize.
        name: String,
    },
    /// Generate shell completions for bash, zsh, fish, elvish, or powershell.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.trace {
        "trace"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("KADAPTER_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let json_output = cli.json;

    let result = match cli.command {
        Commands::Inspect { file, service } => {
            commands::inspect::run(&file, service.as_deref(), json_output)
        }
        Commands::Summary { file } => commands::summary::run(&file, json_output),
        Commands::Sanitize { name } => commands::sanitize::run(&name, json_output),
        Commands::Completions { shell } => commands::completions::run::<Cli>(shell),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(msg) => {
            eprintln!("error: {msg}");
            let code = if msg.starts_with("failed to read service file")
                || msg.starts_with("failed to parse service document")
                || msg.starts_with("invalid configuration")
            {
                EXIT_INPUT_ERROR
            } else {
                EXIT_FAILURE
            };
            ExitCode::from(code)
        }
    }
}
