//! quizmith CLI — the operator-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "quizmith", version, about = "Quiz configuration and scoring toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a quiz configuration document
    Validate {
        /// Path to the quiz-data JSON document
        #[arg(long)]
        data: PathBuf,
    },

    /// List the active question set (override store, then JSON config, then built-in defaults)
    Questions {
        /// Quiz-data JSON path (overrides the configured source)
        #[arg(long)]
        data: Option<PathBuf>,

        /// Override store path
        #[arg(long)]
        store: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Score a recorded set of responses and resolve the profile
    Score {
        /// Path to a JSON array of responses
        #[arg(long)]
        responses: PathBuf,

        /// Quiz-data JSON path (overrides the configured source)
        #[arg(long)]
        data: Option<PathBuf>,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Export the override store's questions to a JSON file
    Export {
        /// Output file path
        #[arg(long)]
        output: PathBuf,

        /// Override store path
        #[arg(long)]
        store: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Replace the override store's questions from a JSON file
    Import {
        /// Input file path
        #[arg(long)]
        input: PathBuf,

        /// Override store path
        #[arg(long)]
        store: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Seed the override store from the JSON config (no-op unless empty)
    Seed {
        /// Quiz-data JSON path (overrides the configured source)
        #[arg(long)]
        data: Option<PathBuf>,

        /// Override store path
        #[arg(long)]
        store: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Replace the override store from the JSON config, discarding admin edits
    Reload {
        /// Confirm the destructive replace
        #[arg(long)]
        force: bool,

        /// Quiz-data JSON path (overrides the configured source)
        #[arg(long)]
        data: Option<PathBuf>,

        /// Override store path
        #[arg(long)]
        store: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Authenticate against the override store
    Login {
        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,

        /// Override store path
        #[arg(long)]
        store: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Clear the authenticated session
    Logout {
        /// Override store path
        #[arg(long)]
        store: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter config and quiz-data document
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizmith=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate { data } => commands::validate::execute(data),
        Commands::Questions {
            data,
            store,
            config,
        } => commands::questions::execute(data, store, config).await,
        Commands::Score {
            responses,
            data,
            format,
            config,
        } => commands::score::execute(responses, data, format, config).await,
        Commands::Export {
            output,
            store,
            config,
        } => commands::export::execute(output, store, config),
        Commands::Import {
            input,
            store,
            config,
        } => commands::import::execute(input, store, config),
        Commands::Seed {
            data,
            store,
            config,
        } => commands::sync::seed(data, store, config).await,
        Commands::Reload {
            force,
            data,
            store,
            config,
        } => commands::sync::reload(force, data, store, config).await,
        Commands::Login {
            username,
            password,
            store,
            config,
        } => commands::auth::login(username, password, store, config),
        Commands::Logout { store, config } => commands::auth::logout(store, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
