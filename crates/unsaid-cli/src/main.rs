use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "unsaid")]
#[command(about = "UNSAID CLI - emotional translation with local validation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate raw emotional text and persist the result
    Translate {
        /// The raw text to translate
        text: String,
        /// Session the record belongs to
        #[arg(long, default_value = "default")]
        session: String,
    },
    /// Show recent translations for a session (newest first, capped at 50)
    History {
        /// Session to list
        #[arg(long, default_value = "default")]
        session: String,
    },
    /// Delete a single translation by id
    Delete {
        /// Record id to delete
        id: String,
    },
    /// Delete all translations for a session
    Clear {
        /// Session to clear
        #[arg(long, default_value = "default")]
        session: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let service = commands::build_service()?;

    match cli.command {
        Commands::Translate { text, session } => {
            commands::translate::run(&service, &text, &session).await?
        }
        Commands::History { session } => commands::history::run(&service, &session).await?,
        Commands::Delete { id } => commands::delete::run(&service, &id).await?,
        Commands::Clear { session } => commands::delete::clear(&service, &session).await?,
    }

    Ok(())
}
