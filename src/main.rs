//! Astchunk CLI - serve or run the AST chunk extractor from the command line

use astchunk::config;
use astchunk::extract::{DEFAULT_MAX_CHARS, extract_chunks};
use astchunk::language::{supported_languages, tag_from_extension};
use astchunk::server;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "astchunk")]
#[command(version = "0.1.0")]
#[command(about = "AST chunk service - function-level code chunks with structural metadata")]
#[command(long_about = r#"
Astchunk splits source files into one chunk per function/method/constructor,
enriched with the enclosing class, a synthesized API name, and any leading
documentation comment. Oversized bodies additionally get fixed-size
fragment chunks sharing the same metadata.

Example usage:
  astchunk serve --port 8566
  astchunk parse --file src/Account.java
  astchunk languages
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP chunk service
    Serve {
        /// Port to listen on (overrides the config file)
        #[arg(short, long)]
        port: Option<u16>,

        /// Default split threshold in characters (overrides the config file)
        #[arg(short, long)]
        max_chars: Option<usize>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Chunk one file and print the JSON response
    Parse {
        /// Path to the source file
        #[arg(short, long)]
        file: PathBuf,

        /// Language tag (inferred from the file extension when omitted)
        #[arg(short, long)]
        language: Option<String>,

        /// Split threshold in characters
        #[arg(short, long, default_value_t = DEFAULT_MAX_CHARS)]
        max_chars: usize,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// List the language tags in the grammar registry
    Languages,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Serve { port, max_chars, config } => {
            let file_config = config::load_config(config.as_deref())?.unwrap_or_default();
            let port = port.unwrap_or_else(|| file_config.port());
            let max_chars = max_chars.unwrap_or_else(|| file_config.max_chars());
            if max_chars == 0 {
                anyhow::bail!("max_chars must be greater than zero");
            }
            server::start_server(port, max_chars).await?;
        }

        Commands::Parse { file, language, max_chars, pretty } => {
            if max_chars == 0 {
                anyhow::bail!("max_chars must be greater than zero");
            }
            let language = match language {
                Some(tag) => tag.trim().to_lowercase(),
                None => {
                    let ext = file
                        .extension()
                        .and_then(|e| e.to_str())
                        .unwrap_or_default();
                    tag_from_extension(ext)
                        .ok_or_else(|| {
                            anyhow::anyhow!(
                                "cannot infer language for {:?}; pass --language",
                                file
                            )
                        })?
                        .to_string()
                }
            };

            let code = std::fs::read_to_string(&file)?;
            let chunks = extract_chunks(&language, &code, max_chars)?;
            tracing::info!("extracted {} chunks from {:?}", chunks.len(), file);

            let response = serde_json::json!({ "chunks": chunks });
            if pretty {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                println!("{}", serde_json::to_string(&response)?);
            }
        }

        Commands::Languages => {
            for tag in supported_languages() {
                println!("{}", tag);
            }
        }
    }

    Ok(())
}
