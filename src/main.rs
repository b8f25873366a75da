mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use joi::config::JoiConfig;
use joi::server;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "joi", version, about = "Knowledge-grounded assistant backend")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the server (MCP over stdio, or HTTP API + MCP)
    Serve {
        /// Override the configured transport
        #[arg(long, value_enum)]
        transport: Option<Transport>,
    },
    /// Answer a question from the knowledge base
    Ask {
        query: String,
    },
    /// Ranked keyword search over knowledge chunks
    Search {
        query: String,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Send a message to the local model, grounded in retrieved facts
    Chat {
        message: String,
        /// Send the message without retrieved context
        #[arg(long)]
        no_context: bool,
    },
    /// List indexed knowledge chunks
    Chunks {
        #[arg(long)]
        category: Option<String>,
    },
    /// Show index statistics
    Stats,
    /// Run the demonstration questions
    Demo,
}

#[derive(Clone, Copy, ValueEnum)]
enum Transport {
    Stdio,
    Http,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config (for log level)
    let config = JoiConfig::load()?;

    // Log to stderr so stdout stays clean for MCP JSON-RPC.
    let filter = EnvFilter::try_new(&config.server.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Serve { transport } => {
            let transport = match transport {
                Some(Transport::Stdio) => "stdio".to_string(),
                Some(Transport::Http) => "http".to_string(),
                None => config.server.transport.clone(),
            };
            match transport.as_str() {
                "stdio" => server::serve_stdio(config).await?,
                "http" => server::serve_http(config).await?,
                other => anyhow::bail!("unknown transport: {other}. Supported: stdio, http"),
            }
        }
        Command::Ask { query } => cli::ask::ask(&config, &query)?,
        Command::Search { query, limit } => cli::search::search(&config, &query, limit)?,
        Command::Chat {
            message,
            no_context,
        } => cli::chat::chat(&config, &message, !no_context).await?,
        Command::Chunks { category } => cli::chunks::chunks(&config, category.as_deref())?,
        Command::Stats => cli::stats::stats(&config)?,
        Command::Demo => cli::demo::demo(&config)?,
    }

    Ok(())
}
