//! Jarvis CLI - terminal console for agent webhooks
//!
//! Usage:
//!   jarvis console              Launch the interactive console
//!   jarvis send -a <id> <cmd>   Send a single command headlessly
//!   jarvis agents               List configured agents
//!   jarvis init                 Write a default configuration file

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use jarvis_client::WebhookClient;
use jarvis_core::{
    validate_command, ErrorInfo, JarvisConfig, JarvisError, DEFAULT_CONFIG_FILE,
};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "jarvis")]
#[command(version, about = "Terminal console for dispatching agent commands over a webhook")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to the configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive console
    Console,

    /// Send a single command without the console UI
    Send {
        /// Agent to dispatch the command to
        #[arg(short, long)]
        agent: String,

        /// Extra context as a JSON object
        #[arg(long, value_name = "JSON")]
        context: Option<String>,

        /// Command text
        #[arg(required = true)]
        command: Vec<String>,
    },

    /// List configured agents
    Agents,

    /// Write a default configuration file
    Init {
        /// Target path
        #[arg(default_value = DEFAULT_CONFIG_FILE)]
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging; the console owns the terminal in raw mode, so only
    // surface errors there unless verbose was requested
    let level = if cli.verbose {
        Level::DEBUG
    } else if matches!(cli.command, Commands::Console) {
        Level::ERROR
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Console => cmd_console(&cli.config).await,
        Commands::Send {
            agent,
            context,
            command,
        } => cmd_send(&cli.config, agent, context, command).await,
        Commands::Agents => cmd_agents(&cli.config),
        Commands::Init { path } => cmd_init(path),
    }
}

async fn cmd_console(config_path: &Path) -> Result<()> {
    let config = JarvisConfig::load_or_default(config_path)?;
    let client = WebhookClient::new(config.api.clone());

    jarvis_console::run(config, client)
        .await
        .context("console terminated with an error")
}

async fn cmd_send(
    config_path: &Path,
    agent: String,
    context: Option<String>,
    command: Vec<String>,
) -> Result<()> {
    let config = JarvisConfig::load_or_default(config_path)?;

    let command = command.join(" ");
    let command = validate_command(&command)
        .map_err(|e| JarvisError::InvalidCommand(e.to_string()))?
        .to_string();

    let Some(agent) = config.enabled_agent(&agent) else {
        return Err(JarvisError::AgentNotFound(agent).into());
    };

    let context: Map<String, Value> = match context {
        Some(raw) => serde_json::from_str(&raw).context("context must be a JSON object")?,
        None => Map::new(),
    };

    let client = WebhookClient::new(config.api.clone());
    info!("Sending command to agent {}", agent.id);

    match client.send_command(&agent.id, &command, context).await {
        Ok(response) => {
            let body = response.text().await.unwrap_or_default();
            if !body.is_empty() {
                println!("{}", body);
            }
            Ok(())
        }
        Err(e) => {
            let display = ErrorInfo::from_error(&e);
            eprintln!("{}", display.user_message);
            Err(e.into())
        }
    }
}

fn cmd_agents(config_path: &Path) -> Result<()> {
    let config = JarvisConfig::load_or_default(config_path)?;

    for agent in &config.agents {
        let status = if agent.enabled { "enabled" } else { "disabled" };
        println!(
            "{} {:<16} {:<9} {}",
            agent.icon, agent.id, status, agent.description
        );
    }

    Ok(())
}

fn cmd_init(path: PathBuf) -> Result<()> {
    if path.exists() {
        bail!("{} already exists", path.display());
    }

    JarvisConfig::write_default(&path)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}
