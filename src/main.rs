//! Commander Randomizer CLI
//!
//! Interactive terminal front end plus a couple of one-shot helpers:
//! - Browse commanders (home and detail pages)
//! - Fetch a single commander as JSON
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use commander_randomizer::{
    generate_default_config, logging, Action, App, CommanderClient, CommanderSource, Config,
    TerminalAlerts,
};
use std::ops::ControlFlow;
use std::path::PathBuf;
use std::rc::Rc;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

#[derive(Parser)]
#[command(name = "commander")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Randomize Commander - draw a random commander from the API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// API base URL, overrides the config file
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse commanders interactively (default)
    Run {
        /// Route to open first
        #[arg(short, long, default_value = "/")]
        path: String,
    },

    /// Fetch one commander and print it as JSON
    Fetch,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };

    logging::init(&loaded.config.logging);
    tracing::info!("Commander Randomizer v{}", env!("CARGO_PKG_VERSION"));
    loaded.report();

    let mut config = loaded.config;
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }
    tracing::info!("API base URL: {}", config.api.base_url);

    let client = Rc::new(CommanderClient::new(&config.api.base_url));

    match cli.command.unwrap_or(Commands::Run {
        path: "/".to_string(),
    }) {
        Commands::Run { path } => run_interactive(client, &path).await,
        Commands::Fetch => {
            let payload = client
                .fetch_commander()
                .await
                .with_context(|| format!("GET {}", client.commander_url()))?;
            println!("{}", payload.to_pretty());
            Ok(())
        }
        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
            Ok(())
        }
    }
}

type InputLines = Lines<BufReader<Stdin>>;

async fn run_interactive(client: Rc<CommanderClient>, path: &str) -> anyhow::Result<()> {
    let alerts = Rc::new(TerminalAlerts::new());
    let mut app = App::new(client, alerts.clone()).with_frame_sink(|frame| {
        println!("\n{}", frame);
    });
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    app.start(path).await;
    acknowledge_alerts(&alerts, &mut lines).await?;

    while let Some(line) = lines.next_line().await? {
        let Some(action) = Action::parse(&line) else {
            if !line.trim().is_empty() {
                eprintln!("Unknown command '{}'", line.trim());
            }
            continue;
        };

        if let ControlFlow::Break(()) = app.dispatch(action).await {
            break;
        }
        acknowledge_alerts(&alerts, &mut lines).await?;
    }

    tracing::info!("Bye");
    Ok(())
}

/// Hold each pending alert on screen until the user presses Enter
async fn acknowledge_alerts(alerts: &TerminalAlerts, lines: &mut InputLines) -> anyhow::Result<()> {
    while let Some(message) = alerts.take() {
        eprintln!("{}", TerminalAlerts::banner(&message));
        if lines.next_line().await?.is_none() {
            break;
        }
    }
    Ok(())
}
