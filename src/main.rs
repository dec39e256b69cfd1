//! hotkey: inspect hotkey strings and try out keymaps
//!
//! Subcommands:
//! - `parse`: show how hotkey strings are interpreted
//! - `keys`: list key identifiers and their display labels
//! - `match`: resolve key presses against a set of bindings

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use hotkey_bindings::commands;
use hotkey_bindings::{Config, Keycode, Platform};

#[derive(Debug, Parser)]
#[command(name = "hotkey", version, about = "Parse, format and match keyboard hotkeys")]
struct Cli {
    /// Platform used for display labels (macos, windows, linux)
    #[arg(long, global = true)]
    platform: Option<Platform>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse hotkey strings such as "A Ctrl, Shift" or "Escape"
    Parse {
        #[arg(required = true)]
        texts: Vec<String>,
    },

    /// List every key identifier with its display label
    Keys,

    /// Resolve key presses against bindings
    Match {
        /// Binding in the form ACTION=HOTKEY, may be repeated
        #[arg(long = "bind", value_name = "ACTION=HOTKEY")]
        bindings: Vec<String>,

        /// Print each event as a JSON object
        #[arg(long)]
        json: bool,

        /// Hotkeys to press, in order
        #[arg(required = true)]
        presses: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load().context("failed to load configuration")?;
    if let Some(platform) = cli.platform {
        config.platform = platform;
    }
    debug!(?config, "configuration loaded");

    match cli.command {
        Command::Parse { texts } => {
            let parsed = commands::parse_inputs(&texts);
            for input in &parsed {
                println!("{}", input.describe(config.platform));
            }
            commands::ensure_all_parsed(&parsed)
        }
        Command::Keys => {
            list_keys();
            Ok(())
        }
        Command::Match {
            bindings,
            json,
            presses,
        } => {
            let report =
                commands::match_presses(&bindings, &presses, config.channel_capacity).await?;
            let lines = if json {
                report.json_lines()?
            } else {
                report.lines(config.platform)
            };
            for line in lines {
                println!("{}", line);
            }
            Ok(())
        }
    }
}

fn list_keys() {
    for key in Keycode::ALL {
        println!("{:<16} {}", key.name(), key.display_name());
    }
}
