//! # Interactive Console
//!
//! Line-oriented front end for the dashboard. The console restores the
//! persisted session once, then reads commands from stdin until `QUIT` or
//! end of input.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use blitzseller::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.toml").await?;
//!     blitzseller::console::run(&config).await
//! }
//! ```

pub mod commands;
pub mod dashboard;

pub use commands::{help_text, parse_command, ConsoleCommand};
pub use dashboard::Dashboard;

use anyhow::Result;
use log::{info, warn};
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::auth::{SessionStore, SessionStoreBuilder};
use crate::config::Config;
use crate::storage::{KeyValueStore, SledStore};

/// Open the sled-backed session described by `config`.
pub fn open_session(config: &Config) -> Result<SessionStore<SledStore>> {
    let slot = SledStore::open(config.session_db_path())?;
    Ok(SessionStoreBuilder::new(slot)
        .key(&config.storage.session_key)
        .auth_delay(config.auth_delay())
        .open())
}

/// Run the console on stdin/stdout.
pub async fn run(config: &Config) -> Result<()> {
    let mut session = open_session(config)?;
    let mut dashboard = Dashboard::new(config.quest_complete_delay());
    let mut lines = BufReader::new(io::stdin()).lines();
    let mut stdout = io::stdout();

    let banner = format!("{}\n{}\n", config.app.name, config.app.tagline);
    stdout.write_all(banner.as_bytes()).await?;
    if session.is_authenticated() {
        let greeting = dashboard.process_command(&mut session, "go dashboard").await?;
        stdout.write_all(format!("{}\n", greeting).as_bytes()).await?;
    } else {
        stdout.write_all(b"Use LOGIN ou REGISTER. HELP lista os comandos.\n").await?;
    }

    info!("Console started");
    loop {
        stdout.write_all(dashboard.prompt().as_bytes()).await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }
        let reply = run_line(&mut dashboard, &mut session, &line).await;
        stdout.write_all(format!("{}\n", reply).as_bytes()).await?;
        if dashboard.should_quit() {
            break;
        }
    }
    info!("Console closed");
    Ok(())
}

/// Process one line; failures become a message instead of ending the loop.
pub async fn run_line<S: KeyValueStore>(
    dashboard: &mut Dashboard,
    session: &mut SessionStore<S>,
    line: &str,
) -> String {
    match dashboard.process_command(session, line).await {
        Ok(reply) => reply,
        Err(e) => {
            warn!("Command failed: {}", e);
            "Erro inesperado. Tente novamente.".to_string()
        }
    }
}
