use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;

use blitzseller::config::Config;
use blitzseller::console;
use blitzseller::settings::segment_label;

#[derive(Parser)]
#[command(name = "blitzseller")]
#[command(about = "Gamified sales dashboard for field sellers")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive dashboard console
    Start,
    /// Write a default configuration file
    Init,
    /// Show the stored session
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Start => {
            let config = Config::load(&cli.config).await?;
            init_logging(Some(&config), cli.verbose);
            info!("Starting BlitzSeller v{}", env!("CARGO_PKG_VERSION"));
            console::run(&config).await?;
        }
        Commands::Init => {
            init_logging(None, cli.verbose);
            Config::create_default(&cli.config).await?;
            info!("Configuration file created at {}", cli.config);
        }
        Commands::Status => {
            let config = Config::load(&cli.config).await?;
            init_logging(Some(&config), cli.verbose);
            let session = console::open_session(&config)?;
            match session.current() {
                Some(user) => {
                    println!("Usuário: {} <{}>", user.name, user.email);
                    println!(
                        "Nível {} | {}/{} XP | {} moedas | sequência {}",
                        user.level,
                        user.xp,
                        user.xp_to_next_level(),
                        user.coins,
                        user.streak
                    );
                    println!("Segmento primário: {}", segment_label(user.primary_segment));
                    println!("Último acesso: {}", user.last_active_at.format("%Y-%m-%d %H:%M"));
                }
                None => println!("Nenhuma sessão ativa."),
            }
        }
    }

    Ok(())
}

fn init_logging(config: Option<&Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
    let base_level = match verbosity {
        0 => config
            .and_then(|c| c.logging.level.parse().ok())
            .unwrap_or(log::LevelFilter::Info),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);

    let log_file = config
        .and_then(|c| c.logging.file.as_ref())
        .and_then(|path| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .ok()
        });

    if let Some(f) = log_file {
        let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));
        // The console owns stdout; echo to stderr only when asked for detail
        // on an interactive terminal.
        let echo = verbosity > 0 && atty::is(atty::Stream::Stderr);
        builder.format(move |fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            let line = format!("{} [{}] {}", ts, record.level(), record.args());
            if let Ok(mut guard) = write_mutex.lock() {
                let _ = writeln!(guard, "{}", line);
            }
            if echo {
                writeln!(fmt, "{}", line)
            } else {
                Ok(())
            }
        });
    } else {
        builder.format(|fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
        });
    }
    let _ = builder.try_init();
}
