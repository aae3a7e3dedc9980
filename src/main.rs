//! Route Shell
//!
//! A terminal single-page-application shell over a declarative nested
//! route table.
//!
//! # Architecture Overview
//!
//! ```text
//!                  ┌──────────────────────────────────────────────┐
//!                  │                 ROUTE SHELL                   │
//!                  │                                               │
//!   Navigation     │  ┌──────────┐   ┌──────────┐   ┌──────────┐  │
//!   event ─────────┼─▶│navigation│──▶│ routing  │──▶│  views   │  │
//!   (open/back)    │  │ history  │   │ resolver │   │ renderer │  │
//!                  │  └──────────┘   └────┬─────┘   └────┬─────┘  │
//!                  │                      │              │        │
//!                  │              ┌───────┴──────┐  ┌────┴─────┐  │
//!   Rendered       │              │ route table  │  │user store│  │
//!   text ◀─────────┼──────────────│ (immutable)  │  │(ordered) │  │
//!                  │              └──────────────┘  └──────────┘  │
//!                  │                                               │
//!                  │  ┌─────────────────────────────────────────┐ │
//!                  │  │  Cross-cutting: config, observability   │ │
//!                  │  └─────────────────────────────────────────┘ │
//!                  └──────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use route_shell::config::AppConfig;
use route_shell::observability::init_logging;
use route_shell::App;

#[derive(Parser)]
#[command(name = "route-shell")]
#[command(about = "Terminal demo of declarative nested routing", long_about = None)]
struct Cli {
    /// TOML config file; built-in demo defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve one path and print the rendered page
    Render {
        #[arg(short, long, default_value = "/")]
        path: String,

        /// Print the matched chain as JSON instead of rendered text
        #[arg(long)]
        json: bool,
    },
    /// Interactive navigation shell
    Shell,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    init_logging(&config.observability);

    tracing::info!(
        users = config.users.len(),
        start_path = %config.start_path,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Render { path, json } => {
            let mut app = App::new(config)?;
            let output = app.navigate(&path);
            if json {
                match app.resolve_current() {
                    Some(resolution) => println!("{}", serde_json::to_string_pretty(&resolution)?),
                    None => println!("null"),
                }
            } else {
                print!("{}", output);
            }
        }
        Commands::Shell => run_shell(App::new(config)?)?,
    }

    Ok(())
}

/// Interactive loop: one navigation event per line, most recent wins.
fn run_shell(mut app: App) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    print!("{}", app.render_current());
    loop {
        print!("{}> ", app.current_path());
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim();
        let mut parts = line.splitn(2, char::is_whitespace);
        let command = parts.next().unwrap_or("");
        let argument = parts.next().map(str::trim);

        match (command, argument) {
            ("open", Some(target)) => print!("{}", app.navigate(target)),
            ("open", None) => println!("usage: open <path>"),
            ("back", _) => print!("{}", app.back()),
            ("help", _) | ("?", _) => {
                println!("commands: open <path> (absolute or relative) | back | quit")
            }
            ("quit", _) | ("exit", _) => break,
            ("", _) => {}
            (other, _) => println!("unknown command: {} (try 'help')", other),
        }
    }

    Ok(())
}
