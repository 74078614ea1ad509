// trendy entry point.
// Parses the command line, then either prints JSON or starts the terminal viewer.

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::error;

use trendy::app::App;
use trendy::state::Filters;
use trendy::{Result, TrendingClient, TrendingConfig, logging};

/// Browse GitHub trending repositories and developers.
#[derive(Debug, Parser)]
#[command(name = "trendy", version, about)]
struct Cli {
    /// Programming language filter (empty for all languages)
    #[arg(short, long, global = true, default_value = "")]
    language: String,

    /// Trending window: daily, weekly or monthly
    #[arg(short, long, global = true, default_value = "daily")]
    since: String,

    /// Spoken language code for repositories, e.g. "en" or "zh"
    #[arg(long, global = true, default_value = "")]
    spoken_language: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print trending repositories as JSON
    Repos,
    /// Print trending developers as JSON
    Developers,
}

impl Cli {
    fn filters(&self) -> Filters {
        Filters {
            language: self.language.clone(),
            since: self.since.clone(),
            spoken_language: self.spoken_language.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "trendy failed");
            eprintln!("trendy: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    // Logging is best-effort; a read-only cache dir shouldn't stop the viewer.
    if let Err(e) = logging::init() {
        eprintln!("trendy: logging disabled: {}", e);
    }

    let client = Arc::new(TrendingClient::new(TrendingConfig::from_env()?)?);
    let filters = cli.filters();

    match cli.command {
        Some(Command::Repos) => {
            let repos = client.fetch_repositories(&filters.repository_query()).await?;
            print_json(&repos)
        }
        Some(Command::Developers) => {
            let devs = client.fetch_developers(&filters.developer_query()).await?;
            print_json(&devs)
        }
        None => {
            let mut app = App::new(client, filters);
            let mut terminal = ratatui::init();
            let result = app.run(&mut terminal);
            ratatui::restore();
            Ok(result?)
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
