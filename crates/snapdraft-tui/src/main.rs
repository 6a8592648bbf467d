// Draft assistant entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, not terminal)
// 2. Load config, apply command-line overrides
// 3. Load projections
// 4. Build the draft board
// 5. Run the TUI until the user quits

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use snapdraft_core::config;
use snapdraft_core::draft::{BoardSettings, DraftBoard};
use snapdraft_core::projections;
use snapdraft_tui::app;
use snapdraft_tui::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 1. Initialize tracing (log to file, not terminal)
    init_tracing()?;
    info!("Snapdraft starting up");

    // 2. Load config
    let mut config = config::load_config().context("failed to load configuration")?;
    let explicit_path = cli.apply(&mut config);
    info!(
        "Config loaded: league={}, {} teams, slot {}",
        config.league.name, config.league.num_teams, config.league.draft_slot
    );

    // 3. Load projections
    let path = explicit_path.unwrap_or_else(|| {
        projections::projections_path(
            &PathBuf::from(&config.data.projections_dir),
            config.data.season(),
        )
    });
    info!("Loading projections from {}", path.display());
    let players = projections::load_projections(&path)
        .with_context(|| format!("failed to load projections from {}", path.display()))?;
    info!("Loaded {} players", players.len());

    // 4. Build the draft board
    let board = DraftBoard::new(players, BoardSettings::from_config(&config));

    // 5. Run the TUI (blocks until the user quits)
    app::run(board, &config).await.context("TUI error")?;

    info!("Snapdraft shut down cleanly");
    Ok(())
}

/// Initialize tracing to log to a file (not the terminal, which is used by the TUI).
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("snapdraft.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("snapdraft=info,snapdraft_core=info,snapdraft_tui=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
