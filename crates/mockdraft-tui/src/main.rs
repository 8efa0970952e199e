// Mock draft board entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, not terminal)
// 2. Load config (seeding config/ from defaults/ on first run)
// 3. Load the player pool and build the DraftState
// 4. Spawn the app task
// 5. Run the TUI until the user quits
// 6. Wait briefly for the app task to finish

use anyhow::Context;
use mockdraft_core::config;
use mockdraft_core::draft::state::DraftState;
use mockdraft_core::players;
use mockdraft_tui::{app, tui};
use tokio::sync::mpsc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;
    info!("Mock draft starting up");

    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "Config loaded: league={}, {} teams, {} rounds, user team {}",
        config.league.name,
        config.league.num_teams,
        config.league.num_rounds,
        config.league.user_team
    );

    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    let players = players::load_players_for(&config, &cwd)
        .with_context(|| format!("failed to load players from {}", config.data.players))?;

    let draft = DraftState::new(config.league.draft_settings(), players)
        .context("failed to set up draft")?;
    if (draft.universe_size() as u64) < u64::from(draft.total_picks()) {
        info!(
            "Only {} players for {} picks; the draft will end early",
            draft.universe_size(),
            draft.total_picks()
        );
    }

    let (cmd_tx, cmd_rx) = mpsc::channel(64);
    let (ui_tx, ui_rx) = mpsc::channel(256);

    let app_state = app::AppState::new(config, draft);
    let app_handle = tokio::spawn(async move {
        if let Err(e) = app::run(cmd_rx, ui_tx, app_state).await {
            error!("Application loop error: {}", e);
        }
    });

    if let Err(e) = tui::run(ui_rx, cmd_tx).await {
        error!("TUI error: {}", e);
    }

    let _ = tokio::time::timeout(std::time::Duration::from_secs(5), app_handle).await;

    info!("Mock draft shut down cleanly");
    Ok(())
}

/// Initialize tracing to log to a file (the terminal belongs to the TUI).
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("mockdraft.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("mockdraft=info,mockdraft_core=info,mockdraft_tui=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
