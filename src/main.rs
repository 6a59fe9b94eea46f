// Showcase - three small UI components driven from the terminal
//
// A page mounts a title, a user-info panel, a counter with increment and
// decrement buttons, and a click counter. Each component owns its state and
// returns a document tree; the terminal UI draws those trees and routes
// keyboard and mouse input back as actions.
//
// Architecture:
// - Components: state plus a `render` producing a `dom::Node` tree
// - Page: mounting root that routes actions and re-renders one component
// - TUI (ratatui): draws the page and turns input into actions
// - CLI (clap): headless render and config inspection

mod cli;
mod components;
mod config;
mod dom;
mod logging;
mod page;
mod state;
mod traits;
mod tui;

use anyhow::Result;
use clap::Parser;
use config::Config;
use logging::LogBuffer;
use tui::theme::Theme;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Handle CLI commands first (render, config --show, --path)
    // If a command was handled, exit early
    let cli = cli::Cli::parse();
    if cli::handle_cli(&cli)? {
        return Ok(());
    }

    // Write a commented default config on first run
    Config::ensure_config_exists();

    // Load configuration first to determine TUI vs headless mode
    let config = Config::load()?;

    // In TUI mode logs are captured to this buffer (prevents garbling the display)
    let log_buffer = LogBuffer::new();

    // The guard must be kept alive for the duration of the program to ensure logs flush
    let _file_guard = logging::init(&config.logging, config.enable_tui, &log_buffer);

    tracing::info!(version = config::VERSION, theme = %config.theme, "Starting showcase");

    let page = cli::build_page(&config, None);

    if config.enable_tui {
        let theme = Theme::by_name(&config.theme);
        if !theme.name.eq_ignore_ascii_case(&config.theme) {
            tracing::warn!(requested = %config.theme, using = %theme.name, "Unknown theme");
        }
        tracing::info!(theme = %theme.name, "Starting TUI");
        if let Err(e) = tui::run_tui(page, theme, log_buffer).await {
            tracing::error!("TUI error: {:?}", e);
            return Err(e);
        }
    } else {
        tracing::info!("TUI disabled, printing page once");
        print!("{}", page.document().to_outline());
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
