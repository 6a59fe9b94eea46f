// CLI module - command-line argument parsing and handlers
//
// Provides subcommands besides the interactive UI:
// - render: mount the page headlessly, replay clicks, print the document
// - config --show: Display effective configuration
// - config --path: Show config file path

use crate::config::{Config, VERSION};
use crate::page::{Page, PageProps};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

/// Showcase - three small UI components in the terminal
#[derive(Parser)]
#[command(name = "showcase")]
#[command(version = VERSION)]
#[command(about = "Static display, dynamic counter and click counter demo", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the page once and print it
    Render {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Click the element with this label (repeatable, applied in order)
        #[arg(long = "click", value_name = "LABEL")]
        clicks: Vec<String>,

        /// Initial value of the dynamic counter
        #[arg(long, allow_negative_numbers = true)]
        count: Option<i64>,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented element outline
    Text,
    /// Document tree as JSON
    Json,
}

/// Handle CLI commands. Returns true if a command was handled (exit after).
pub fn handle_cli(cli: &Cli) -> Result<bool> {
    match &cli.command {
        Some(Commands::Render {
            format,
            clicks,
            count,
        }) => {
            let config = Config::load()?;
            let mut page = build_page(&config, *count);
            apply_clicks(&mut page, clicks)?;
            print!("{}", render_document(&page, *format)?);
            Ok(true)
        }
        Some(Commands::Config { show, path }) => {
            if *path {
                handle_config_path()?;
            } else if *show {
                handle_config_show()?;
            } else {
                // No flag provided, show help
                println!("Usage: showcase config [--show|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --path    Show config file path");
            }
            Ok(true)
        }
        None => Ok(false), // No subcommand, run the page
    }
}

/// Build the showcase page from configuration
///
/// `count` overrides the configured counter seed.
pub fn build_page(config: &Config, count: Option<i64>) -> Page {
    Page::showcase(PageProps {
        title: config.title.clone(),
        user: config.profile.record(chrono::Local::now().date_naive()),
        initial_count: count.unwrap_or(config.counter.initial),
    })
}

/// Click each label in order, stopping at the first unknown one
fn apply_clicks(page: &mut Page, labels: &[String]) -> Result<()> {
    for (i, label) in labels.iter().enumerate() {
        page.click(label)
            .with_context(|| format!("click #{} failed", i + 1))?;
    }
    Ok(())
}

/// Serialize the whole page in the requested format
fn render_document(page: &Page, format: OutputFormat) -> Result<String> {
    let document = page.document();
    match format {
        OutputFormat::Text => Ok(document.to_outline()),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&document)
                .context("Failed to serialize document")?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn handle_config_path() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;
    println!("{}", path.display());
    Ok(())
}

fn handle_config_show() -> Result<()> {
    let config = Config::load()?;

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    // Show source info
    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
    Ok(())
}
