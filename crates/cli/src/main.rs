//! Command-line entry point for the pillnav demo.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{Level, info};

use pillnav_tui::{NavOptions, prefs};
use pillnav_types::{IconRequest, IconSlot, IconWeight, NavItem, Position, ThemeChoice};

#[derive(Debug, Parser)]
#[command(name = "pillnav", version, about = "Floating pill navigation bar demo")]
struct Cli {
    /// Bar placement: `bottom` (pill) or `left` (rail).
    #[arg(long)]
    position: Option<String>,

    /// Color palette: `dark` or `light`.
    #[arg(long)]
    theme: Option<String>,

    /// Disable labels next to the active item (bottom placement only).
    #[arg(long)]
    no_labels: bool,

    /// Optional title rendered on the bar border.
    #[arg(long)]
    title: Option<String>,

    /// Item id to activate at startup (defaults to the first item).
    #[arg(long)]
    active: Option<String>,

    /// Persist the chosen theme and position as defaults.
    #[arg(long)]
    remember: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let stored = prefs::load();

    let position = match cli.position.as_deref() {
        Some(value) => value.parse::<Position>().context("invalid --position")?,
        None => stored.position.unwrap_or_default(),
    };
    let theme = match cli.theme.as_deref() {
        Some(value) => value.parse::<ThemeChoice>().context("invalid --theme")?,
        None => stored.theme.unwrap_or_default(),
    };

    if cli.remember {
        prefs::store(&prefs::Preferences {
            theme: Some(theme),
            position: Some(position),
        })
        .context("failed to persist preferences")?;
    }

    let mut options = NavOptions::new(demo_items());
    options.active_id = cli.active;
    options.position = position;
    options.theme = theme;
    options.show_labels = !cli.no_labels;
    options.title = cli.title;
    options.on_select = Some(Box::new(|id| info!(id, "selected")));

    let selected = pillnav_tui::run(options).await?;
    if let Some(id) = selected {
        println!("{id}");
    }
    Ok(())
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Demo item set exercising all three icon shapes: prebuilt glyphs, a
/// factory that thickens when active, and an empty slot.
fn demo_items() -> Vec<NavItem> {
    vec![
        NavItem::new("events", "Events", IconSlot::glyph("✦")),
        NavItem::new("search", "Search", IconSlot::glyph("⌕")),
        NavItem::new(
            "library",
            "Library",
            IconSlot::factory(|request: &IconRequest| {
                match request.weight {
                    IconWeight::Bold => "◆",
                    IconWeight::Regular => "◇",
                }
                .to_string()
            }),
        ),
        NavItem::new("profile", "Profile", IconSlot::None),
    ]
}
