use std::sync::Arc;

use audio::CommandPlayer;
use clap::Parser;
use config::Config;
use dictionary::Dictionary;
use presentation::Theme;
use render::{print_view, OutputMode};
use session::Session;
use storage::Storage;
use tracing_subscriber::EnvFilter;
use widget::LookupWidget;

mod audio;
mod config;
mod presentation;
mod render;
mod session;
mod storage;
mod utilities;
mod view;
mod widget;

#[derive(Parser, Debug)]
#[command(name = "word-lookup", about = "Look up English words in the Free Dictionary API", version)]
struct Cli {
    /// Word to look up. Starts an interactive prompt when omitted.
    word: Option<String>,

    /// Emit JSON instead of formatted text.
    #[arg(long)]
    json: bool,

    /// Switch to a theme and remember it.
    #[arg(long, value_enum)]
    theme: Option<Theme>,

    /// Font for this session: "Sans Serif", "Serif" or "Mono".
    #[arg(long)]
    font: Option<String>,

    /// SQLite database holding preferences.
    #[arg(long)]
    database: Option<String>,

    /// Base url of the dictionary API.
    #[arg(long)]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = Config::new();
    if let Some(database) = cli.database {
        config.db_url = database;
    }
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }

    let storage = Storage::initialize(&config.db_url).await?;
    let dict = Arc::new(Dictionary::with_base_url(&config.api_url)?);

    let mut widget = LookupWidget::new();
    widget.restore_theme(&storage).await?;
    if let Some(theme) = cli.theme {
        widget.set_theme(theme, &storage).await?;
    }
    if let Some(font) = cli.font {
        if widget.select_font(&font).is_none() {
            tracing::warn!(%font, "unknown font, keeping {}", widget.presentation().font.name());
        }
    }
    let output = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Text
    };

    match cli.word {
        Some(word) => {
            widget.search(dict.as_ref(), &word).await;
            print_view(&widget.render(), widget.presentation(), output)?;
        }
        None => {
            let player = CommandPlayer::new(config.audio_player, config.audio_args);
            Session::new(widget, storage, dict, Box::new(player), output)
                .run()
                .await?;
        }
    }
    Ok(())
}
