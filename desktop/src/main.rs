//! Parley Desktop Client
//!
//! Login and navigation shell for the Parley chat client.
//! Built with iced GUI framework.

mod app;
mod config;
mod messages;
mod screens;
mod state;
mod theme;

use iced::{Application, Settings, Size};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "parley_desktop=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Parley Desktop v{}", env!("CARGO_PKG_VERSION"));

    // Get data directory
    let data_dir = dirs::data_local_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("parley");

    std::fs::create_dir_all(&data_dir).ok();

    tracing::info!("Data directory: {:?}", data_dir);

    let config = config::AppConfig::load(&data_dir).unwrap_or_else(|e| {
        tracing::warn!("Using default config: {}", e);
        config::AppConfig::default()
    });

    let text_size = config.ui.font_size;

    app::Parley::run(Settings {
        window: iced::window::Settings {
            size: Size::new(420.0, 760.0),
            min_size: Some(Size::new(360.0, 600.0)),
            position: iced::window::Position::Centered,
            ..Default::default()
        },
        default_font: iced::Font::DEFAULT,
        default_text_size: iced::Pixels(text_size),
        antialiasing: true,
        flags: app::Flags { data_dir, config },
        ..Default::default()
    })
}
