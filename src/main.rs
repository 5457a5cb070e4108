mod app;
mod application;
mod config;
mod domain;
mod ui;

use config::Config;
use iced::window;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("{}, falling back to defaults", e);
            Config::default()
        }
    };

    let icon_data = include_bytes!("../assets/icon.png");

    let icon = match image::load_from_memory(icon_data) {
        Ok(img) => {
            let rgba = img.to_rgba8();
            let (width, height) = rgba.dimensions();
            window::icon::from_rgba(rgba.into_raw(), width, height).ok()
        }
        Err(e) => {
            tracing::warn!("Failed to decode window icon: {}", e);
            None
        }
    };

    tracing::info!("Starting Audio Converter");

    iced::application(
        move || app::ConverterApp::new(config.clone()),
        app::update,
        app::view,
    )
    .title("Audio Converter")
    .theme(app::theme)
    .subscription(app::subscription)
    .window(window::Settings {
        icon,
        min_size: Some(iced::Size::new(640.0, 560.0)),
        ..Default::default()
    })
    .run()
}
