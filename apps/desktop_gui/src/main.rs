mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use client_core::load_settings;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::{
    backend_bridge::commands::BackendCommand, controller::events::UiEvent, ui::PressDeskApp,
};

#[derive(Parser, Debug)]
#[command(name = "press-desk-gui", about = "Browse company press releases")]
struct StartupArgs {
    /// Base URL of the press release API, e.g. http://127.0.0.1:8000/api
    #[arg(long)]
    api_base_url: Option<String>,
    /// Catalog CSV path or http(s) URL
    #[arg(long)]
    catalog: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = StartupArgs::parse();
    let settings = load_settings().with_overrides(args.api_base_url, args.catalog);
    tracing::info!(
        api_base_url = %settings.api_base_url,
        catalog = %settings.catalog_source,
        "starting press desk"
    );

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, settings.api_base_url.clone());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Press Desk")
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    let catalog_source = settings.catalog();
    eframe::run_native(
        "Press Desk",
        options,
        Box::new(move |_cc| Ok(Box::new(PressDeskApp::new(cmd_tx, ui_rx, catalog_source)))),
    )
    .map_err(|err| anyhow::anyhow!("desktop window failed: {err}"))
}
