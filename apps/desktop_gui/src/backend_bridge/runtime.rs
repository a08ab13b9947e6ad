//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::{load_catalog, PressReleaseClient, PressReleaseSource};
use crossbeam_channel::{Receiver, Sender};
use reqwest::Client;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, api_base_url: String) {
    spawn_backend_thread(cmd_rx, ui_tx, api_base_url);
}

fn spawn_backend_thread(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    api_base_url: String,
) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                send_event(
                    &ui_tx,
                    UiEvent::Info(format!(
                        "backend worker startup failure: failed to build runtime: {err}"
                    )),
                );
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let http = Client::new();
            let source: Arc<dyn PressReleaseSource> = Arc::new(
                PressReleaseClient::with_http_client(http.clone(), api_base_url.clone()),
            );
            tracing::info!(api_base_url = %api_base_url, "backend worker ready");
            run_backend_loop(cmd_rx, ui_tx, http, source).await;
        });
    });
}

/// Drains commands until the UI side hangs up. Each fetch runs on its own task so
/// a slow response never holds back a newer selection.
pub(crate) async fn run_backend_loop(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    http: Client,
    source: Arc<dyn PressReleaseSource>,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            BackendCommand::LoadCatalog { source: catalog_source } => {
                send_event(
                    &ui_tx,
                    UiEvent::Info(format!("Loading companies from {catalog_source}")),
                );
                let result = load_catalog(&http, &catalog_source).await;
                send_event(&ui_tx, UiEvent::CatalogLoaded(result));
            }
            BackendCommand::FetchPressReleases { request } => {
                let source = Arc::clone(&source);
                let ui_tx = ui_tx.clone();
                tokio::spawn(async move {
                    let result = source.fetch(&request.ticker).await;
                    send_event(&ui_tx, UiEvent::PressReleasesResolved { request, result });
                });
            }
        }
    }
    tracing::info!("backend command channel closed; worker exiting");
}

fn send_event(ui_tx: &Sender<UiEvent>, event: UiEvent) {
    let name = event.name();
    if let Err(err) = ui_tx.try_send(event) {
        tracing::warn!(event = name, "dropping backend->ui event: {err}");
    }
}
