//! egui shell: draws the surface model and forwards selector changes to the controller.

use std::time::Duration;

use client_core::{release_count_line, CatalogSource};
use shared::error::PressReleaseError;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::{
    backend_bridge::commands::BackendCommand,
    controller::{
        events::UiEvent, orchestration::dispatch_backend_command, RenderController, SelectionState,
    },
    ui::{
        selector::Selection,
        surface::SurfaceModel,
        view_model::{
            ResultsView, ERROR_HEADING, NO_RELEASES_HEADING, WELCOME_BODY, WELCOME_HEADING,
        },
    },
};

pub struct PressDeskApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    controller: RenderController<SurfaceModel>,
    catalog_source: CatalogSource,
    status: String,
}

impl PressDeskApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        catalog_source: CatalogSource,
    ) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            controller: RenderController::new(SurfaceModel::default()),
            catalog_source,
            status: String::new(),
        };
        app.reload_catalog();
        app
    }

    fn reload_catalog(&mut self) {
        let source = self.catalog_source.clone();
        dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::LoadCatalog { source },
            &mut self.status,
        );
    }

    fn select(&mut self, selection: Selection) {
        if self.controller.selection() == &selection && !self.controller.can_retry() {
            return;
        }
        let Some(request) = self.controller.on_selection_changed(selection) else {
            return;
        };
        let queued = dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::FetchPressReleases {
                request: request.clone(),
            },
            &mut self.status,
        );
        if !queued {
            let reason = PressReleaseError::Transport(self.status.clone());
            self.controller.on_press_releases_resolved(&request, Err(reason));
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            tracing::trace!(event = event.name(), "ui event");
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::CatalogLoaded(result) => {
                    let failure = result.as_ref().err().map(ToString::to_string);
                    self.controller.on_catalog_loaded(result);
                    self.status = failure.unwrap_or_else(|| {
                        format!("{} companies loaded", self.controller.catalog().len())
                    });
                }
                UiEvent::PressReleasesResolved { request, result } => {
                    if self.controller.on_press_releases_resolved(&request, result) {
                        self.status = self.resolution_status();
                    }
                }
            }
        }
    }

    fn resolution_status(&self) -> String {
        match self.controller.state() {
            SelectionState::Loaded { company, releases } => {
                format!("{}: {}", company.label(), release_count_line(releases.len()))
            }
            SelectionState::Failed { ticker, message, .. } => {
                format!("Request for {ticker} failed: {message}")
            }
            _ => String::new(),
        }
    }

    fn show_selector_bar(&mut self, ctx: &egui::Context) {
        let mut picked: Option<Selection> = None;
        let mut reload = false;

        egui::TopBottomPanel::top("selector_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.heading("Company Press Releases");
            ui.horizontal(|ui| {
                let surface = self.controller.surface();
                let retry_allowed = self.controller.can_retry();
                egui::ComboBox::from_id_salt("company_select")
                    .selected_text(surface.selected_label())
                    .width(360.0)
                    .show_ui(ui, |ui| {
                        for option in &surface.options {
                            let is_selected = option.value == surface.selected;
                            if ui
                                .selectable_label(is_selected, option.label.as_str())
                                .clicked()
                                && (!is_selected || retry_allowed)
                            {
                                picked = Some(option.value.clone());
                            }
                        }
                    });
                if ui.button("Reload companies").clicked() {
                    reload = true;
                }
            });
            ui.add_space(6.0);
        });

        if let Some(selection) = picked {
            self.select(selection);
        }
        if reload {
            self.reload_catalog();
        }
    }

    fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.weak(self.status.as_str());
        });
    }

    fn show_results(&self, ctx: &egui::Context) {
        let surface = self.controller.surface();
        egui::CentralPanel::default().show(ctx, |ui| {
            if surface.loading_visible {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading press releases...");
                });
            }

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| render_results(ui, &surface.results));
        });
    }
}

fn render_results(ui: &mut egui::Ui, view: &ResultsView) {
    match view {
        ResultsView::Welcome => {
            ui.heading(WELCOME_HEADING);
            ui.label(WELCOME_BODY);
        }
        ResultsView::Blank => {}
        ResultsView::NoReleases { company_label } => {
            ui.heading(NO_RELEASES_HEADING);
            ui.label(ResultsView::no_releases_body(company_label));
        }
        ResultsView::Releases {
            heading,
            count_line,
            items,
        } => {
            ui.heading(heading.as_str());
            ui.weak(count_line.as_str());
            ui.separator();
            for item in items {
                ui.group(|ui| {
                    ui.set_width(ui.available_width());
                    ui.label(egui::RichText::new(item.title.as_str()).strong().size(16.0));
                    ui.weak(item.date.as_str());
                    ui.label(item.summary.as_str());
                    if let Some(link) = &item.link {
                        ui.hyperlink_to("Read Full Release", link);
                    }
                });
                ui.add_space(8.0);
            }
        }
        ResultsView::Error {
            context,
            message,
            hint,
        } => {
            let error_color = ui.visuals().error_fg_color;
            ui.heading(egui::RichText::new(ERROR_HEADING).color(error_color));
            if let Some(context) = context {
                ui.label(context.as_str());
            }
            ui.colored_label(error_color, message.as_str());
            ui.weak(*hint);
        }
    }
}

impl eframe::App for PressDeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        self.show_selector_bar(ctx);
        self.show_status_bar(ctx);
        self.show_results(ctx);

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crossbeam_channel::bounded;
    use shared::domain::{Catalog, CompanyRecord, Ticker};

    use super::*;

    fn app_with_queue(capacity: usize) -> (PressDeskApp, Receiver<BackendCommand>) {
        let (cmd_tx, cmd_rx) = bounded(capacity);
        let (_ui_tx, ui_rx) = bounded(8);
        let mut app = PressDeskApp::new(
            cmd_tx,
            ui_rx,
            CatalogSource::Path(PathBuf::from("top100PRs.csv")),
        );
        app.controller.on_catalog_loaded(Ok(Catalog::new(vec![CompanyRecord::new(
            "Acme Corp",
            "ACM",
        )])));
        (app, cmd_rx)
    }

    fn acme() -> Selection {
        Selection::Ticker(Ticker::new("ACM"))
    }

    #[test]
    fn disconnected_worker_moves_selection_to_error() {
        let (mut app, cmd_rx) = app_with_queue(4);
        drop(cmd_rx);

        app.select(acme());

        let surface = app.controller.surface();
        assert!(!surface.loading_visible);
        assert!(matches!(
            &surface.results,
            ResultsView::Error { message, .. } if message.contains("disconnected")
        ));
        assert!(app.controller.can_retry());
    }

    #[test]
    fn full_queue_failure_can_be_retried_once_drained() {
        // The initial catalog load occupies the only slot.
        let (mut app, cmd_rx) = app_with_queue(1);

        app.select(acme());
        assert!(matches!(
            app.controller.state(),
            SelectionState::Failed { message, .. } if message.contains("queue is full")
        ));

        assert!(matches!(
            cmd_rx.try_recv(),
            Ok(BackendCommand::LoadCatalog { .. })
        ));
        app.select(acme());

        assert!(matches!(app.controller.state(), SelectionState::Loading { .. }));
        assert!(app.controller.surface().loading_visible);
        assert!(matches!(
            cmd_rx.try_recv(),
            Ok(BackendCommand::FetchPressReleases { request }) if request.ticker.as_str() == "ACM"
        ));
    }
}
