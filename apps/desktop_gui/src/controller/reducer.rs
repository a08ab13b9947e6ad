//! Render controller: owns the selection session and drives the display surface.

use shared::{
    domain::{Catalog, CompanyRecord, Ticker},
    error::{CatalogError, PressReleaseError},
    protocol::PressRelease,
};
use tracing::{debug, info, warn};

use crate::ui::{
    selector::{selector_options, Selection},
    surface::DisplaySurface,
    view_model::{ResultsView, CATALOG_LOAD_FAILED},
};

/// A press release fetch tagged with the selection that issued it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub request_id: u64,
    pub ticker: Ticker,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    NoneSelected,
    Loading {
        request: FetchRequest,
        company: CompanyRecord,
    },
    Loaded {
        company: CompanyRecord,
        releases: Vec<PressRelease>,
    },
    Failed {
        ticker: Ticker,
        context: Option<String>,
        message: String,
    },
}

#[derive(Debug, Default)]
struct Session {
    catalog: Catalog,
    catalog_error: Option<String>,
    selection: Selection,
    state: SelectionState,
    next_request_id: u64,
}

impl Session {
    fn issue_request(&mut self, ticker: Ticker) -> FetchRequest {
        self.next_request_id += 1;
        FetchRequest {
            request_id: self.next_request_id,
            ticker,
        }
    }
}

pub struct RenderController<S: DisplaySurface> {
    session: Session,
    surface: S,
}

impl<S: DisplaySurface> RenderController<S> {
    pub fn new(surface: S) -> Self {
        let mut controller = Self {
            session: Session::default(),
            surface,
        };
        controller.populate_selector();
        controller.render();
        controller
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn catalog(&self) -> &Catalog {
        &self.session.catalog
    }

    pub fn selection(&self) -> &Selection {
        &self.session.selection
    }

    pub fn state(&self) -> &SelectionState {
        &self.session.state
    }

    /// A failed selection may be picked again to retry it.
    pub fn can_retry(&self) -> bool {
        matches!(self.session.state, SelectionState::Failed { .. })
    }

    /// Replaces the catalog wholesale and returns to the welcome view.
    pub fn on_catalog_loaded(&mut self, result: Result<Catalog, CatalogError>) {
        match result {
            Ok(catalog) => {
                info!(companies = catalog.len(), "controller: catalog ready");
                self.session.catalog = catalog;
                self.session.catalog_error = None;
            }
            Err(err) => {
                warn!("controller: catalog load failed: {err}");
                self.session.catalog = Catalog::default();
                self.session.catalog_error = Some(CATALOG_LOAD_FAILED.to_string());
            }
        }
        self.session.selection = Selection::None;
        self.session.state = SelectionState::NoneSelected;
        self.populate_selector();
        self.render();
    }

    /// Returns the fetch the caller must dispatch, if the selection needs one.
    pub fn on_selection_changed(&mut self, selection: Selection) -> Option<FetchRequest> {
        self.session.selection = selection.clone();

        let request = match selection {
            Selection::None => {
                self.session.catalog_error = None;
                self.session.state = SelectionState::NoneSelected;
                None
            }
            Selection::Ticker(ticker) => match self.session.catalog.find(&ticker).cloned() {
                Some(company) => {
                    let request = self.session.issue_request(ticker);
                    debug!(
                        request_id = request.request_id,
                        ticker = %request.ticker,
                        "controller: loading press releases"
                    );
                    self.session.state = SelectionState::Loading {
                        request: request.clone(),
                        company,
                    };
                    Some(request)
                }
                None => {
                    warn!(ticker = %ticker, "controller: selection not in catalog");
                    self.session.state = SelectionState::Failed {
                        message: format!("Unknown company ticker: {ticker}"),
                        ticker,
                        context: None,
                    };
                    None
                }
            },
        };

        self.surface.set_selected(self.session.selection.clone());
        self.render();
        request
    }

    /// Applies a fetch resolution. Returns `false` when it was superseded and dropped.
    pub fn on_press_releases_resolved(
        &mut self,
        request: &FetchRequest,
        result: Result<Vec<PressRelease>, PressReleaseError>,
    ) -> bool {
        let company = match &self.session.state {
            SelectionState::Loading {
                request: current,
                company,
            } if current == request => company.clone(),
            _ => {
                debug!(
                    request_id = request.request_id,
                    ticker = %request.ticker,
                    "controller: dropping stale press release response"
                );
                return false;
            }
        };

        self.session.state = match result {
            Ok(releases) => SelectionState::Loaded { company, releases },
            Err(err) => {
                warn!(ticker = %company.ticker, "controller: press releases failed: {err}");
                SelectionState::Failed {
                    ticker: company.ticker.clone(),
                    context: Some(format!("Failed to load press releases for {}", company.name)),
                    message: err.to_string(),
                }
            }
        };
        self.render();
        true
    }

    fn populate_selector(&mut self) {
        self.surface
            .populate_selector(selector_options(&self.session.catalog));
        self.surface.set_selected(self.session.selection.clone());
    }

    fn render(&mut self) {
        let loading = matches!(self.session.state, SelectionState::Loading { .. });
        let view = match &self.session.state {
            SelectionState::NoneSelected => match &self.session.catalog_error {
                Some(message) => ResultsView::error(None, message.clone()),
                None => ResultsView::Welcome,
            },
            SelectionState::Loading { .. } => ResultsView::Blank,
            SelectionState::Loaded { company, releases } => {
                ResultsView::for_releases(company, releases)
            }
            SelectionState::Failed {
                context, message, ..
            } => ResultsView::error(context.clone(), message.clone()),
        };
        self.surface.set_loading_visible(loading);
        self.surface.set_results(view);
    }
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
