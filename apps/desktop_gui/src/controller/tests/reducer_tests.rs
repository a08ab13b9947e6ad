use super::*;
use crate::ui::{
    selector::{SelectorOption, SENTINEL_LABEL},
    surface::SurfaceModel,
    view_model::{ERROR_HINT, NO_RELEASES_HEADING},
};

#[derive(Default)]
struct RecordingSurface {
    model: SurfaceModel,
    populate_calls: usize,
}

impl DisplaySurface for RecordingSurface {
    fn populate_selector(&mut self, options: Vec<SelectorOption>) {
        self.populate_calls += 1;
        self.model.populate_selector(options);
    }

    fn set_selected(&mut self, selection: Selection) {
        self.model.set_selected(selection);
    }

    fn set_results(&mut self, view: ResultsView) {
        self.model.set_results(view);
    }

    fn set_loading_visible(&mut self, visible: bool) {
        self.model.set_loading_visible(visible);
    }
}

fn acme_catalog() -> Catalog {
    Catalog::new(vec![
        CompanyRecord::new("Acme Corp", "ACM"),
        CompanyRecord::new("Globex", "GBX"),
    ])
}

fn loaded_controller() -> RenderController<RecordingSurface> {
    let mut controller = RenderController::new(RecordingSurface::default());
    controller.on_catalog_loaded(Ok(acme_catalog()));
    controller
}

fn select(controller: &mut RenderController<RecordingSurface>, ticker: &str) -> FetchRequest {
    controller
        .on_selection_changed(Selection::Ticker(Ticker::new(ticker)))
        .expect("fetch request")
}

fn item_count(view: &ResultsView) -> usize {
    match view {
        ResultsView::Releases { items, .. } => items.len(),
        _ => 0,
    }
}

fn release(title: &str) -> PressRelease {
    PressRelease {
        title: Some(title.to_string()),
        summary: Some("summary".to_string()),
        publication_date: "2024-03-05T10:00:00Z".to_string(),
        url: None,
    }
}

#[test]
fn starts_in_welcome_with_sentinel_only() {
    let controller = RenderController::new(RecordingSurface::default());
    let model = &controller.surface().model;

    assert_eq!(controller.state(), &SelectionState::NoneSelected);
    assert_eq!(model.results, ResultsView::Welcome);
    assert!(!model.loading_visible);
    assert_eq!(model.options.len(), 1);
    assert_eq!(model.options[0].label, SENTINEL_LABEL);
}

#[test]
fn single_company_catalog_shows_label_and_sentinel() {
    let mut controller = RenderController::new(RecordingSurface::default());
    let catalog = client_core::parse_catalog("name;ticker\nAcme Corp;ACM\n").expect("parse");
    controller.on_catalog_loaded(Ok(catalog));

    let labels: Vec<_> = controller
        .surface()
        .model
        .options
        .iter()
        .map(|o| o.label.as_str())
        .collect();
    assert_eq!(labels, vec![SENTINEL_LABEL, "Acme Corp (ACM)"]);
}

#[test]
fn repopulating_with_same_catalog_does_not_duplicate_options() {
    let mut controller = loaded_controller();
    controller.on_catalog_loaded(Ok(acme_catalog()));

    let surface = controller.surface();
    assert!(surface.populate_calls >= 2);
    assert_eq!(surface.model.options.len(), acme_catalog().len() + 1);
}

#[test]
fn selecting_company_shows_loading_then_results() {
    let mut controller = loaded_controller();
    let request = select(&mut controller, "ACM");

    assert_eq!(request.ticker, Ticker::new("ACM"));
    assert!(controller.surface().model.loading_visible);
    assert_eq!(controller.surface().model.results, ResultsView::Blank);
    assert_eq!(
        controller.surface().model.selected,
        Selection::Ticker(Ticker::new("ACM"))
    );

    let applied = controller
        .on_press_releases_resolved(&request, Ok(vec![release("a"), release("b"), release("c")]));

    assert!(applied);
    let model = &controller.surface().model;
    assert!(!model.loading_visible);
    assert_eq!(item_count(&model.results), 3);
    assert!(matches!(
        controller.state(),
        SelectionState::Loaded { releases, .. } if releases.len() == 3
    ));
}

#[test]
fn empty_result_names_selected_company() {
    let mut controller = loaded_controller();
    let request = select(&mut controller, "ACM");

    controller.on_press_releases_resolved(&request, Ok(Vec::new()));

    match &controller.surface().model.results {
        ResultsView::NoReleases { company_label } => {
            assert_eq!(company_label, "Acme Corp (ACM)");
            assert!(ResultsView::no_releases_body(company_label).contains("Acme Corp (ACM)"));
        }
        other => panic!("expected {NO_RELEASES_HEADING} view, got {other:?}"),
    }
}

#[test]
fn api_error_message_is_displayed_with_hint() {
    let mut controller = loaded_controller();
    let request = select(&mut controller, "ACM");

    controller.on_press_releases_resolved(
        &request,
        Err(PressReleaseError::api(429, Some("rate limited".to_string()))),
    );

    match &controller.surface().model.results {
        ResultsView::Error {
            context,
            message,
            hint,
        } => {
            assert_eq!(message, "rate limited");
            assert_eq!(
                context.as_deref(),
                Some("Failed to load press releases for Acme Corp")
            );
            assert_eq!(*hint, ERROR_HINT);
        }
        other => panic!("expected error view, got {other:?}"),
    }
    assert!(!controller.surface().model.loading_visible);
}

#[test]
fn sentinel_returns_to_welcome_from_any_state() {
    let mut controller = loaded_controller();

    let request = select(&mut controller, "ACM");
    assert!(controller.on_selection_changed(Selection::None).is_none());
    assert_eq!(controller.surface().model.results, ResultsView::Welcome);
    assert!(!controller.surface().model.loading_visible);
    assert!(!controller.on_press_releases_resolved(&request, Ok(vec![release("late")])));
    assert_eq!(controller.surface().model.results, ResultsView::Welcome);

    let request = select(&mut controller, "GBX");
    controller.on_press_releases_resolved(&request, Err(PressReleaseError::api(500, None)));
    controller.on_selection_changed(Selection::None);
    assert_eq!(controller.state(), &SelectionState::NoneSelected);
    assert_eq!(controller.surface().model.results, ResultsView::Welcome);
}

#[test]
fn superseded_response_is_dropped() {
    let mut controller = loaded_controller();
    let first = select(&mut controller, "ACM");
    let second = select(&mut controller, "GBX");

    assert!(!controller.on_press_releases_resolved(&first, Ok(vec![release("acme")])));
    assert!(controller.surface().model.loading_visible);

    assert!(controller.on_press_releases_resolved(&second, Ok(Vec::new())));
    assert_eq!(
        controller.surface().model.results,
        ResultsView::NoReleases {
            company_label: "Globex (GBX)".to_string()
        }
    );
}

#[test]
fn reselecting_same_ticker_drops_earlier_request() {
    let mut controller = loaded_controller();
    let first = select(&mut controller, "ACM");
    controller.on_selection_changed(Selection::None);
    let second = select(&mut controller, "ACM");

    assert_ne!(first.request_id, second.request_id);
    assert!(!controller.on_press_releases_resolved(&first, Ok(vec![release("stale")])));
    assert!(controller.on_press_releases_resolved(&second, Ok(vec![release("fresh")])));
    assert_eq!(item_count(&controller.surface().model.results), 1);
}

#[test]
fn late_response_after_completion_is_ignored() {
    let mut controller = loaded_controller();
    let request = select(&mut controller, "ACM");
    controller.on_press_releases_resolved(&request, Ok(vec![release("a")]));

    assert!(!controller.on_press_releases_resolved(&request, Ok(Vec::new())));
    assert_eq!(item_count(&controller.surface().model.results), 1);
}

#[test]
fn unknown_ticker_fails_without_fetch() {
    let mut controller = loaded_controller();
    let request = controller.on_selection_changed(Selection::Ticker(Ticker::new("ZZZ")));

    assert!(request.is_none());
    assert!(matches!(
        &controller.surface().model.results,
        ResultsView::Error { message, .. } if message == "Unknown company ticker: ZZZ"
    ));
}

#[test]
fn catalog_failure_leaves_selector_empty_and_shows_error() {
    let mut controller = RenderController::new(RecordingSurface::default());
    controller.on_catalog_loaded(Err(CatalogError::Io {
        path: "top100PRs.csv".to_string(),
        message: "not found".to_string(),
    }));

    let model = &controller.surface().model;
    assert_eq!(model.options.len(), 1);
    assert!(matches!(
        &model.results,
        ResultsView::Error { message, context: None, .. } if message == CATALOG_LOAD_FAILED
    ));

    controller.on_selection_changed(Selection::None);
    assert_eq!(controller.surface().model.results, ResultsView::Welcome);
}

#[test]
fn catalog_reload_resets_selection() {
    let mut controller = loaded_controller();
    let request = select(&mut controller, "ACM");

    controller.on_catalog_loaded(Ok(Catalog::new(vec![CompanyRecord::new("Initech", "INT")])));

    assert_eq!(controller.selection(), &Selection::None);
    assert_eq!(controller.surface().model.selected_label(), SENTINEL_LABEL);
    assert!(!controller.on_press_releases_resolved(&request, Ok(Vec::new())));
    assert_eq!(controller.catalog().len(), 1);
    assert_eq!(controller.surface().model.results, ResultsView::Welcome);
}

#[test]
fn failed_selection_can_be_retried() {
    let mut controller = loaded_controller();
    let request = select(&mut controller, "ACM");
    assert!(!controller.can_retry());

    controller.on_press_releases_resolved(
        &request,
        Err(PressReleaseError::Transport("queue full".to_string())),
    );
    assert!(controller.can_retry());

    let retry = select(&mut controller, "ACM");
    assert_ne!(retry.request_id, request.request_id);
    assert!(controller.surface().model.loading_visible);
}
