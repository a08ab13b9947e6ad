//! Display surface: the three regions the render controller writes to.

use super::{
    selector::{SelectorOption, Selection, SENTINEL_LABEL},
    view_model::ResultsView,
};

pub trait DisplaySurface {
    /// Replaces every selector option.
    fn populate_selector(&mut self, options: Vec<SelectorOption>);
    fn set_selected(&mut self, selection: Selection);
    fn set_results(&mut self, view: ResultsView);
    fn set_loading_visible(&mut self, visible: bool);
}

/// In-memory surface the egui shell draws from each frame.
#[derive(Debug, Clone, Default)]
pub struct SurfaceModel {
    pub options: Vec<SelectorOption>,
    pub selected: Selection,
    pub results: ResultsView,
    pub loading_visible: bool,
}

impl SurfaceModel {
    pub fn selected_label(&self) -> &str {
        self.options
            .iter()
            .find(|option| option.value == self.selected)
            .map(|option| option.label.as_str())
            .unwrap_or(SENTINEL_LABEL)
    }
}

impl DisplaySurface for SurfaceModel {
    fn populate_selector(&mut self, options: Vec<SelectorOption>) {
        self.options = options;
    }

    fn set_selected(&mut self, selection: Selection) {
        self.selected = selection;
    }

    fn set_results(&mut self, view: ResultsView) {
        self.results = view;
    }

    fn set_loading_visible(&mut self, visible: bool) {
        self.loading_visible = visible;
    }
}
