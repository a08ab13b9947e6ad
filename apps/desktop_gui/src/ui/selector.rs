//! Company selector options built from the catalog.

use shared::domain::{Catalog, Ticker};

pub const SENTINEL_LABEL: &str = "Select a company...";

/// Value carried by a selection-changed event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Ticker(Ticker),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorOption {
    pub value: Selection,
    pub label: String,
}

/// Sentinel first, then one option per record in catalog order.
pub fn selector_options(catalog: &Catalog) -> Vec<SelectorOption> {
    std::iter::once(SelectorOption {
        value: Selection::None,
        label: SENTINEL_LABEL.to_string(),
    })
    .chain(catalog.iter().map(|record| SelectorOption {
        value: Selection::Ticker(record.ticker.clone()),
        label: record.label(),
    }))
    .collect()
}
