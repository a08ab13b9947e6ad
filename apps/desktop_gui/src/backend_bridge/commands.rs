//! Backend commands queued from UI to backend worker.

use client_core::CatalogSource;

use crate::controller::FetchRequest;

pub enum BackendCommand {
    LoadCatalog { source: CatalogSource },
    FetchPressReleases { request: FetchRequest },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadCatalog { .. } => "load_catalog",
            Self::FetchPressReleases { .. } => "fetch_press_releases",
        }
    }
}
