//! Backend-to-UI events.

use shared::{
    domain::Catalog,
    error::{CatalogError, PressReleaseError},
    protocol::PressRelease,
};

use super::reducer::FetchRequest;

pub enum UiEvent {
    Info(String),
    CatalogLoaded(Result<Catalog, CatalogError>),
    PressReleasesResolved {
        request: FetchRequest,
        result: Result<Vec<PressRelease>, PressReleaseError>,
    },
}

impl UiEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Info(_) => "info",
            Self::CatalogLoaded(_) => "catalog_loaded",
            Self::PressReleasesResolved { .. } => "press_releases_resolved",
        }
    }
}
