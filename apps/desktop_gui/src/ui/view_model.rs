//! Structured content for the results region.

use client_core::{release_count_line, ReleaseView};
use shared::{domain::CompanyRecord, protocol::PressRelease};

pub const WELCOME_HEADING: &str = "Welcome!";
pub const WELCOME_BODY: &str =
    "Select a company from the dropdown above to view their press releases.";
pub const NO_RELEASES_HEADING: &str = "No Press Releases Found";
pub const ERROR_HEADING: &str = "Error";
pub const ERROR_HINT: &str = "Please check your API key and try again.";
pub const CATALOG_LOAD_FAILED: &str = "Failed to load companies list";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResultsView {
    #[default]
    Welcome,
    /// Cleared while a fetch is in flight.
    Blank,
    NoReleases {
        company_label: String,
    },
    Releases {
        heading: String,
        count_line: String,
        items: Vec<ReleaseView>,
    },
    Error {
        context: Option<String>,
        message: String,
        hint: &'static str,
    },
}

impl ResultsView {
    pub fn for_releases(company: &CompanyRecord, releases: &[PressRelease]) -> Self {
        if releases.is_empty() {
            return Self::NoReleases {
                company_label: company.label(),
            };
        }

        Self::Releases {
            heading: company.label(),
            count_line: release_count_line(releases.len()),
            items: releases.iter().map(ReleaseView::from_release).collect(),
        }
    }

    pub fn error(context: Option<String>, message: impl Into<String>) -> Self {
        Self::Error {
            context,
            message: message.into(),
            hint: ERROR_HINT,
        }
    }

    pub fn no_releases_body(company_label: &str) -> String {
        format!("No recent press releases were found for {company_label}.")
    }
}
