//! Display-ready press release fields with fallbacks applied.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use shared::protocol::PressRelease;
use url::Url;

pub const NO_TITLE: &str = "No title available";
pub const NO_SUMMARY: &str = "No summary available";
pub const INVALID_DATE: &str = "Invalid Date";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseView {
    pub title: String,
    pub date: String,
    pub summary: String,
    pub link: Option<String>,
}

impl ReleaseView {
    pub fn from_release(release: &PressRelease) -> Self {
        Self {
            title: release.title.clone().unwrap_or_else(|| NO_TITLE.to_string()),
            date: format_long_date(&release.publication_date),
            summary: release
                .summary
                .clone()
                .unwrap_or_else(|| NO_SUMMARY.to_string()),
            link: release.url.as_deref().and_then(safe_link),
        }
    }
}

pub fn release_count_line(count: usize) -> String {
    let noun = if count == 1 {
        "press release"
    } else {
        "press releases"
    };
    format!("{count} {noun}")
}

/// Formats a publication date as `"March 5, 2024"`.
pub fn format_long_date(raw: &str) -> String {
    parse_publication_date(raw)
        .map(|date| date.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

fn parse_publication_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.date_naive());
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

fn safe_link(raw: &str) -> Option<String> {
    let url = Url::parse(raw.trim()).ok()?;
    matches!(url.scheme(), "http" | "https").then(|| url.to_string())
}
