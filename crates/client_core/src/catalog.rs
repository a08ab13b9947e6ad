//! Company catalog: semicolon-delimited `name;ticker` text with a header line.

use std::{collections::HashSet, fmt, path::PathBuf};

use reqwest::Client;
use shared::{
    domain::{Catalog, CompanyRecord, Ticker},
    error::CatalogError,
};
use tracing::{info, warn};

const DELIMITER: u8 = b';';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Path(PathBuf),
    Url(String),
}

impl CatalogSource {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Self::Url(raw.to_string())
        } else {
            Self::Path(PathBuf::from(raw))
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowIssueKind {
    MissingField,
    DuplicateTicker,
}

/// A data row that was left out of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowIssue {
    /// 1-based line in the source text, header included.
    pub line: u64,
    pub kind: RowIssueKind,
}

#[derive(Debug, Clone, Default)]
pub struct CatalogParse {
    pub catalog: Catalog,
    pub issues: Vec<RowIssue>,
}

pub fn parse_catalog(text: &str) -> Result<Catalog, CatalogError> {
    let parsed = parse_catalog_detailed(text)?;
    for issue in &parsed.issues {
        warn!(line = issue.line, kind = ?issue.kind, "catalog: skipping row");
    }
    Ok(parsed.catalog)
}

/// Parses catalog text, reporting rows that were skipped.
///
/// Rows with fewer than two fields or a blank name/ticker are skipped. When a
/// ticker repeats, the first row wins. Fields past the second are ignored.
/// Quote characters carry no meaning and are kept as part of the field.
pub fn parse_catalog_detailed(text: &str) -> Result<CatalogParse, CatalogError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut records = Vec::new();
    let mut issues = Vec::new();
    let mut seen = HashSet::new();

    for result in reader.records() {
        let row = result.map_err(|e| CatalogError::Csv(e.to_string()))?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();

        let name = row.get(0).unwrap_or("");
        let ticker = row.get(1).unwrap_or("");
        if name.is_empty() || ticker.is_empty() {
            issues.push(RowIssue {
                line,
                kind: RowIssueKind::MissingField,
            });
            continue;
        }

        let ticker = Ticker::new(ticker);
        if !seen.insert(ticker.clone()) {
            issues.push(RowIssue {
                line,
                kind: RowIssueKind::DuplicateTicker,
            });
            continue;
        }

        records.push(CompanyRecord {
            name: name.to_string(),
            ticker,
        });
    }

    Ok(CatalogParse {
        catalog: Catalog::new(records),
        issues,
    })
}

pub async fn load_catalog(http: &Client, source: &CatalogSource) -> Result<Catalog, CatalogError> {
    let text = match source {
        CatalogSource::Path(path) => {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|e| CatalogError::Io {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?
        }
        CatalogSource::Url(url) => fetch_catalog_text(http, url).await?,
    };

    let catalog = parse_catalog(&text)?;
    info!(source = %source, companies = catalog.len(), "catalog: loaded");
    Ok(catalog)
}

async fn fetch_catalog_text(http: &Client, url: &str) -> Result<String, CatalogError> {
    let http_err = |message: String| CatalogError::Http {
        url: url.to_string(),
        message,
    };
    http.get(url)
        .send()
        .await
        .map_err(|e| http_err(e.to_string()))?
        .error_for_status()
        .map_err(|e| http_err(e.to_string()))?
        .text()
        .await
        .map_err(|e| http_err(e.to_string()))
}
