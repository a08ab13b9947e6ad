use thiserror::Error;

/// Failure to obtain the company catalog. The selector stays empty and the
/// results region shows a generic message.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog '{path}': {message}")]
    Io { path: String, message: String },
    #[error("failed to fetch catalog '{url}': {message}")]
    Http { url: String, message: String },
    #[error("failed to parse catalog: {0}")]
    Csv(String),
}

/// Failure to load press releases for one selected company.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PressReleaseError {
    /// Non-2xx response. Carries the server-supplied message or
    /// `"API request failed: {status}"`.
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("press release request failed: {0}")]
    Transport(String),
    #[error("invalid press release response: {0}")]
    Decode(String),
}

impl PressReleaseError {
    pub fn api(status: u16, server_message: Option<String>) -> Self {
        let message = server_message.unwrap_or_else(|| format!("API request failed: {status}"));
        Self::Api { status, message }
    }
}
