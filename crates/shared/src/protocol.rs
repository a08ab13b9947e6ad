use serde::{Deserialize, Deserializer, Serialize};

/// One press release as returned by the backend `press-releases` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PressRelease {
    #[serde(default, deserialize_with = "non_empty_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub summary: Option<String>,
    pub publication_date: String,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PressReleasesResponse {
    #[serde(default)]
    pub news: Option<Vec<PressRelease>>,
}

impl PressReleasesResponse {
    pub fn into_releases(self) -> Vec<PressRelease> {
        self.news.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default, deserialize_with = "non_empty_string")]
    pub error: Option<String>,
}

fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}
