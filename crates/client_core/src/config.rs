use std::{collections::HashMap, fs, path::Path};

use tracing::warn;

use crate::catalog::CatalogSource;

pub const SETTINGS_FILE: &str = "press_desk.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: String,
    pub catalog_source: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8000/api".into(),
            catalog_source: "top100PRs.csv".into(),
        }
    }
}

impl Settings {
    pub fn catalog(&self) -> CatalogSource {
        CatalogSource::parse(&self.catalog_source)
    }

    pub fn with_overrides(
        mut self,
        api_base_url: Option<String>,
        catalog_source: Option<String>,
    ) -> Self {
        if let Some(v) = api_base_url {
            self.api_base_url = v;
        }
        if let Some(v) = catalog_source {
            self.catalog_source = v;
        }
        self.normalize();
        self
    }

    fn apply_file_config(&mut self, raw: &str) {
        match toml::from_str::<HashMap<String, String>>(raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.get("api_base_url") {
                    self.api_base_url = v.clone();
                }
                if let Some(v) = file_cfg.get("catalog_source") {
                    self.catalog_source = v.clone();
                }
            }
            Err(err) => warn!("ignoring malformed {SETTINGS_FILE}: {err}"),
        }
    }

    fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("PRESS_DESK_API_BASE_URL") {
            self.api_base_url = v;
        }
        if let Some(v) = lookup("APP__API_BASE_URL") {
            self.api_base_url = v;
        }

        if let Some(v) = lookup("PRESS_DESK_CATALOG") {
            self.catalog_source = v;
        }
        if let Some(v) = lookup("APP__CATALOG_SOURCE") {
            self.catalog_source = v;
        }
    }

    fn normalize(&mut self) {
        let trimmed = self.api_base_url.trim().trim_end_matches('/');
        self.api_base_url = if trimmed.is_empty() {
            Settings::default().api_base_url
        } else {
            trimmed.to_string()
        };

        let catalog = self.catalog_source.trim();
        self.catalog_source = if catalog.is_empty() {
            Settings::default().catalog_source
        } else {
            catalog.to_string()
        };
    }
}

/// Defaults, then `press_desk.toml` in the working directory, then environment.
pub fn load_settings() -> Settings {
    load_settings_from(Path::new(SETTINGS_FILE), |name| {
        std::env::var(name).ok().filter(|v| !v.trim().is_empty())
    })
}

pub fn load_settings_from<F>(path: &Path, env_lookup: F) -> Settings
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        settings.apply_file_config(&raw);
    }
    settings.apply_env(env_lookup);
    settings.normalize();

    settings
}
