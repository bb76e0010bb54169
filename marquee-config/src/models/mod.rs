mod rows;

pub use rows::default_rows;

use std::{fs, path::Path};

use anyhow::{Context, anyhow};
use marquee_core::{
    aggregate::AggregateRequest,
    providers::{OmdbSettings, ProviderError, omdb_api_provider::OMDB_DEFAULT_BASE},
    rows::DEFAULT_ROW_CAP,
};
use marquee_model::{RowSpec, SearchTerm};
use serde::{Deserialize, Serialize};

/// Remote catalog endpoint.
#[derive(Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL; queries are appended as `?s=` / `?i=` parameters.
    pub base_url: String,
    /// OMDb key. Usually supplied through `OMDB_API_KEY` rather than a file.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub api_key: String,
    pub user_agent: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: OMDB_DEFAULT_BASE.to_string(),
            api_key: String::new(),
            user_agent: Some(concat!("marquee/", env!("CARGO_PKG_VERSION")).to_string()),
        }
    }
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "<redacted>" })
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Spotlight terms. The fallback is only tried when the primary fails.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct HeroConfig {
    pub primary: SearchTerm,
    pub fallback: SearchTerm,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            primary: SearchTerm::new("money heist"),
            fallback: SearchTerm::new("avengers"),
        }
    }
}

/// Everything an aggregation pass is configured with.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Records kept per row. Rows stop resolving once this many are kept.
    pub row_cap: usize,
    pub api: ApiConfig,
    pub hero: HeroConfig,
    pub rows: Vec<RowSpec>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            row_cap: DEFAULT_ROW_CAP,
            api: ApiConfig::default(),
            hero: HeroConfig::default(),
            rows: default_rows(),
        }
    }
}

impl CatalogConfig {
    pub fn aggregate_request(&self) -> AggregateRequest {
        AggregateRequest {
            hero_primary: self.hero.primary.clone(),
            hero_fallback: self.hero.fallback.clone(),
            rows: self.rows.clone(),
        }
    }

    pub fn omdb_settings(&self) -> Result<OmdbSettings, ProviderError> {
        let settings = OmdbSettings::new(&self.api.base_url, self.api.api_key.clone())?;
        Ok(match self.api.user_agent.as_deref() {
            Some(agent) => settings.with_user_agent(agent),
            None => settings,
        })
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read catalog config from {}", path.display())
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => toml::from_str(&contents).with_context(|| {
                format!("failed to parse catalog config {}", path.display())
            }),
            Some("json") => serde_json::from_str(&contents).with_context(|| {
                format!("failed to parse catalog config {}", path.display())
            }),
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    pub fn parse_from_str(contents: &str, origin: &str) -> anyhow::Result<Self> {
        // TOML first, then JSON.
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse catalog config {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw)
            .map_err(|err| anyhow!("invalid catalog config json: {err}"))
    }

    /// TOML rendering with the API key left out.
    pub fn to_toml_redacted(&self) -> Result<String, toml::ser::Error> {
        let mut redacted = self.clone();
        redacted.api.api_key.clear();
        toml::to_string_pretty(&redacted)
    }
}
