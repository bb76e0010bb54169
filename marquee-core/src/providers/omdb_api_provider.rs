use std::fmt;

use async_trait::async_trait;
use marquee_model::MovieRecord;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::debug;
use url::Url;

use super::{
    catalog::{CatalogClient, SearchHit},
    omdb_wire::{
        OmdbDetailQuery, OmdbDetailResponse, OmdbSearchQuery,
        OmdbSearchResponse,
    },
};
use crate::error::ProviderError;

pub const OMDB_DEFAULT_BASE: &str = "https://www.omdbapi.com/";

/// Connection settings for [`OmdbApiProvider`].
#[derive(Clone)]
pub struct OmdbSettings {
    pub base_url: Url,
    pub api_key: String,
    pub user_agent: Option<String>,
}

impl fmt::Debug for OmdbSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OmdbSettings")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl OmdbSettings {
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self, ProviderError> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            api_key: api_key.into(),
            user_agent: None,
        })
    }

    /// Reads `OMDB_API_KEY` and, when set, `OMDB_BASE_URL`.
    pub fn from_env() -> Result<Self, ProviderError> {
        let api_key = std::env::var("OMDB_API_KEY").unwrap_or_default();
        let base_url = std::env::var("OMDB_BASE_URL")
            .ok()
            .filter(|raw| !raw.trim().is_empty())
            .unwrap_or_else(|| OMDB_DEFAULT_BASE.to_string());

        Self::new(&base_url, api_key)
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

/// [`CatalogClient`] backed by the OMDb HTTP API.
pub struct OmdbApiProvider {
    http: reqwest::Client,
    settings: OmdbSettings,
}

impl fmt::Debug for OmdbApiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OmdbApiProvider")
            .field("base_url", &self.settings.base_url.as_str())
            .finish()
    }
}

impl OmdbApiProvider {
    pub fn new(settings: OmdbSettings) -> Result<Self, ProviderError> {
        let mut builder = reqwest::Client::builder();
        if let Some(agent) = settings.user_agent.as_deref() {
            builder = builder.user_agent(agent);
        }

        Ok(Self {
            http: builder.build()?,
            settings,
        })
    }

    pub fn settings(&self) -> &OmdbSettings {
        &self.settings
    }

    async fn get_omdb_json<Q, T>(&self, query: &Q) -> Result<T, ProviderError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .get(self.settings.base_url.clone())
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let body = response.text().await?;
            return serde_json::from_str::<T>(&body)
                .map_err(|err| ProviderError::ParseError(err.to_string()));
        }

        #[derive(Debug, Deserialize)]
        struct OmdbErrorBody {
            #[serde(rename = "Error", default)]
            error: Option<String>,
        }

        let message = response
            .json::<OmdbErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| {
                format!("OMDb request failed with status {}", status)
            });

        match status.as_u16() {
            401 => Err(ProviderError::InvalidApiKey),
            404 => Err(ProviderError::NotFound),
            429 => Err(ProviderError::RateLimited),
            _ => Err(ProviderError::ApiError(message)),
        }
    }
}

#[async_trait]
impl CatalogClient for OmdbApiProvider {
    async fn search(
        &self,
        query: &str,
    ) -> Result<Vec<SearchHit>, ProviderError> {
        let params = OmdbSearchQuery {
            query,
            api_key: &self.settings.api_key,
        };

        let response: OmdbSearchResponse = self.get_omdb_json(&params).await?;
        if let Some(reason) = response.error.as_deref() {
            debug!(query, reason, "omdb search reported no match");
        }
        Ok(response.into_hits())
    }

    async fn detail(
        &self,
        imdb_id: &str,
    ) -> Result<Option<MovieRecord>, ProviderError> {
        let params = OmdbDetailQuery {
            imdb_id,
            api_key: &self.settings.api_key,
        };

        let response: OmdbDetailResponse = self.get_omdb_json(&params).await?;
        if let Some(reason) = response.error.as_deref() {
            debug!(imdb_id, reason, "omdb detail reported failure");
        }
        Ok(response.into_record(imdb_id))
    }
}
