use log::{debug, error, warn};
use reqwest::{StatusCode, header::CONTENT_TYPE};
use thiserror::Error;

use crate::{
    models::{Character, Concept, Location, Storyline},
    requests::{PageRequest, ResourceKind},
    resource::Resource,
    responses::{AnyEnvelope, Envelope},
};

pub const DEFAULT_BASE_URL: &str = "https://api.batmanapi.com/v1";

/// Why a fetch attempt was abandoned in favour of the fallback page.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error("expected JSON, got {}", .0.as_deref().unwrap_or("no content type"))]
    UnexpectedContentType(Option<String>),
    #[error("malformed envelope: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Source of pages for a [`crate::views::ResourceGrid`].
#[allow(async_fn_in_trait)]
pub trait PageFetcher {
    async fn fetch_page<R: Resource>(&self, page: u32) -> Envelope<R>;
}

/// Thin wrapper around the remote catalog API.
///
/// Every fetch is a single GET. Failures never reach the caller: they are
/// logged and replaced by the resource's fallback page.
#[derive(Clone, Debug)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(reqwest::Client::new(), base_url)
    }

    pub fn with_http(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch<R: Resource>(&self, page: u32) -> Envelope<R> {
        match self.try_fetch::<R>(page).await {
            Ok(envelope) => envelope,
            Err(e) => {
                warn!("Using fallback {} data: {}", R::KIND, e);
                R::fallback()
            }
        }
    }

    pub async fn fetch_kind(&self, kind: ResourceKind, page: u32) -> AnyEnvelope {
        match kind {
            ResourceKind::Characters => Character::erase(self.fetch(page).await),
            ResourceKind::Locations => Location::erase(self.fetch(page).await),
            ResourceKind::Concepts => Concept::erase(self.fetch(page).await),
            ResourceKind::Storylines => Storyline::erase(self.fetch(page).await),
        }
    }

    async fn try_fetch<R: Resource>(&self, page: u32) -> Result<Envelope<R>, FetchError> {
        let url = PageRequest::new(R::KIND, page).url(&self.base_url);
        debug!("Fetching {}", url);

        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        if !content_type
            .as_deref()
            .is_some_and(|value| value.contains("application/json"))
        {
            let body = response.text().await.unwrap_or_default();
            error!("Unexpected response format: {}", body);
            return Err(FetchError::UnexpectedContentType(content_type));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl PageFetcher for CatalogClient {
    async fn fetch_page<R: Resource>(&self, page: u32) -> Envelope<R> {
        self.fetch(page).await
    }
}
