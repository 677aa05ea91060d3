// upstream.rs
// The seam between the composers and the remote Pokémon-data service.

use std::future::Future;

use serde::de::DeserializeOwned;

use crate::config::PokemonConfig;
use crate::error::PokedexError;

/// A read-only JSON source addressed by absolute resource URL.
pub trait Upstream: Send + Sync {
    fn fetch<T>(&self, url: &str) -> impl Future<Output = Result<T, PokedexError>> + Send
    where
        T: DeserializeOwned + Send;
}

/// [`Upstream`] backed by a shared `reqwest::Client`.
#[derive(Clone)]
pub struct HttpUpstream {
    client: reqwest::Client,
}

impl HttpUpstream {
    pub fn new(config: &PokemonConfig) -> Result<Self, PokedexError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            PokedexError::Config(format!("failed to build HTTP client: {}", e))
        })?;
        Ok(Self { client })
    }
}

impl Upstream for HttpUpstream {
    async fn fetch<T>(&self, url: &str) -> Result<T, PokedexError>
    where
        T: DeserializeOwned + Send,
    {
        tracing::debug!("Fetching upstream resource: {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            tracing::error!("Failed to make HTTP request to {}: {}", url, e);
            PokedexError::from(e)
        })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Upstream request to {} failed with status: {}", url, status);
            return Err(PokedexError::upstream(url, format!("status {}", status)));
        }

        let bytes = response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read response body from {}: {}", url, e);
            PokedexError::from(e)
        })?;

        serde_json::from_slice::<T>(&bytes).map_err(|e| {
            tracing::error!("Failed to parse JSON response from {}: {}", url, e);
            PokedexError::MissingData(format!("{}: {}", url, e))
        })
    }
}
