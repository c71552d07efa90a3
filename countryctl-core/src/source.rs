//! Country list sources
//!
//! The browser only depends on [`CountrySource`]; the HTTP implementation
//! talks to REST Countries and the static one serves a fixed list.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::Config;
use crate::country::{decode_countries, Country};
use crate::error::{CountryError, Result};

/// Something that can produce the full country list
#[async_trait]
pub trait CountrySource: Send + Sync {
    /// Human-readable description for logs
    fn describe(&self) -> String;

    /// Fetch every country, in upstream order
    async fn fetch_all(&self) -> Result<Vec<Country>>;
}

/// REST Countries client
#[derive(Debug, Clone)]
pub struct HttpCountrySource {
    client: Client,
    endpoint: String,
}

impl HttpCountrySource {
    /// Create a client for `endpoint` with a whole-request timeout
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let endpoint = endpoint.into();
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("countryctl/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| CountryError::Transport {
                url: endpoint.clone(),
                source,
            })?;
        Ok(Self { client, endpoint })
    }

    /// Create a client from loaded configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.api.endpoint.clone(), config.request_timeout())
    }
}

#[async_trait]
impl CountrySource for HttpCountrySource {
    fn describe(&self) -> String {
        format!("GET {}", self.endpoint)
    }

    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn fetch_all(&self) -> Result<Vec<Country>> {
        let transport = |source| CountryError::Transport {
            url: self.endpoint.clone(),
            source,
        };

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CountryError::Status {
                url: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        // Body read and decode stay inside the same failure boundary
        let body = response.bytes().await.map_err(transport)?;
        let countries = decode_countries(&body)?;

        debug!(count = countries.len(), bytes = body.len(), "Fetched country list");
        Ok(countries)
    }
}

/// Fixed in-memory list
#[derive(Debug, Clone, Default)]
pub struct StaticCountrySource {
    countries: Vec<Country>,
}

impl StaticCountrySource {
    pub fn new(countries: Vec<Country>) -> Self {
        Self { countries }
    }
}

#[async_trait]
impl CountrySource for StaticCountrySource {
    fn describe(&self) -> String {
        format!("static list ({} countries)", self.countries.len())
    }

    async fn fetch_all(&self) -> Result<Vec<Country>> {
        Ok(self.countries.clone())
    }
}
