use reqwest::Client;
use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use crate::models::Drink;
use crate::models::api::SearchResponse;

/// Thin wrapper around the cocktail search endpoint
#[derive(Debug, Clone)]
pub struct CocktailClient {
    http: Client,
    base_url: String,
}

impl CocktailClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("barcart/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::new(http, config.api_base_url.clone()))
    }

    /// Search drinks by name
    /// A body with a null or missing `drinks` field is an empty result
    pub async fn search(&self, query: &str) -> Result<Vec<Drink>> {
        let url = format!("{}/search.php", self.base_url);
        let response = self.http.get(&url).query(&[("s", query)]).send().await?;
        debug!(status = %response.status(), query, "search response received");

        let body = response.bytes().await?;
        let parsed: SearchResponse = serde_json::from_slice(&body)?;
        Ok(parsed.into_drinks())
    }
}
