//! Storyblok management API client.
//!
//! Only the two asset endpoints the purge needs are covered: listing one page of
//! a folder and deleting a single asset. Both are exposed through the
//! [`AssetApi`] trait so the purge workflow can run against any implementation.

use crate::configuration::Configuration;
use crate::model::{Asset, AssetListResponse};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, error, trace, warn};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Error emitted by the Storyblok API client
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// The asset operations of the management API.
#[async_trait]
pub trait AssetApi: Send + Sync {
    /// Fetch one page of the assets stored in a folder.
    async fn list_assets(
        &self,
        space_id: u64,
        folder_id: u64,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Asset>, ApiError>;

    /// Delete one asset and report the status code the service answered with.
    async fn delete_asset(&self, space_id: u64, asset_id: u64) -> Result<StatusCode, ApiError>;
}

pub struct StoryblokApiClient {
    client: Client,
    base_url: String,
    api_token: String,
}

impl StoryblokApiClient {
    pub fn new(base_url: &str, api_token: &str, timeout: Option<u64>) -> Result<Self, ApiError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(seconds) = timeout {
            builder = builder.timeout(Duration::from_secs(seconds));
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token: api_token.to_string(),
        })
    }

    pub fn from_configuration(configuration: &Configuration) -> Result<Self, ApiError> {
        Self::new(
            configuration.api_url(),
            configuration.api_token(),
            configuration.timeout(),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn assets_url(&self, space_id: u64, folder_id: u64, page: u32, per_page: u32) -> String {
        format!(
            "{}/spaces/{}/assets?in_folder={}&per_page={}&page={}",
            self.base_url, space_id, folder_id, per_page, page
        )
    }

    fn asset_url(&self, space_id: u64, asset_id: u64) -> String {
        format!("{}/spaces/{}/assets/{}", self.base_url, space_id, asset_id)
    }
}

#[async_trait]
impl AssetApi for StoryblokApiClient {
    async fn list_assets(
        &self,
        space_id: u64,
        folder_id: u64,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Asset>, ApiError> {
        let url = self.assets_url(space_id, folder_id, page, per_page);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("Authorization", &self.api_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Listing page {} returned HTTP {}", page, status);
        }

        // Reading the text consumes the response and releases the connection.
        let response_text = response.text().await?;
        trace!("Raw response text for deserialization: {}", response_text);

        match serde_json::from_str::<AssetListResponse>(&response_text) {
            Ok(list) => Ok(list.assets),
            Err(e) => {
                error!(
                    "Failed to deserialize response: {}. Raw response: {}",
                    e, response_text
                );
                Err(ApiError::JsonError(e))
            }
        }
    }

    async fn delete_asset(&self, space_id: u64, asset_id: u64) -> Result<StatusCode, ApiError> {
        let url = self.asset_url(space_id, asset_id);
        debug!("DELETE {}", url);

        let response = self
            .client
            .delete(&url)
            .header("Authorization", &self.api_token)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;
        trace!("DELETE {} answered {}: {}", url, status, response_text);

        Ok(status)
    }
}
