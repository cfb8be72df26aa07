use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;

use super::models::NotificationChannel;

#[derive(Error, Debug)]
pub enum ChannelLoadError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Channel service returned status {0}")]
    ServiceStatus(StatusCode),
}

/// A source of notification channels for the form's channel selector.
#[async_trait]
pub trait ChannelProvider {
    /// Returns every configured channel, enabled or not. Filtering to
    /// enabled channels is the caller's concern.
    async fn get_channels(&self) -> Result<Vec<NotificationChannel>, ChannelLoadError>;
}

/// Fetches channels from the monitoring server over HTTP.
pub struct HttpChannelProvider {
    client: Client,
    base_url: String,
}

impl HttpChannelProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl ChannelProvider for HttpChannelProvider {
    async fn get_channels(&self) -> Result<Vec<NotificationChannel>, ChannelLoadError> {
        let url = format!("{}/api/alert-configs", self.base_url.trim_end_matches('/'));

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ChannelLoadError::ServiceStatus(status));
        }

        Ok(response.json().await?)
    }
}
