use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{EngineError, Result};
use crate::source::CardSource;

/// Remote dataset over HTTP (the published `cards.json` of the web app)
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl CardSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<u8>> {
        tracing::debug!("fetching dataset from {}", self.url);

        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(EngineError::Source {
                source_name: "http".to_string(),
                message: format!("{} returned status {}", self.url, response.status()),
            });
        }

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }

    fn name(&self) -> &str {
        "http"
    }

    fn location(&self) -> &str {
        &self.url
    }
}
