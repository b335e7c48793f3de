use async_trait::async_trait;
use std::fmt;
use std::time::Duration;

use crate::config::Settings;
use crate::error::LoadError;

/// Where the room dataset comes from. A source performs exactly one fetch per call
/// and returns the raw document bytes; decoding, including UTF-8 validation, happens
/// in `loader::parser`.
#[async_trait]
pub trait RoomSource: fmt::Debug + Send + Sync {
    /// Human readable location of the data, used in error messages and logs.
    fn describe(&self) -> String;

    async fn fetch(&self) -> Result<Vec<u8>, LoadError>;
}

/// Fetches the dataset with a single HTTP GET.
#[derive(Debug, Clone)]
pub struct HttpRoomSource {
    url: String,
    client: reqwest::Client,
}

impl HttpRoomSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, LoadError> {
        let url = url.into();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LoadError::Transport { source_name: url.clone(), reason: e.to_string() })?;

        Ok(Self { url, client })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, LoadError> {
        Self::new(settings.endpoint.clone(), settings.timeout)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RoomSource for HttpRoomSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        log::debug!("Requesting room availability from '{}'.", self.url);

        let transport_error = |e: reqwest::Error| LoadError::Transport { source_name: self.url.clone(), reason: e.to_string() };

        let response = self.client.get(&self.url).send().await.map_err(transport_error)?;
        let status = response.status();

        if !status.is_success() {
            return Err(LoadError::HttpStatus { source_name: self.url.clone(), status: status.as_u16() });
        }

        let body = response.bytes().await.map_err(transport_error)?;
        Ok(body.to_vec())
    }
}

/// Reads the dataset from a local JSON file, e.g. a fixture captured from the live endpoint.
#[derive(Debug, Clone)]
pub struct FileRoomSource {
    path: String,
}

impl FileRoomSource {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RoomSource for FileRoomSource {
    fn describe(&self) -> String {
        self.path.clone()
    }

    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        log::debug!("Reading room availability from file '{}'.", self.path);

        tokio::fs::read(&self.path)
            .await
            .map_err(|e| LoadError::Transport { source_name: self.path.clone(), reason: e.to_string() })
    }
}
