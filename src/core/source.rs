//! # Catalog Sources
//!
//! Where catalog text comes from. This is the only asynchronous step in the
//! game: once `load_catalog` returns, everything downstream is synchronous.
//!
//! - `FileSource`: a local JSON file (`data/gamedata.json` by default)
//! - `HttpSource`: a JSON document served over HTTP(S)

use std::path::PathBuf;

use async_trait::async_trait;
use log::{debug, info};
use thiserror::Error;

use crate::core::catalog::{Catalog, LoadError, LoadOptions};

#[derive(Debug, Error)]
pub enum SourceError {
    /// Reading a local file failed.
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Network-level failure (DNS, refused connection, timeout).
    #[error("network error: {0}")]
    Network(String),
    /// Server answered with a non-success status.
    #[error("HTTP error! Status: {status}")]
    Http { status: u16 },
}

#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Human-readable location, used in logs and error messages.
    fn describe(&self) -> String;

    /// Fetch the raw catalog document.
    async fn fetch(&self) -> Result<String, SourceError>;
}

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<String, SourceError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                path: self.path.clone(),
                source,
            })
    }
}

pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl CatalogSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<String, SourceError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Http {
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))
    }
}

/// Pick a source for a location string: URLs go over HTTP, anything else is a path.
pub fn source_for(location: &str) -> Box<dyn CatalogSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpSource::new(location))
    } else {
        Box::new(FileSource::new(location))
    }
}

/// Fetch and validate a catalog.
pub async fn load_catalog(
    source: &dyn CatalogSource,
    options: LoadOptions,
) -> Result<Catalog, LoadError> {
    info!("Loading catalog from {}", source.describe());
    let text = source.fetch().await?;
    debug!("Fetched {} bytes of catalog data", text.len());
    Catalog::from_json_with(&text, options)
}
