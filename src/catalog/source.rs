// src/catalog/source.rs
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use log::info;
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;

use crate::catalog::CenterCatalog;
use crate::utils::config::NearbyConfig;

const REMOTE_CATALOG_TIMEOUT_SECS: u64 = 30;

/// Where a catalog comes from. Loaded once per screen activation.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load(&self) -> Result<CenterCatalog>;

    fn describe(&self) -> String;
}

pub struct BundledCatalogSource;

#[async_trait]
impl CatalogSource for BundledCatalogSource {
    async fn load(&self) -> Result<CenterCatalog> {
        CenterCatalog::bundled()
    }

    fn describe(&self) -> String {
        "bundled catalog".to_string()
    }
}

pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn load(&self) -> Result<CenterCatalog> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read center catalog {}", self.path.display()))?;
        CenterCatalog::from_json_str(&raw)
            .with_context(|| format!("Failed to parse center catalog {}", self.path.display()))
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// Fetches the catalog document over HTTP. Same JSON shape as the bundled asset.
pub struct RemoteCatalogSource {
    url: url::Url,
    http_client: Client,
}

impl RemoteCatalogSource {
    pub fn new(url: &str) -> Result<Self> {
        let url = url::Url::parse(url).with_context(|| format!("Invalid catalog URL '{}'", url))?;
        let http_client = Client::builder()
            .timeout(Duration::from_secs(REMOTE_CATALOG_TIMEOUT_SECS))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { url, http_client })
    }
}

#[async_trait]
impl CatalogSource for RemoteCatalogSource {
    async fn load(&self) -> Result<CenterCatalog> {
        let response = self
            .http_client
            .get(self.url.clone())
            .send()
            .await
            .with_context(|| format!("Failed to fetch center catalog from {}", self.url))?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "Center catalog endpoint {} returned status: {}",
                self.url,
                response.status()
            ));
        }

        let body = response
            .text()
            .await
            .context("Failed to read center catalog response")?;
        CenterCatalog::from_json_str(&body)
            .with_context(|| format!("Failed to parse center catalog from {}", self.url))
    }

    fn describe(&self) -> String {
        format!("remote {}", self.url)
    }
}

/// URL beats path beats bundled.
pub fn catalog_source_from_config(config: &NearbyConfig) -> Result<Box<dyn CatalogSource>> {
    let source: Box<dyn CatalogSource> = match (&config.catalog_url, &config.catalog_path) {
        (Some(url), _) => Box::new(RemoteCatalogSource::new(url)?),
        (None, Some(path)) => Box::new(FileCatalogSource::new(path.clone())),
        (None, None) => Box::new(BundledCatalogSource),
    };
    info!("Using center catalog source: {}", source.describe());
    Ok(source)
}
