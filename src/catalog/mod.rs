// src/catalog/mod.rs
//! Reference data: which service centers exist for each document category.

pub mod source;

use anyhow::{Context, Result};
use log::{info, warn};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

use crate::models::{Center, Coordinate, DocumentCategory};

pub use source::{
    catalog_source_from_config, BundledCatalogSource, CatalogSource, FileCatalogSource,
    RemoteCatalogSource,
};

const BUNDLED_CATALOG: &str = include_str!("../../data/centers.json");

/// One center as written in a catalog document.
#[derive(Debug, Deserialize)]
struct CatalogEntry {
    name: String,
    #[serde(default)]
    vicinity: String,
    #[serde(default)]
    rating: Option<f64>,
    location: Coordinate,
}

/// Centers per category, each list in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CenterCatalog {
    centers: HashMap<DocumentCategory, Vec<Center>>,
}

impl CenterCatalog {
    pub fn new(centers: HashMap<DocumentCategory, Vec<Center>>) -> Self {
        Self { centers }
    }

    /// The catalog shipped with the crate.
    pub fn bundled() -> Result<Self> {
        Self::from_json_str(BUNDLED_CATALOG).context("Failed to parse bundled center catalog")
    }

    /// Parse `{ "<category>": [ { name, vicinity, rating?, location: { lat, lng } } ] }`.
    /// Unknown category keys are skipped with a warning; an out-of-range coordinate fails the load.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let document: BTreeMap<String, Vec<CatalogEntry>> =
            serde_json::from_str(raw).context("Center catalog is not valid JSON")?;

        let mut centers = HashMap::new();
        for (key, entries) in document {
            let category = match key.parse::<DocumentCategory>() {
                Ok(category) => category,
                Err(_) => {
                    warn!("⚠️ Skipping unknown document category '{}' in catalog", key);
                    continue;
                }
            };

            let list = entries
                .into_iter()
                .map(|entry| -> Result<Center> {
                    let location = entry.location.validate().with_context(|| {
                        format!("Invalid location for center '{}' ({})", entry.name, key)
                    })?;
                    Ok(Center {
                        name: entry.name,
                        vicinity: entry.vicinity,
                        category,
                        location,
                        rating: entry.rating,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            centers.insert(category, list);
        }

        let catalog = Self { centers };
        info!(
            "📚 Loaded {} centers across {} categories",
            catalog.total_centers(),
            catalog.centers.len()
        );
        Ok(catalog)
    }

    /// Empty for a category with no entries.
    pub fn centers_for(&self, category: DocumentCategory) -> &[Center] {
        self.centers
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn categories(&self) -> Vec<DocumentCategory> {
        let mut categories: Vec<_> = self.centers.keys().copied().collect();
        categories.sort();
        categories
    }

    pub fn total_centers(&self) -> usize {
        self.centers.values().map(Vec::len).sum()
    }
}
