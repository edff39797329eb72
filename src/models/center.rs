// src/models/center.rs
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::coordinate::Coordinate;
use crate::utils::constants::DEFAULT_SEARCH_RADIUS_KM;

/// Identity-document types that have service centers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentCategory {
    Aadhar,
    Pan,
    Voter,
    Passport,
}

impl DocumentCategory {
    pub const ALL: [DocumentCategory; 4] = [
        DocumentCategory::Aadhar,
        DocumentCategory::Pan,
        DocumentCategory::Voter,
        DocumentCategory::Passport,
    ];

    /// Stable lowercase key used in catalogs and storage keys.
    pub fn key(&self) -> &'static str {
        match self {
            DocumentCategory::Aadhar => "aadhar",
            DocumentCategory::Pan => "pan",
            DocumentCategory::Voter => "voter",
            DocumentCategory::Passport => "passport",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DocumentCategory::Aadhar => "Aadhar Card",
            DocumentCategory::Pan => "PAN Card",
            DocumentCategory::Voter => "Voter ID",
            DocumentCategory::Passport => "Passport",
        }
    }
}

impl fmt::Display for DocumentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DocumentCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_lowercase();
        DocumentCategory::ALL
            .into_iter()
            .find(|c| c.key() == needle)
            .ok_or_else(|| {
                anyhow!(
                    "Unknown document category '{}' (expected one of: aadhar, pan, voter, passport)",
                    s
                )
            })
    }
}

/// A government service center as listed in a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Center {
    pub name: String,
    pub vicinity: String,
    pub category: DocumentCategory,
    pub location: Coordinate,
    pub rating: Option<f64>,
}

/// A center annotated with its distance from the user. Its rank is its position in the list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCenter {
    pub center: Center,
    pub distance_km: f64,
}

/// What free-text search looks at.
pub trait Searchable {
    fn name(&self) -> &str;
    fn vicinity(&self) -> &str;
}

impl Searchable for Center {
    fn name(&self) -> &str {
        &self.name
    }

    fn vicinity(&self) -> &str {
        &self.vicinity
    }
}

impl Searchable for RankedCenter {
    fn name(&self) -> &str {
        &self.center.name
    }

    fn vicinity(&self) -> &str {
        &self.center.vicinity
    }
}

/// Screen-owned search inputs, handed to the engine on every run.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    pub query: String,
    pub category: DocumentCategory,
    pub radius_km: f64,
}

impl SearchState {
    pub fn new(category: DocumentCategory) -> Self {
        Self {
            query: String::new(),
            category,
            radius_km: DEFAULT_SEARCH_RADIUS_KM,
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_radius(mut self, radius_km: f64) -> Self {
        self.radius_km = radius_km;
        self
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(DocumentCategory::Aadhar)
    }
}
