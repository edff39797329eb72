// src/utils/config.rs

use log::{debug, info, warn};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::utils::constants::{
    DEFAULT_CHECKLIST_STORE_PATH, DEFAULT_LOCATION_TIMEOUT_SECS, DEFAULT_SEARCH_RADIUS_KM,
};

/// Runtime configuration for center searches and checklist storage.
#[derive(Debug, Clone)]
pub struct NearbyConfig {
    /// Default search radius in kilometers
    pub radius_km: f64,
    /// JSON catalog file replacing the bundled catalog
    pub catalog_path: Option<PathBuf>,
    /// Remote catalog endpoint; wins over `catalog_path` when both are set
    pub catalog_url: Option<String>,
    /// Time box for the location provider
    pub location_timeout_secs: u64,
    /// File backing the checklist key-value store
    pub checklist_store_path: PathBuf,
    /// Known user position, if the environment supplies one
    pub user_latitude: Option<f64>,
    pub user_longitude: Option<f64>,
}

impl Default for NearbyConfig {
    fn default() -> Self {
        Self {
            radius_km: DEFAULT_SEARCH_RADIUS_KM,
            catalog_path: None,
            catalog_url: None,
            location_timeout_secs: DEFAULT_LOCATION_TIMEOUT_SECS,
            checklist_store_path: PathBuf::from(DEFAULT_CHECKLIST_STORE_PATH),
            user_latitude: None,
            user_longitude: None,
        }
    }
}

impl NearbyConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Self {
        let radius_km = sanitize_radius(
            env::var("SEARCH_RADIUS_KM")
                .unwrap_or_else(|_| DEFAULT_SEARCH_RADIUS_KM.to_string())
                .parse()
                .unwrap_or(DEFAULT_SEARCH_RADIUS_KM),
        );

        let catalog_path = non_empty_var("CENTER_CATALOG_PATH").map(PathBuf::from);
        let catalog_url = non_empty_var("CENTER_CATALOG_URL");

        let location_timeout_secs = env::var("LOCATION_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_LOCATION_TIMEOUT_SECS.to_string())
            .parse()
            .unwrap_or(DEFAULT_LOCATION_TIMEOUT_SECS);

        let checklist_store_path = non_empty_var("CHECKLIST_STORE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CHECKLIST_STORE_PATH));

        let user_latitude = non_empty_var("USER_LATITUDE").and_then(|v| v.parse().ok());
        let user_longitude = non_empty_var("USER_LONGITUDE").and_then(|v| v.parse().ok());

        let config = Self {
            radius_km,
            catalog_path,
            catalog_url,
            location_timeout_secs,
            checklist_store_path,
            user_latitude,
            user_longitude,
        };
        debug!("Nearby config from env: {:?}", config);
        config
    }

    pub fn location_timeout(&self) -> Duration {
        Duration::from_secs(self.location_timeout_secs)
    }

    /// Both halves of the user position, if configured.
    pub fn user_position(&self) -> Option<(f64, f64)> {
        match (self.user_latitude, self.user_longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            (None, None) => None,
            _ => {
                warn!("⚠️ Only one of USER_LATITUDE / USER_LONGITUDE is set; ignoring both");
                None
            }
        }
    }

    /// Log the current configuration
    pub fn log_config(&self) {
        info!("📍 Search radius: {} km", self.radius_km);
        match (&self.catalog_url, &self.catalog_path) {
            (Some(url), _) => info!("📚 Center catalog: remote ({})", url),
            (None, Some(path)) => info!("📚 Center catalog: file ({})", path.display()),
            (None, None) => info!("📚 Center catalog: bundled"),
        }
        info!("⏱️  Location timeout: {}s", self.location_timeout_secs);
        info!(
            "💾 Checklist store: {}",
            self.checklist_store_path.display()
        );
    }
}

/// Non-positive or non-finite radii fall back to the default.
pub fn sanitize_radius(radius_km: f64) -> f64 {
    if radius_km.is_finite() && radius_km > 0.0 {
        radius_km
    } else {
        warn!(
            "⚠️ Invalid search radius {}; using default {} km",
            radius_km, DEFAULT_SEARCH_RADIUS_KM
        );
        DEFAULT_SEARCH_RADIUS_KM
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    const VARS: [&str; 7] = [
        "SEARCH_RADIUS_KM",
        "CENTER_CATALOG_PATH",
        "CENTER_CATALOG_URL",
        "LOCATION_TIMEOUT_SECS",
        "CHECKLIST_STORE_PATH",
        "USER_LATITUDE",
        "USER_LONGITUDE",
    ];

    #[test]
    fn test_default_config() {
        let config = NearbyConfig::default();
        assert_eq!(config.radius_km, 100.0);
        assert!(config.catalog_path.is_none());
        assert!(config.catalog_url.is_none());
        assert_eq!(config.location_timeout(), Duration::from_secs(10));
        assert_eq!(
            config.checklist_store_path,
            PathBuf::from("checklist_progress.json")
        );
        assert!(config.user_position().is_none());
    }

    // Env reads and writes share one test so they cannot race each other.
    #[test]
    fn test_env_config() {
        for var in VARS {
            env::remove_var(var);
        }
        let config = NearbyConfig::from_env();
        assert_eq!(config.radius_km, 100.0);
        assert_eq!(config.location_timeout_secs, 10);
        assert!(config.catalog_url.is_none());

        env::set_var("SEARCH_RADIUS_KM", "150");
        env::set_var("CENTER_CATALOG_PATH", "/tmp/centers.json");
        env::set_var("CENTER_CATALOG_URL", "  ");
        env::set_var("LOCATION_TIMEOUT_SECS", "3");
        env::set_var("CHECKLIST_STORE_PATH", "/tmp/progress.json");
        env::set_var("USER_LATITUDE", "12.9352");
        env::set_var("USER_LONGITUDE", "77.6245");

        let config = NearbyConfig::from_env();
        assert_eq!(config.radius_km, 150.0);
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/centers.json")));
        assert!(config.catalog_url.is_none());
        assert_eq!(config.location_timeout(), Duration::from_secs(3));
        assert_eq!(config.checklist_store_path, PathBuf::from("/tmp/progress.json"));
        assert_eq!(config.user_position(), Some((12.9352, 77.6245)));

        env::set_var("SEARCH_RADIUS_KM", "-5");
        env::set_var("LOCATION_TIMEOUT_SECS", "soon");
        env::remove_var("USER_LONGITUDE");
        let config = NearbyConfig::from_env();
        assert_eq!(config.radius_km, 100.0);
        assert_eq!(config.location_timeout_secs, 10);
        assert!(config.user_position().is_none());

        // Clean up
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_sanitize_radius() {
        assert_eq!(sanitize_radius(42.5), 42.5);
        assert_eq!(sanitize_radius(0.0), 100.0);
        assert_eq!(sanitize_radius(f64::NAN), 100.0);
        assert_eq!(sanitize_radius(f64::INFINITY), 100.0);
    }
}
