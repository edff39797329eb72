// src/utils/constants.rs

/// Mean Earth radius used for great-circle distances.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Radius applied when the caller does not pick one. The search screen advertises
/// "centers within 100km", so this value and that copy move together.
pub const DEFAULT_SEARCH_RADIUS_KM: f64 = 100.0;

/// How long to wait for the device location before falling back to the unranked catalog.
pub const DEFAULT_LOCATION_TIMEOUT_SECS: u64 = 10;

pub const DEFAULT_CHECKLIST_STORE_PATH: &str = "checklist_progress.json";

/// Prefix of the key-value store key holding a category's checklist progress.
pub const CHECKLIST_KEY_PREFIX: &str = "checklist_";

pub const MAPS_DIRECTIONS_URL: &str = "https://www.google.com/maps/dir/";
