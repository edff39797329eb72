//! Nearest-center ranking: haversine distances, radius filtering, free-text narrowing,
//! and the catalog fallback used when the user's position is unknown.

pub mod distance;
pub mod fallback;
pub mod format;
pub mod manager;
pub mod ranking;
pub mod search;

pub use distance::compute_distance_km;
pub use fallback::{nearby_centers, NearbyListing};
pub use manager::{NearbyCentersManager, RequestSequencer, SearchOutcome};
pub use ranking::rank_centers;
pub use search::filter_by_query;
