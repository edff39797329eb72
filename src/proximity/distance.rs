// src/proximity/distance.rs
use crate::models::Coordinate;
use crate::utils::constants::EARTH_RADIUS_KM;

/// Great-circle distance in kilometers between two points, using the haversine formula.
///
/// Both coordinates must be within range (see [`Coordinate::new`]); out-of-range input
/// is not checked here.
pub fn compute_distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let (phi1, phi2) = (a.latitude.to_radians(), b.latitude.to_radians());
    let (delta_phi, delta_lambda) = (
        (b.latitude - a.latitude).to_radians(),
        (b.longitude - a.longitude).to_radians(),
    );
    let h = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    // Rounding can push h a hair past 1 for antipodal points
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}
