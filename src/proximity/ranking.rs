// src/proximity/ranking.rs
use crate::models::{Center, Coordinate, RankedCenter};
use crate::proximity::distance::compute_distance_km;

/// Annotate every center with its distance from `origin`, keep those within `radius_km`
/// (inclusive) and order them nearest first. Centers at equal distance keep catalog order.
pub fn rank_centers(catalog: &[Center], origin: Coordinate, radius_km: f64) -> Vec<RankedCenter> {
    let mut ranked: Vec<RankedCenter> = catalog
        .iter()
        .map(|center| RankedCenter {
            distance_km: compute_distance_km(origin, center.location),
            center: center.clone(),
        })
        .filter(|ranked| ranked.distance_km <= radius_km)
        .collect();
    // sort_by is stable
    ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    ranked
}
