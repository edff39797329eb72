// src/proximity/fallback.rs
use crate::location::{LocationFailure, LocationState};
use crate::models::{Center, RankedCenter};
use crate::proximity::ranking::rank_centers;
use crate::proximity::search::filter_by_query;

/// Centers to show for one search.
#[derive(Debug, Clone, PartialEq)]
pub enum NearbyListing {
    /// Position known: within radius, nearest first.
    Ranked(Vec<RankedCenter>),
    /// Position unknown: the category catalog as declared, with no distances.
    Unranked {
        centers: Vec<Center>,
        reason: LocationFailure,
    },
}

impl NearbyListing {
    /// Whether the listing carries real distances and was radius-filtered.
    pub fn distances_known(&self) -> bool {
        matches!(self, NearbyListing::Ranked(_))
    }

    pub fn len(&self) -> usize {
        match self {
            NearbyListing::Ranked(ranked) => ranked.len(),
            NearbyListing::Unranked { centers, .. } => centers.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Narrow by free text without touching order or distances.
    pub fn narrow(&self, query: &str) -> NearbyListing {
        match self {
            NearbyListing::Ranked(ranked) => NearbyListing::Ranked(filter_by_query(ranked, query)),
            NearbyListing::Unranked { centers, reason } => NearbyListing::Unranked {
                centers: filter_by_query(centers, query),
                reason: *reason,
            },
        }
    }

    /// Each center paired with its distance, when known.
    pub fn entries(&self) -> Vec<(&Center, Option<f64>)> {
        match self {
            NearbyListing::Ranked(ranked) => ranked
                .iter()
                .map(|r| (&r.center, Some(r.distance_km)))
                .collect(),
            NearbyListing::Unranked { centers, .. } => centers.iter().map(|c| (c, None)).collect(),
        }
    }
}

/// Pick between the ranked pipeline and the plain catalog depending on whether
/// the user's position is known. `radius_km` only applies to the ranked path.
pub fn nearby_centers(catalog: &[Center], location: &LocationState, radius_km: f64) -> NearbyListing {
    match location {
        LocationState::Available(origin) => {
            NearbyListing::Ranked(rank_centers(catalog, *origin, radius_km))
        }
        LocationState::Unavailable(reason) => NearbyListing::Unranked {
            centers: catalog.to_vec(),
            reason: *reason,
        },
    }
}
