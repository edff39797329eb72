// src/proximity/manager.rs
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::catalog::CenterCatalog;
use crate::location::{resolve_location, LocationProvider, LocationState};
use crate::models::SearchState;
use crate::proximity::fallback::{nearby_centers, NearbyListing};
use crate::utils::logging::SearchLogger;

/// Hands out increasing tickets so only the most recent search gets applied.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn latest(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest() == ticket
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub ticket: u64,
    pub listing: NearbyListing,
}

/// Ties a resolved catalog to a location provider. Location lookups are time-boxed,
/// and a search that was overtaken by a newer one yields nothing.
pub struct NearbyCentersManager {
    catalog: CenterCatalog,
    location_timeout: Duration,
    sequencer: RequestSequencer,
}

impl NearbyCentersManager {
    pub fn new(catalog: CenterCatalog, location_timeout: Duration) -> Self {
        Self {
            catalog,
            location_timeout,
            sequencer: RequestSequencer::new(),
        }
    }

    pub fn catalog(&self) -> &CenterCatalog {
        &self.catalog
    }

    /// Returns `None` when a newer search was started while this one awaited the location.
    pub async fn search(
        &self,
        provider: &dyn LocationProvider,
        state: &SearchState,
    ) -> Option<SearchOutcome> {
        let ticket = self.sequencer.issue();
        let logger = SearchLogger::new(state.category);
        logger.log_start(ticket, state.radius_km, &state.query);

        let centers = self.catalog.centers_for(state.category);
        logger.log_catalog(centers.len());

        let location = resolve_location(provider, self.location_timeout).await;
        match location {
            LocationState::Available(origin) => logger.log_location(origin),
            LocationState::Unavailable(reason) => logger.log_location_unavailable(reason),
        }

        let listing = nearby_centers(centers, &location, state.radius_km);
        if listing.distances_known() {
            logger.log_ranked(centers.len(), listing.len(), state.radius_km);
        }
        let before = listing.len();
        let listing = listing.narrow(&state.query);
        if !state.query.trim().is_empty() {
            logger.log_query(state.query.trim(), before, listing.len());
        }

        if !self.sequencer.is_current(ticket) {
            logger.log_stale(ticket, self.sequencer.latest());
            return None;
        }

        logger.log_complete(listing.len(), listing.distances_known());
        Some(SearchOutcome { ticket, listing })
    }
}
