// src/location/mod.rs
//! Device location seam. Every failure is folded into [`LocationState::Unavailable`]
//! before the ranking engine sees it.

use async_trait::async_trait;
use log::{debug, warn};
use std::time::Duration;
use thiserror::Error;
use tokio::time::timeout;

use crate::models::Coordinate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LocationFailure {
    #[error("location permission denied")]
    PermissionDenied,
    #[error("location provider error")]
    ProviderError,
    #[error("timed out waiting for location")]
    Timeout,
}

/// Whether the user's position is known for this search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocationState {
    Available(Coordinate),
    Unavailable(LocationFailure),
}

impl LocationState {
    pub fn origin(&self) -> Option<Coordinate> {
        match self {
            LocationState::Available(coord) => Some(*coord),
            LocationState::Unavailable(_) => None,
        }
    }
}

#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn current_coordinate(&self) -> Result<Coordinate, LocationFailure>;
}

/// A provider that already knows where the user is (command-line flags, env, tests).
#[derive(Debug, Clone, Copy)]
pub struct FixedLocationProvider {
    coordinate: Coordinate,
}

impl FixedLocationProvider {
    pub fn new(coordinate: Coordinate) -> Self {
        Self { coordinate }
    }
}

#[async_trait]
impl LocationProvider for FixedLocationProvider {
    async fn current_coordinate(&self) -> Result<Coordinate, LocationFailure> {
        Ok(self.coordinate)
    }
}

/// A provider that always fails with the same reason.
#[derive(Debug, Clone, Copy)]
pub struct UnavailableLocationProvider {
    reason: LocationFailure,
}

impl UnavailableLocationProvider {
    pub fn new(reason: LocationFailure) -> Self {
        Self { reason }
    }
}

#[async_trait]
impl LocationProvider for UnavailableLocationProvider {
    async fn current_coordinate(&self) -> Result<Coordinate, LocationFailure> {
        Err(self.reason)
    }
}

/// Ask the provider for a position, giving up after `limit`. No retries.
pub async fn resolve_location(provider: &dyn LocationProvider, limit: Duration) -> LocationState {
    match timeout(limit, provider.current_coordinate()).await {
        Ok(Ok(coord)) => match coord.validate() {
            Ok(coord) => {
                debug!("Location resolved to {}", coord);
                LocationState::Available(coord)
            }
            Err(e) => {
                warn!("⚠️ Location provider returned an invalid coordinate: {}", e);
                LocationState::Unavailable(LocationFailure::ProviderError)
            }
        },
        Ok(Err(failure)) => LocationState::Unavailable(failure),
        Err(_) => LocationState::Unavailable(LocationFailure::Timeout),
    }
}
