// src/utils/logging.rs - Logging helpers for center searches
use log::{debug, info, warn};
use std::time::Instant;

use crate::location::LocationFailure;
use crate::models::{Coordinate, DocumentCategory};

#[derive(Clone)]
pub struct SearchLogger {
    category_name: &'static str,
    category_emoji: &'static str,
    start_time: Instant,
}

impl SearchLogger {
    pub fn new(category: DocumentCategory) -> Self {
        let (category_name, category_emoji) = match category {
            DocumentCategory::Aadhar => ("AADHAR", "🆔"),
            DocumentCategory::Pan => ("PAN", "💳"),
            DocumentCategory::Voter => ("VOTER", "🗳️"),
            DocumentCategory::Passport => ("PASSPORT", "🛂"),
        };

        Self {
            category_name,
            category_emoji,
            start_time: Instant::now(),
        }
    }

    pub fn log_start(&self, ticket: u64, radius_km: f64, query: &str) {
        info!(
            "[{}] {} 🚀 Starting center search #{} (radius: {} km{})",
            self.category_name,
            self.category_emoji,
            ticket,
            radius_km,
            if query.trim().is_empty() {
                String::new()
            } else {
                format!(", query: '{}'", query.trim())
            }
        );
    }

    pub fn log_catalog(&self, count: usize) {
        debug!(
            "[{}] {} 📊 {} centers in catalog",
            self.category_name, self.category_emoji, count
        );
    }

    pub fn log_location(&self, origin: Coordinate) {
        info!(
            "[{}] {} 📍 User located at {}",
            self.category_name, self.category_emoji, origin
        );
    }

    pub fn log_location_unavailable(&self, reason: LocationFailure) {
        warn!(
            "[{}] {} ⚠️  Location unavailable ({}); showing catalog without distances",
            self.category_name, self.category_emoji, reason
        );
    }

    pub fn log_ranked(&self, catalog_size: usize, within_radius: usize, radius_km: f64) {
        info!(
            "[{}] {} 📏 {}/{} centers within {} km",
            self.category_name, self.category_emoji, within_radius, catalog_size, radius_km
        );
    }

    pub fn log_query(&self, query: &str, before: usize, after: usize) {
        debug!(
            "[{}] {} 🔎 Query '{}' kept {}/{} centers",
            self.category_name, self.category_emoji, query, after, before
        );
    }

    pub fn log_stale(&self, ticket: u64, latest: u64) {
        info!(
            "[{}] {} ⏭️  Discarding result of search #{} (latest is #{})",
            self.category_name, self.category_emoji, ticket, latest
        );
    }

    pub fn log_complete(&self, count: usize, distances_known: bool) {
        let elapsed = self.start_time.elapsed();
        info!(
            "[{}] {} ✅ Search complete: {} centers{} [{:.2}s]",
            self.category_name,
            self.category_emoji,
            count,
            if distances_known { "" } else { " (distances unknown)" },
            elapsed.as_secs_f64()
        );
    }
}
