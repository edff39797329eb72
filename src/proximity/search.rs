// src/proximity/search.rs
use crate::models::Searchable;

/// Keep the entries whose name or vicinity contains `query`, ignoring case.
/// A blank query keeps everything. Order is preserved.
pub fn filter_by_query<T: Searchable + Clone>(entries: &[T], query: &str) -> Vec<T> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return entries.to_vec();
    }
    entries
        .iter()
        .filter(|entry| {
            entry.name().to_lowercase().contains(&needle)
                || entry.vicinity().to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CenterCatalog;
    use crate::models::{Coordinate, DocumentCategory, RankedCenter};
    use crate::proximity::ranking::rank_centers;

    fn ranked_aadhar() -> Vec<RankedCenter> {
        let catalog = CenterCatalog::bundled().unwrap();
        let origin = Coordinate::new(12.9352, 77.6245).unwrap();
        rank_centers(catalog.centers_for(DocumentCategory::Aadhar), origin, 500.0)
    }

    #[test]
    fn test_mixed_case_query_matches_vicinity_or_name() {
        let ranked = ranked_aadhar();
        let filtered = filter_by_query(&ranked, "MySoRe");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].center.vicinity, "Vijayanagar, Mysore");
        // Distances come through as computed by the ranking step
        assert_eq!(filtered[0], ranked[1]);
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let ranked = ranked_aadhar();
        let filtered = filter_by_query(&ranked, " mysore ");
        assert_eq!(filtered, vec![ranked[1].clone()]);
    }

    #[test]
    fn test_vicinity_only_match() {
        let filtered = filter_by_query(&ranked_aadhar(), "hampankatta");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].center.name, "Aadhar Center - Mangalore");
    }

    #[test]
    fn test_blank_query_returns_input() {
        let ranked = ranked_aadhar();
        assert_eq!(filter_by_query(&ranked, ""), ranked);
        assert_eq!(filter_by_query(&ranked, "   \t"), ranked);
    }

    #[test]
    fn test_result_is_ordered_subsequence() {
        let ranked = ranked_aadhar();
        let filtered = filter_by_query(&ranked, "center");
        assert_eq!(filtered.len(), ranked.len());

        let filtered = filter_by_query(&ranked, "a");
        let mut cursor = ranked.iter();
        for entry in &filtered {
            assert!(cursor.any(|r| r == entry));
        }
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(filter_by_query(&ranked_aadhar(), "chennai").is_empty());
    }
}
