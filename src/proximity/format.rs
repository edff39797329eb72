// src/proximity/format.rs
use url::Url;

use crate::models::Coordinate;
use crate::utils::constants::MAPS_DIRECTIONS_URL;

/// "350m" under a kilometer, "12.3km" otherwise.
pub fn format_distance(distance_km: f64) -> String {
    if distance_km < 1.0 {
        format!("{}m", (distance_km * 1000.0).round())
    } else {
        format!("{:.1}km", distance_km)
    }
}

/// Map directions link to a center.
pub fn directions_url(destination: Coordinate) -> Result<Url, url::ParseError> {
    Url::parse_with_params(
        MAPS_DIRECTIONS_URL,
        &[
            ("api", "1".to_string()),
            (
                "destination",
                format!("{},{}", destination.latitude, destination.longitude),
            ),
        ],
    )
}

pub fn no_centers_message(radius_km: f64) -> String {
    format!("No centers found within {}km", radius_km)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(0.0), "0m");
        assert_eq!(format_distance(0.35), "350m");
        assert_eq!(format_distance(0.9996), "1000m");
        assert_eq!(format_distance(1.0), "1.0km");
        assert_eq!(format_distance(123.456), "123.5km");
    }

    #[test]
    fn test_directions_url() {
        let url = directions_url(Coordinate::new(12.9352, 77.6245).unwrap()).unwrap();
        assert_eq!(url.host_str(), Some("www.google.com"));
        assert_eq!(url.path(), "/maps/dir/");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("api".to_string(), "1".to_string()),
                ("destination".to_string(), "12.9352,77.6245".to_string()),
            ]
        );
    }

    #[test]
    fn test_no_centers_message() {
        assert_eq!(no_centers_message(100.0), "No centers found within 100km");
        assert_eq!(no_centers_message(12.5), "No centers found within 12.5km");
    }
}
