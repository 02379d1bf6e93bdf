//! Geographic types produced by the maps link resolver

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees.
///
/// Both components are guaranteed finite when built through
/// [`Coordinates::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
}

impl Coordinates {
    /// Returns `None` unless both components are finite.
    pub fn new(lat: f64, lon: f64) -> Option<Self> {
        (lat.is_finite() && lon.is_finite()).then_some(Self { lat, lon })
    }

    /// Parse a pair of decimal strings, as captured from a link or page.
    pub fn parse(lat: &str, lon: &str) -> Option<Self> {
        let lat = lat.trim().parse::<f64>().ok()?;
        let lon = lon.trim().parse::<f64>().ok()?;
        Self::new(lat, lon)
    }
}

/// Successful resolution of a maps link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedLocation {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
    /// URL reached after following redirects.
    pub final_url: String,
}

impl ResolvedLocation {
    /// Pair `coordinates` with the URL they were read from.
    pub fn new(coordinates: Coordinates, final_url: impl Into<String>) -> Self {
        Self { lat: coordinates.lat, lon: coordinates.lon, final_url: final_url.into() }
    }

    /// The latitude/longitude pair alone.
    pub fn coordinates(&self) -> Coordinates {
        Coordinates { lat: self.lat, lon: self.lon }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_signed_decimals() {
        let coords = Coordinates::parse("-33.8688", "151.2093").unwrap();
        assert_eq!(coords, Coordinates { lat: -33.8688, lon: 151.2093 });
    }

    #[test]
    fn parse_rejects_non_numeric_and_non_finite() {
        assert!(Coordinates::parse("abc", "2.0").is_none());
        assert!(Coordinates::parse("inf", "2.0").is_none());
        assert!(Coordinates::parse("1.0", "NaN").is_none());
    }

    #[test]
    fn resolved_location_uses_camel_case_final_url() {
        let location = ResolvedLocation::new(
            Coordinates { lat: 48.858, lon: 2.294 },
            "https://www.google.com/maps/@48.858,2.294,15z",
        );
        let json = serde_json::to_value(&location).unwrap();

        assert_eq!(json["lat"], 48.858);
        assert_eq!(json["lon"], 2.294);
        assert_eq!(json["finalUrl"], "https://www.google.com/maps/@48.858,2.294,15z");
    }
}
