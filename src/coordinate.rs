use core::fmt;

use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize};

use crate::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct GeoCoordinate {
    /// degrees
    pub latitude: f64,
    /// degrees
    pub longitude: f64,
}

impl GeoCoordinate {
    /// Builds a coordinate without range checks, the solver's inputs are the caller's to validate.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self, GeoError> {
        if !is_valid_latitude(latitude) {
            return Err(GeoError::InvalidLatitude(latitude));
        }
        if !is_valid_longitude(longitude) {
            return Err(GeoError::InvalidLongitude(longitude));
        }
        Ok(Self { latitude, longitude })
    }

    pub fn is_valid(&self) -> bool {
        is_valid_latitude(self.latitude) && is_valid_longitude(self.longitude)
    }

    /// Projects this coordinate `distance` meters along `bearing` (radians from true north).
    pub fn project(&self, ellipsoid: &Ellipsoid, distance: f64, bearing: f64) -> GeoCoordinate {
        solve_direct(ellipsoid, self.latitude, self.longitude, distance, bearing)
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

impl<'de> Deserialize<'de> for GeoCoordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Inner {
            latitude: f64,
            longitude: f64,
        }

        let inner = Inner::deserialize(deserializer)?;
        GeoCoordinate::try_new(inner.latitude, inner.longitude).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn displays_six_decimals() {
        let berlin = GeoCoordinate::new(52.52, 13.405);
        assert_eq!(berlin.to_string(), "52.520000, 13.405000");
    }

    #[rstest]
    #[case::valid(52.52, 13.405, Ok(GeoCoordinate::new(52.52, 13.405)))]
    #[case::latitude_too_high(90.5, 0.0, Err(GeoError::InvalidLatitude(90.5)))]
    #[case::longitude_too_low(0.0, -180.5, Err(GeoError::InvalidLongitude(-180.5)))]
    fn try_new_validates_ranges(#[case] latitude: f64, #[case] longitude: f64, #[case] expected: Result<GeoCoordinate, GeoError>) {
        assert_eq!(GeoCoordinate::try_new(latitude, longitude), expected);
    }

    #[test]
    fn try_new_rejects_nan() {
        assert!(matches!(GeoCoordinate::try_new(f64::NAN, 0.0), Err(GeoError::InvalidLatitude(_))));
        assert!(!GeoCoordinate::new(0.0, f64::NAN).is_valid());
    }

    #[test]
    fn serializes_as_named_fields() {
        let json = serde_json::to_string(&GeoCoordinate::new(1.5, -2.25)).unwrap();
        assert_eq!(json, r#"{"latitude":1.5,"longitude":-2.25}"#);
    }

    #[rstest]
    #[case::valid(r#"{"latitude": 51.8615899, "longitude": 4.3580323}"#, Ok(GeoCoordinate::new(51.8615899, 4.3580323)))]
    #[case::invalid_latitude(r#"{"latitude": -91, "longitude": 0}"#, Err("Invalid latitude: -91, must be between -90 and 90".to_string()))]
    #[case::invalid_longitude(r#"{"latitude": 0, "longitude": 200}"#, Err("Invalid longitude: 200, must be between -180 and 180".to_string()))]
    fn deserializes_with_validation(#[case] json: &str, #[case] expected: Result<GeoCoordinate, String>) {
        let result = serde_json::from_str::<GeoCoordinate>(json).map_err(|e| e.to_string());

        match (result, expected) {
            (Ok(actual), Ok(expected)) => assert_eq!(actual, expected),
            (Err(actual), Err(expected)) => assert!(actual.starts_with(&expected), "{actual}"),
            (actual, expected) => panic!("expected {expected:?}, got {actual:?}"),
        }
    }

    #[test]
    fn zero_distance_projection_is_identity() {
        let start = GeoCoordinate::new(-33.8688, 151.2093);
        let end = start.project(&Ellipsoid::WGS84, 0.0, 1.234);
        assert!((end.latitude - start.latitude).abs() < 1e-9);
        assert!((end.longitude - start.longitude).abs() < 1e-9);
    }
}
