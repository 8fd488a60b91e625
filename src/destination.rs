use core::f64::consts::TAU;

use tracing::trace;

use crate::*;

pub const METERS_PER_KILOMETER: f64 = 1000.0;

/// Picks destinations a fixed distance away from a start point, in a direction
/// drawn from `source`.
#[derive(Clone, Debug)]
pub struct DestinationGenerator<S: UniformSource> {
    ellipsoid: Ellipsoid,
    source: S,
}

impl DestinationGenerator<OsEntropy> {
    pub fn wgs84() -> Self {
        Self::new(Ellipsoid::WGS84, OsEntropy)
    }
}

impl<S: UniformSource> DestinationGenerator<S> {
    pub fn new(ellipsoid: Ellipsoid, source: S) -> Self {
        Self { ellipsoid, source }
    }

    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    /// One draw from the source, scaled to a bearing in [0, 2π) radians.
    pub fn draw_bearing(&mut self) -> Result<f64, GeoError> {
        let bearing = self.source.next_unit()? * TAU;
        trace!(bearing, "Drew bearing");
        Ok(bearing)
    }

    /// Destination `radius_km` kilometers from `start` in a random direction.
    ///
    /// `start` is not range checked; `radius_km` must be finite and non-negative.
    pub fn generate(&mut self, start: GeoCoordinate, radius_km: f64) -> Result<GeoCoordinate, GeoError> {
        if !(radius_km.is_finite() && radius_km >= 0.0) {
            return Err(GeoError::InvalidDistance(radius_km));
        }

        let distance = radius_km * METERS_PER_KILOMETER;
        let bearing = self.draw_bearing()?;
        Ok(start.project(&self.ellipsoid, distance, bearing))
    }
}

/// Random destination `radius_km` kilometers away from `latitude`/`longitude`,
/// on WGS-84, with the bearing drawn from the operating system's CSPRNG.
pub fn random_destination(latitude: f64, longitude: f64, radius_km: f64) -> Result<GeoCoordinate, GeoError> {
    DestinationGenerator::wgs84().generate(GeoCoordinate::new(latitude, longitude), radius_km)
}
