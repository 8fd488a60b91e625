/// Reference ellipsoid the geodesic solver works on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    /// meters
    pub semi_major_axis: f64,
    pub flattening: f64,
    /// meters, a * (1 - f)
    pub semi_minor_axis: f64,
}

impl Ellipsoid {
    pub const WGS84: Ellipsoid = Ellipsoid::new(6378137.0, 1.0 / 298.257223563);

    pub const fn new(semi_major_axis: f64, flattening: f64) -> Self {
        Self {
            semi_major_axis,
            flattening,
            semi_minor_axis: semi_major_axis * (1.0 - flattening),
        }
    }

    /// (a² - b²) / b², scaled by cos²α to get u² in the Vincenty series.
    pub fn second_eccentricity_squared(&self) -> f64 {
        let a_squared = self.semi_major_axis * self.semi_major_axis;
        let b_squared = self.semi_minor_axis * self.semi_minor_axis;
        (a_squared - b_squared) / b_squared
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Ellipsoid::WGS84
    }
}
