//! Direct geodesic problem on an ellipsoid, after Vincenty (1975).
//!
//! Ref : Vincenty T., (1975): Direct and Inverse Solutions of Geodesics on the Ellipsoid with
//!       Application of Nested Equations, Survey Review, Vol. 23, No. 176, pp. 88-93.

use tracing::{debug, warn};

use crate::*;

/// Radians on the auxiliary sphere, roughly 0.006 mm on the ground.
pub const CONVERGENCE_THRESHOLD: f64 = 1e-12;
pub const MAX_ITERATIONS: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectSolution {
    pub destination: GeoCoordinate,
    /// Refinements of sigma that were run, at most `MAX_ITERATIONS`.
    pub iterations: u32,
    /// False when the iteration cap was hit and the last sigma was used as is.
    pub converged: bool,
}

/// Destination reached from `latitude`/`longitude` (degrees) after travelling
/// `distance` meters along the geodesic leaving at `bearing` radians from true north.
///
/// Inputs are not validated. When sigma does not settle within `MAX_ITERATIONS`
/// the last estimate is returned, use [`solve_direct_detailed`] to find out.
pub fn solve_direct(ellipsoid: &Ellipsoid, latitude: f64, longitude: f64, distance: f64, bearing: f64) -> GeoCoordinate {
    solve_direct_detailed(ellipsoid, latitude, longitude, distance, bearing).destination
}

pub fn solve_direct_detailed(ellipsoid: &Ellipsoid, latitude: f64, longitude: f64, distance: f64, bearing: f64) -> DirectSolution {
    let f = ellipsoid.flattening;
    let b = ellipsoid.semi_minor_axis;

    let latitude_rads = degrees_to_radians(latitude);
    let longitude_rads = degrees_to_radians(longitude);

    let reduced_latitude = ((1.0 - f) * latitude_rads.tan()).atan();
    let sin_u1 = reduced_latitude.sin();
    let cos_u1 = reduced_latitude.cos();

    let sin_bearing = bearing.sin();
    let cos_bearing = bearing.cos();

    // α is the azimuth of the geodesic where it crosses the equator
    let sin_alpha = cos_u1 * sin_bearing;
    let sin_sq_alpha = sin_alpha * sin_alpha;
    let cos_sq_alpha = 1.0 - sin_sq_alpha;

    let sigma1 = reduced_latitude.tan().atan2(cos_bearing);

    let u_squared = cos_sq_alpha * ellipsoid.second_eccentricity_squared();
    let coefficient_a = 1.0 + u_squared / 16384.0 * (4096.0 + u_squared * (-768.0 + u_squared * (320.0 - 175.0 * u_squared)));
    let coefficient_b = u_squared / 1024.0 * (256.0 + u_squared * (-128.0 + u_squared * (74.0 - 47.0 * u_squared)));

    let first_approximation = distance / (b * coefficient_a);
    let mut sigma = first_approximation;
    let mut sigma_previous = 0.0;
    let mut iterations = 0;

    while (sigma - sigma_previous).abs() > CONVERGENCE_THRESHOLD && iterations < MAX_ITERATIONS {
        iterations += 1;

        let sin_sigma = sigma.sin();
        let cos_sigma = sigma.cos();
        let cos_2_sigma_m = (2.0 * sigma1 + sigma).cos();

        let delta_sigma = coefficient_b
            * sin_sigma
            * (cos_2_sigma_m
                + coefficient_b / 4.0
                    * (cos_sigma * (-1.0 + 2.0 * cos_2_sigma_m * cos_2_sigma_m)
                        - coefficient_b / 6.0
                            * cos_2_sigma_m
                            * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                            * (-3.0 + 4.0 * cos_2_sigma_m * cos_2_sigma_m)));

        sigma_previous = sigma;
        sigma = first_approximation + delta_sigma;
    }

    let converged = (sigma - sigma_previous).abs() <= CONVERGENCE_THRESHOLD;
    if converged {
        debug!(iterations, distance, bearing, "Vincenty direct converged");
    } else {
        warn!(iterations, latitude, longitude, distance, bearing, "Vincenty direct did not converge, using last estimate");
    }

    let sin_sigma = sigma.sin();
    let cos_sigma = sigma.cos();
    let cos_2_sigma_m = (2.0 * sigma1 + sigma).cos();

    let x = sin_u1 * sin_sigma - cos_u1 * cos_sigma * cos_bearing;
    let latitude2 = (sin_u1 * cos_sigma + cos_u1 * sin_sigma * cos_bearing).atan2((1.0 - f) * (sin_sq_alpha + x * x).sqrt());

    let lambda = (sin_sigma * sin_bearing).atan2(cos_u1 * cos_sigma - sin_u1 * sin_sigma * cos_bearing);

    let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));
    let longitude_delta = lambda
        - (1.0 - c)
            * f
            * sin_alpha
            * (sigma + c * sin_sigma * (cos_2_sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2_sigma_m * cos_2_sigma_m)));
    let longitude2 = longitude_rads + longitude_delta;

    DirectSolution {
        destination: GeoCoordinate::new(radians_to_degrees(latitude2), normalize_longitude(radians_to_degrees(longitude2))),
        iterations,
        converged,
    }
}
