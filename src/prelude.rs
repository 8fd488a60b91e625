pub use crate::angles::{clamp, degrees_to_radians, is_valid_latitude, is_valid_longitude, normalize_longitude, radians_to_degrees};
pub use crate::coordinate::GeoCoordinate;
pub use crate::destination::{DestinationGenerator, random_destination};
pub use crate::earth::Ellipsoid;
pub use crate::entropy::{CryptoSource, OsEntropy, UniformSource};
pub use crate::error::GeoError;
pub use crate::units::{DistanceUnit, effective_radius_km};
pub use crate::vincenty::{DirectSolution, solve_direct, solve_direct_detailed};
