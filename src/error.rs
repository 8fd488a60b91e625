#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GeoError {
    #[error("Secure random source unavailable: {0}")]
    Entropy(String),
    #[error("Invalid latitude: {0}, must be between -90 and 90")]
    InvalidLatitude(f64),
    #[error("Invalid longitude: {0}, must be between -180 and 180")]
    InvalidLongitude(f64),
    #[error("Invalid distance: {0}, must be a finite non-negative number")]
    InvalidDistance(f64),
}
