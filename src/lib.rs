//! Vincenty direct projection on WGS-84 and "surprise me" destinations drawn
//! at a random bearing from a cryptographically secure source.

pub mod angles;
pub mod coordinate;
pub mod destination;
pub mod earth;
pub mod entropy;
pub mod error;
pub mod prelude;
pub mod units;
pub mod vincenty;

pub use crate::prelude::*;
