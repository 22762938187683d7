//! Celestial coordinate transforms and sky projections.
//!
//! Implements the ICRS-to-galactic frame rotation and the forward math
//! for the supported all-sky map projections from scratch.

pub mod frames;
pub mod projection;

pub use frames::{convert_radec, equatorial_to_galactic, wrap_longitude_deg};
pub use projection::SkyProjection;
