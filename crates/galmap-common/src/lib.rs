//! Common types shared across the galmap workspace.

pub mod error;
pub mod extent;
pub mod mode;
pub mod rotation;
pub mod units;

pub use error::{GalmapError, GalmapResult};
pub use extent::Extent;
pub use mode::{CoordFrame, PlanarMode};
pub use rotation::Rot90;
pub use units::{Angle, AngleUnit, Length, LengthUnit, Quantity, Unit};
