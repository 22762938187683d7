//! Quarter-turn rotation counts.

use serde::{Deserialize, Serialize};

/// A counter-clockwise rotation by a whole number of quarter turns.
///
/// Stored reduced modulo 4, so `Rot90::new(5)` equals `Rot90::new(1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rot90(u8);

impl Rot90 {
    pub fn new(steps: u32) -> Self {
        Self((steps % 4) as u8)
    }

    /// Number of quarter turns, in 0..4.
    pub fn steps(self) -> u8 {
        self.0
    }

    /// True for 90 and 270 degree rotations, which swap the axes.
    pub fn is_odd(self) -> bool {
        self.0 % 2 == 1
    }
}

impl From<u32> for Rot90 {
    fn from(steps: u32) -> Self {
        Self::new(steps)
    }
}
