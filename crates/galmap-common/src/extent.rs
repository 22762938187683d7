//! Extent rectangles reported alongside cropped images.

use serde::{Deserialize, Serialize};

use crate::rotation::Rot90;

/// The (left, right, bottom, top) bounding rectangle of a cropped image,
/// in the request's physical or angular units.
///
/// The ordering follows the plotting convention: `left`/`right` bound the
/// horizontal axis and `bottom`/`top` the vertical axis. Rotating the
/// image permutes these bounds so physical axis labels stay attached to
/// the correct pixel edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl Extent {
    /// Create a new extent from its four bounds.
    pub fn new(left: f64, right: f64, bottom: f64, top: f64) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
        }
    }

    /// Horizontal span in coordinate units.
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Vertical span in coordinate units.
    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    /// Permute the bounds to match a counter-clockwise rotation of the
    /// image by `rot` quarter turns.
    ///
    /// This is a pure permutation of the four values; magnitudes are
    /// never altered. Four quarter turns return the original extent.
    pub fn rotate(&self, rot: Rot90) -> Extent {
        let Extent {
            left: l,
            right: r,
            bottom: b,
            top: t,
        } = *self;
        match rot.steps() {
            1 => Extent::new(b, t, l, r),
            2 => Extent::new(r, l, t, b),
            3 => Extent::new(t, b, r, l),
            _ => *self,
        }
    }

    /// The four bounds as `[left, right, bottom, top]`, the order the
    /// rendering collaborator expects.
    pub fn as_array(&self) -> [f64; 4] {
        [self.left, self.right, self.bottom, self.top]
    }
}
