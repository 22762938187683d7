//! Inverted-luminance grayscale conversion.

use rayon::prelude::*;

use crate::buffer::PixelBuffer;

const R_WEIGHT: f64 = 0.2989;
const G_WEIGHT: f64 = 0.5870;
const B_WEIGHT: f64 = 0.1140;

/// Convert an RGB buffer to inverted grayscale, in RGB representation.
///
/// Each pixel becomes `255 - luma` replicated across all three
/// channels, using the 0.2989/0.5870/0.1140 luminance weights. Pixels
/// that are already neutral (R == G == B) are left untouched, which
/// makes the conversion idempotent and keeps synthetic padding fill
/// values stable when the converter runs after padding.
pub fn grayscale_in_place(buf: &mut PixelBuffer) {
    buf.data_mut().par_chunks_mut(3).for_each(|px| {
        let (r, g, b) = (px[0], px[1], px[2]);
        if r == g && g == b {
            return;
        }
        let luma = R_WEIGHT * r as f64 + G_WEIGHT * g as f64 + B_WEIGHT * b as f64;
        let v = (255.0 - luma).clamp(0.0, 255.0) as u8;
        px[0] = v;
        px[1] = v;
        px[2] = v;
    });
}
