//! The per-request output handed to the rendering collaborator.

use galmap_common::Extent;

use crate::buffer::PixelBuffer;

/// A cropped viewport ready for plotting.
///
/// Created fresh per request and owned solely by the caller. The
/// rendering collaborator must apply `extent` and `aspect_ratio`
/// exactly as given to keep physical-unit axis labels correct.
#[derive(Debug, Clone)]
pub struct CropResult {
    /// The extracted (and possibly padded, grayscaled, rotated) pixels.
    pub buffer: PixelBuffer,
    /// Bounding rectangle of the buffer in request units, already
    /// permuted for any applied rotation.
    pub extent: Extent,
    /// On-screen aspect correction for physically non-square viewports.
    pub aspect_ratio: f64,
    /// Axis title for the coordinate system of the extent.
    pub coord_label: &'static str,
}
