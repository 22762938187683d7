//! Full-sky angular viewports.

use galmap_common::{Angle, AngleUnit, Extent, GalmapResult, Quantity};
use galmap_projection::{convert_radec, SkyProjection};

use crate::crop::CropResult;
use crate::grayscale::grayscale_in_place;
use crate::source::SourceImage;

/// A validated all-sky viewport request.
///
/// The sky grid is origin-fixed: longitude 0 sits at the middle
/// column and latitude 0 at the middle row of the padded grid, with
/// the full data band spanning 360 by 180 degrees. There is no frame
/// shift and, unlike the planar path, no padding: windows that exceed
/// the grid are clamped and yield a degenerate (possibly empty)
/// buffer. Callers must validate their own angular ranges.
#[derive(Debug, Clone)]
pub struct SkyViewport {
    projection: SkyProjection,
    center: (Angle, Angle),
    radius: (Angle, Angle),
    grayscale: bool,
}

impl SkyViewport {
    /// Validate and build a sky viewport.
    ///
    /// Center and radius are galactic (longitude, latitude) pairs; bare
    /// numbers are assumed to be degrees with a logged warning.
    pub fn new(
        projection: SkyProjection,
        center: (Quantity, Quantity),
        radius: (Quantity, Quantity),
        grayscale: bool,
    ) -> GalmapResult<Self> {
        let center = (
            center.0.angle_or_default(AngleUnit::Degree, "center longitude")?,
            center.1.angle_or_default(AngleUnit::Degree, "center latitude")?,
        );
        let radius = (
            radius.0.angle_or_default(AngleUnit::Degree, "radius longitude")?,
            radius.1.angle_or_default(AngleUnit::Degree, "radius latitude")?,
        );

        Ok(Self {
            projection,
            center,
            radius,
            grayscale,
        })
    }

    pub fn projection(&self) -> SkyProjection {
        self.projection
    }

    /// Convert an equatorial (RA, Dec) coordinate into this viewport's
    /// plotting frame; degrees for equirectangular, radians otherwise.
    pub fn check_radec(&self, ra: Quantity, dec: Quantity) -> GalmapResult<(f64, f64)> {
        convert_radec(self.projection, ra, dec)
    }

    /// Run the extraction pipeline against a loaded sky image.
    pub fn render(&self, source: &SourceImage) -> GalmapResult<CropResult> {
        let width = source.buffer.width() as i64;
        let height = source.buffer.height() as i64;

        // Fixed angular resolution of the grid: the full width covers
        // 360 degrees of longitude, half the height covers 180 degrees
        // of latitude.
        let px_per_deg_x = width as f64 / 360.0;
        let px_per_deg_y = (height as f64 / 2.0) / 180.0;

        let lon = self.center.0.value_in(AngleUnit::Degree);
        let lat = self.center.1.value_in(AngleUnit::Degree);
        let rad_lon = self.radius.0.value_in(AngleUnit::Degree);
        let rad_lat = self.radius.1.value_in(AngleUnit::Degree);

        let x_center = (px_per_deg_x * lon) as i64 + width / 2;
        let y_center = height / 2 - (px_per_deg_y * lat) as i64;
        let x_radius = (px_per_deg_x * rad_lon) as i64;
        let y_radius = (px_per_deg_y * rad_lat) as i64;

        tracing::debug!(
            x_center,
            y_center,
            x_radius,
            y_radius,
            "computed sky crop window"
        );

        let mut img = source.buffer.slice(
            x_center - x_radius,
            x_center + x_radius,
            y_center - y_radius,
            y_center + y_radius,
        );

        if self.grayscale {
            grayscale_in_place(&mut img);
        }

        let extent = Extent::new(lon - rad_lon, lon + rad_lon, lat - rad_lat, lat + rad_lat);
        let aspect_ratio = if img.is_empty() || extent.height() == 0.0 {
            1.0
        } else {
            (img.height() as f64 / img.width() as f64 * (extent.width() / extent.height())).abs()
        };

        Ok(CropResult {
            buffer: img,
            extent,
            aspect_ratio,
            coord_label: "Galactic Coordinates",
        })
    }
}
