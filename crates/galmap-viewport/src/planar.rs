//! Face-on and edge-on galaxy-plane viewports.

use galmap_common::{
    CoordFrame, Extent, GalmapResult, Length, LengthUnit, PlanarMode, Quantity, Rot90,
};

use crate::buffer::PixelBuffer;
use crate::crop::CropResult;
use crate::grayscale::grayscale_in_place;
use crate::source::{SourceImage, SourceImageKind};

/// Face-on pixel count divisor fixing the physical resolution: the
/// galactic bar radius `r0` spans 1078 pixels of the face-on grid.
const FACE_ON_R0_PIXELS: f64 = 1078.0;

/// Fixed edge-on resolution in light-years per pixel.
const EDGE_ON_LYR_PER_PIXEL: f64 = 15.384_615_846;

/// A validated planar viewport request.
///
/// Validation happens entirely at construction; rendering against a
/// source image is a pure transform that cannot fail afterwards except
/// for unit errors in per-point coordinate checks.
#[derive(Debug, Clone)]
pub struct PlanarViewport {
    mode: PlanarMode,
    frame: CoordFrame,
    r0: Length,
    center: (Length, Length),
    radius: Length,
    unit: LengthUnit,
    rotation: Rot90,
    grayscale: bool,
    annotation: bool,
}

/// The integer crop window in source-grid pixel coordinates.
#[derive(Debug, Clone, Copy)]
struct PixelWindow {
    radius: i64,
    x_left: i64,
    x_right: i64,
    y_top: i64,
    y_bottom: i64,
}

impl PlanarViewport {
    /// Validate and build a planar viewport.
    ///
    /// `center` and `radius` may be bare numbers; they are then assumed
    /// to be in `unit` and a warning is logged (the lenient policy).
    /// Wrong-dimension tags fail with `IncompatibleUnit`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        mode: PlanarMode,
        frame: CoordFrame,
        r0: Length,
        center: (Quantity, Quantity),
        radius: Quantity,
        unit: LengthUnit,
        rotation: Rot90,
        grayscale: bool,
        annotation: bool,
    ) -> GalmapResult<Self> {
        let center_x = center.0.length_or_default(unit, "center x")?;
        let center_y = center.1.length_or_default(unit, "center y")?;
        let radius = radius.length_or_default(unit, "radius")?;

        Ok(Self {
            mode,
            frame,
            r0: r0.to(LengthUnit::Kpc),
            center: (center_x, center_y),
            radius,
            unit,
            rotation,
            grayscale,
            annotation,
        })
    }

    pub fn mode(&self) -> PlanarMode {
        self.mode
    }

    pub fn frame(&self) -> CoordFrame {
        self.frame
    }

    pub fn rotation(&self) -> Rot90 {
        self.rotation
    }

    /// Physical size of one source pixel, in the request unit.
    pub fn resolution(&self) -> Length {
        match self.mode {
            PlanarMode::FaceOn => (self.r0 / FACE_ON_R0_PIXELS).to(self.unit),
            PlanarMode::EdgeOn => Length::light_years(EDGE_ON_LYR_PER_PIXEL).to(self.unit),
        }
    }

    /// Which pre-rendered raster this viewport crops from.
    ///
    /// Only the face-on image exists in an annotated variant.
    pub fn source_kind(&self) -> SourceImageKind {
        match self.mode {
            PlanarMode::FaceOn if self.annotation => SourceImageKind::FaceOnAnnotated,
            PlanarMode::FaceOn => SourceImageKind::FaceOnUnannotated,
            PlanarMode::EdgeOn => SourceImageKind::EdgeOn,
        }
    }

    /// Axis title for the requested coordinate frame.
    pub fn coord_label(&self) -> &'static str {
        self.frame.label()
    }

    /// Unit-check a scatter coordinate pair against the request unit.
    ///
    /// Unlike construction, this path is strict: bare values fail with
    /// `MissingUnit`. When the viewport is rotated by an odd number of
    /// quarter turns the axes are swapped, so that the returned pair
    /// stays attached to physical directions rather than screen
    /// directions.
    pub fn check_coords(&self, x: Quantity, y: Quantity) -> GalmapResult<(f64, f64)> {
        let x = x.resolve_length(self.unit, "x")?;
        let y = y.resolve_length(self.unit, "y")?;
        if self.rotation.is_odd() {
            Ok((y, x))
        } else {
            Ok((x, y))
        }
    }

    /// Horizontal shift applied to galactic-frame centers, in request
    /// units. The source images are galactocentric.
    fn frame_shift(&self) -> f64 {
        match self.frame {
            CoordFrame::Galactic => self.r0.value_in(self.unit),
            CoordFrame::Galactocentric => 0.0,
        }
    }

    /// Convert the physical center/radius to an integer pixel window.
    ///
    /// Conversions truncate toward zero, matching integer-pixel box
    /// extraction. Pixel y grows downward while physical y grows
    /// upward, hence the inverted vertical center.
    fn pixel_window(&self, grid_pixels: usize) -> PixelWindow {
        let pixels = grid_pixels as f64;
        let res = self.resolution().value;
        let shifted_x = self.center.0.value_in(self.unit) + self.frame_shift();
        let center_y = self.center.1.value_in(self.unit);

        let radius = (self.radius.value_in(self.unit) / res) as i64;
        let center_px_x = (pixels / 2.0 + shifted_x / res) as i64;
        let center_px_y = (pixels / 2.0 - center_y / res) as i64;

        let window = PixelWindow {
            radius,
            x_left: center_px_x - radius,
            x_right: center_px_x + radius,
            y_top: grid_pixels as i64 - center_px_y - radius,
            y_bottom: grid_pixels as i64 - center_px_y + radius,
        };
        tracing::debug!(?window, grid_pixels, "computed planar crop window");
        window
    }

    /// Extract the window from the source grid, padding with a fill
    /// color where the window exceeds the pre-rendered image.
    ///
    /// The out-of-range region is filled silently (white for grayscale
    /// requests, black otherwise); this is the documented behavior for
    /// viewports larger than the source.
    fn extract_or_pad(&self, source: &PixelBuffer, window: PixelWindow) -> PixelBuffer {
        let pixels = source.width() as i64;
        let fully_inside = window.x_left >= 0
            && window.x_right <= pixels
            && window.y_top >= 0
            && window.y_bottom <= pixels;

        if fully_inside {
            return source.slice(window.x_left, window.x_right, window.y_top, window.y_bottom);
        }

        let fill = if self.grayscale { 255 } else { 0 };
        let side = (window.radius * 2).max(0) as usize;
        let mut padded = PixelBuffer::filled(side, side, fill);

        let available = source.slice(
            window.x_left.max(0),
            window.x_right.min(pixels),
            window.y_top.max(0),
            window.y_bottom.min(pixels),
        );
        let left_exceed = (-window.x_left.min(0)) as usize;
        let top_exceed = (-window.y_top.min(0)) as usize;
        padded.copy_from(&available, left_exceed, top_exceed);
        padded
    }

    /// Extent of the crop in request units, in the caller's frame.
    ///
    /// Edge-on viewports measure height above and below the disk with
    /// an inverted sign convention relative to the face-on vertical
    /// coordinate.
    fn base_extent(&self) -> Extent {
        let cx = self.center.0.value_in(self.unit);
        let cy = self.center.1.value_in(self.unit);
        let r = self.radius.value_in(self.unit);

        let mut ext = Extent::new(cx - r, cx + r, cy - r, cy + r);
        if self.mode == PlanarMode::EdgeOn {
            ext.bottom = -ext.bottom;
            ext.top = -ext.top;
        }
        ext
    }

    /// Run the full pipeline against a loaded source image.
    pub fn render(&self, source: &SourceImage) -> GalmapResult<CropResult> {
        let window = self.pixel_window(source.buffer.width());
        let mut img = self.extract_or_pad(&source.buffer, window);

        if self.grayscale {
            grayscale_in_place(&mut img);
        }
        let img = img.rot90(self.rotation);

        let ext = self.base_extent();
        // Aspect uses the rotated buffer shape against the un-permuted
        // extent spans; the sign is dropped for edge-on viewports.
        let aspect_ratio = if img.is_empty() || ext.height() == 0.0 {
            1.0
        } else {
            (img.height() as f64 / img.width() as f64 * (ext.width() / ext.height())).abs()
        };
        let extent = ext.rotate(self.rotation);

        Ok(CropResult {
            buffer: img,
            extent,
            aspect_ratio,
            coord_label: self.coord_label(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use galmap_common::Angle;

    fn basic_viewport(mode: PlanarMode, frame: CoordFrame) -> PlanarViewport {
        PlanarViewport::new(
            mode,
            frame,
            Length::kpc(8.0),
            (Quantity::from(Length::kpc(0.0)), Quantity::from(Length::kpc(0.0))),
            Quantity::from(Length::kpc(5.0)),
            LengthUnit::Kpc,
            Rot90::new(0),
            false,
            true,
        )
        .unwrap()
    }

    #[test]
    fn test_face_on_resolution_is_r0_over_1078() {
        let vp = basic_viewport(PlanarMode::FaceOn, CoordFrame::Galactocentric);
        let res = vp.resolution();
        assert_eq!(res.unit, LengthUnit::Kpc);
        assert!((res.value - 8.0 / 1078.0).abs() < 1e-12);
    }

    #[test]
    fn test_edge_on_resolution_is_fixed() {
        let vp = basic_viewport(PlanarMode::EdgeOn, CoordFrame::Galactocentric);
        let res = vp.resolution().to(LengthUnit::LightYear);
        assert!((res.value - 15.384_615_846).abs() < 1e-9);
    }

    #[test]
    fn test_source_kind_selection() {
        let annotated = basic_viewport(PlanarMode::FaceOn, CoordFrame::Galactic);
        assert_eq!(annotated.source_kind(), SourceImageKind::FaceOnAnnotated);
        let edge = basic_viewport(PlanarMode::EdgeOn, CoordFrame::Galactic);
        assert_eq!(edge.source_kind(), SourceImageKind::EdgeOn);
    }

    #[test]
    fn test_bare_center_is_accepted_with_default_unit() {
        let vp = PlanarViewport::new(
            PlanarMode::FaceOn,
            CoordFrame::Galactocentric,
            Length::kpc(8.0),
            (Quantity::bare(1.0), Quantity::bare(-1.0)),
            Quantity::bare(5.0),
            LengthUnit::Kpc,
            Rot90::new(0),
            false,
            false,
        )
        .unwrap();
        assert_eq!(vp.center.0, Length::kpc(1.0));
        assert_eq!(vp.radius, Length::kpc(5.0));
    }

    #[test]
    fn test_angle_tagged_center_is_rejected() {
        let err = PlanarViewport::new(
            PlanarMode::FaceOn,
            CoordFrame::Galactocentric,
            Length::kpc(8.0),
            (
                Quantity::from(Angle::degrees(1.0)),
                Quantity::from(Length::kpc(0.0)),
            ),
            Quantity::from(Length::kpc(5.0)),
            LengthUnit::Kpc,
            Rot90::new(0),
            false,
            false,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            galmap_common::GalmapError::IncompatibleUnit { .. }
        ));
    }

    #[test]
    fn test_check_coords_requires_units() {
        let vp = basic_viewport(PlanarMode::FaceOn, CoordFrame::Galactic);
        let err = vp
            .check_coords(Quantity::bare(1.0), Quantity::from(Length::kpc(2.0)))
            .unwrap_err();
        assert!(matches!(err, galmap_common::GalmapError::MissingUnit("x")));
    }

    #[test]
    fn test_check_coords_converts_and_swaps_on_odd_rotation() {
        let mut vp = basic_viewport(PlanarMode::FaceOn, CoordFrame::Galactic);
        let x = Quantity::from(Length::pc(1000.0));
        let y = Quantity::from(Length::kpc(2.0));

        let (cx, cy) = vp.check_coords(x, y).unwrap();
        assert!((cx - 1.0).abs() < 1e-12);
        assert!((cy - 2.0).abs() < 1e-12);

        vp.rotation = Rot90::new(1);
        let (cx, cy) = vp.check_coords(x, y).unwrap();
        assert!((cx - 2.0).abs() < 1e-12);
        assert!((cy - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_edge_on_extent_sign_is_inverted() {
        let vp = PlanarViewport::new(
            PlanarMode::EdgeOn,
            CoordFrame::Galactocentric,
            Length::kpc(8.0),
            (
                Quantity::from(Length::kpc(0.0)),
                Quantity::from(Length::kpc(1.0)),
            ),
            Quantity::from(Length::kpc(5.0)),
            LengthUnit::Kpc,
            Rot90::new(0),
            false,
            false,
        )
        .unwrap();
        let ext = vp.base_extent();
        assert_eq!(ext.bottom, -(1.0 - 5.0));
        assert_eq!(ext.top, -(1.0 + 5.0));
    }

    #[test]
    fn test_pixel_window_truncates_toward_zero() {
        let vp = basic_viewport(PlanarMode::FaceOn, CoordFrame::Galactocentric);
        // radius 5 kpc at r0/1078 kpc/px is 673.75 px, truncated to 673
        let w = vp.pixel_window(5600);
        assert_eq!(w.radius, 673);
        assert_eq!(w.x_left, 2800 - 673);
        assert_eq!(w.x_right, 2800 + 673);
    }
}
