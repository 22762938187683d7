//! Pre-rendered source images: descriptors, loading and caching.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use galmap_common::{GalmapError, GalmapResult};

use crate::buffer::PixelBuffer;
use crate::config::AssetConfig;

/// Side length of the face-on grid in pixels.
pub const FACE_ON_PIXELS: usize = 5600;
/// Side length of the edge-on and sky grids in pixels.
pub const EDGE_ON_PIXELS: usize = 6500;
/// First row of real data in the vertically padded edge-on grid.
pub const EDGE_ON_DATA_TOP: usize = 1625;
/// Height in pixels of the real data band in the edge-on file.
pub const EDGE_ON_DATA_HEIGHT: usize = 3250;

/// The fixed pre-rendered rasters the pipelines crop from.
///
/// `Sky` shares the edge-on file: the all-sky map is the same EDR3
/// mosaic, addressed in angular rather than physical coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceImageKind {
    FaceOnAnnotated,
    FaceOnUnannotated,
    EdgeOn,
    Sky,
}

impl SourceImageKind {
    /// Fixed asset filename for this source.
    pub fn filename(self) -> &'static str {
        match self {
            SourceImageKind::FaceOnAnnotated => "MW_bg_annotate.jpg",
            SourceImageKind::FaceOnUnannotated => "MW_bg_unannotate.jpg",
            SourceImageKind::EdgeOn | SourceImageKind::Sky => "MW_edgeon_edr3_unannotate.jpg",
        }
    }

    /// Expected dimensions of the file on disk.
    fn file_dimensions(self) -> (u32, u32) {
        match self {
            SourceImageKind::FaceOnAnnotated | SourceImageKind::FaceOnUnannotated => {
                (FACE_ON_PIXELS as u32, FACE_ON_PIXELS as u32)
            }
            SourceImageKind::EdgeOn | SourceImageKind::Sky => {
                (EDGE_ON_PIXELS as u32, EDGE_ON_DATA_HEIGHT as u32)
            }
        }
    }
}

/// A loaded, read-only source raster with its descriptor.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub kind: SourceImageKind,
    pub buffer: Arc<PixelBuffer>,
}

impl SourceImage {
    pub fn new(kind: SourceImageKind, buffer: Arc<PixelBuffer>) -> Self {
        Self { kind, buffer }
    }
}

/// Decode one source raster from disk into its canonical grid.
///
/// The edge-on and sky files hold a 6500x3250 band that is placed into
/// a zeroed 6500x6500 grid at rows 1625..4875; face-on files are used
/// as decoded.
pub fn load_source(config: &AssetConfig, kind: SourceImageKind) -> GalmapResult<SourceImage> {
    let path = config.asset_dir.join(kind.filename());
    let path_str = path.display().to_string();

    let decoded = image::open(&path)
        .map_err(|e| GalmapError::AssetRead {
            path: path_str.clone(),
            message: e.to_string(),
        })?
        .to_rgb8();

    let (expected_w, expected_h) = kind.file_dimensions();
    if decoded.width() != expected_w || decoded.height() != expected_h {
        return Err(GalmapError::AssetDimensions {
            path: path_str,
            expected_width: expected_w,
            expected_height: expected_h,
            actual_width: decoded.width(),
            actual_height: decoded.height(),
        });
    }

    let file_buf = PixelBuffer::from_raw(
        decoded.width() as usize,
        decoded.height() as usize,
        decoded.into_raw(),
    );

    let buffer = match kind {
        SourceImageKind::FaceOnAnnotated | SourceImageKind::FaceOnUnannotated => file_buf,
        SourceImageKind::EdgeOn | SourceImageKind::Sky => {
            let mut grid = PixelBuffer::new(EDGE_ON_PIXELS, EDGE_ON_PIXELS);
            grid.copy_from(&file_buf, 0, EDGE_ON_DATA_TOP);
            grid
        }
    };

    tracing::debug!(
        kind = ?kind,
        width = buffer.width(),
        height = buffer.height(),
        "loaded source image"
    );

    Ok(SourceImage::new(kind, Arc::new(buffer)))
}

/// Load-once cache of source rasters.
///
/// Buffers are never written after the initial load; concurrent
/// requests share them through `Arc` clones.
#[derive(Debug)]
pub struct SourceImageCache {
    config: AssetConfig,
    loaded: Mutex<HashMap<SourceImageKind, Arc<PixelBuffer>>>,
}

impl SourceImageCache {
    pub fn new(config: AssetConfig) -> Self {
        Self {
            config,
            loaded: Mutex::new(HashMap::new()),
        }
    }

    /// Fetch a source image, reading it from disk on first use.
    pub fn get(&self, kind: SourceImageKind) -> GalmapResult<SourceImage> {
        let mut loaded = self.loaded.lock().expect("source cache poisoned");
        if let Some(buffer) = loaded.get(&kind) {
            return Ok(SourceImage::new(kind, Arc::clone(buffer)));
        }
        let source = load_source(&self.config, kind)?;
        loaded.insert(kind, Arc::clone(&source.buffer));
        Ok(source)
    }
}
