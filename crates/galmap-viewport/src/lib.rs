//! Viewport cropping engine for pre-rendered Milky Way rasters.
//!
//! Maps physical or angular center-and-radius viewports onto pixel
//! crop windows against fixed-resolution source images, with synthetic
//! padding for out-of-range planar windows, galactic/galactocentric
//! frame shifts, grayscale conversion and quarter-turn rotation of
//! image and extent together.

pub mod buffer;
pub mod config;
pub mod crop;
pub mod grayscale;
pub mod planar;
pub mod sky;
pub mod source;

pub use buffer::PixelBuffer;
pub use config::AssetConfig;
pub use crop::CropResult;
pub use grayscale::grayscale_in_place;
pub use planar::PlanarViewport;
pub use sky::SkyViewport;
pub use source::{load_source, SourceImage, SourceImageCache, SourceImageKind};
