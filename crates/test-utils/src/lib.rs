//! Shared test utilities for the galmap workspace.
//!
//! Provides synthetic RGB image generators with predictable pixel
//! values, so crop and rotation tests can verify exactly which source
//! pixels landed where without any real image assets.
//!
//! Add to a crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```

pub mod generators;

pub use generators::*;
