//! Error types for galmap viewport operations.

use thiserror::Error;

/// Result type alias using GalmapError.
pub type GalmapResult<T> = Result<T, GalmapError>;

/// Primary error type for viewport operations.
///
/// All variants are raised synchronously and fail the entire request;
/// nothing here is transient, so there is no retry path.
#[derive(Debug, Error)]
pub enum GalmapError {
    // === Request validation ===
    #[error("unknown mode '{0}', can only be 'face-on' or 'edge-on'")]
    InvalidMode(String),

    #[error("unknown coordinate frame '{0}', can only be 'galactic' or 'galactocentric'")]
    InvalidFrame(String),

    #[error("unknown projection '{0}', expected one of equirectangular, aitoff, hammer, lambert, mollweide")]
    InvalidProjection(String),

    // === Unit enforcement ===
    #[error("{0} must carry an explicit unit")]
    MissingUnit(&'static str),

    #[error("incompatible unit for {quantity}: expected a {expected} unit")]
    IncompatibleUnit {
        quantity: &'static str,
        expected: &'static str,
    },

    // === Asset loading ===
    #[error("failed to read image asset '{path}': {message}")]
    AssetRead { path: String, message: String },

    #[error("image asset '{path}' has dimensions {actual_width}x{actual_height}, expected {expected_width}x{expected_height}")]
    AssetDimensions {
        path: String,
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_valid_values() {
        let err = GalmapError::InvalidMode("sideways".to_string());
        let msg = err.to_string();
        assert!(msg.contains("sideways"));
        assert!(msg.contains("face-on"));
        assert!(msg.contains("edge-on"));
    }

    #[test]
    fn test_missing_unit_names_the_quantity() {
        let err = GalmapError::MissingUnit("center");
        assert!(err.to_string().contains("center"));
    }
}
