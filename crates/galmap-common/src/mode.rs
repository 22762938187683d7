//! Viewing modes and coordinate frames for the planar pipelines.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GalmapError;

/// The two fixed viewing planes of the pre-rendered galaxy images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlanarMode {
    FaceOn,
    EdgeOn,
}

impl PlanarMode {
    /// Canonical string form, matching the request syntax.
    pub fn as_str(self) -> &'static str {
        match self {
            PlanarMode::FaceOn => "face-on",
            PlanarMode::EdgeOn => "edge-on",
        }
    }
}

impl fmt::Display for PlanarMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanarMode {
    type Err = GalmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "face-on" => Ok(PlanarMode::FaceOn),
            "edge-on" => Ok(PlanarMode::EdgeOn),
            other => Err(GalmapError::InvalidMode(other.to_string())),
        }
    }
}

/// Origin convention for planar coordinates.
///
/// The source images are rendered galactocentric; a galactic-frame
/// request shifts the horizontal center by `r0` before pixel mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordFrame {
    Galactic,
    Galactocentric,
}

impl CoordFrame {
    /// Human-readable frame label for axis titles.
    pub fn label(self) -> &'static str {
        match self {
            CoordFrame::Galactic => "Galactic Coordinates",
            CoordFrame::Galactocentric => "Galactocentric Coordinates",
        }
    }
}

impl FromStr for CoordFrame {
    type Err = GalmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "galactic" => Ok(CoordFrame::Galactic),
            "galactocentric" => Ok(CoordFrame::Galactocentric),
            other => Err(GalmapError::InvalidFrame(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parsing() {
        assert_eq!("face-on".parse::<PlanarMode>().unwrap(), PlanarMode::FaceOn);
        assert_eq!("edge-on".parse::<PlanarMode>().unwrap(), PlanarMode::EdgeOn);
        assert!(matches!(
            "top-down".parse::<PlanarMode>(),
            Err(GalmapError::InvalidMode(_))
        ));
    }

    #[test]
    fn test_frame_parsing_is_case_insensitive() {
        assert_eq!(
            "Galactic".parse::<CoordFrame>().unwrap(),
            CoordFrame::Galactic
        );
        assert!(matches!(
            "heliocentric".parse::<CoordFrame>(),
            Err(GalmapError::InvalidFrame(_))
        ));
    }

    #[test]
    fn test_frame_labels() {
        assert_eq!(CoordFrame::Galactic.label(), "Galactic Coordinates");
        assert_eq!(
            CoordFrame::Galactocentric.label(),
            "Galactocentric Coordinates"
        );
    }
}
