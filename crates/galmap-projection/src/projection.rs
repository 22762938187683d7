//! All-sky map projections.
//!
//! Forward math for the five supported projections, mapping galactic
//! (longitude, latitude) to planar plot coordinates. All take inputs in
//! radians; the pipelines keep equirectangular requests in degrees and
//! only call [`SkyProjection::project`] with radian values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use galmap_common::GalmapError;

const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// A named cartographic projection of the full sky.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkyProjection {
    Equirectangular,
    Aitoff,
    Hammer,
    Lambert,
    Mollweide,
}

impl SkyProjection {
    /// Canonical lowercase name, matching the request syntax.
    pub fn as_str(self) -> &'static str {
        match self {
            SkyProjection::Equirectangular => "equirectangular",
            SkyProjection::Aitoff => "aitoff",
            SkyProjection::Hammer => "hammer",
            SkyProjection::Lambert => "lambert",
            SkyProjection::Mollweide => "mollweide",
        }
    }

    /// Whether request coordinates must be delivered in radians.
    ///
    /// Every projection except equirectangular plots in radians.
    pub fn uses_radians(self) -> bool {
        !matches!(self, SkyProjection::Equirectangular)
    }

    /// Forward-project a (longitude, latitude) pair in radians onto the
    /// projection plane.
    pub fn project(self, lon: f64, lat: f64) -> (f64, f64) {
        match self {
            SkyProjection::Equirectangular => (lon, lat),
            SkyProjection::Aitoff => aitoff(lon, lat),
            SkyProjection::Hammer => hammer(lon, lat),
            SkyProjection::Lambert => lambert_azimuthal(lon, lat),
            SkyProjection::Mollweide => mollweide(lon, lat),
        }
    }
}

impl fmt::Display for SkyProjection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkyProjection {
    type Err = GalmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "equirectangular" => Ok(SkyProjection::Equirectangular),
            "aitoff" => Ok(SkyProjection::Aitoff),
            "hammer" => Ok(SkyProjection::Hammer),
            "lambert" => Ok(SkyProjection::Lambert),
            "mollweide" => Ok(SkyProjection::Mollweide),
            other => Err(GalmapError::InvalidProjection(other.to_string())),
        }
    }
}

fn aitoff(lon: f64, lat: f64) -> (f64, f64) {
    let alpha = (lat.cos() * (lon / 2.0).cos()).clamp(-1.0, 1.0).acos();
    // sinc(alpha), with the removable singularity at the origin
    let sinc = if alpha.abs() < 1e-12 {
        1.0
    } else {
        alpha.sin() / alpha
    };
    let x = 2.0 * lat.cos() * (lon / 2.0).sin() / sinc;
    let y = lat.sin() / sinc;
    (x, y)
}

fn hammer(lon: f64, lat: f64) -> (f64, f64) {
    let denom = (1.0 + lat.cos() * (lon / 2.0).cos()).sqrt();
    let x = 2.0 * SQRT_2 * lat.cos() * (lon / 2.0).sin() / denom;
    let y = SQRT_2 * lat.sin() / denom;
    (x, y)
}

fn lambert_azimuthal(lon: f64, lat: f64) -> (f64, f64) {
    let k = (2.0 / (1.0 + lat.cos() * lon.cos())).sqrt();
    let x = k * lat.cos() * lon.sin();
    let y = k * lat.sin();
    (x, y)
}

fn mollweide(lon: f64, lat: f64) -> (f64, f64) {
    let half_pi = std::f64::consts::FRAC_PI_2;
    // The auxiliary angle theta solves 2*theta + sin(2*theta) = pi*sin(lat);
    // Newton's method converges in a handful of steps except at the poles,
    // where theta equals the latitude exactly.
    let theta = if (lat.abs() - half_pi).abs() < 1e-12 {
        lat
    } else {
        let target = std::f64::consts::PI * lat.sin();
        let mut theta = lat;
        for _ in 0..16 {
            let f = 2.0 * theta + (2.0 * theta).sin() - target;
            let fp = 2.0 + 2.0 * (2.0 * theta).cos();
            if fp.abs() < 1e-15 {
                break;
            }
            let next = theta - f / fp;
            if (next - theta).abs() < 1e-13 {
                theta = next;
                break;
            }
            theta = next;
        }
        theta
    };
    let x = 2.0 * SQRT_2 / std::f64::consts::PI * lon * theta.cos();
    let y = SQRT_2 * theta.sin();
    (x, y)
}
