//! Equatorial (ICRS) to galactic frame conversion.
//!
//! The galactic frame is a fixed rotation of ICRS, defined by the
//! J2000 position of the north galactic pole (alpha = 192.85948 deg,
//! delta = 27.12825 deg) and the galactic longitude of the north
//! celestial pole (122.93192 deg).

use nalgebra::{Matrix3, Vector3};

use galmap_common::{Angle, AngleUnit, GalmapResult, Quantity};

use crate::projection::SkyProjection;

/// Rotation matrix taking ICRS equatorial unit vectors to galactic
/// unit vectors.
///
/// Values from the Hipparcos catalogue documentation (ESA 1997,
/// Vol. 1, eq. 1.5.11), equivalent to composing the pole/node angles
/// above.
#[rustfmt::skip]
fn icrs_to_galactic_matrix() -> Matrix3<f64> {
    Matrix3::new(
        -0.054_875_560_416_215_4, -0.873_437_090_234_885_0, -0.483_835_015_548_713_2,
         0.494_109_427_875_583_7, -0.444_829_629_960_011_2,  0.746_982_244_497_218_9,
        -0.867_666_149_019_004_7, -0.198_076_373_431_201_5,  0.455_983_776_175_066_9,
    )
}

/// Convert an equatorial (RA, Dec) direction to galactic (l, b).
///
/// Both outputs are in degrees; longitude is normalized to [0, 360).
pub fn equatorial_to_galactic(ra: Angle, dec: Angle) -> (Angle, Angle) {
    let ra_rad = ra.value_in(AngleUnit::Radian);
    let dec_rad = dec.value_in(AngleUnit::Radian);

    let equatorial = Vector3::new(
        dec_rad.cos() * ra_rad.cos(),
        dec_rad.cos() * ra_rad.sin(),
        dec_rad.sin(),
    );
    let galactic = icrs_to_galactic_matrix() * equatorial;

    let b = galactic.z.clamp(-1.0, 1.0).asin().to_degrees();
    let l = galactic.y.atan2(galactic.x).to_degrees().rem_euclid(360.0);

    (Angle::degrees(l), Angle::degrees(b))
}

/// Wrap a longitude in degrees into [-180, 180).
pub fn wrap_longitude_deg(lon: f64) -> f64 {
    (lon + 180.0).rem_euclid(360.0) - 180.0
}

/// Convert an equatorial (RA, Dec) request coordinate into the plotting
/// frame of a sky projection.
///
/// Both inputs must carry an explicit angle unit. The result is the
/// galactic longitude negated and wrapped to [-180, 180) plus the
/// galactic latitude, in degrees for the equirectangular projection and
/// in radians for every other projection (their plotting math expects
/// radians).
pub fn convert_radec(
    projection: SkyProjection,
    ra: Quantity,
    dec: Quantity,
) -> GalmapResult<(f64, f64)> {
    let ra_deg = ra.resolve_angle(AngleUnit::Degree, "RA")?;
    let dec_deg = dec.resolve_angle(AngleUnit::Degree, "Dec")?;

    let (l, b) = equatorial_to_galactic(Angle::degrees(ra_deg), Angle::degrees(dec_deg));
    let lon = wrap_longitude_deg(-l.value);
    let lat = b.value;

    if projection.uses_radians() {
        Ok((lon.to_radians(), lat.to_radians()))
    } else {
        Ok((lon, lat))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use galmap_common::GalmapError;

    const TOL_DEG: f64 = 2e-3;

    #[test]
    fn test_matrix_is_a_rotation() {
        let m = icrs_to_galactic_matrix();
        let should_be_identity = m * m.transpose();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!(
                    (should_be_identity[(i, j)] - expected).abs() < 1e-9,
                    "M * M^T deviates from identity at ({i}, {j})"
                );
            }
        }
        assert!((m.determinant() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_equatorial_origin_maps_to_known_galactic_point() {
        // (RA, Dec) = (0, 0) lies at l ~ 96.337 deg, b ~ -60.189 deg.
        let (l, b) = equatorial_to_galactic(Angle::degrees(0.0), Angle::degrees(0.0));
        assert!((l.value - 96.337).abs() < TOL_DEG, "l = {}", l.value);
        assert!((b.value - (-60.189)).abs() < TOL_DEG, "b = {}", b.value);
    }

    #[test]
    fn test_north_galactic_pole_maps_to_b_90() {
        let (_, b) = equatorial_to_galactic(Angle::degrees(192.85948), Angle::degrees(27.12825));
        assert!((b.value - 90.0).abs() < TOL_DEG, "b = {}", b.value);
    }

    #[test]
    fn test_galactic_center_direction() {
        // The galactic center direction, (266.405, -28.936) in ICRS,
        // defines the frame origin.
        let (l, b) = equatorial_to_galactic(Angle::degrees(266.405), Angle::degrees(-28.936));
        let l_wrapped = wrap_longitude_deg(l.value);
        assert!(l_wrapped.abs() < 0.01, "l = {l_wrapped}");
        assert!(b.value.abs() < 0.01, "b = {}", b.value);
    }

    #[test]
    fn test_wrap_longitude() {
        assert_eq!(wrap_longitude_deg(0.0), 0.0);
        assert_eq!(wrap_longitude_deg(180.0), -180.0);
        assert_eq!(wrap_longitude_deg(-180.0), -180.0);
        assert_eq!(wrap_longitude_deg(270.0), -90.0);
        assert_eq!(wrap_longitude_deg(-270.0), 90.0);
    }

    #[test]
    fn test_convert_radec_requires_units() {
        let err = convert_radec(
            SkyProjection::Equirectangular,
            Quantity::bare(10.0),
            Quantity::from(Angle::degrees(0.0)),
        )
        .unwrap_err();
        assert!(matches!(err, GalmapError::MissingUnit("RA")));
    }

    #[test]
    fn test_convert_radec_radians_match_degrees() {
        let ra = Quantity::from(Angle::degrees(0.0));
        let dec = Quantity::from(Angle::degrees(0.0));

        let (lon_deg, lat_deg) =
            convert_radec(SkyProjection::Equirectangular, ra, dec).unwrap();
        let (lon_rad, lat_rad) = convert_radec(SkyProjection::Aitoff, ra, dec).unwrap();

        assert!((lon_rad - lon_deg.to_radians()).abs() < 1e-12);
        assert!((lat_rad - lat_deg.to_radians()).abs() < 1e-12);
        // Negated galactic longitude of the equatorial origin.
        assert!((lon_deg - (-96.337)).abs() < TOL_DEG);
    }
}
