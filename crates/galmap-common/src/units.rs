//! Unit-tagged physical quantities.
//!
//! Every coordinate, center, radius and resolution in the viewport
//! pipelines carries an explicit unit. Lengths and angles are separate
//! types, so mixing dimensions is rejected at compile time; the
//! runtime-tagged [`Quantity`] exists only at the request boundary,
//! where callers may hand in bare numbers that get resolved (or
//! rejected) during validation.

use serde::{Deserialize, Serialize};

use crate::error::{GalmapError, GalmapResult};

/// IAU conversion factor between parsecs and light-years.
pub const LIGHT_YEARS_PER_PARSEC: f64 = 3.261_563_777_1;

/// Units of physical length used by the planar viewports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Kiloparsec
    Kpc,
    /// Parsec
    Pc,
    /// Light-year
    LightYear,
}

impl LengthUnit {
    /// Number of light-years in one unit.
    fn light_years(self) -> f64 {
        match self {
            LengthUnit::Kpc => 1000.0 * LIGHT_YEARS_PER_PARSEC,
            LengthUnit::Pc => LIGHT_YEARS_PER_PARSEC,
            LengthUnit::LightYear => 1.0,
        }
    }

    /// Convert a value between two length units.
    pub fn convert(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
        value * from.light_years() / to.light_years()
    }

    /// Short unit name for messages and labels.
    pub fn name(self) -> &'static str {
        match self {
            LengthUnit::Kpc => "kpc",
            LengthUnit::Pc => "pc",
            LengthUnit::LightYear => "lyr",
        }
    }
}

/// Units of angle used by the sky viewports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    Degree,
    Radian,
}

impl AngleUnit {
    fn degrees(self) -> f64 {
        match self {
            AngleUnit::Degree => 1.0,
            AngleUnit::Radian => 180.0 / std::f64::consts::PI,
        }
    }

    /// Convert a value between two angle units.
    pub fn convert(value: f64, from: AngleUnit, to: AngleUnit) -> f64 {
        value * from.degrees() / to.degrees()
    }

    /// Short unit name for messages and labels.
    pub fn name(self) -> &'static str {
        match self {
            AngleUnit::Degree => "deg",
            AngleUnit::Radian => "rad",
        }
    }
}

/// A length value with its unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Length {
    pub value: f64,
    pub unit: LengthUnit,
}

impl Length {
    pub fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    pub fn kpc(value: f64) -> Self {
        Self::new(value, LengthUnit::Kpc)
    }

    pub fn pc(value: f64) -> Self {
        Self::new(value, LengthUnit::Pc)
    }

    pub fn light_years(value: f64) -> Self {
        Self::new(value, LengthUnit::LightYear)
    }

    /// Value of this length expressed in `unit`.
    pub fn value_in(self, unit: LengthUnit) -> f64 {
        LengthUnit::convert(self.value, self.unit, unit)
    }

    /// This length converted to `unit`.
    pub fn to(self, unit: LengthUnit) -> Length {
        Length::new(self.value_in(unit), unit)
    }
}

impl std::ops::Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length::new(self.value + rhs.value_in(self.unit), self.unit)
    }
}

impl std::ops::Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length::new(self.value - rhs.value_in(self.unit), self.unit)
    }
}

impl std::ops::Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length::new(self.value * rhs, self.unit)
    }
}

impl std::ops::Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length::new(self.value / rhs, self.unit)
    }
}

impl std::ops::Div for Length {
    type Output = f64;

    /// Ratio of two lengths, unit-aware.
    fn div(self, rhs: Length) -> f64 {
        self.value / rhs.value_in(self.unit)
    }
}

/// An angle value with its unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Angle {
    pub value: f64,
    pub unit: AngleUnit,
}

impl Angle {
    pub fn new(value: f64, unit: AngleUnit) -> Self {
        Self { value, unit }
    }

    pub fn degrees(value: f64) -> Self {
        Self::new(value, AngleUnit::Degree)
    }

    pub fn radians(value: f64) -> Self {
        Self::new(value, AngleUnit::Radian)
    }

    /// Value of this angle expressed in `unit`.
    pub fn value_in(self, unit: AngleUnit) -> f64 {
        AngleUnit::convert(self.value, self.unit, unit)
    }

    /// This angle converted to `unit`.
    pub fn to(self, unit: AngleUnit) -> Angle {
        Angle::new(self.value_in(unit), unit)
    }
}

/// Either dimension's unit, for runtime-tagged request values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    Length(LengthUnit),
    Angle(AngleUnit),
}

/// A request-boundary value whose unit tag may be absent.
///
/// Viewport constructors accept these and resolve them against the
/// request unit. A missing tag is either a hard [`GalmapError::MissingUnit`]
/// (for per-point coordinate checks) or a logged default assumption
/// (for center/radius at construction, the documented leniency policy).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub value: f64,
    pub unit: Option<Unit>,
}

impl Quantity {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self {
            value,
            unit: Some(unit),
        }
    }

    /// A value with no unit tag.
    pub fn bare(value: f64) -> Self {
        Self { value, unit: None }
    }

    /// Resolve to a value in `target` length units, failing fast on a
    /// missing or wrong-dimension tag.
    pub fn resolve_length(&self, target: LengthUnit, what: &'static str) -> GalmapResult<f64> {
        match self.unit {
            Some(Unit::Length(from)) => Ok(LengthUnit::convert(self.value, from, target)),
            Some(Unit::Angle(_)) => Err(GalmapError::IncompatibleUnit {
                quantity: what,
                expected: "length",
            }),
            None => Err(GalmapError::MissingUnit(what)),
        }
    }

    /// Resolve to a value in `target` angle units, failing fast on a
    /// missing or wrong-dimension tag.
    pub fn resolve_angle(&self, target: AngleUnit, what: &'static str) -> GalmapResult<f64> {
        match self.unit {
            Some(Unit::Angle(from)) => Ok(AngleUnit::convert(self.value, from, target)),
            Some(Unit::Length(_)) => Err(GalmapError::IncompatibleUnit {
                quantity: what,
                expected: "angle",
            }),
            None => Err(GalmapError::MissingUnit(what)),
        }
    }

    /// Resolve to a [`Length`], assuming `default` for a bare value.
    ///
    /// The lenient construction-time path: bare numbers are accepted
    /// with a warning instead of an error.
    pub fn length_or_default(
        &self,
        default: LengthUnit,
        what: &'static str,
    ) -> GalmapResult<Length> {
        match self.unit {
            Some(Unit::Length(from)) => Ok(Length::new(self.value, from)),
            Some(Unit::Angle(_)) => Err(GalmapError::IncompatibleUnit {
                quantity: what,
                expected: "length",
            }),
            None => {
                tracing::warn!(
                    quantity = what,
                    assumed_unit = default.name(),
                    "no unit specified, assuming the request unit"
                );
                Ok(Length::new(self.value, default))
            }
        }
    }

    /// Resolve to an [`Angle`], assuming `default` for a bare value.
    pub fn angle_or_default(&self, default: AngleUnit, what: &'static str) -> GalmapResult<Angle> {
        match self.unit {
            Some(Unit::Angle(from)) => Ok(Angle::new(self.value, from)),
            Some(Unit::Length(_)) => Err(GalmapError::IncompatibleUnit {
                quantity: what,
                expected: "angle",
            }),
            None => {
                tracing::warn!(
                    quantity = what,
                    assumed_unit = default.name(),
                    "no unit specified, assuming the request unit"
                );
                Ok(Angle::new(self.value, default))
            }
        }
    }
}

impl From<Length> for Quantity {
    fn from(l: Length) -> Self {
        Quantity::new(l.value, Unit::Length(l.unit))
    }
}

impl From<Angle> for Quantity {
    fn from(a: Angle) -> Self {
        Quantity::new(a.value, Unit::Angle(a.unit))
    }
}

impl From<f64> for Quantity {
    fn from(value: f64) -> Self {
        Quantity::bare(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_conversion_kpc_to_lyr() {
        let r0 = Length::kpc(8.0);
        let lyr = r0.value_in(LengthUnit::LightYear);
        assert!((lyr - 8.0 * 1000.0 * LIGHT_YEARS_PER_PARSEC).abs() < 1e-9);
    }

    #[test]
    fn test_length_conversion_roundtrip() {
        let l = Length::pc(123.456);
        let back = l.to(LengthUnit::LightYear).to(LengthUnit::Kpc).to(LengthUnit::Pc);
        assert!((back.value - 123.456).abs() < 1e-9);
    }

    #[test]
    fn test_length_ratio_is_unit_aware() {
        let a = Length::kpc(1.0);
        let b = Length::pc(500.0);
        assert!((a / b - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_angle_degree_radian() {
        let a = Angle::degrees(180.0);
        assert!((a.value_in(AngleUnit::Radian) - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn test_quantity_missing_unit_fails_strict_resolution() {
        let q = Quantity::bare(5.0);
        let err = q.resolve_length(LengthUnit::Kpc, "center").unwrap_err();
        assert!(matches!(err, GalmapError::MissingUnit("center")));
    }

    #[test]
    fn test_quantity_wrong_dimension_fails() {
        let q = Quantity::from(Angle::degrees(10.0));
        let err = q.resolve_length(LengthUnit::Kpc, "radius").unwrap_err();
        assert!(matches!(err, GalmapError::IncompatibleUnit { .. }));
    }

    #[test]
    fn test_quantity_bare_uses_default_with_leniency() {
        let q = Quantity::bare(5.0);
        let l = q.length_or_default(LengthUnit::Kpc, "center").unwrap();
        assert_eq!(l, Length::kpc(5.0));
    }

    #[test]
    fn test_quantity_tagged_ignores_default() {
        let q = Quantity::from(Length::light_years(10.0));
        let l = q.length_or_default(LengthUnit::Kpc, "center").unwrap();
        assert_eq!(l.unit, LengthUnit::LightYear);
        assert_eq!(l.value, 10.0);
    }
}
