//! Conversion between display units and the canonical storage unit.
//!
//! All conversions route through the canonical unit. Converting between two
//! display units of the same family is `from.to_canonical` followed by
//! `to.from_canonical`, never a direct display-to-display factor, so the
//! canonical unit stays the single source of truth.

use vitals_model::{
    AnyUnit, GlucoseUnit, HeightUnit, PressureUnit, TemperatureUnit, VitalsError, WeightUnit,
};

use crate::constants::{
    CM_PER_FOOT, CM_PER_INCH, KG_PER_STONE, KPA_PER_MMHG, LB_PER_KG, MG_DL_PER_MMOL_L,
};

/// A display unit that converts to and from its family's canonical unit.
///
/// The canonical arm is the identity so that the common case (value already
/// in the storage unit) introduces no floating-point drift. Callers are
/// responsible for passing finite values; the conversion itself never fails
/// on numeric input.
pub trait VitalUnit: Copy {
    /// Expresses `value` (in `self`) in the family's canonical unit.
    fn to_canonical(self, value: f64) -> f64;

    /// Expresses `value` (in the canonical unit) in `self`.
    fn from_canonical(self, value: f64) -> f64;
}

impl VitalUnit for WeightUnit {
    fn to_canonical(self, value: f64) -> f64 {
        match self {
            WeightUnit::Kilograms => value,
            WeightUnit::Pounds => value / LB_PER_KG,
            WeightUnit::Stone => value * KG_PER_STONE,
        }
    }

    fn from_canonical(self, value: f64) -> f64 {
        match self {
            WeightUnit::Kilograms => value,
            WeightUnit::Pounds => value * LB_PER_KG,
            WeightUnit::Stone => value / KG_PER_STONE,
        }
    }
}

impl VitalUnit for HeightUnit {
    fn to_canonical(self, value: f64) -> f64 {
        match self {
            HeightUnit::Centimeters => value,
            HeightUnit::Inches => value * CM_PER_INCH,
            HeightUnit::Feet => value * CM_PER_FOOT,
        }
    }

    fn from_canonical(self, value: f64) -> f64 {
        match self {
            HeightUnit::Centimeters => value,
            HeightUnit::Inches => value / CM_PER_INCH,
            HeightUnit::Feet => value / CM_PER_FOOT,
        }
    }
}

impl VitalUnit for TemperatureUnit {
    fn to_canonical(self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => value,
            TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        }
    }

    fn from_canonical(self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => value,
            TemperatureUnit::Fahrenheit => value * 9.0 / 5.0 + 32.0,
        }
    }
}

impl VitalUnit for PressureUnit {
    fn to_canonical(self, value: f64) -> f64 {
        match self {
            PressureUnit::MillimetersOfMercury => value,
            PressureUnit::Kilopascals => value / KPA_PER_MMHG,
        }
    }

    fn from_canonical(self, value: f64) -> f64 {
        match self {
            PressureUnit::MillimetersOfMercury => value,
            PressureUnit::Kilopascals => value * KPA_PER_MMHG,
        }
    }
}

impl VitalUnit for GlucoseUnit {
    fn to_canonical(self, value: f64) -> f64 {
        match self {
            GlucoseUnit::MilligramsPerDeciliter => value,
            GlucoseUnit::MillimolesPerLiter => value * MG_DL_PER_MMOL_L,
        }
    }

    fn from_canonical(self, value: f64) -> f64 {
        match self {
            GlucoseUnit::MilligramsPerDeciliter => value,
            GlucoseUnit::MillimolesPerLiter => value / MG_DL_PER_MMOL_L,
        }
    }
}

/// Converts `value` from one display unit to another within a family,
/// routing through the canonical unit.
pub fn convert<U: VitalUnit>(value: f64, from: U, to: U) -> f64 {
    to.from_canonical(from.to_canonical(value))
}

/// Converts between units whose family was inferred at runtime.
///
/// # Errors
///
/// Returns `VitalsError::UnitMismatch` when the two units belong to
/// different families.
pub fn convert_any(value: f64, from: AnyUnit, to: AnyUnit) -> vitals_model::Result<f64> {
    match (from, to) {
        (AnyUnit::Weight(f), AnyUnit::Weight(t)) => Ok(convert(value, f, t)),
        (AnyUnit::Height(f), AnyUnit::Height(t)) => Ok(convert(value, f, t)),
        (AnyUnit::Temperature(f), AnyUnit::Temperature(t)) => Ok(convert(value, f, t)),
        (AnyUnit::Pressure(f), AnyUnit::Pressure(t)) => Ok(convert(value, f, t)),
        (AnyUnit::Glucose(f), AnyUnit::Glucose(t)) => Ok(convert(value, f, t)),
        (from, to) => Err(VitalsError::UnitMismatch {
            from: from.as_str().to_string(),
            from_kind: from.kind(),
            to: to.as_str().to_string(),
            to_kind: to.kind(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(left: f64, right: f64, tolerance: f64) -> bool {
        (left - right).abs() < tolerance
    }

    #[test]
    fn canonical_units_are_identity() {
        for value in [0.0, 1.0, 75.5, 500.0] {
            assert_eq!(WeightUnit::Kilograms.to_canonical(value), value);
            assert_eq!(WeightUnit::Kilograms.from_canonical(value), value);
            assert_eq!(HeightUnit::Centimeters.to_canonical(value), value);
            assert_eq!(TemperatureUnit::Celsius.to_canonical(value), value);
            assert_eq!(PressureUnit::MillimetersOfMercury.to_canonical(value), value);
            assert_eq!(GlucoseUnit::MilligramsPerDeciliter.to_canonical(value), value);
        }
    }

    #[test]
    fn weight_reference_values() {
        assert!(close(WeightUnit::Pounds.to_canonical(165.0), 74.8427, 1e-4));
        assert!(close(WeightUnit::Stone.to_canonical(11.0), 69.8532, 1e-4));
        assert!(close(WeightUnit::Pounds.from_canonical(75.0), 165.3467, 1e-4));
    }

    #[test]
    fn height_reference_values() {
        assert!(close(HeightUnit::Inches.to_canonical(68.0), 172.72, 1e-9));
        assert!(close(HeightUnit::Feet.to_canonical(6.0), 182.88, 1e-9));
        assert!(close(HeightUnit::Inches.from_canonical(172.72), 68.0, 1e-9));
    }

    #[test]
    fn temperature_reference_values() {
        assert!(close(TemperatureUnit::Fahrenheit.to_canonical(98.6), 37.0, 1e-9));
        assert!(close(TemperatureUnit::Fahrenheit.from_canonical(37.0), 98.6, 1e-9));
        assert!(close(TemperatureUnit::Fahrenheit.to_canonical(32.0), 0.0, 1e-9));
    }

    #[test]
    fn pressure_reference_values() {
        assert_eq!(PressureUnit::MillimetersOfMercury.to_canonical(120.0), 120.0);
        assert!(close(PressureUnit::Kilopascals.from_canonical(120.0), 15.99864, 1e-5));
        assert!(close(PressureUnit::Kilopascals.to_canonical(16.0), 120.0102, 1e-3));
    }

    #[test]
    fn glucose_reference_values() {
        assert_eq!(GlucoseUnit::MilligramsPerDeciliter.to_canonical(100.0), 100.0);
        assert!(close(GlucoseUnit::MillimolesPerLiter.from_canonical(100.0), 5.5556, 1e-4));
        assert!(close(GlucoseUnit::MillimolesPerLiter.to_canonical(5.56), 100.08, 1e-9));
    }

    #[test]
    fn display_to_display_routes_through_canonical() {
        // lb -> st must equal lb -> kg -> st exactly.
        let direct = convert(165.0, WeightUnit::Pounds, WeightUnit::Stone);
        let via_kg = WeightUnit::Stone.from_canonical(WeightUnit::Pounds.to_canonical(165.0));
        assert_eq!(direct, via_kg);
    }

    #[test]
    fn convert_any_rejects_cross_family_pairs() {
        let from: AnyUnit = "kg".parse().unwrap();
        let to: AnyUnit = "cm".parse().unwrap();
        let error = convert_any(70.0, from, to).unwrap_err();
        assert!(matches!(error, VitalsError::UnitMismatch { .. }));
    }

    #[test]
    fn convert_any_matches_typed_convert() {
        let from: AnyUnit = "F".parse().unwrap();
        let to: AnyUnit = "C".parse().unwrap();
        let result = convert_any(98.6, from, to).unwrap();
        assert!(close(result, 37.0, 1e-9));
    }
}
