//! Unit families for each measurement kind.
//!
//! Every kind has exactly one canonical unit (the storage unit) and one or
//! more display units. Conversions are only defined within a family, which
//! the per-kind enums enforce at the type level.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::VitalsError;
use crate::kind::VitalKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightUnit {
    #[default]
    #[serde(rename = "kg")]
    Kilograms,
    #[serde(rename = "lb")]
    Pounds,
    #[serde(rename = "st")]
    Stone,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeightUnit {
    #[default]
    #[serde(rename = "cm")]
    Centimeters,
    #[serde(rename = "in")]
    Inches,
    #[serde(rename = "ft")]
    Feet,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureUnit {
    #[default]
    #[serde(rename = "C")]
    Celsius,
    #[serde(rename = "F")]
    Fahrenheit,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PressureUnit {
    #[default]
    #[serde(rename = "mmHg")]
    MillimetersOfMercury,
    #[serde(rename = "kPa")]
    Kilopascals,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GlucoseUnit {
    #[default]
    #[serde(rename = "mg/dL")]
    MilligramsPerDeciliter,
    #[serde(rename = "mmol/L")]
    MillimolesPerLiter,
}

macro_rules! unit_symbols {
    ($name:ident, $($variant:ident => $symbol:literal),+ $(,)?) => {
        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $symbol,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }
    };
}

unit_symbols!(WeightUnit, Kilograms => "kg", Pounds => "lb", Stone => "st");
unit_symbols!(HeightUnit, Centimeters => "cm", Inches => "in", Feet => "ft");
unit_symbols!(TemperatureUnit, Celsius => "C", Fahrenheit => "F");
unit_symbols!(PressureUnit, MillimetersOfMercury => "mmHg", Kilopascals => "kPa");
unit_symbols!(GlucoseUnit, MilligramsPerDeciliter => "mg/dL", MillimolesPerLiter => "mmol/L");

/// Normalizes a user-supplied unit symbol for matching: lowercased, with
/// degree signs and separators stripped (`°C` == `c`, `mg/dL` == `mgdl`).
fn normalize_symbol(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

impl FromStr for WeightUnit {
    type Err = VitalsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_symbol(s).as_str() {
            "kg" | "kgs" | "kilogram" | "kilograms" => Ok(WeightUnit::Kilograms),
            "lb" | "lbs" | "pound" | "pounds" => Ok(WeightUnit::Pounds),
            "st" | "stone" | "stones" => Ok(WeightUnit::Stone),
            _ => Err(VitalsError::UnknownUnit(s.to_string())),
        }
    }
}

impl FromStr for HeightUnit {
    type Err = VitalsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_symbol(s).as_str() {
            "cm" | "centimeter" | "centimeters" => Ok(HeightUnit::Centimeters),
            "in" | "inch" | "inches" => Ok(HeightUnit::Inches),
            "ft" | "foot" | "feet" => Ok(HeightUnit::Feet),
            _ => Err(VitalsError::UnknownUnit(s.to_string())),
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = VitalsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_symbol(s).as_str() {
            "c" | "celsius" => Ok(TemperatureUnit::Celsius),
            "f" | "fahrenheit" => Ok(TemperatureUnit::Fahrenheit),
            _ => Err(VitalsError::UnknownUnit(s.to_string())),
        }
    }
}

impl FromStr for PressureUnit {
    type Err = VitalsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_symbol(s).as_str() {
            "mmhg" => Ok(PressureUnit::MillimetersOfMercury),
            "kpa" => Ok(PressureUnit::Kilopascals),
            _ => Err(VitalsError::UnknownUnit(s.to_string())),
        }
    }
}

impl FromStr for GlucoseUnit {
    type Err = VitalsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_symbol(s).as_str() {
            "mgdl" => Ok(GlucoseUnit::MilligramsPerDeciliter),
            "mmoll" | "mmol" => Ok(GlucoseUnit::MillimolesPerLiter),
            _ => Err(VitalsError::UnknownUnit(s.to_string())),
        }
    }
}

impl WeightUnit {
    pub fn is_canonical(&self) -> bool {
        matches!(self, WeightUnit::Kilograms)
    }
}

impl HeightUnit {
    pub fn is_canonical(&self) -> bool {
        matches!(self, HeightUnit::Centimeters)
    }
}

impl TemperatureUnit {
    pub fn is_canonical(&self) -> bool {
        matches!(self, TemperatureUnit::Celsius)
    }
}

impl PressureUnit {
    pub fn is_canonical(&self) -> bool {
        matches!(self, PressureUnit::MillimetersOfMercury)
    }
}

impl GlucoseUnit {
    pub fn is_canonical(&self) -> bool {
        matches!(self, GlucoseUnit::MilligramsPerDeciliter)
    }
}

/// A unit from any family, tagged with its kind.
///
/// Used by surfaces that receive a bare unit symbol (every symbol is unique
/// across families, so the kind can be inferred from the symbol alone).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnyUnit {
    Weight(WeightUnit),
    Height(HeightUnit),
    Temperature(TemperatureUnit),
    Pressure(PressureUnit),
    Glucose(GlucoseUnit),
}

impl AnyUnit {
    pub fn kind(&self) -> VitalKind {
        match self {
            AnyUnit::Weight(_) => VitalKind::Weight,
            AnyUnit::Height(_) => VitalKind::Height,
            AnyUnit::Temperature(_) => VitalKind::Temperature,
            AnyUnit::Pressure(_) => VitalKind::BloodPressure,
            AnyUnit::Glucose(_) => VitalKind::BloodSugar,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnyUnit::Weight(unit) => unit.as_str(),
            AnyUnit::Height(unit) => unit.as_str(),
            AnyUnit::Temperature(unit) => unit.as_str(),
            AnyUnit::Pressure(unit) => unit.as_str(),
            AnyUnit::Glucose(unit) => unit.as_str(),
        }
    }
}

impl fmt::Display for AnyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AnyUnit {
    type Err = VitalsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(unit) = s.parse::<WeightUnit>() {
            return Ok(AnyUnit::Weight(unit));
        }
        if let Ok(unit) = s.parse::<HeightUnit>() {
            return Ok(AnyUnit::Height(unit));
        }
        if let Ok(unit) = s.parse::<TemperatureUnit>() {
            return Ok(AnyUnit::Temperature(unit));
        }
        if let Ok(unit) = s.parse::<PressureUnit>() {
            return Ok(AnyUnit::Pressure(unit));
        }
        if let Ok(unit) = s.parse::<GlucoseUnit>() {
            return Ok(AnyUnit::Glucose(unit));
        }
        Err(VitalsError::UnknownUnit(s.to_string()))
    }
}

/// Static description of one kind's unit family, for listing surfaces.
#[derive(Debug, Clone, Copy)]
pub struct UnitFamily {
    pub kind: VitalKind,
    pub canonical: &'static str,
    pub members: &'static [&'static str],
}

impl UnitFamily {
    pub fn all() -> [UnitFamily; 5] {
        [
            UnitFamily {
                kind: VitalKind::Weight,
                canonical: "kg",
                members: &["kg", "lb", "st"],
            },
            UnitFamily {
                kind: VitalKind::Height,
                canonical: "cm",
                members: &["cm", "in", "ft"],
            },
            UnitFamily {
                kind: VitalKind::Temperature,
                canonical: "C",
                members: &["C", "F"],
            },
            UnitFamily {
                kind: VitalKind::BloodPressure,
                canonical: "mmHg",
                members: &["mmHg", "kPa"],
            },
            UnitFamily {
                kind: VitalKind::BloodSugar,
                canonical: "mg/dL",
                members: &["mg/dL", "mmol/L"],
            },
        ]
    }
}

/// Preferred display unit per family. Defaults to canonical across the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitPreferences {
    pub weight: WeightUnit,
    pub height: HeightUnit,
    pub temperature: TemperatureUnit,
    pub pressure: PressureUnit,
    pub glucose: GlucoseUnit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_parse_case_insensitively() {
        assert_eq!("KG".parse::<WeightUnit>().unwrap(), WeightUnit::Kilograms);
        assert_eq!("Lbs".parse::<WeightUnit>().unwrap(), WeightUnit::Pounds);
        assert_eq!("°C".parse::<TemperatureUnit>().unwrap(), TemperatureUnit::Celsius);
        assert_eq!("mmol/l".parse::<GlucoseUnit>().unwrap(), GlucoseUnit::MillimolesPerLiter);
    }

    #[test]
    fn unknown_symbol_is_an_error() {
        assert!("furlong".parse::<AnyUnit>().is_err());
    }

    #[test]
    fn any_unit_infers_kind_from_symbol() {
        let unit: AnyUnit = "kPa".parse().unwrap();
        assert_eq!(unit.kind(), VitalKind::BloodPressure);
        let unit: AnyUnit = "ft".parse().unwrap();
        assert_eq!(unit.kind(), VitalKind::Height);
    }

    #[test]
    fn defaults_are_canonical() {
        assert!(WeightUnit::default().is_canonical());
        assert!(HeightUnit::default().is_canonical());
        assert!(TemperatureUnit::default().is_canonical());
        assert!(PressureUnit::default().is_canonical());
        assert!(GlucoseUnit::default().is_canonical());
    }

    #[test]
    fn family_members_start_with_canonical() {
        for family in UnitFamily::all() {
            assert_eq!(family.members[0], family.canonical);
        }
    }
}
