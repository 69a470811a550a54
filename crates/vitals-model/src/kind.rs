use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A physiological quantity with a unit family attached.
///
/// Integer vitals (heart rate, oxygen saturation, respiratory rate) have no
/// unit family and therefore no `VitalKind`; they pass through storage
/// unconverted apart from integer rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VitalKind {
    Weight,
    Height,
    Temperature,
    BloodPressure,
    BloodSugar,
}

impl VitalKind {
    pub fn all() -> [VitalKind; 5] {
        [
            VitalKind::Weight,
            VitalKind::Height,
            VitalKind::Temperature,
            VitalKind::BloodPressure,
            VitalKind::BloodSugar,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VitalKind::Weight => "weight",
            VitalKind::Height => "height",
            VitalKind::Temperature => "temperature",
            VitalKind::BloodPressure => "blood pressure",
            VitalKind::BloodSugar => "blood sugar",
        }
    }
}

impl fmt::Display for VitalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VitalKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_'], " ").as_str() {
            "weight" => Ok(VitalKind::Weight),
            "height" => Ok(VitalKind::Height),
            "temperature" => Ok(VitalKind::Temperature),
            "blood pressure" | "bp" => Ok(VitalKind::BloodPressure),
            "blood sugar" | "glucose" => Ok(VitalKind::BloodSugar),
            other => Err(format!("unknown vital kind: {other}")),
        }
    }
}
