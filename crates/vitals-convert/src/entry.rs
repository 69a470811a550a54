//! The two storage boundaries: form entry to canonical record, and
//! canonical record to display text.
//!
//! A `VitalsEntry` only exists while a form is open; it is never persisted.
//! Only the canonical `VisitVitals` crosses into storage, and it never
//! carries a display unit.

use vitals_model::{
    GlucoseUnit, HeightUnit, PressureUnit, TemperatureUnit, UnitPreferences, VisitVitals,
    WeightUnit,
};

use crate::convert::VitalUnit;
use crate::display::{DEFAULT_DECIMALS, format_value};

/// Transient form state: user-entered values with the display unit each
/// family's toggle is currently set to. `None` means the field is blank.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VitalsEntry {
    pub weight: Option<f64>,
    pub weight_unit: WeightUnit,
    pub height: Option<f64>,
    pub height_unit: HeightUnit,
    pub temperature: Option<f64>,
    pub temperature_unit: TemperatureUnit,
    pub systolic: Option<f64>,
    pub diastolic: Option<f64>,
    pub pressure_unit: PressureUnit,
    pub blood_sugar: Option<f64>,
    pub blood_sugar_unit: GlucoseUnit,
    pub heart_rate: Option<f64>,
    pub oxygen_saturation: Option<f64>,
    pub respiratory_rate: Option<f64>,
}

/// Per-field display strings for a rendered record. An empty string means
/// the field is blank.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VitalsDisplay {
    pub weight: String,
    pub height: String,
    pub temperature: String,
    pub systolic: String,
    pub diastolic: String,
    pub heart_rate: String,
    pub oxygen_saturation: String,
    pub respiratory_rate: String,
    pub blood_sugar: String,
}

/// Converts a form entry into a canonical record, applying the storage
/// rounding policy:
///
/// - systolic/diastolic: nearest integer mmHg after canonical conversion
/// - heart rate, oxygen saturation, respiratory rate: nearest integer
/// - weight, height, temperature, blood sugar: two decimal places
///
/// Non-finite values are treated as "field not provided" and become `None`.
pub fn canonicalize(entry: &VitalsEntry) -> VisitVitals {
    VisitVitals {
        weight_kg: canonical_f64(entry.weight, entry.weight_unit),
        height_cm: canonical_f64(entry.height, entry.height_unit),
        temperature_c: canonical_f64(entry.temperature, entry.temperature_unit),
        systolic_mmhg: canonical_i64(entry.systolic, entry.pressure_unit),
        diastolic_mmhg: canonical_i64(entry.diastolic, entry.pressure_unit),
        heart_rate_bpm: round_integer(entry.heart_rate),
        oxygen_saturation_pct: round_integer(entry.oxygen_saturation),
        respiratory_rate: round_integer(entry.respiratory_rate),
        blood_sugar_mg_dl: canonical_f64(entry.blood_sugar, entry.blood_sugar_unit),
        recorded_at: None,
    }
}

/// Renders a canonical record in the preferred display units, formatting
/// every field for a text input. Blank fields render as empty strings.
pub fn render(record: &VisitVitals, prefs: &UnitPreferences) -> VitalsDisplay {
    VitalsDisplay {
        weight: display_f64(record.weight_kg, prefs.weight),
        height: display_f64(record.height_cm, prefs.height),
        temperature: display_f64(record.temperature_c, prefs.temperature),
        systolic: display_i64(record.systolic_mmhg, prefs.pressure),
        diastolic: display_i64(record.diastolic_mmhg, prefs.pressure),
        heart_rate: integer_text(record.heart_rate_bpm),
        oxygen_saturation: integer_text(record.oxygen_saturation_pct),
        respiratory_rate: integer_text(record.respiratory_rate),
        blood_sugar: display_f64(record.blood_sugar_mg_dl, prefs.glucose),
    }
}

fn canonical_f64<U: VitalUnit>(value: Option<f64>, unit: U) -> Option<f64> {
    value
        .filter(|v| v.is_finite())
        .map(|v| round_to(unit.to_canonical(v), DEFAULT_DECIMALS))
}

fn canonical_i64<U: VitalUnit>(value: Option<f64>, unit: U) -> Option<i64> {
    value
        .filter(|v| v.is_finite())
        .map(|v| unit.to_canonical(v).round() as i64)
}

fn round_integer(value: Option<f64>) -> Option<i64> {
    value.filter(|v| v.is_finite()).map(|v| v.round() as i64)
}

fn display_f64<U: VitalUnit>(value: Option<f64>, unit: U) -> String {
    match value {
        Some(v) => format_value(unit.from_canonical(v), DEFAULT_DECIMALS),
        None => String::new(),
    }
}

fn display_i64<U: VitalUnit>(value: Option<i64>, unit: U) -> String {
    match value {
        Some(v) => format_value(unit.from_canonical(v as f64), DEFAULT_DECIMALS),
        None => String::new(),
    }
}

fn integer_text(value: Option<i64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => String::new(),
    }
}

fn round_to(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
