//! Canonical visit vitals record.
//!
//! Every measurement is stored in its kind's canonical unit; the display
//! unit a value was entered in is never persisted. `None` means the field
//! was not provided, which is a normal state for optional vitals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Vital-sign fields of one clinical encounter, in canonical units.
///
/// Blood pressure is conventionally recorded as whole mmHg, and the pulse
/// and respiration counts are whole numbers by nature, so those fields are
/// integers. The remaining measurements keep two decimal places.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisitVitals {
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub temperature_c: Option<f64>,
    pub systolic_mmhg: Option<i64>,
    pub diastolic_mmhg: Option<i64>,
    pub heart_rate_bpm: Option<i64>,
    pub oxygen_saturation_pct: Option<i64>,
    pub respiratory_rate: Option<i64>,
    pub blood_sugar_mg_dl: Option<f64>,
    pub recorded_at: Option<DateTime<Utc>>,
}

impl VisitVitals {
    /// Returns true when no vital field carries a value.
    pub fn is_empty(&self) -> bool {
        self.weight_kg.is_none()
            && self.height_cm.is_none()
            && self.temperature_c.is_none()
            && self.systolic_mmhg.is_none()
            && self.diastolic_mmhg.is_none()
            && self.heart_rate_bpm.is_none()
            && self.oxygen_saturation_pct.is_none()
            && self.respiratory_rate.is_none()
            && self.blood_sugar_mg_dl.is_none()
    }
}
