pub mod error;
pub mod kind;
pub mod units;
pub mod visit;

pub use error::{Result, VitalsError};
pub use kind::VitalKind;
pub use units::{
    AnyUnit, GlucoseUnit, HeightUnit, PressureUnit, TemperatureUnit, UnitFamily, UnitPreferences,
    WeightUnit,
};
pub use visit::VisitVitals;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_record_reports_empty() {
        let record = VisitVitals::default();
        assert!(record.is_empty());
        let record = VisitVitals {
            heart_rate_bpm: Some(72),
            ..VisitVitals::default()
        };
        assert!(!record.is_empty());
    }

    #[test]
    fn unit_serde_uses_symbols() {
        let json = serde_json::to_string(&WeightUnit::Pounds).expect("serialize unit");
        assert_eq!(json, "\"lb\"");
        let round: GlucoseUnit = serde_json::from_str("\"mmol/L\"").expect("deserialize unit");
        assert_eq!(round, GlucoseUnit::MillimolesPerLiter);
    }
}
