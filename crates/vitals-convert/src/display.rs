//! Formatting and parsing at the text-field boundary.

use crate::convert::{VitalUnit, convert};

/// Fractional digits used for redisplay unless a field asks otherwise.
pub const DEFAULT_DECIMALS: usize = 2;

/// Renders a number with up to `decimals` fractional digits, stripping
/// trailing zeros and a bare trailing point (`75.50` -> `"75.5"`,
/// `75.00` -> `"75"`).
///
/// Non-finite input renders as the empty string: the blank-field sentinel,
/// so a form never shows `"NaN"`.
pub fn format_value(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return String::new();
    }
    let rendered = format!("{value:.decimals$}");
    if rendered.contains('.') {
        rendered
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        rendered
    }
}

/// Parses user text as f64, returning `None` for empty, invalid, or
/// non-finite input. Callers treat `None` as "field not provided".
pub fn parse_value(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Re-renders a typed value when the user flips the unit toggle on a form.
///
/// The displayed text becomes
/// `format(from_canonical(to_canonical(parse(text), from), to))`, so flipping
/// A -> B -> A reproduces the original text up to formatting precision.
/// Unparseable text yields the empty string (the field clears).
pub fn swap_unit<U: VitalUnit>(text: &str, from: U, to: U) -> String {
    match parse_value(text) {
        Some(value) => format_value(convert(value, from, to), DEFAULT_DECIMALS),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitals_model::{TemperatureUnit, WeightUnit};

    #[test]
    fn format_strips_trailing_zeros() {
        assert_eq!(format_value(75.50, 2), "75.5");
        assert_eq!(format_value(75.00, 2), "75");
        assert_eq!(format_value(36.666, 1), "36.7");
        assert_eq!(format_value(0.0, 2), "0");
    }

    #[test]
    fn format_keeps_integral_rendering_at_zero_decimals() {
        assert_eq!(format_value(120.0, 0), "120");
        assert_eq!(format_value(119.6, 0), "120");
    }

    #[test]
    fn non_finite_renders_blank() {
        assert_eq!(format_value(f64::NAN, 2), "");
        assert_eq!(format_value(f64::INFINITY, 2), "");
        assert_eq!(format_value(f64::NEG_INFINITY, 2), "");
    }

    #[test]
    fn parse_rejects_blank_and_garbage() {
        assert_eq!(parse_value(""), None);
        assert_eq!(parse_value("   "), None);
        assert_eq!(parse_value("abc"), None);
        assert_eq!(parse_value("NaN"), None);
        assert_eq!(parse_value("inf"), None);
        assert_eq!(parse_value(" 75.5 "), Some(75.5));
    }

    #[test]
    fn swap_converts_and_formats() {
        assert_eq!(
            swap_unit("98.6", TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius),
            "37"
        );
        assert_eq!(
            swap_unit("", WeightUnit::Kilograms, WeightUnit::Pounds),
            ""
        );
        assert_eq!(
            swap_unit("not a number", WeightUnit::Kilograms, WeightUnit::Pounds),
            ""
        );
    }

    #[test]
    fn swap_there_and_back_reproduces_the_text() {
        for text in ["0", "1", "75.5", "500"] {
            let flipped = swap_unit(text, WeightUnit::Kilograms, WeightUnit::Pounds);
            let restored = swap_unit(&flipped, WeightUnit::Pounds, WeightUnit::Kilograms);
            assert_eq!(restored, text);
        }
    }
}
