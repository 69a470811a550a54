//! Conversion constants, defined exactly once.
//!
//! Every form and display surface converts through these values; no screen
//! carries its own copy of a factor. Where a factor has two directions, only
//! one is defined and the other is derived as its reciprocal.

/// Pounds per kilogram.
pub const LB_PER_KG: f64 = 2.204_622_621_8;

/// Kilograms per stone.
pub const KG_PER_STONE: f64 = 6.350_293_18;

/// Centimeters per inch.
pub const CM_PER_INCH: f64 = 2.54;

/// Centimeters per foot.
pub const CM_PER_FOOT: f64 = 30.48;

/// Kilopascals per millimeter of mercury. The mmHg-per-kPa direction is
/// `1.0 / KPA_PER_MMHG` (approximately 7.50062), never a second literal.
pub const KPA_PER_MMHG: f64 = 0.133_322;

/// Milligrams per deciliter per millimole per liter (glucose).
pub const MG_DL_PER_MMOL_L: f64 = 18.0;
