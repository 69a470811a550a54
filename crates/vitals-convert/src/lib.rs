//! Pure unit conversion and measurement normalization for vital signs.
//!
//! Every measurement kind has one canonical storage unit; conversions to and
//! from display units always route through it. The module is stateless and
//! does no I/O, so it is safe to call from any number of callers without
//! coordination.

pub mod constants;
pub mod convert;
pub mod display;
pub mod entry;

pub use convert::{VitalUnit, convert, convert_any};
pub use display::{DEFAULT_DECIMALS, format_value, parse_value, swap_unit};
pub use entry::{VitalsDisplay, VitalsEntry, canonicalize, render};
