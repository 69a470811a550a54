//! CLI library components for the vitals normalizer.

pub mod logging;
