//! Miscellaneous math functions for general use

/// Taylor series
pub mod series;
pub use series::taylor;
