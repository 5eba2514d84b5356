//! Shared primitive types used across the entire projection.

/// A simulated year. Year 0 is the first projected year, not the baseline.
pub type Year = u32;

/// Percent chance, in [0, 100].
pub type Percent = f64;
