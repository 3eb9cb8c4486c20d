pub mod generate;
pub mod phase;
pub mod rules;
pub mod stats;

pub use generate::generate;

/// Distances on the wire are always multiples of 0.1 km.
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
