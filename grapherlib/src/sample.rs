//! Sampling a function over a range into a table.
//!
//! [`sample`] walks a [`SampleRange`] from `min` to `max` inclusive,
//! evaluating the function at each step and collecting the (input, output)
//! pairs in order. The result is a read-only [`Table`].

use serde::{Deserialize, Serialize};

use crate::error::GrapherError;
use crate::function::Function;
use crate::Result;

/// Range over which a function is sampled.
///
/// `step` defaults to 1 and must be positive; `min > max` is allowed and
/// yields an empty table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleRange {
    /// First input value
    pub min: f64,
    /// Inclusive upper bound on input values
    pub max: f64,
    /// Increment between consecutive inputs
    pub step: f64,
}

impl SampleRange {
    /// Create a range from `min` to `max` with the default step of 1.
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            step: 1.0,
        }
    }

    /// Set the sampling step.
    pub fn step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }
}

/// One ordered set of (input, output) samples for a single function.
///
/// Insertion order is iteration order. Inputs are strictly increasing by
/// construction (the sampler never repeats a key), so a plain vector of
/// pairs suffices and avoids float hashing pitfalls. A table is populated
/// in one pass by [`sample`] and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    points: Vec<(f64, f64)>,
}

impl Table {
    /// The (input, output) pairs in insertion order.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Iterate over the (input, output) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(f64, f64)> {
        self.points.iter()
    }

    /// Number of samples in the table.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the table holds no samples.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Sample `function` over `range` into a fresh [`Table`].
///
/// Walks `x = min, min + step, min + 2*step, ...` while `x <= max`
/// (inclusive bound, native f64 accumulation). A non-positive or NaN step
/// is rejected with [`GrapherError::InvalidRange`] since the walk would
/// never terminate; `min > max` with a valid step yields an empty table.
pub fn sample(function: &Function, range: SampleRange) -> Result<Table> {
    if !(range.step > 0.0) {
        return Err(GrapherError::InvalidRange { step: range.step });
    }

    let mut points = Vec::new();
    let mut x = range.min;
    while x <= range.max {
        points.push((x, function.evaluate(x)));
        x += range.step;
    }

    Ok(Table { points })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_default_step() {
        let range = SampleRange::new(0.0, 5.0);
        assert_eq!(range.step, 1.0);
    }

    #[test]
    fn test_range_step_builder() {
        let range = SampleRange::new(0.0, 5.0).step(0.5);
        assert_eq!(range.step, 0.5);
    }

    #[test]
    fn test_sample_inputs_match_arithmetic_sequence() {
        let f = Function::linear(2.0, 1.0);
        let table = sample(&f, SampleRange::new(0.0, 5.0)).unwrap();

        let inputs: Vec<f64> = table.iter().map(|(x, _)| *x).collect();
        assert_eq!(inputs, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_sample_inputs_strictly_increasing() {
        let f = Function::sine();
        let table = sample(&f, SampleRange::new(-3.0, 3.0).step(0.25)).unwrap();

        assert!(!table.is_empty());
        for pair in table.points().windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
    }

    #[test]
    fn test_sample_includes_upper_bound() {
        let f = Function::constant(1.0);
        let table = sample(&f, SampleRange::new(4.0, 17.0)).unwrap();

        assert_eq!(table.len(), 14);
        assert_eq!(table.points().last().unwrap().0, 17.0);
    }

    #[test]
    fn test_sample_outputs_follow_function() {
        let f = Function::linear(3.0, 4.0);
        let table = sample(&f, SampleRange::new(0.0, 2.0)).unwrap();

        assert_eq!(table.points(), &[(0.0, 4.0), (1.0, 7.0), (2.0, 10.0)]);
    }

    #[test]
    fn test_sample_empty_when_min_above_max() {
        let f = Function::constant(1.0);
        let table = sample(&f, SampleRange::new(5.0, 0.0)).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_sample_zero_step_is_invalid_range() {
        let f = Function::constant(1.0);
        let err = sample(&f, SampleRange::new(0.0, 5.0).step(0.0)).unwrap_err();
        assert!(matches!(err, GrapherError::InvalidRange { step } if step == 0.0));
    }

    #[test]
    fn test_sample_negative_step_is_invalid_range() {
        let f = Function::constant(1.0);
        let err = sample(&f, SampleRange::new(0.0, 5.0).step(-1.0)).unwrap_err();
        assert!(matches!(err, GrapherError::InvalidRange { .. }));
    }

    #[test]
    fn test_sample_nan_step_is_invalid_range() {
        let f = Function::constant(1.0);
        let err = sample(&f, SampleRange::new(0.0, 5.0).step(f64::NAN)).unwrap_err();
        assert!(matches!(err, GrapherError::InvalidRange { .. }));
    }

    #[test]
    fn test_sample_single_point_when_min_equals_max() {
        let f = Function::constant(2.0);
        let table = sample(&f, SampleRange::new(3.0, 3.0)).unwrap();
        assert_eq!(table.points(), &[(3.0, 2.0)]);
    }
}
