//! Numeric folds shared by the calculation endpoints.

/// Sum of the slice; empty input sums to zero.
pub fn sum(numbers: &[f64]) -> f64 {
    numbers.iter().sum()
}

/// Arithmetic mean rounded to two decimal places, or `None` for the empty
/// slice. Callers decide how an undefined average is reported.
pub fn average(numbers: &[f64]) -> Option<f64> {
    if numbers.is_empty() {
        return None;
    }
    Some(round2(sum(numbers) / numbers.len() as f64))
}

/// Rounds to two decimal places, resolving ties toward positive infinity.
pub fn round2(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}
