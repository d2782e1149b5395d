//! Reductions over batches of game outcomes.

/// Median of a sample: the average of the elements at ranks
/// `floor((n−1)/2)` and `ceil((n−1)/2)` of the sorted sample (the two
/// coincide for odd `n`). Consumes and sorts the sample.
///
/// Panics on an empty sample.
pub fn median(mut samples: Vec<f64>) -> f64 {
    assert!(!samples.is_empty(), "median of empty sample");
    samples.sort_by(f64::total_cmp);
    let lo = (samples.len() - 1) / 2;
    let hi = samples.len() / 2;
    (samples[lo] + samples[hi]) / 2.0
}

/// Arithmetic mean. Panics on an empty sample.
pub fn mean(samples: &[f64]) -> f64 {
    assert!(!samples.is_empty(), "mean of empty sample");
    samples.iter().sum::<f64>() / samples.len() as f64
}
