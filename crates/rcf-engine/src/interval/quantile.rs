//! Empirical quantile interval (no distributional assumption).

/// Quantile `q` in [0, 1] of an ascending-sorted sample, linear
/// interpolation between order statistics.
pub fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    match sorted.len() {
        0 => None,
        1 => Some(sorted[0]),
        n => {
            let rank = q.clamp(0.0, 1.0) * (n - 1) as f64;
            let lower = rank.floor() as usize;
            let upper = rank.ceil() as usize;
            let frac = rank - lower as f64;
            if upper >= n {
                Some(sorted[n - 1])
            } else {
                Some(sorted[lower] + (sorted[upper] - sorted[lower]) * frac)
            }
        }
    }
}

/// `(tail, 1 − tail)` quantiles of an unsorted sample.
pub fn interval(values: &[f64], tail: f64) -> Option<(f64, f64)> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    Some((quantile(&sorted, tail)?, quantile(&sorted, 1.0 - tail)?))
}
