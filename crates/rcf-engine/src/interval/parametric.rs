//! Normal-theory interval on the mean: `mean ± z · s / √n`.

use statrs::distribution::{ContinuousCDF, Normal};

use rcf_core::errors::NormalityError;

/// Two-sided standard-normal critical value for `confidence_level`
/// (1.959964 at 0.95).
pub fn z_critical(confidence_level: f64) -> Result<f64, NormalityError> {
    let standard = Normal::new(0.0, 1.0).map_err(|e| NormalityError::Numerical {
        message: e.to_string(),
    })?;
    let z = standard.inverse_cdf(1.0 - (1.0 - confidence_level) / 2.0);
    if z.is_finite() {
        Ok(z)
    } else {
        Err(NormalityError::Numerical {
            message: format!("no critical value for confidence level {confidence_level}"),
        })
    }
}

/// Sample standard deviation (ddof = 1). `None` below two values.
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 2 {
        return None;
    }
    let n_f = n as f64;
    let mean = values.iter().sum::<f64>() / n_f;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n_f - 1.0);
    variance.is_finite().then(|| variance.sqrt())
}

/// `(mean, lower, upper)` of the z-interval.
pub fn interval(values: &[f64], confidence_level: f64) -> Result<(f64, f64, f64), NormalityError> {
    let n = values.len();
    if n < 2 {
        return Err(NormalityError::SampleTooSmall { n, min: 2 });
    }
    let sd = sample_std_dev(values).ok_or_else(|| NormalityError::Numerical {
        message: format!("sample variance overflowed for n = {n}"),
    })?;
    let mean = values.iter().sum::<f64>() / n as f64;
    let half_width = z_critical(confidence_level)? * sd / (n as f64).sqrt();
    if !(mean.is_finite() && half_width.is_finite()) {
        return Err(NormalityError::Numerical {
            message: format!("z-interval is not finite for n = {n}"),
        });
    }
    Ok((mean, mean - half_width, mean + half_width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_z_critical_95() {
        let z = z_critical(0.95).unwrap();
        assert!((z - 1.959964).abs() < 1e-6);
    }

    #[test]
    fn test_sample_std_dev_ddof_one() {
        // mean 5, squared deviations sum 32, / 7
        let sd = sample_std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert!((sd - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
        assert_eq!(sample_std_dev(&[1.0]), None);
    }

    #[test]
    fn test_interval_symmetric_around_mean() {
        let values = [1000.0, 1100.0, 1050.0, 1200.0];
        let (mean, lo, hi) = interval(&values, 0.95).unwrap();
        assert!((mean - 1087.5).abs() < 1e-9);
        assert!(((mean - lo) - (hi - mean)).abs() < 1e-9);
        let expected_half = 1.959964 * sample_std_dev(&values).unwrap() / 2.0;
        assert!(((hi - mean) - expected_half).abs() < 1e-3);
    }

    #[test]
    fn test_interval_failure_reasons() {
        assert_eq!(
            interval(&[1000.0], 0.95),
            Err(NormalityError::SampleTooSmall { n: 1, min: 2 })
        );
        assert!(matches!(
            interval(&[1e308, 1.5e308, 1.7e308, 1.2e308], 0.95),
            Err(NormalityError::Numerical { .. })
        ));
    }
}
