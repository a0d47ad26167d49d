//! Shapiro-Wilk normality test (Royston 1995, algorithm AS R94).
//!
//! Coefficients come from normal order-statistic approximations with
//! polynomial corrections for the extreme one or two weights. W is the
//! squared correlation between the sorted sample and the weight vector.
//! p-value: exact for n = 3, Royston's normalizing transforms otherwise
//! (separate fits for 4 ≤ n ≤ 11 and n ≥ 12).
//!
//! Normal quantiles and tail probabilities via `statrs`.

use std::f64::consts::FRAC_1_SQRT_2;

use statrs::distribution::{ContinuousCDF, Normal};

use rcf_core::constants::{SHAPIRO_WILK_MAX_N, SHAPIRO_WILK_MIN_N};
use rcf_core::errors::NormalityError;

/// Ranges below this are treated as a constant sample.
const SMALL: f64 = 1e-19;

/// Reported p-value when W is beyond the small-sample transform's support.
const MIN_P_VALUE: f64 = 1e-99;

/// Plotting-position offset for the order-statistic approximation.
const TH: f64 = 0.375;

// Royston's polynomial fits, ascending powers.
const C1: [f64; 6] = [0.0, 0.221157, -0.147981, -2.071190, 4.434685, -2.706056];
const C2: [f64; 6] = [0.0, 0.042981, -0.293762, -1.752461, 5.682633, -3.582633];
const C3: [f64; 4] = [0.5440, -0.39978, 0.025054, -6.714e-4];
const C4: [f64; 4] = [1.3822, -0.77857, 0.062767, -0.0020322];
const C5: [f64; 4] = [-1.5861, -0.31082, -0.083751, 0.0038915];
const C6: [f64; 3] = [-0.4803, -0.082676, 0.0030302];
const G: [f64; 2] = [-2.273, 0.459];

/// 6 / π and π / 3 for the exact n = 3 distribution.
const PI6: f64 = 1.909_859_317_102_74;
const STQR: f64 = 1.047_197_551_196_60;

/// Outcome of one Shapiro-Wilk run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalityTest {
    /// W statistic in (0, 1].
    pub w: f64,
    pub p_value: f64,
    pub n: usize,
}

impl NormalityTest {
    /// True when normality is not rejected at `alpha`.
    pub fn is_normal(&self, alpha: f64) -> bool {
        self.p_value >= alpha
    }
}

/// Run the Shapiro-Wilk test on `values` (any order).
pub fn shapiro_wilk(values: &[f64]) -> Result<NormalityTest, NormalityError> {
    let n = values.len();
    if n < SHAPIRO_WILK_MIN_N {
        return Err(NormalityError::SampleTooSmall {
            n,
            min: SHAPIRO_WILK_MIN_N,
        });
    }
    if n > SHAPIRO_WILK_MAX_N {
        return Err(NormalityError::SampleTooLarge {
            n,
            max: SHAPIRO_WILK_MAX_N,
        });
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(NormalityError::NonFinite);
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let range = sorted[n - 1] - sorted[0];
    if range < SMALL {
        return Err(NormalityError::ZeroRange { n });
    }

    let standard = Normal::new(0.0, 1.0).map_err(|e| NormalityError::Numerical {
        message: e.to_string(),
    })?;

    let half = coefficients(n, &standard)?;
    let mut weights = vec![0.0; n];
    for (i, &a) in half.iter().enumerate() {
        weights[i] = -a;
        weights[n - 1 - i] = a;
    }

    // Scale by the range so large prices don't cost precision.
    let scaled: Vec<f64> = sorted.iter().map(|v| v / range).collect();
    let n_f = n as f64;
    let mean_x = scaled.iter().sum::<f64>() / n_f;
    let mean_a = weights.iter().sum::<f64>() / n_f;

    let (mut sax, mut ssa, mut ssx) = (0.0, 0.0, 0.0);
    for (a, x) in weights.iter().zip(&scaled) {
        let da = a - mean_a;
        let dx = x - mean_x;
        sax += da * dx;
        ssa += da * da;
        ssx += dx * dx;
    }

    let w = (sax * sax / (ssa * ssx)).min(1.0);
    if !w.is_finite() || w <= 0.0 {
        return Err(NormalityError::Numerical {
            message: format!("W statistic out of range: {w}"),
        });
    }

    let p_value = p_value(w, n, &standard);
    Ok(NormalityTest { w, p_value, n })
}

/// Weights for the lower half of the order statistics (positive values;
/// the full vector is antisymmetric).
fn coefficients(n: usize, standard: &Normal) -> Result<Vec<f64>, NormalityError> {
    if n == 3 {
        return Ok(vec![FRAC_1_SQRT_2]);
    }

    let half = n / 2;
    let an25 = n as f64 + 0.25;
    let m: Vec<f64> = (1..=half)
        .map(|i| standard.inverse_cdf((i as f64 - TH) / an25))
        .collect();

    let summ2 = 2.0 * m.iter().map(|v| v * v).sum::<f64>();
    let ssumm2 = summ2.sqrt();
    let rsn = 1.0 / (n as f64).sqrt();
    let a1 = poly(&C1, rsn) - m[0] / ssumm2;

    let mut a = vec![0.0; half];
    let (first_free, fac) = if n > 5 {
        let a2 = -m[1] / ssumm2 + poly(&C2, rsn);
        let fac = ((summ2 - 2.0 * m[0] * m[0] - 2.0 * m[1] * m[1])
            / (1.0 - 2.0 * a1 * a1 - 2.0 * a2 * a2))
            .sqrt();
        a[1] = a2;
        (2, fac)
    } else {
        let fac = ((summ2 - 2.0 * m[0] * m[0]) / (1.0 - 2.0 * a1 * a1)).sqrt();
        (1, fac)
    };

    if !fac.is_finite() || fac <= 0.0 {
        return Err(NormalityError::Numerical {
            message: format!("degenerate coefficient normalizer for n = {n}"),
        });
    }

    a[0] = a1;
    for (ai, mi) in a.iter_mut().zip(&m).skip(first_free) {
        *ai = -mi / fac;
    }
    Ok(a)
}

/// Upper-tail p-value for W.
fn p_value(w: f64, n: usize, standard: &Normal) -> f64 {
    if n == 3 {
        return (PI6 * (w.sqrt().asin() - STQR)).clamp(0.0, 1.0);
    }
    if w >= 1.0 {
        return 1.0;
    }

    let n_f = n as f64;
    let mut y = (1.0 - w).ln();
    let (m, s) = if n <= 11 {
        let gamma = poly(&G, n_f);
        if y >= gamma {
            return MIN_P_VALUE;
        }
        y = -(gamma - y).ln();
        (poly(&C3, n_f), poly(&C4, n_f).exp())
    } else {
        let ln_n = n_f.ln();
        (poly(&C5, ln_n), poly(&C6, ln_n).exp())
    };

    standard.sf((y - m) / s).clamp(0.0, 1.0)
}

/// Evaluate `c[0] + c[1]·x + c[2]·x² + …`.
fn poly(c: &[f64], x: f64) -> f64 {
    c.iter().rev().fold(0.0, |acc, &ci| acc * x + ci)
}
