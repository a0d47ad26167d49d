//! Compound annual price correction.
//!
//! ```text
//! corrected = price × (1 + rate)^(target_year − completion_year)
//! ```
//!
//! A target year before the completion year discounts the price.

/// Express `price` from `completion_year` in `target_year` terms.
pub fn correct(price: f64, completion_year: i32, target_year: i32, rate: f64) -> f64 {
    let years = target_year.saturating_sub(completion_year);
    price * (1.0 + rate).powi(years)
}

/// [`correct`] over an optional price. Missing stays missing.
pub fn correct_optional(
    price: Option<f64>,
    completion_year: i32,
    target_year: i32,
    rate: f64,
) -> Option<f64> {
    price.map(|p| correct(p, completion_year, target_year, rate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_when_years_equal() {
        assert_eq!(correct(1234.5678, 2022, 2022, 0.023), 1234.5678);
    }

    #[test]
    fn test_compounds_forward() {
        let corrected = correct(1000.0, 2022, 2025, 0.023);
        assert!((corrected - 1000.0 * 1.023f64.powi(3)).abs() < 1e-9);
        assert!((corrected - 1070.599_167).abs() < 1e-3);
    }

    #[test]
    fn test_discounts_backward() {
        let corrected = correct(1000.0, 2025, 2023, 0.023);
        assert!(corrected < 1000.0);
        assert!((corrected * 1.023 * 1.023 - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_stays_missing() {
        assert_eq!(correct_optional(None, 2020, 2025, 0.023), None);
        assert_eq!(correct_optional(Some(40.0), 2025, 2025, 0.023), Some(40.0));
    }
}
