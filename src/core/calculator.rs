//! Arithmetic building blocks of a checkout: totals, discounts and the
//! factorial-based special discount.

use crate::domain::ports::PriceTransform;
use crate::utils::error::{CartError, Result};

/// Tax rate used when a caller has no tax to apply.
pub const DEFAULT_TAX_RATE: f64 = 0.0;

/// Largest `n` whose factorial fits in a `u128`.
pub const MAX_FACTORIAL_INPUT: u32 = 34;

/// Reduces a standard price by a fixed fraction: `price * (1 - rate)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentageDiscount {
    rate: f64,
}

impl PercentageDiscount {
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl PriceTransform for PercentageDiscount {
    fn apply(&self, price: f64) -> f64 {
        price * (1.0 - self.rate)
    }
}

/// Sums `prices` and applies the tax multiplier `1 + tax_rate`.
///
/// The sum has no identity element: an empty list is an error, not zero.
pub fn calculate_total(prices: &[f64], tax_rate: f64) -> Result<f64> {
    let subtotal = prices
        .iter()
        .copied()
        .reduce(|acc, price| acc + price)
        .ok_or(CartError::EmptyPriceList)?;

    Ok(subtotal * (1.0 + tax_rate))
}

/// Applies `transform` to every price, keeping length and order.
pub fn apply_discount<T>(prices: &[f64], transform: &T) -> Vec<f64>
where
    T: PriceTransform + ?Sized,
{
    prices.iter().map(|&price| transform.apply(price)).collect()
}

pub fn calculate_factorial(n: u32) -> Result<u128> {
    if n > MAX_FACTORIAL_INPUT {
        return Err(CartError::FactorialOverflow { n });
    }

    match n {
        0 | 1 => Ok(1),
        _ => calculate_factorial(n - 1)?
            .checked_mul(u128::from(n))
            .ok_or(CartError::FactorialOverflow { n }),
    }
}

/// Prices at or above `threshold`, in their original order.
pub fn filter_at_or_above(prices: &[f64], threshold: f64) -> Vec<f64> {
    prices
        .iter()
        .copied()
        .filter(|&price| price >= threshold)
        .collect()
}

/// `factorial / 100`, clamped to `cap`. An overflowed factorial clamps to `cap`.
pub fn special_discount_percent(factorial: Option<u128>, cap: f64) -> f64 {
    match factorial {
        Some(value) => (value as f64 / 100.0).min(cap),
        None => cap,
    }
}

pub fn apply_special_discount(total: f64, percent: f64) -> f64 {
    total * (1.0 - percent / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_calculate_total_applies_tax_multiplier() {
        let prices = [10.0, 20.0, 30.0];
        assert_close(calculate_total(&prices, 0.0).unwrap(), 60.0);
        assert_close(calculate_total(&prices, 0.05).unwrap(), 63.0);
        assert_close(calculate_total(&prices, 1.0).unwrap(), 120.0);
    }

    #[test]
    fn test_calculate_total_with_default_tax_is_plain_sum() {
        let prices = [4.95, 10.80, 7.875, 22.50, 4.491, 45.00];
        assert_close(calculate_total(&prices, DEFAULT_TAX_RATE).unwrap(), 95.616);
    }

    #[test]
    fn test_calculate_total_single_item() {
        assert_close(calculate_total(&[42.0], 0.5).unwrap(), 63.0);
    }

    #[test]
    fn test_calculate_total_empty_list_is_error() {
        let err = calculate_total(&[], 0.05).unwrap_err();
        assert!(matches!(err, CartError::EmptyPriceList));
    }

    #[test]
    fn test_apply_discount_preserves_length_and_order() {
        let prices = [5.50, 12.00, 8.75];
        let discount = PercentageDiscount::new(0.10);
        assert_eq!(discount.rate(), 0.10);
        let discounted = apply_discount(&prices, &discount);

        assert_eq!(discounted.len(), prices.len());
        assert_close(discounted[0], 4.95);
        assert_close(discounted[1], 10.80);
        assert_close(discounted[2], 7.875);
    }

    #[test]
    fn test_apply_discount_identity_returns_equal_list() {
        let prices = vec![5.50, 12.00, 8.75, 25.00, 4.99, 50.00];
        let unchanged = apply_discount(&prices, &|price: f64| price);
        assert_eq!(unchanged, prices);
    }

    #[test]
    fn test_apply_discount_accepts_closures_and_trait_objects() {
        let double = |price: f64| price * 2.0;
        assert_eq!(apply_discount(&[1.0, 2.5], &double), vec![2.0, 5.0]);

        let boxed: Box<dyn PriceTransform> = Box::new(PercentageDiscount::new(0.5));
        assert_eq!(apply_discount(&[10.0, 4.0], boxed.as_ref()), vec![5.0, 2.0]);
    }

    #[test]
    fn test_apply_discount_empty_list() {
        assert!(apply_discount(&[], &PercentageDiscount::new(0.1)).is_empty());
    }

    #[test]
    fn test_factorial_base_cases() {
        assert_eq!(calculate_factorial(0).unwrap(), 1);
        assert_eq!(calculate_factorial(1).unwrap(), 1);
    }

    #[test]
    fn test_factorial_recurrence() {
        for n in 2..=MAX_FACTORIAL_INPUT {
            let previous = calculate_factorial(n - 1).unwrap();
            assert_eq!(calculate_factorial(n).unwrap(), u128::from(n) * previous);
        }
        assert_eq!(calculate_factorial(6).unwrap(), 720);
        assert_eq!(calculate_factorial(10).unwrap(), 3_628_800);
    }

    #[test]
    fn test_factorial_overflow() {
        assert!(calculate_factorial(MAX_FACTORIAL_INPUT).is_ok());
        let err = calculate_factorial(MAX_FACTORIAL_INPUT + 1).unwrap_err();
        assert!(matches!(err, CartError::FactorialOverflow { n: 35 }));
        assert!(calculate_factorial(u32::MAX).is_err());
    }

    #[test]
    fn test_filter_at_or_above_keeps_boundary() {
        let prices = [5.50, 10.0, 8.75, 25.00];
        assert_eq!(filter_at_or_above(&prices, 10.0), vec![10.0, 25.00]);
    }

    #[test]
    fn test_special_discount_is_clamped() {
        assert_close(special_discount_percent(Some(720), 50.0), 7.2);
        assert_close(special_discount_percent(Some(1), 50.0), 0.01);
        assert_close(special_discount_percent(Some(5040), 50.0), 50.0);
        assert_close(special_discount_percent(Some(u128::MAX), 50.0), 50.0);
        assert_close(special_discount_percent(None, 50.0), 50.0);
    }

    #[test]
    fn test_apply_special_discount() {
        assert_close(apply_special_discount(200.0, 50.0), 100.0);
        assert_close(apply_special_discount(100.3968, 7.2), 93.1682304);
        assert_close(apply_special_discount(80.0, 0.0), 80.0);
    }
}
