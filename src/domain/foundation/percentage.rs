//! Percentage value object (0-100 scale) and weight normalization.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A value between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Creates a new Percentage, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates a Percentage, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "percentage",
                0,
                100,
                value as i64,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Normalizes a slice of non-negative weights into integer percentages
    /// that sum to exactly 100.
    ///
    /// Largest-remainder apportionment: every share is floored, then the
    /// remaining points go one each to the buckets with the largest
    /// fractional remainders (ties in input order). Shares stay
    /// non-negative and sum to exactly 100 for any bucket count.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if `weights` is empty
    /// - `InvalidFormat` if any weight is negative or non-finite, or the
    ///   total is not positive
    pub fn distribute(weights: &[f64]) -> Result<Vec<Percentage>, ValidationError> {
        if weights.is_empty() {
            return Err(ValidationError::empty_field("weights"));
        }
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(ValidationError::invalid_format(
                "weights",
                "weights must be finite and non-negative",
            ));
        }
        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return Err(ValidationError::invalid_format(
                "weights",
                "total weight must be positive",
            ));
        }

        let exact: Vec<f64> = weights.iter().map(|w| (w / total) * 100.0).collect();
        let mut shares: Vec<u8> = exact.iter().map(|e| e.floor() as u8).collect();
        let mut leftover: i64 = 100 - shares.iter().map(|&s| i64::from(s)).sum::<i64>();

        let mut by_remainder: Vec<usize> = (0..exact.len()).collect();
        // Stable sort: equal remainders keep input order.
        by_remainder.sort_by(|&a, &b| {
            let ra = exact[a] - exact[a].floor();
            let rb = exact[b] - exact[b].floor();
            rb.total_cmp(&ra)
        });
        while leftover > 0 {
            for &i in &by_remainder {
                if leftover == 0 {
                    break;
                }
                shares[i] += 1;
                leftover -= 1;
            }
        }

        Ok(shares.into_iter().map(Percentage::new).collect())
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum(shares: &[Percentage]) -> u32 {
        shares.iter().map(|p| u32::from(p.value())).sum()
    }

    #[test]
    fn new_clamps_to_100() {
        assert_eq!(Percentage::new(101).value(), 100);
        assert_eq!(Percentage::new(255).value(), 100);
    }

    #[test]
    fn try_new_rejects_over_100() {
        assert!(Percentage::try_new(101).is_err());
        assert!(Percentage::try_new(100).is_ok());
    }

    #[test]
    fn displays_with_percent_sign() {
        assert_eq!(format!("{}", Percentage::new(75)), "75%");
        assert_eq!(format!("{}", Percentage::HUNDRED), "100%");
    }

    #[test]
    fn distribute_single_weight_is_100() {
        let shares = Percentage::distribute(&[3.5]).unwrap();
        assert_eq!(shares, vec![Percentage::HUNDRED]);
    }

    #[test]
    fn distribute_even_split() {
        let shares = Percentage::distribute(&[1.0, 1.0, 1.0, 1.0]).unwrap();
        assert_eq!(sum(&shares), 100);
        assert!(shares.iter().all(|s| s.value() == 25));
    }

    #[test]
    fn distribute_thirds_sums_to_exactly_100() {
        let shares = Percentage::distribute(&[1.0, 1.0, 1.0]).unwrap();
        assert_eq!(sum(&shares), 100);
        // Floors give 33/33/33; the leftover point goes to the first of
        // the tied remainders.
        assert_eq!(shares[0].value(), 34);
        assert_eq!(shares[1].value(), 33);
        assert_eq!(shares[2].value(), 33);
    }

    #[test]
    fn distribute_leftover_goes_to_largest_remainders() {
        let shares = Percentage::distribute(&[1.0, 2.0, 1.0, 2.0]).unwrap();
        assert_eq!(sum(&shares), 100);
        // Exact shares 16.67/33.33/16.67/33.33 floor to 16/33/16/33; the
        // two leftover points go to the .67 remainders.
        assert_eq!(shares[0].value(), 17);
        assert_eq!(shares[1].value(), 33);
        assert_eq!(shares[2].value(), 17);
        assert_eq!(shares[3].value(), 33);
    }

    #[test]
    fn distribute_handles_many_equal_buckets() {
        // More buckets than 100 has points to spare; shares must stay
        // non-negative and still sum to exactly 100.
        for n in 1..=200 {
            let shares = Percentage::distribute(&vec![1.0; n]).unwrap();
            assert_eq!(sum(&shares), 100, "bucket count {}", n);
        }
    }

    #[test]
    fn distribute_eighteen_equal_buckets_sums_to_100() {
        let shares = Percentage::distribute(&vec![1.0; 18]).unwrap();
        assert_eq!(sum(&shares), 100);
        // 100/18 = 5.55..; ten buckets get 6, eight get 5.
        assert!(shares.iter().all(|s| s.value() == 5 || s.value() == 6));
    }

    #[test]
    fn distribute_zero_weight_bucket_gets_zero() {
        let shares = Percentage::distribute(&[0.0, 5.0]).unwrap();
        assert_eq!(shares[0], Percentage::ZERO);
        assert_eq!(shares[1], Percentage::HUNDRED);
    }

    #[test]
    fn distribute_rejects_empty_input() {
        assert!(Percentage::distribute(&[]).is_err());
    }

    #[test]
    fn distribute_rejects_negative_and_non_finite() {
        assert!(Percentage::distribute(&[1.0, -0.5]).is_err());
        assert!(Percentage::distribute(&[f64::NAN]).is_err());
        assert!(Percentage::distribute(&[f64::INFINITY, 1.0]).is_err());
    }

    #[test]
    fn distribute_rejects_all_zero_weights() {
        assert!(Percentage::distribute(&[0.0, 0.0]).is_err());
    }
}
