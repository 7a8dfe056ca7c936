use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// Cost of a dish: a known amount, or unknown because some ingredient cost
/// is missing. `Unknown` absorbs every operation it takes part in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cost {
    Known(f64),
    Unknown,
}

impl Cost {
    pub const ZERO: Cost = Cost::Known(0.0);

    pub fn from_option(value: Option<f64>) -> Self {
        value.map_or(Cost::Unknown, Cost::Known)
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Cost::Known(v) => Some(*v),
            Cost::Unknown => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Cost::Known(_))
    }

    /// Round a known value to `decimals` places.
    pub fn rounded(self, decimals: u32) -> Self {
        let factor = 10_f64.powi(decimals as i32);
        match self {
            Cost::Known(v) => Cost::Known((v * factor).round() / factor),
            Cost::Unknown => Cost::Unknown,
        }
    }
}

impl Add for Cost {
    type Output = Cost;

    fn add(self, rhs: Cost) -> Cost {
        match (self, rhs) {
            (Cost::Known(a), Cost::Known(b)) => Cost::Known(a + b),
            _ => Cost::Unknown,
        }
    }
}

impl Mul<f64> for Cost {
    type Output = Cost;

    fn mul(self, rhs: f64) -> Cost {
        match self {
            Cost::Known(v) => Cost::Known(v * rhs),
            Cost::Unknown => Cost::Unknown,
        }
    }
}

impl Sum for Cost {
    fn sum<I: Iterator<Item = Cost>>(iter: I) -> Cost {
        iter.fold(Cost::ZERO, Add::add)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cost::Known(v) => write!(f, "{}", v),
            Cost::Unknown => write!(f, "NaN"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_is_infectious() {
        let total: Cost = [Cost::Known(1.0), Cost::Unknown, Cost::Known(2.0)]
            .into_iter()
            .sum();
        assert_eq!(total, Cost::Unknown);
        assert_eq!(Cost::Unknown * 0.0, Cost::Unknown);
    }

    #[test]
    fn test_empty_sum_is_zero() {
        let total: Cost = std::iter::empty().sum();
        assert_eq!(total, Cost::Known(0.0));
        assert!(total.is_known());
    }

    #[test]
    fn test_display() {
        assert_eq!(Cost::Known(3.9).to_string(), "3.9");
        assert_eq!(Cost::Known(160.0).to_string(), "160");
        assert_eq!(Cost::Unknown.to_string(), "NaN");
    }

    #[test]
    fn test_rounded() {
        assert_eq!(Cost::Known(3.14159).rounded(2), Cost::Known(3.14));
        assert_eq!(Cost::Unknown.rounded(2), Cost::Unknown);
    }
}
