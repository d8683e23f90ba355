// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Rejected sampler parameters
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("{name} must be a finite non-negative number, got {value}")]
    InvalidRateLimit { name: &'static str, value: f64 },
    #[error("sampling fraction must be within [0, 1], got {0}")]
    InvalidFraction(f64),
}

/// Rejects negative, infinite and NaN values
pub(crate) fn check_non_negative(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidRateLimit { name, value })
    }
}

pub(crate) fn check_fraction(value: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(Error::InvalidFraction(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_non_negative() {
        assert_eq!(check_non_negative("max_balance", 0.0), Ok(0.0));
        assert_eq!(check_non_negative("max_balance", 12.5), Ok(12.5));
        assert_eq!(
            check_non_negative("max_balance", -0.5),
            Err(Error::InvalidRateLimit {
                name: "max_balance",
                value: -0.5
            })
        );
        assert!(check_non_negative("credits_per_second", f64::NAN).is_err());
        assert!(check_non_negative("credits_per_second", f64::INFINITY).is_err());
    }

    #[test]
    fn test_check_fraction() {
        assert_eq!(check_fraction(0.0), Ok(0.0));
        assert_eq!(check_fraction(1.0), Ok(1.0));
        assert_eq!(check_fraction(1.5), Err(Error::InvalidFraction(1.5)));
        assert_eq!(check_fraction(-0.1), Err(Error::InvalidFraction(-0.1)));
        assert!(check_fraction(f64::NAN).is_err());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::InvalidRateLimit {
                name: "credits_per_second",
                value: -2.0
            }
            .to_string(),
            "credits_per_second must be a finite non-negative number, got -2"
        );
        assert_eq!(
            Error::InvalidFraction(2.0).to_string(),
            "sampling fraction must be within [0, 1], got 2"
        );
    }
}
