//! Integer calculator exercised by the calculator scenarios.

use thiserror::Error;
use tracing::debug;

use crate::money::{Money, MoneyError};

/// Arithmetic failures reported by [`Calculator`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculatorError {
    /// The integer result does not fit in an `i64`.
    #[error("{operation} of {lhs} and {rhs} overflows")]
    Overflow {
        /// Name of the operation that overflowed.
        operation: &'static str,
        /// Left operand.
        lhs: i64,
        /// Right operand.
        rhs: i64,
    },
    /// The money total could not be computed.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Stateless calculator; scenarios keep the running result themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calculator;

impl Calculator {
    /// Creates a calculator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Adds two integers.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::Overflow`] when the sum does not fit.
    pub fn add(self, lhs: i64, rhs: i64) -> Result<i64, CalculatorError> {
        let sum = lhs
            .checked_add(rhs)
            .ok_or(CalculatorError::Overflow {
                operation: "addition",
                lhs,
                rhs,
            })?;
        debug!(lhs, rhs, sum, "added");
        Ok(sum)
    }

    /// Multiplies two integers.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::Overflow`] when the product does not fit.
    pub fn multiply(self, lhs: i64, rhs: i64) -> Result<i64, CalculatorError> {
        let product = lhs
            .checked_mul(rhs)
            .ok_or(CalculatorError::Overflow {
                operation: "multiplication",
                lhs,
                rhs,
            })?;
        debug!(lhs, rhs, product, "multiplied");
        Ok(product)
    }

    /// Adds two money amounts.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::Money`] when the total overflows.
    pub fn add_money(self, lhs: Money, rhs: Money) -> Result<Money, CalculatorError> {
        let total = lhs.checked_add(rhs)?;
        debug!(%lhs, %rhs, %total, "added amounts");
        Ok(total)
    }
}
