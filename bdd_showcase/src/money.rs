//! Currency literals such as `$25.50` used by the calculator scenarios.
//!
//! [`Money`] implements [`FromStr`] so step placeholders convert straight
//! into a value object. Amounts are held as whole dollars plus cents, which
//! keeps addition exact.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

#[expect(clippy::expect_used, reason = "the pattern is a literal")]
static MONEY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\$([0-9]+)(?:\.([0-9]*))?$").expect("money pattern must compile")
});

/// Errors produced while parsing or combining [`Money`] values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// The text is not a `$<number>` literal.
    #[error("'{0}' is not a money literal such as $25.50")]
    Malformed(String),
    /// The literal has more than two fractional digits.
    #[error("'{0}' has more than two decimal places")]
    Precision(String),
    /// The dollar amount does not fit in the supported range.
    #[error("amount is too large")]
    Overflow,
}

/// A non-negative amount of money.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money {
    dollars: u64,
    cents: u8,
}

impl Money {
    /// Builds an amount, carrying cents of 100 or more into dollars.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Overflow`] when the carry overflows the dollar
    /// count.
    pub fn new(dollars: u64, cents: u8) -> Result<Self, MoneyError> {
        let mut whole = dollars;
        let mut rest = cents;
        while rest >= 100 {
            whole = whole.checked_add(1).ok_or(MoneyError::Overflow)?;
            rest -= 100;
        }
        Ok(Self {
            dollars: whole,
            cents: rest,
        })
    }

    /// Returns the whole-dollar part.
    #[must_use]
    pub const fn dollars(self) -> u64 {
        self.dollars
    }

    /// Returns the cents part, always below 100.
    #[must_use]
    pub const fn cents(self) -> u8 {
        self.cents
    }

    /// Adds two amounts exactly.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Overflow`] when the sum does not fit.
    ///
    /// # Examples
    ///
    /// ```
    /// use bdd_showcase::Money;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let total = "$50.00".parse::<Money>()?.checked_add("$25.50".parse()?)?;
    /// assert_eq!(total.to_string(), "$75.50");
    /// # Ok(())
    /// # }
    /// ```
    pub fn checked_add(self, other: Self) -> Result<Self, MoneyError> {
        let dollars = self
            .dollars
            .checked_add(other.dollars)
            .ok_or(MoneyError::Overflow)?;
        // Both parts are below 100, so the sum fits in a u8.
        Self::new(dollars, self.cents + other.cents)
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let literal = s.trim();
        let captures = MONEY_PATTERN
            .captures(literal)
            .ok_or_else(|| MoneyError::Malformed(literal.to_owned()))?;
        let dollars = captures
            .get(1)
            .map_or("0", |m| m.as_str())
            .parse::<u64>()
            .map_err(|_| MoneyError::Overflow)?;
        let fraction = captures.get(2).map_or("", |m| m.as_str());
        let cents = match fraction.len() {
            0 => 0,
            1 | 2 => {
                let digits = fraction
                    .parse::<u8>()
                    .map_err(|_| MoneyError::Malformed(literal.to_owned()))?;
                if fraction.len() == 1 {
                    digits * 10
                } else {
                    digits
                }
            }
            _ => return Err(MoneyError::Precision(literal.to_owned())),
        };
        Self::new(dollars, cents)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.dollars, self.cents)
    }
}
