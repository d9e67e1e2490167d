//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues that plague monetary calculations.

use crate::locale::Locale;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    /// Euro, the store default.
    #[default]
    EUR,
    USD,
    GBP,
}

impl Currency {
    /// Get the currency code (e.g., "EUR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::EUR => "EUR",
            Currency::USD => "USD",
            Currency::GBP => "GBP",
        }
    }

    /// Get the currency symbol (e.g., "€").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::EUR => "\u{20ac}",
            Currency::USD => "$",
            Currency::GBP => "\u{00a3}",
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "EUR" => Some(Currency::EUR),
            "USD" => Some(Currency::USD),
            "GBP" => Some(Currency::GBP),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (cents).
/// This avoids floating-point precision issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (cents).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use minimart_commerce::money::{Currency, Money};
    /// let price = Money::from_decimal(2.50, Currency::EUR);
    /// assert_eq!(price.amount_cents, 250);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let amount_cents = (amount * 100.0).round() as i64;
        Self::new(amount_cents, currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount_cents > 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / 100.0
    }

    /// Format as a display string with a period separator (e.g., "€2.50").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format the bare amount with a period separator (e.g., "2.50").
    pub fn display_amount(&self) -> String {
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let cents = self.amount_cents.abs();
        format!("{}{}.{:02}", sign, cents / 100, cents % 100)
    }

    /// Format for a locale, using its decimal separator glyph
    /// (e.g., "€2,50" for `nl`, "€2.50" for `en`).
    pub fn display_in(&self, locale: Locale) -> String {
        let sep = locale.decimal_separator();
        if sep == '.' {
            self.display()
        } else {
            self.display().replace('.', &sep.to_string())
        }
    }

    /// Add another Money value.
    ///
    /// # Panics
    /// Panics if currencies don't match. Use `try_add` for fallible addition.
    pub fn add(&self, other: &Money) -> Money {
        self.try_add(other).expect("Currency mismatch in addition")
    }

    /// Try to add another Money value, returning None if currencies don't match.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        Some(Money::new(
            self.amount_cents + other.amount_cents,
            self.currency,
        ))
    }

    /// Subtract another Money value.
    ///
    /// # Panics
    /// Panics if currencies don't match.
    pub fn subtract(&self, other: &Money) -> Money {
        self.try_subtract(other)
            .expect("Currency mismatch in subtraction")
    }

    /// Try to subtract another Money value.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        Some(Money::new(
            self.amount_cents - other.amount_cents,
            self.currency,
        ))
    }

    /// Multiply by a scalar.
    pub fn multiply(&self, factor: i64) -> Money {
        Money::new(self.amount_cents * factor, self.currency)
    }

    /// Sum an iterator of Money values.
    pub fn sum<'a>(iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Money {
        iter.fold(Money::zero(currency), |acc, m| acc + *m)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::add(&self, &other)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::subtract(&self, &other)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.multiply(factor)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_cents() {
        let m = Money::new(250, Currency::EUR);
        assert_eq!(m.amount_cents, 250);
        assert_eq!(m.currency, Currency::EUR);
    }

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(2.50, Currency::EUR);
        assert_eq!(m.amount_cents, 250);

        let m = Money::from_decimal(0.1, Currency::EUR);
        assert_eq!(m.amount_cents, 10);
    }

    #[test]
    fn test_money_display() {
        let m = Money::new(150, Currency::EUR);
        assert_eq!(m.display(), "\u{20ac}1.50");

        let m = Money::new(5, Currency::EUR);
        assert_eq!(m.display(), "\u{20ac}0.05");

        let m = Money::new(-299, Currency::EUR);
        assert_eq!(m.display(), "\u{20ac}-2.99");
    }

    #[test]
    fn test_money_display_in_locale() {
        let m = Money::new(150, Currency::EUR);
        assert_eq!(m.display_in(Locale::En), "\u{20ac}1.50");
        assert_eq!(m.display_in(Locale::Nl), "\u{20ac}1,50");
        assert_eq!(m.display_in(Locale::Ar), "\u{20ac}1,50");
    }

    #[test]
    fn test_money_addition() {
        let a = Money::new(100, Currency::EUR);
        let b = Money::new(50, Currency::EUR);
        assert_eq!((a + b).amount_cents, 150);
    }

    #[test]
    fn test_money_multiply() {
        let m = Money::new(250, Currency::EUR);
        assert_eq!(m.multiply(2).amount_cents, 500);
    }

    #[test]
    fn test_money_sum() {
        let values = [Money::new(100, Currency::EUR), Money::new(250, Currency::EUR)];
        let total = Money::sum(values.iter(), Currency::EUR);
        assert_eq!(total.amount_cents, 350);
    }

    #[test]
    #[should_panic(expected = "Currency mismatch")]
    fn test_money_currency_mismatch() {
        let eur = Money::new(100, Currency::EUR);
        let usd = Money::new(100, Currency::USD);
        let _ = eur + usd;
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("eur"), Some(Currency::EUR));
        assert_eq!(Currency::from_code("GBP"), Some(Currency::GBP));
        assert_eq!(Currency::from_code("XYZ"), None);
    }
}
