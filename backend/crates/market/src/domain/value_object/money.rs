//! Money Value Object
//!
//! An exact decimal amount in one [`Currency`].
//!
//! ## Invariants
//! - The amount is an exact `Decimal`; binary floats are only accepted
//!   through their string rendering
//! - Input that `Decimal` cannot hold without rounding (more than 28
//!   fractional digits, too many significant digits) is rejected
//! - Arithmetic is only defined between identical currencies
//! - Equality is numeric on the amount: `1.00 USD == 1 USD`

use kernel::DomainValueError;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use super::currency::Currency;

const INVALID_AMOUNT: &str = "amount must be a number convertible to Decimal";

/// Monetary amount
///
/// ## Examples
/// ```rust
/// use market::{Currency, Money};
///
/// let ten = Money::parse("10.00", Currency::Usd).unwrap();
/// let five = Money::parse("5.50", Currency::Usd).unwrap();
///
/// let sum = ten.try_add(&five).unwrap();
/// assert_eq!(sum.to_string(), "15.50 USD");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    #[serde(
        serialize_with = "rust_decimal::serde::str::serialize",
        deserialize_with = "deserialize_amount"
    )]
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Create from an exact decimal
    #[inline]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    #[inline]
    pub const fn zero(currency: Currency) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    /// Create from a decimal string (`"10.50"`, `"-3"`, `"1e3"`)
    pub fn parse(amount: &str, currency: Currency) -> Result<Self, DomainValueError> {
        let amount = Self::parse_amount(amount)?;
        Ok(Self::new(amount, currency))
    }

    /// Create from a float via its shortest string rendering
    ///
    /// `0.1` becomes exactly `0.1`, not the nearest binary fraction.
    /// Non-finite values are rejected.
    pub fn from_f64(amount: f64, currency: Currency) -> Result<Self, DomainValueError> {
        if !amount.is_finite() {
            return Err(DomainValueError::new(INVALID_AMOUNT));
        }
        Self::parse(&amount.to_string(), currency)
    }

    fn parse_amount(raw: &str) -> Result<Decimal, DomainValueError> {
        let raw = raw.trim();
        let parsed = match raw.split_once(['e', 'E']) {
            Some((mantissa, exponent)) => scientific_exact(mantissa, exponent),
            None => Decimal::from_str_exact(raw).ok(),
        };
        parsed.ok_or_else(|| DomainValueError::new(INVALID_AMOUNT))
    }

    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    #[inline]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Add two amounts of the same currency
    pub fn try_add(&self, other: &Money) -> Result<Money, DomainValueError> {
        self.ensure_same_currency(other)?;
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or_else(|| DomainValueError::new("amount overflow"))?;
        Ok(Money::new(amount, self.currency))
    }

    /// Subtract an amount of the same currency
    pub fn try_sub(&self, other: &Money) -> Result<Money, DomainValueError> {
        self.ensure_same_currency(other)?;
        let amount = self
            .amount
            .checked_sub(other.amount)
            .ok_or_else(|| DomainValueError::new("amount overflow"))?;
        Ok(Money::new(amount, self.currency))
    }

    fn ensure_same_currency(&self, other: &Money) -> Result<(), DomainValueError> {
        if self.currency != other.currency {
            return Err(DomainValueError::new(format!(
                "Currency mismatch: {} vs {}",
                self.currency, other.currency
            )));
        }
        Ok(())
    }
}

/// `mantissa * 10^exponent`, or `None` when the result would need rounding
fn scientific_exact(mantissa: &str, exponent: &str) -> Option<Decimal> {
    let mut value = Decimal::from_str_exact(mantissa).ok()?;
    let exponent: i64 = exponent.parse().ok()?;
    let scale = i64::from(value.scale()).checked_sub(exponent)?;

    if scale >= 0 {
        value.set_scale(u32::try_from(scale).ok()?).ok()?;
        return Some(value);
    }

    value.set_scale(0).ok()?;
    let power = 10i128.checked_pow(u32::try_from(-scale).ok()?)?;
    let factor = Decimal::try_from_i128_with_scale(power, 0).ok()?;
    value.checked_mul(factor)
}

fn deserialize_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Money::parse_amount(&raw).map_err(serde::de::Error::custom)
}

impl Add for Money {
    type Output = Result<Money, DomainValueError>;

    fn add(self, rhs: Self) -> Self::Output {
        self.try_add(&rhs)
    }
}

impl Sub for Money {
    type Output = Result<Money, DomainValueError>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.try_sub(&rhs)
    }
}

/// Parses the `Display` form, e.g. `"15.50 USD"`
impl FromStr for Money {
    type Err = DomainValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (amount, currency) = s
            .trim()
            .rsplit_once(' ')
            .ok_or_else(|| DomainValueError::new(INVALID_AMOUNT))?;
        let amount = Self::parse_amount(amount)?;
        let currency = currency.parse::<Currency>()?;
        Ok(Self::new(amount, currency))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_addition_with_matching_currency() {
        let usd_ten = Money::new(dec!(10.00), Currency::Usd);
        let usd_five = Money::new(dec!(5.50), Currency::Usd);

        let result = (usd_ten + usd_five).unwrap();

        assert_eq!(result.amount(), dec!(15.50));
        assert_eq!(result.currency(), Currency::Usd);
        // operands untouched
        assert_eq!(usd_ten.amount(), dec!(10.00));
    }

    #[test]
    fn test_money_subtraction_with_matching_currency() {
        let a = Money::new(dec!(10.00), Currency::Eur);
        let b = Money::new(dec!(12.25), Currency::Eur);

        assert_eq!((a - b).unwrap(), Money::new(dec!(-2.25), Currency::Eur));
    }

    #[test]
    fn test_money_addition_with_mismatched_currency_fails() {
        let usd_value = Money::new(dec!(1.00), Currency::Usd);
        let eur_value = Money::new(dec!(1.00), Currency::Eur);

        let err = (usd_value + eur_value).unwrap_err();
        assert_eq!(err.message(), "Currency mismatch: USD vs EUR");

        let err = usd_value.try_sub(&eur_value).unwrap_err();
        assert!(err.message().contains("Currency mismatch"));
    }

    #[test]
    fn test_money_equality_relies_on_amount_and_currency() {
        let usd_one = Money::new(dec!(1.00), Currency::Usd);
        let usd_one_again = Money::new(Decimal::from(1), Currency::Usd);
        let eur_one = Money::new(dec!(1.00), Currency::Eur);
        let usd_two = Money::new(dec!(2.00), Currency::Usd);

        assert_eq!(usd_one, usd_one_again);
        assert_ne!(usd_one, eur_one);
        assert_ne!(usd_one, usd_two);
    }

    #[test]
    fn test_money_parse() {
        assert_eq!(
            Money::parse("10.50", Currency::Gbp).unwrap().amount(),
            dec!(10.50)
        );
        assert_eq!(
            Money::parse(" 1e3 ", Currency::Gbp).unwrap().amount(),
            dec!(1000)
        );

        let err = Money::parse("ten", Currency::Gbp).unwrap_err();
        assert_eq!(err.message(), "amount must be a number convertible to Decimal");
        assert!(Money::parse("", Currency::Gbp).is_err());
    }

    #[test]
    fn test_money_from_f64_goes_through_string() {
        let money = Money::from_f64(0.1, Currency::Usd).unwrap();
        assert_eq!(money.amount(), dec!(0.1));

        assert!(Money::from_f64(f64::NAN, Currency::Usd).is_err());
        assert!(Money::from_f64(f64::INFINITY, Currency::Usd).is_err());
    }

    #[test]
    fn test_money_rejects_amounts_that_would_round() {
        let tiny = format!("0.{}1", "0".repeat(30));
        let err = Money::parse(&tiny, Currency::Usd).unwrap_err();
        assert_eq!(err.message(), INVALID_AMOUNT);

        assert!(Money::parse("1e-30", Currency::Usd).is_err());
        assert!(Money::parse("1.5E-28", Currency::Usd).is_err());
        assert!(Money::from_f64(1e-30, Currency::Usd).is_err());
        assert!(format!("{tiny} USD").parse::<Money>().is_err());

        let json = format!(r#"{{"amount":"{tiny}","currency":"USD"}}"#);
        assert!(serde_json::from_str::<Money>(&json).is_err());
    }

    #[test]
    fn test_money_scientific_notation_is_exact() {
        assert_eq!(
            Money::parse("1.5e3", Currency::Usd).unwrap().amount(),
            dec!(1500)
        );
        assert_eq!(
            Money::parse("25E-2", Currency::Usd).unwrap().amount(),
            dec!(0.25)
        );
        assert_eq!(
            Money::parse("1e-28", Currency::Usd).unwrap().amount(),
            Decimal::new(1, 28)
        );
        assert!(Money::parse("1e40", Currency::Usd).is_err());
        assert!(Money::parse("e5", Currency::Usd).is_err());
    }

    #[test]
    fn test_money_overflow_is_an_error() {
        let max = Money::new(Decimal::MAX, Currency::Ils);
        let one = Money::new(dec!(1), Currency::Ils);

        let err = max.try_add(&one).unwrap_err();
        assert_eq!(err.message(), "amount overflow");
    }

    #[test]
    fn test_money_display_and_from_str() {
        let money = Money::new(dec!(15.50), Currency::Usd);
        assert_eq!(money.to_string(), "15.50 USD");
        assert_eq!("15.50 USD".parse::<Money>().unwrap(), money);

        assert!("15.50".parse::<Money>().is_err());
        assert!("15.50 JPY".parse::<Money>().is_err());
    }

    #[test]
    fn test_money_serde_keeps_exact_amount() {
        let money = Money::new(dec!(0.10), Currency::Eur);
        let json = serde_json::to_string(&money).unwrap();
        assert_eq!(json, r#"{"amount":"0.10","currency":"EUR"}"#);

        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, money);
        assert!(serde_json::from_str::<Money>(r#"{"amount":"x","currency":"EUR"}"#).is_err());
    }
}
