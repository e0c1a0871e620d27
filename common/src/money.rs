//! [`Money`]-related definitions.

use std::{fmt, str::FromStr};

use rust_decimal::{prelude::ToPrimitive as _, Decimal};

use crate::define_kind;

/// Amount of money in some [`Currency`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Money {
    /// Amount of this [`Money`].
    pub amount: Decimal,

    /// [`Currency`] of this amount.
    pub currency: Currency,
}

impl Money {
    /// Creates a new [`Money`] amount in [`Currency::Pkr`], the working
    /// currency of the system.
    #[must_use]
    pub fn pkr(amount: Decimal) -> Self {
        Self {
            amount,
            currency: Currency::Pkr,
        }
    }

    /// A zero [`Currency::Pkr`] amount.
    pub const ZERO_PKR: Self = Self {
        amount: Decimal::ZERO,
        currency: Currency::Pkr,
    };

    /// Indicates whether this [`Money`] amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { amount, currency } = self;
        if amount.is_integer() {
            write!(f, "{}{currency}", amount.to_i128().expect("integer"))
        } else {
            write!(f, "{amount}{currency}")
        }
    }
}

impl FromStr for Money {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() < 4 {
            return Err("too short");
        }

        let (amount, currency) = s.split_at(s.len() - 3);
        let amount = Decimal::from_str(amount).map_err(|_| "invalid amount")?;
        let currency =
            Currency::from_str(currency).map_err(|_| "invalid currency")?;

        Ok(Self { amount, currency })
    }
}

define_kind! {
    #[doc = "Currency of a [`Money`] amount."]
    enum Currency {
        #[doc = "Pakistani Rupee."]
        Pkr = 1,
    }
}

#[cfg(feature = "juniper")]
mod juniper {
    //! Module providing integration with [`juniper`] crate.

    use std::str::FromStr as _;

    use juniper::{graphql_scalar, InputValue, ScalarValue, Value};

    /// Money in `{major}.{minor}{currency}` format, where:
    /// - `major` is an integer;
    /// - `minor` is an optional integer;
    /// - `currency` is a three-letter currency code.
    #[graphql_scalar(with = Self, parse_token(String))]
    type Money = super::Money;

    impl Money {
        fn to_output<S: ScalarValue>(m: &Money) -> Value<S> {
            Value::scalar(m.to_string())
        }

        fn from_input<S: ScalarValue>(
            input: &InputValue<S>,
        ) -> Result<Self, String> {
            input
                .as_string_value()
                .ok_or_else(|| {
                    format!(
                        "Cannot parse `Money` input scalar from \
                         non-string value: {input}",
                    )
                })
                .and_then(|s| {
                    Self::from_str(s).map_err(|e| {
                        format!("Cannot parse `Money` input scalar: {e}")
                    })
                })
        }
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use super::{Currency, Money};

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn from_str() {
        assert_eq!(
            Money::from_str("15000PKR").unwrap(),
            Money {
                amount: decimal("15000"),
                currency: Currency::Pkr,
            },
        );

        assert_eq!(
            Money::from_str("123.45PKR").unwrap(),
            Money {
                amount: decimal("123.45"),
                currency: Currency::Pkr,
            },
        );

        assert!(Money::from_str("15000").is_err());
        assert!(Money::from_str("15000Pk").is_err());
        assert!(Money::from_str("15000Rupees").is_err());
        assert!(Money::from_str("15000USD").is_err());
    }

    #[test]
    fn to_string_elides_fraction_of_integers() {
        assert_eq!(Money::pkr(decimal("15000")).to_string(), "15000PKR");
        assert_eq!(Money::pkr(decimal("15000.00")).to_string(), "15000PKR");
        assert_eq!(Money::pkr(decimal("15000.0")).to_string(), "15000PKR");
        assert_eq!(Money::pkr(decimal("15000.50")).to_string(), "15000.50PKR");
    }

    #[test]
    fn detects_negative_amounts() {
        assert!(Money::pkr(decimal("-1")).is_negative());
        assert!(!Money::pkr(decimal("0")).is_negative());
        assert!(!Money::pkr(decimal("-0")).is_negative());
        assert!(!Money::pkr(decimal("15000")).is_negative());
    }
}
