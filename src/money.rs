// src/money.rs
use std::fmt;
use std::ops::Sub;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Currency {
    RUB, // Russian rouble
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::RUB => "₽",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::RUB => write!(f, "RUB"),
        }
    }
}

/// Whole currency units. The marketplace trades without minor units.
pub type AmountValue = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount {
    currency: Currency,
    value: AmountValue,
}

impl Amount {
    pub fn new(currency: Currency, value: AmountValue) -> Self {
        Amount { currency, value }
    }

    pub fn rub(value: AmountValue) -> Self {
        Amount::new(Currency::RUB, value)
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn value(&self) -> AmountValue {
        self.value
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Cannot subtract amounts with different currencies")]
    CurrencyMismatch,
}

impl Sub for Amount {
    type Output = Result<Amount, MoneyError>;

    fn sub(self, other: Self) -> Self::Output {
        if self.currency == other.currency {
            Ok(Amount {
                currency: self.currency,
                value: self.value - other.value,
            })
        } else {
            Err(MoneyError::CurrencyMismatch)
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.currency, self.value)
    }
}
