// src/domain/bids.rs
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

use super::core::{BidId, BidRejection};
use crate::money::{Amount, AmountValue, MoneyError};

/// One entry of an auction's bid history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BidRecord {
    pub id: BidId,
    pub participant: String,
    pub price: Amount,
    pub time: DateTime<Utc>,
}

/// How strictly a bid is held to the auction step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepPolicy {
    /// Any amount strictly below the current price is accepted.
    #[default]
    Unchecked,
    /// The decrease from the current price must also be a whole number of steps.
    MultipleOfStep,
}

impl fmt::Display for StepPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepPolicy::Unchecked => write!(f, "unchecked"),
            StepPolicy::MultipleOfStep => write!(f, "multiple-of-step"),
        }
    }
}

impl FromStr for StepPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "false" | "0" | "no" | "off" | "unchecked" => Ok(StepPolicy::Unchecked),
            "true" | "1" | "yes" | "on" | "multiple-of-step" => Ok(StepPolicy::MultipleOfStep),
            other => Err(format!("Unknown step policy: {}", other)),
        }
    }
}

/// Reads a user-typed number. Surrounding whitespace is ignored and exponent
/// notation is allowed. Anything unparsable, non-finite or zero is refused.
pub fn parse_bid_amount(raw: &str) -> Result<f64, BidRejection> {
    let invalid = || BidRejection::InvalidAmount(raw.to_string());
    let number = raw.trim().parse::<f64>().map_err(|_| invalid())?;
    if !number.is_finite() || number == 0.0 {
        return Err(invalid());
    }
    Ok(number)
}

/// Checks a raw bid against the current price of a reverse auction.
/// The accepted amount is rounded to whole units, half away from zero.
/// Nothing is recorded: an accepted bid is only reported back.
pub fn validate_bid(
    raw: &str,
    current_price: Amount,
    min_step: Amount,
    policy: StepPolicy,
) -> Result<Amount, BidRejection> {
    let number = parse_bid_amount(raw)?;

    if number >= current_price.value() as f64 {
        return Err(BidRejection::MustUndercutCurrentPrice {
            amount: raw.trim().to_string(),
            current_price: current_price.value(),
        });
    }
    let value = number.round() as AmountValue;

    if policy == StepPolicy::MultipleOfStep {
        let step = min_step.value();
        if step > 0 && (number.fract() != 0.0 || (current_price.value() - value) % step != 0) {
            return Err(BidRejection::OffStep {
                amount: value,
                current_price: current_price.value(),
                min_step: step,
            });
        }
    }

    Ok(Amount::new(current_price.currency(), value))
}

/// The next bid one step below the current price.
pub fn suggested_bid(current_price: Amount, min_step: Amount) -> Result<Amount, MoneyError> {
    current_price - min_step
}
