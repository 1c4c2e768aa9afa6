// src/format.rs
//! Display text for prices and times, following ru-RU conventions.
use chrono::{DateTime, FixedOffset, Utc};

use crate::money::Amount;

/// Separator ru-RU puts between digit groups and before the currency sign.
pub const GROUP_SEPARATOR: char = '\u{a0}';

/// Whole amount, digits grouped by three, currency sign last: `2 450 000 ₽`.
pub fn format_price(amount: Amount) -> String {
    let digits = amount.value().unsigned_abs().to_string();
    let mut text = String::with_capacity(digits.len() * 2 + 4);
    if amount.value() < 0 {
        text.push('-');
    }
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            text.push(GROUP_SEPARATOR);
        }
        text.push(digit);
    }
    text.push(GROUP_SEPARATOR);
    text.push_str(amount.currency().symbol());
    text
}

/// `DD.MM.YYYY, HH:MM` on a 24-hour clock in the given offset.
pub fn format_date_time(at: DateTime<Utc>, offset: FixedOffset) -> String {
    at.with_timezone(&offset).format("%d.%m.%Y, %H:%M").to_string()
}

/// Time left until an auction closes, broken down into its largest unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRemaining {
    Days { days: i64, hours: i64, minutes: i64 },
    Hours { hours: i64, minutes: i64 },
    Minutes { minutes: i64 },
    Ended,
}

impl TimeRemaining {
    /// Recomputed on every call; nothing keeps it fresh between renders.
    pub fn between(now: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        let diff = end_time - now;
        if diff <= chrono::Duration::zero() {
            return TimeRemaining::Ended;
        }
        let total_minutes = diff.num_minutes();
        let days = total_minutes / (24 * 60);
        let hours = total_minutes % (24 * 60) / 60;
        let minutes = total_minutes % 60;

        if days > 0 {
            TimeRemaining::Days { days, hours, minutes }
        } else if hours > 0 {
            TimeRemaining::Hours { hours, minutes }
        } else {
            TimeRemaining::Minutes { minutes }
        }
    }

    /// Detail page form: `2 дн. 3 ч. 15 мин.`
    pub fn long(&self) -> String {
        match self {
            TimeRemaining::Days { days, hours, minutes } => {
                format!("{} дн. {} ч. {} мин.", days, hours, minutes)
            }
            TimeRemaining::Hours { hours, minutes } => format!("{} ч. {} мин.", hours, minutes),
            TimeRemaining::Minutes { minutes } => format!("{} мин.", minutes),
            TimeRemaining::Ended => "Торги завершены".to_string(),
        }
    }

    /// Card form: `2д 3ч`
    pub fn short(&self) -> String {
        match self {
            TimeRemaining::Days { days, hours, .. } => format!("{}д {}ч", days, hours),
            TimeRemaining::Hours { hours, .. } => format!("{}ч", hours),
            TimeRemaining::Minutes { .. } => "Завершается".to_string(),
            TimeRemaining::Ended => "Завершены".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_short_amounts_without_separator() {
        assert_eq!(format_price(Amount::rub(0)), "0\u{a0}₽");
        assert_eq!(format_price(Amount::rub(999)), "999\u{a0}₽");
        assert_eq!(format_price(Amount::rub(1000)), "1\u{a0}000\u{a0}₽");
    }

    #[test]
    fn negative_amounts_keep_sign_outside_groups() {
        assert_eq!(format_price(Amount::rub(-123456)), "-123\u{a0}456\u{a0}₽");
    }
}
