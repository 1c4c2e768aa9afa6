use chrono::{Duration, FixedOffset, TimeZone, Utc};
use etp_catalog::format::{format_date_time, format_price, TimeRemaining};
#[path="utils/mod.rs"] mod utils;
use utils::*;

#[test]
fn test_price_is_grouped_with_currency_sign() {
    assert_eq!(format_price(rub(2_400_000)), "2\u{a0}400\u{a0}000\u{a0}₽");
    assert_eq!(format_price(rub(890_000)), "890\u{a0}000\u{a0}₽");
    assert_eq!(format_price(rub(12_000_000)), "12\u{a0}000\u{a0}000\u{a0}₽");
}

#[test]
fn test_date_time_uses_offset_and_24_hour_clock() {
    let at = Utc.with_ymd_and_hms(2026, 10, 17, 19, 5, 42).unwrap();

    assert_eq!(format_date_time(at, moscow()), "17.10.2026, 22:05");
    assert_eq!(format_date_time(at, FixedOffset::east_opt(0).unwrap()), "17.10.2026, 19:05");
}

#[test]
fn test_date_time_rolls_over_to_next_day() {
    let at = Utc.with_ymd_and_hms(2026, 12, 31, 22, 30, 0).unwrap();

    assert_eq!(format_date_time(at, moscow()), "01.01.2027, 01:30");
}

#[test]
fn test_more_than_a_day_left() {
    let now = sample_now();
    let remaining = TimeRemaining::between(now, now + Duration::hours(25));

    assert_eq!(remaining, TimeRemaining::Days { days: 1, hours: 1, minutes: 0 });
    assert_eq!(remaining.long(), "1 дн. 1 ч. 0 мин.");
    assert_eq!(remaining.short(), "1д 1ч");
}

#[test]
fn test_hours_left() {
    let now = sample_now();
    let remaining = TimeRemaining::between(now, now + Duration::minutes(5 * 60 + 15));

    assert_eq!(remaining, TimeRemaining::Hours { hours: 5, minutes: 15 });
    assert_eq!(remaining.long(), "5 ч. 15 мин.");
    assert_eq!(remaining.short(), "5ч");
}

#[test]
fn test_minutes_left() {
    let now = sample_now();
    let remaining = TimeRemaining::between(now, now + Duration::minutes(30));

    assert_eq!(remaining, TimeRemaining::Minutes { minutes: 30 });
    assert_eq!(remaining.long(), "30 мин.");
    assert_eq!(remaining.short(), "Завершается");
}

#[test]
fn test_partial_minutes_are_dropped() {
    let now = sample_now();

    let remaining = TimeRemaining::between(now, now + Duration::seconds(59));
    assert_eq!(remaining, TimeRemaining::Minutes { minutes: 0 });

    let remaining = TimeRemaining::between(now, now + Duration::days(2) - Duration::seconds(1));
    assert_eq!(remaining, TimeRemaining::Days { days: 1, hours: 23, minutes: 59 });
}

#[test]
fn test_past_end_time_is_ended() {
    let now = sample_now();

    let remaining = TimeRemaining::between(now, now - Duration::seconds(1));
    assert_eq!(remaining, TimeRemaining::Ended);
    assert_eq!(remaining.long(), "Торги завершены");
    assert_eq!(remaining.short(), "Завершены");

    assert_eq!(TimeRemaining::between(now, now), TimeRemaining::Ended);
}
