use chrono::{Datelike, Utc};
use chrono_tz::{Asia, Pacific, Tz};
use product_manager::{Clock, FixedClock, ZonedClock};
use time::{macros::date, Date};

fn chrono_today(tz: Tz) -> Date {
    let local = Utc::now().with_timezone(&tz).date_naive();
    Date::from_calendar_date(
        local.year(),
        time::Month::try_from(local.month() as u8).unwrap(),
        local.day() as u8,
    )
    .unwrap()
}

/// Reads the clock between two reference reads so a date change during the
/// test still matches one of them.
fn assert_today_in(tz: Tz) {
    let before = chrono_today(tz);
    let today = ZonedClock::new(tz).today();
    let after = chrono_today(tz);
    assert!(
        today == before || today == after,
        "{}: got {} want {} or {}",
        tz,
        today,
        before,
        after
    );
}

#[test]
fn far_east_zone_uses_its_own_date() {
    assert_today_in(Pacific::Kiritimati);
}

#[test]
fn far_west_zone_uses_its_own_date() {
    assert_today_in(Pacific::Pago_Pago);
}

#[test]
fn default_zone_uses_its_own_date() {
    assert_today_in(Asia::Ho_Chi_Minh);
}

#[test]
fn zones_25_hours_apart_never_share_a_date() {
    // UTC+14 and UTC-11: Kiritimati is always one or two days ahead.
    let west = ZonedClock::new(Pacific::Pago_Pago).today();
    let east = ZonedClock::new(Pacific::Kiritimati).today();
    let ahead = (east - west).whole_days();
    assert!(
        (1..=2).contains(&ahead),
        "Kiritimati {} should be ahead of Pago Pago {}",
        east,
        west
    );
}

#[test]
fn fixed_clock_returns_its_date() {
    assert_eq!(FixedClock(date!(2024 - 02 - 29)).today(), date!(2024 - 02 - 29));
}
