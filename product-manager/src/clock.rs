use chrono::{Datelike, NaiveDate, Utc};
use chrono_tz::Tz;
use time::{Date, Month, OffsetDateTime};

/// Source of "today" for the intake-date check.
pub trait Clock {
    fn today(&self) -> Date;
}

/// Today's date in a fixed IANA time zone.
#[derive(Debug, Clone, Copy)]
pub struct ZonedClock {
    tz: Tz,
}

impl ZonedClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }
}

impl Clock for ZonedClock {
    fn today(&self) -> Date {
        let local = Utc::now().with_timezone(&self.tz).date_naive();
        to_date(local).unwrap_or_else(|e| {
            tracing::warn!("{} in {} is not representable ({}), using UTC", local, self.tz, e);
            OffsetDateTime::now_utc().date()
        })
    }
}

fn to_date(date: NaiveDate) -> Result<Date, time::error::ComponentRange> {
    let month = Month::try_from(date.month() as u8)?;
    Date::from_calendar_date(date.year(), month, date.day() as u8)
}

/// Always returns the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}
