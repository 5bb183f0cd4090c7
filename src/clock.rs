use time::{Date, OffsetDateTime};
use tracing::warn;

/// Which midnight starts a new calendar day.
///
/// The web client derived day keys from `toISOString()`, i.e. UTC, so that is
/// the default. `Local` matches the user-perceived "today" around midnight in
/// non-UTC timezones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayBoundary {
    Utc,
    Local,
}

pub trait Clock: Send + Sync {
    fn now(&self) -> OffsetDateTime;
    fn today(&self) -> Date;
}

pub struct SystemClock {
    boundary: DayBoundary,
}

impl SystemClock {
    pub fn new(boundary: DayBoundary) -> Self {
        Self { boundary }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }

    fn today(&self) -> Date {
        match self.boundary {
            DayBoundary::Utc => OffsetDateTime::now_utc().date(),
            DayBoundary::Local => OffsetDateTime::now_local()
                .unwrap_or_else(|e| {
                    warn!(error = %e, "local offset unavailable, falling back to utc");
                    OffsetDateTime::now_utc()
                })
                .date(),
        }
    }
}

/// `YYYY-MM-DD`, the format all daily storage keys are derived from.
pub fn day_key(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn day_key_is_zero_padded() {
        assert_eq!(day_key(date!(2024 - 01 - 01)), "2024-01-01");
        assert_eq!(day_key(date!(2024 - 12 - 31)), "2024-12-31");
        assert_eq!(day_key(date!(987 - 03 - 09)), "0987-03-09");
    }
}
