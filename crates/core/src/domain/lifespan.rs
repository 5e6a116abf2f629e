use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveTime, Utc};

/// Smallest accepted life expectancy, in years
pub const MIN_EXPECTANCY_YEARS: u32 = 1;

/// Largest accepted life expectancy, in years
pub const MAX_EXPECTANCY_YEARS: u32 = 500;

/// A validated birth date and expected lifespan.
///
/// Only the validator builds one, so `birth_date <= today` and the life has
/// not yet run out at the moment of creation. Immutable once accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeSpan {
    birth_date: NaiveDate,
    expectancy_years: u32,
}

impl LifeSpan {
    pub(crate) fn new(birth_date: NaiveDate, expectancy_years: u32) -> Self {
        Self {
            birth_date,
            expectancy_years,
        }
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn expectancy_years(&self) -> u32 {
        self.expectancy_years
    }

    /// Birth date shifted forward by the expectancy in calendar years.
    /// A 29 February birth date rolls over to 1 March in non-leap years.
    pub fn death_date(&self) -> NaiveDate {
        anniversary(self.birth_date, self.expectancy_years).unwrap_or(NaiveDate::MAX)
    }

    pub fn birth_instant(&self) -> DateTime<Utc> {
        midnight_utc(self.birth_date)
    }

    pub fn death_instant(&self) -> DateTime<Utc> {
        midnight_utc(self.death_date())
    }
}

impl std::fmt::Display for LifeSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} + {}y", self.birth_date, self.expectancy_years)
    }
}

/// Calendar-year addition. 29 February lands on 28 February in non-leap years.
pub fn add_years(date: NaiveDate, years: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(years.checked_mul(12)?))
}

/// Same month and day `years` later. A 29 February that does not exist in the
/// target year becomes 1 March.
pub fn anniversary(date: NaiveDate, years: u32) -> Option<NaiveDate> {
    let year = date.year().checked_add(i32::try_from(years).ok()?)?;
    date.with_year(year).or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

pub fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_death_date_adds_calendar_years() {
        let span = LifeSpan::new(date(2000, 1, 1), 100);
        assert_eq!(span.death_date(), date(2100, 1, 1));
    }

    #[test]
    fn test_leap_day_birthday_clamps_to_feb_28() {
        assert_eq!(add_years(date(2000, 2, 29), 1), Some(date(2001, 2, 28)));
        assert_eq!(add_years(date(2000, 2, 29), 4), Some(date(2004, 2, 29)));
    }

    #[test]
    fn test_leap_day_death_date_rolls_to_march_1() {
        assert_eq!(anniversary(date(2000, 2, 29), 25), Some(date(2025, 3, 1)));
        assert_eq!(anniversary(date(2000, 2, 29), 24), Some(date(2024, 2, 29)));
        assert_eq!(anniversary(date(1999, 3, 1), 1), Some(date(2000, 3, 1)));

        let span = LifeSpan::new(date(2000, 2, 29), 25);
        assert_eq!(span.death_date(), date(2025, 3, 1));
        assert_eq!(span.death_instant().to_rfc3339(), "2025-03-01T00:00:00+00:00");
    }

    #[test]
    fn test_instants_are_midnight_utc() {
        let span = LifeSpan::new(date(1990, 5, 17), 80);
        assert_eq!(span.birth_instant().to_rfc3339(), "1990-05-17T00:00:00+00:00");
        assert_eq!(span.death_instant().to_rfc3339(), "2070-05-17T00:00:00+00:00");
    }
}
