use crate::domain::lifespan::{LifeSpan, MAX_EXPECTANCY_YEARS, MIN_EXPECTANCY_YEARS};
use crate::error::{Result, ValidationError};
use chrono::{DateTime, NaiveDate, Utc};

/// Date format accepted for the birth date field
pub const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Check raw form input and build a [`LifeSpan`] from it.
///
/// Checks run in a fixed order and stop at the first failure:
/// missing birth date, missing expectancy, malformed or future birth date,
/// expectancy outside `1..=500`, and finally a life that already ran out.
pub fn validate(
    birth_date_input: &str,
    expectancy_input: &str,
    now: DateTime<Utc>,
) -> Result<LifeSpan> {
    let birth_date_input = birth_date_input.trim();
    let expectancy_input = expectancy_input.trim();

    if birth_date_input.is_empty() {
        return Err(ValidationError::MissingBirthDate);
    }
    if expectancy_input.is_empty() {
        return Err(ValidationError::MissingExpectancy);
    }

    let birth_date = NaiveDate::parse_from_str(birth_date_input, BIRTH_DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidBirthDate)?;
    if birth_date > now.date_naive() {
        return Err(ValidationError::FutureBirthDate);
    }

    let expectancy_years = expectancy_input
        .parse::<u32>()
        .ok()
        .filter(|years| (MIN_EXPECTANCY_YEARS..=MAX_EXPECTANCY_YEARS).contains(years))
        .ok_or(ValidationError::ExpectancyOutOfRange)?;

    let span = LifeSpan::new(birth_date, expectancy_years);
    if span.death_instant() < now {
        return Err(ValidationError::LifeAlreadyExceeded);
    }

    Ok(span)
}
