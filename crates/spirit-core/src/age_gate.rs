//! # Age Gate
//!
//! The 21+ check shown before the storefront is usable.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "Date of Birth" input                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  parse_birth_date("2003-10-18")                                        │
//! │       │                                                                 │
//! │       ├── blank?        → None ──► MissingBirthDate                     │
//! │       ├── not a date?   → ValidationError::InvalidFormat               │
//! │       ▼                                                                 │
//! │  check_age(Some(birth), today, 21)                                      │
//! │       │                                                                 │
//! │       ├── age < 21      → Underage                                      │
//! │       └── age ≥ 21      → Ok(age)  ──► gate closes                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing is remembered between checks: the gate is evaluated fresh every
//! time it is shown. `today` is always supplied by the caller.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

use crate::error::ValidationError;
use crate::validation::ValidationResult;

/// Legal drinking age enforced by the storefront.
pub const DEFAULT_MINIMUM_AGE: u32 = 21;

/// Why the gate stayed shut. The messages are shown to the visitor verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgeGateError {
    #[error("Please enter your birth date")]
    MissingBirthDate,

    #[error("You must be {minimum} or older to access this site")]
    Underage { age: i32, minimum: u32 },
}

/// Whole years between `birth` and `today`.
///
/// Calendar-year difference, minus one if this year's birthday (month, day)
/// has not been reached yet. A 29 February birthday therefore counts as
/// reached on 1 March in non-leap years. Negative for future birth dates.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// Runs the gate.
///
/// ## Returns
/// The visitor's age when they may enter.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use spirit_core::age_gate::{check_age, AgeGateError};
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
/// let birth = NaiveDate::from_ymd_opt(2005, 10, 18).unwrap();
/// assert_eq!(check_age(Some(birth), today, 21), Ok(21));
/// assert_eq!(check_age(None, today, 21), Err(AgeGateError::MissingBirthDate));
/// ```
pub fn check_age(
    birth: Option<NaiveDate>,
    today: NaiveDate,
    minimum_age: u32,
) -> Result<u32, AgeGateError> {
    let birth = birth.ok_or(AgeGateError::MissingBirthDate)?;
    let age = age_on(birth, today);

    match u32::try_from(age) {
        Ok(years) if years >= minimum_age => Ok(years),
        _ => Err(AgeGateError::Underage {
            age,
            minimum: minimum_age,
        }),
    }
}

/// Parses the date input's `YYYY-MM-DD` value. Blank means "not entered".
pub fn parse_birth_date(input: &str) -> ValidationResult<Option<NaiveDate>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| ValidationError::InvalidFormat {
            field: "birthDate".to_string(),
            reason: "expected YYYY-MM-DD".to_string(),
        })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_exactly_twenty_one_passes() {
        let today = d(2026, 10, 18);
        assert_eq!(check_age(Some(d(2005, 10, 18)), today, 21), Ok(21));
    }

    #[test]
    fn test_one_day_short_is_blocked() {
        let today = d(2026, 10, 18);
        let err = check_age(Some(d(2005, 10, 19)), today, 21).unwrap_err();

        assert_eq!(err, AgeGateError::Underage { age: 20, minimum: 21 });
        assert_eq!(err.to_string(), "You must be 21 or older to access this site");
    }

    #[test]
    fn test_missing_birth_date_message() {
        let err = check_age(None, d(2026, 1, 1), 21).unwrap_err();
        assert_eq!(err.to_string(), "Please enter your birth date");
    }

    #[test]
    fn test_birthday_later_in_year() {
        // Birthday in December, checked in October
        assert_eq!(age_on(d(2000, 12, 1), d(2026, 10, 18)), 25);
        // Birthday in January, checked in October
        assert_eq!(age_on(d(2000, 1, 31), d(2026, 10, 18)), 26);
    }

    #[test]
    fn test_leap_day_birthday() {
        let birth = d(2004, 2, 29);
        assert_eq!(age_on(birth, d(2025, 2, 28)), 20);
        assert_eq!(age_on(birth, d(2025, 3, 1)), 21);
    }

    #[test]
    fn test_future_birth_date_is_underage() {
        let err = check_age(Some(d(2030, 1, 1)), d(2026, 10, 18), 21).unwrap_err();
        assert!(matches!(err, AgeGateError::Underage { age, .. } if age < 0));
    }

    #[test]
    fn test_parse_birth_date() {
        assert_eq!(parse_birth_date("").unwrap(), None);
        assert_eq!(parse_birth_date("  ").unwrap(), None);
        assert_eq!(parse_birth_date("1999-04-30").unwrap(), Some(d(1999, 4, 30)));
        assert!(parse_birth_date("30/04/1999").is_err());
        assert!(parse_birth_date("1999-02-30").is_err());
    }
}
