use std::fmt::{self, Display, Formatter};

use chrono::Datelike;

use crate::error::{Error, Result};

const NAMES: [&str; 7] = [
    "Montag",
    "Dienstag",
    "Mittwoch",
    "Donnerstag",
    "Freitag",
    "Samstag",
    "Sonntag",
];

/// Day of the week, Monday = 1 through Sunday = 7.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Weekday(u8);

impl Weekday {
    pub fn new(ordinal: i64) -> Result<Self> {
        weekday_name(ordinal)?;
        // 1..=7 after the check above
        Ok(Self(ordinal as u8))
    }

    pub fn from_date(date: impl Datelike) -> Self {
        // number_from_monday is always 1..=7
        Self(date.weekday().number_from_monday() as u8)
    }

    pub fn today() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }

    pub const fn ordinal(self) -> u8 {
        self.0
    }

    pub const fn name(self) -> &'static str {
        NAMES[self.0 as usize - 1]
    }

    /// The mensa only serves Monday to Friday.
    pub const fn is_serving_day(self) -> bool {
        self.0 < 6
    }
}

impl Display for Weekday {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// German name of the weekday with the given ordinal (1 = Montag).
pub fn weekday_name(ordinal: i64) -> Result<&'static str> {
    usize::try_from(ordinal)
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| NAMES.get(i))
        .copied()
        .ok_or_else(|| {
            Error::invalid_argument(format!("weekday must be between 1 and 7 but was {ordinal}"))
        })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_weekday_names() {
        let names: Vec<_> = (1..=7).map(|n| weekday_name(n).unwrap()).collect();
        assert_eq!(names, NAMES);
        assert_eq!(weekday_name(3).unwrap(), "Mittwoch");
    }

    #[test]
    fn test_out_of_range() {
        for n in [0, 8, -1, 256] {
            assert!(
                matches!(weekday_name(n), Err(Error::InvalidArgument(_))),
                "{n} should be rejected"
            );
        }
    }

    #[test]
    fn test_from_date() {
        // 2024-04-10 was a Wednesday
        let date = NaiveDate::from_ymd_opt(2024, 4, 10).unwrap();
        let day = Weekday::from_date(date);
        assert_eq!(day.ordinal(), 3);
        assert!(day.is_serving_day());
        let sunday = Weekday::from_date(NaiveDate::from_ymd_opt(2024, 4, 14).unwrap());
        assert_eq!(sunday.to_string(), "Sonntag");
        assert!(!sunday.is_serving_day());
    }
}
