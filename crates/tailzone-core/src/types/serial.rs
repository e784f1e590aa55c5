//! SOA serial numbers in `YYYYMMDDnn` form.

use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

use crate::{Result, TailzoneError};

/// Highest two-digit revision a single day can carry.
pub const MAX_REVISION: u8 = 99;

/// A date-based zone serial.
///
/// Ordering follows the numeric value of the rendered serial: by date
/// first, then by same-day revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Serial {
    date: NaiveDate,
    revision: u8,
}

impl Serial {
    /// Create a serial for `date` with an explicit revision (0-99).
    #[must_use]
    pub const fn new(date: NaiveDate, revision: u8) -> Option<Self> {
        if revision > MAX_REVISION {
            return None;
        }
        Some(Self { date, revision })
    }

    /// The first serial of a day, `YYYYMMDD01`.
    #[must_use]
    pub const fn first_of(date: NaiveDate) -> Self {
        Self { date, revision: 1 }
    }

    /// The calendar date encoded in the serial
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// The same-day revision suffix
    #[must_use]
    pub const fn revision(&self) -> u8 {
        self.revision
    }

    /// Numeric value as it appears in the SOA record.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.to_string().parse().unwrap_or_default()
    }

    /// The next revision on the same day.
    pub fn bump(self) -> Result<Self> {
        if self.revision >= MAX_REVISION {
            return Err(TailzoneError::SerialExhausted {
                date: self.date.format("%Y%m%d").to_string(),
            });
        }
        Ok(Self {
            date: self.date,
            revision: self.revision + 1,
        })
    }

    /// Pick the serial for a zone generated on `today`.
    ///
    /// Starts the day at revision 01 unless `previous` is already at or past
    /// that point, in which case the previous serial is bumped. The result is
    /// always strictly greater than `previous`.
    pub fn next(previous: Option<Self>, today: NaiveDate) -> Result<Self> {
        let candidate = Self::first_of(today);
        match previous {
            Some(prev) if prev >= candidate => prev.bump(),
            _ => Ok(candidate),
        }
    }

    /// Recover the serial from a zone file rendered by this crate.
    ///
    /// Looks for the line annotated with `; Serial` inside the SOA block.
    #[must_use]
    pub fn from_zone_text(text: &str) -> Option<Self> {
        text.lines()
            .find_map(|line| {
                let (value, comment) = line.split_once(';')?;
                comment
                    .trim()
                    .eq_ignore_ascii_case("serial")
                    .then_some(value.trim())
            })
            .and_then(|value| value.parse().ok())
    }
}

impl fmt::Display for Serial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:02}", self.date.format("%Y%m%d"), self.revision)
    }
}

impl FromStr for Serial {
    type Err = TailzoneError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || TailzoneError::Config(format!("invalid serial {s:?}: expected YYYYMMDDnn"));

        if s.len() != 10 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let date = NaiveDate::parse_from_str(&s[..8], "%Y%m%d").map_err(|_| invalid())?;
        let revision: u8 = s[8..].parse().map_err(|_| invalid())?;

        Self::new(date, revision).ok_or_else(invalid)
    }
}

impl From<Serial> for u64 {
    fn from(serial: Serial) -> Self {
        serial.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_first_of_day_format() {
        let serial = Serial::first_of(day(2024, 5, 1));
        assert_eq!(serial.to_string(), "2024050101");
        assert_eq!(serial.value(), 2_024_050_101);
        assert_eq!(serial.to_string().len(), 10);
    }

    #[test]
    fn test_ordering_matches_numeric_value() {
        let a = Serial::first_of(day(2024, 5, 1));
        let b = Serial::new(day(2024, 5, 1), 7).unwrap();
        let c = Serial::first_of(day(2024, 5, 2));
        let d = Serial::first_of(day(2024, 12, 31));
        assert!(a < b && b < c && c < d);
        assert!(a.value() < b.value() && b.value() < c.value() && c.value() < d.value());
    }

    #[test]
    fn test_next_without_previous() {
        let serial = Serial::next(None, day(2024, 5, 1)).unwrap();
        assert_eq!(serial.to_string(), "2024050101");
    }

    #[test]
    fn test_next_same_day_bumps() {
        let prev = Serial::new(day(2024, 5, 1), 3).unwrap();
        let serial = Serial::next(Some(prev), day(2024, 5, 1)).unwrap();
        assert_eq!(serial.to_string(), "2024050104");
    }

    #[test]
    fn test_next_new_day_resets() {
        let prev = Serial::new(day(2024, 4, 30), 42).unwrap();
        let serial = Serial::next(Some(prev), day(2024, 5, 1)).unwrap();
        assert_eq!(serial.to_string(), "2024050101");
    }

    #[test]
    fn test_next_never_goes_backwards() {
        // Clock skew: the previous file claims a later date.
        let prev = Serial::new(day(2024, 6, 1), 1).unwrap();
        let serial = Serial::next(Some(prev), day(2024, 5, 1)).unwrap();
        assert!(serial > prev);
        assert_eq!(serial.to_string(), "2024060102");
    }

    #[test]
    fn test_revision_exhausted() {
        let prev = Serial::new(day(2024, 5, 1), MAX_REVISION).unwrap();
        let err = Serial::next(Some(prev), day(2024, 5, 1)).unwrap_err();
        assert!(matches!(err, TailzoneError::SerialExhausted { ref date } if date == "20240501"));
    }

    #[test]
    fn test_parse() {
        let serial: Serial = "2024050112".parse().unwrap();
        assert_eq!(serial.date(), day(2024, 5, 1));
        assert_eq!(serial.revision(), 12);

        assert!("202405011".parse::<Serial>().is_err());
        assert!("2024133101".parse::<Serial>().is_err());
        assert!("20240501ab".parse::<Serial>().is_err());
        assert!(Serial::new(day(2024, 5, 1), 100).is_none());
    }

    #[test]
    fn test_from_zone_text() {
        let text = "$TTL 86400\n\
                    @ IN SOA ns1.example.ts.net. admin.example.ts.net. (\n    \
                    2024050103 ; Serial\n    \
                    3600       ; Refresh\n)\n";
        let serial = Serial::from_zone_text(text).unwrap();
        assert_eq!(serial.to_string(), "2024050103");

        assert!(Serial::from_zone_text("").is_none());
        assert!(Serial::from_zone_text("    garbage ; Serial\n").is_none());
    }
}
