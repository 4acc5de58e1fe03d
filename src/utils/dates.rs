use chrono::{Months, NaiveDate};

use crate::error::{ClimateError, Result};
use crate::utils::constants::{DATE_FORMAT, TRAILING_WINDOW_MONTHS};

/// Parse a zero-padded `YYYY-MM-DD` date.
///
/// The input must be exactly ten bytes: four-digit year, two-digit month and
/// day, `-` separators. Signs, whitespace and unpadded fields are rejected
/// before chrono sees the value.
pub fn parse_iso_date(value: &str) -> Result<NaiveDate> {
    let invalid = || ClimateError::InvalidDate {
        value: value.to_string(),
    };
    if !has_iso_shape(value.as_bytes()) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())
}

fn has_iso_shape(bytes: &[u8]) -> bool {
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Start of the trailing one-year window ending at `last_date`.
///
/// Calendar subtraction: Feb 29 rolls back to Feb 28.
pub fn one_year_before(last_date: NaiveDate) -> NaiveDate {
    last_date
        .checked_sub_months(Months::new(TRAILING_WINDOW_MONTHS))
        .unwrap_or(NaiveDate::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("2017-08-23").unwrap(), ymd(2017, 8, 23));
        assert_eq!(parse_iso_date("0999-12-31").unwrap(), ymd(999, 12, 31));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in [
            "2017-8-23",
            "23-08-2017",
            "2017/08/23",
            "2017-02-30",
            "latest",
            "",
            "-017-08-23",
            "+017-08-23",
            " 2016-08-23 ",
            "2016-08-23 ",
            "2016-08-2x",
        ] {
            let err = parse_iso_date(bad).unwrap_err();
            assert!(matches!(err, ClimateError::InvalidDate { .. }), "{bad}");
        }
    }

    #[test]
    fn test_one_year_before() {
        assert_eq!(one_year_before(ymd(2017, 8, 23)), ymd(2016, 8, 23));
    }

    #[test]
    fn test_one_year_before_leap_day() {
        assert_eq!(one_year_before(ymd(2016, 2, 29)), ymd(2015, 2, 28));
        assert_eq!(one_year_before(ymd(2017, 3, 1)), ymd(2016, 3, 1));
    }

    #[test]
    fn test_format_date_zero_pads() {
        assert_eq!(format_date(ymd(2010, 1, 5)), "2010-01-05");
    }
}
