//! Calendar to Julian Day conversion.

use crate::error::ChartError;
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00 UT)
pub const J2000: f64 = 2451545.0;

/// Days per Julian century
pub const DAYS_PER_CENTURY: f64 = 36525.0;

/// Convert a Gregorian calendar date and decimal hour (UT) to a Julian Day.
///
/// The day number is counted from noon, so `hour_of_day` is shifted by
/// -12h here and nowhere else.
pub fn to_julian_day(year: i32, month: u32, day: u32, hour_of_day: f64) -> Result<f64, ChartError> {
    let invalid = |message: &str| ChartError::InvalidDate {
        year,
        month,
        day,
        hour: hour_of_day,
        message: message.to_string(),
    };

    if !(1..=12).contains(&month) {
        return Err(invalid("month must be within 1-12"));
    }
    if NaiveDate::from_ymd_opt(year, month, day).is_none() {
        return Err(invalid("day does not exist in this month"));
    }
    if !hour_of_day.is_finite() || !(0.0..24.0).contains(&hour_of_day) {
        return Err(invalid("hour must be within [0, 24)"));
    }

    let (year, month, day) = (year as i64, month as i64, day as i64);
    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    let jdn = day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045;

    Ok(jdn as f64 + (hour_of_day - 12.0) / 24.0)
}

/// Convert a chrono date and UT time-of-day to a Julian Day.
pub fn julian_day_from_datetime(date: NaiveDate, time: NaiveTime) -> Result<f64, ChartError> {
    let hour = time.hour() as f64 + time.minute() as f64 / 60.0 + time.second() as f64 / 3600.0;
    to_julian_day(date.year(), date.month(), date.day(), hour)
}

/// Julian centuries elapsed since J2000.0
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000) / DAYS_PER_CENTURY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_epoch_is_exact() {
        assert_eq!(to_julian_day(2000, 1, 1, 12.0).unwrap(), J2000);
        assert_eq!(julian_centuries(J2000), 0.0);
    }

    #[test]
    fn midnight_is_half_a_day_before_noon() {
        assert_eq!(to_julian_day(2000, 1, 1, 0.0).unwrap(), 2451544.5);
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(to_julian_day(2001, 2, 29, 0.0).is_err());
        assert!(to_julian_day(2000, 13, 1, 0.0).is_err());
        assert!(to_julian_day(2000, 0, 1, 0.0).is_err());
        assert!(to_julian_day(2000, 4, 31, 0.0).is_err());
        assert!(to_julian_day(2000, 1, 1, 24.0).is_err());
        assert!(to_julian_day(2000, 1, 1, -0.5).is_err());
        assert!(to_julian_day(2000, 1, 1, f64::NAN).is_err());
        assert!(to_julian_day(2000, 2, 29, 23.99).is_ok());
    }

    #[test]
    fn datetime_conversion_matches_decimal_hour() {
        let date = NaiveDate::from_ymd_opt(1990, 6, 15).unwrap();
        let time = NaiveTime::from_hms_opt(14, 30, 0).unwrap();
        let jd = julian_day_from_datetime(date, time).unwrap();
        assert_eq!(jd, to_julian_day(1990, 6, 15, 14.5).unwrap());
    }
}
