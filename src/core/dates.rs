//! Calendar arithmetic for the age and date-difference tools.

use chrono::{Datelike, NaiveDate};

use super::error::{Error, Result};

/// Life-expectancy baseline for the progress readout, in years.
const LIFE_EXPECTANCY_YEARS: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeBreakdown {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub total_months: u32,
    pub total_weeks: i64,
    pub total_days: i64,
    pub next_birthday: NaiveDate,
    pub days_to_birthday: i64,
    pub is_adult: bool,
}

impl AgeBreakdown {
    /// Fraction of an 80-year life already lived, in percent, capped at 100.
    pub fn life_progress_percent(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let lived = self.total_days as f64;
        (lived / (LIFE_EXPECTANCY_YEARS * 365.25) * 100.0).min(100.0)
    }
}

/// Days in `month` of `year`.
fn days_in_month(year: i32, month: u32) -> u32 {
    let (ny, nm) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(ny, nm, 1)
        .and_then(|d| d.pred_opt())
        .map_or(30, |d| d.day())
}

/// The birthday occurring in `year`. A Feb 29 birth date rolls forward to
/// Mar 1 in non-leap years, matching how `Date` arithmetic treats the
/// overflowing day.
fn birthday_in_year(birth: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(birth)
}

/// Full age breakdown as of `today`. Future birth dates are rejected.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> Result<AgeBreakdown> {
    if birth > today {
        return Err(Error::validation("birth date", "cannot be in the future"));
    }

    let mut years = today.year() - birth.year();
    let mut months = i64::from(today.month()) - i64::from(birth.month());
    let mut days = i64::from(today.day()) - i64::from(birth.day());

    if days < 0 {
        let (py, pm) = if today.month() == 1 {
            (today.year() - 1, 12)
        } else {
            (today.year(), today.month() - 1)
        };
        days += i64::from(days_in_month(py, pm));
        months -= 1;
    }
    if months < 0 {
        months += 12;
        years -= 1;
    }

    let total_days = (today - birth).num_days();
    #[allow(clippy::cast_sign_loss)]
    let (years, months, days) = (years as u32, months as u32, days as u32);

    let mut next_birthday = birthday_in_year(birth, today.year());
    if next_birthday < today {
        next_birthday = birthday_in_year(birth, today.year() + 1);
    }

    Ok(AgeBreakdown {
        years,
        months,
        days,
        total_months: years * 12 + months,
        total_weeks: total_days / 7,
        total_days,
        next_birthday,
        days_to_birthday: (next_birthday - today).num_days(),
        is_adult: years >= 18,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSpan {
    /// Whole calendar years between the dates.
    pub years: i64,
    /// Whole calendar months between the dates.
    pub months: i64,
    /// Whole weeks.
    pub weeks: i64,
    /// Total days.
    pub days: i64,
    /// Total hours (dates carry no time of day, so days × 24).
    pub hours: i64,
}

/// Span between two dates in several units. `start` must not be after `end`.
pub fn date_difference(start: NaiveDate, end: NaiveDate) -> Result<DateSpan> {
    if start > end {
        return Err(Error::validation("dates", "start date must not be after end date"));
    }

    let days = (end - start).num_days();
    let mut months =
        i64::from(end.year() - start.year()) * 12 + i64::from(end.month()) - i64::from(start.month());
    if end.day() < start.day() {
        months -= 1;
    }

    Ok(DateSpan {
        years: months / 12,
        months,
        weeks: days / 7,
        days,
        hours: days * 24,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_age_exact_birthday() {
        let a = age_on(d(1990, 6, 15), d(2020, 6, 15)).unwrap();
        assert_eq!((a.years, a.months, a.days), (30, 0, 0));
        assert_eq!(a.total_months, 360);
        assert_eq!(a.days_to_birthday, 0);
        assert!(a.is_adult);
    }

    #[test]
    fn test_age_day_borrow() {
        // 2024-03-10 minus 1990-06-15: days borrow from February 2024 (29 days).
        let a = age_on(d(1990, 6, 15), d(2024, 3, 10)).unwrap();
        assert_eq!((a.years, a.months, a.days), (33, 8, 24));
    }

    #[test]
    fn test_age_month_borrow() {
        let a = age_on(d(2000, 12, 31), d(2024, 1, 1)).unwrap();
        assert_eq!((a.years, a.months, a.days), (23, 0, 1));
    }

    #[test]
    fn test_age_future_birth_rejected() {
        assert!(age_on(d(2030, 1, 1), d(2024, 1, 1)).is_err());
    }

    #[test]
    fn test_next_birthday_upcoming_this_year() {
        let a = age_on(d(1990, 12, 25), d(2024, 6, 1)).unwrap();
        assert_eq!(a.next_birthday, d(2024, 12, 25));
        assert_eq!(a.days_to_birthday, (d(2024, 12, 25) - d(2024, 6, 1)).num_days());
    }

    #[test]
    fn test_next_birthday_already_passed() {
        let a = age_on(d(1990, 2, 10), d(2024, 6, 1)).unwrap();
        assert_eq!(a.next_birthday, d(2025, 2, 10));
    }

    #[test]
    fn test_leap_birthday_rolls_to_march() {
        // 2025 is not a leap year, so a Feb 29 birthday falls on Mar 1.
        let a = age_on(d(2000, 2, 29), d(2024, 3, 5)).unwrap();
        assert_eq!(a.next_birthday, d(2025, 3, 1));
    }

    #[test]
    fn test_minor_flag() {
        let a = age_on(d(2010, 1, 1), d(2024, 1, 1)).unwrap();
        assert!(!a.is_adult);
        assert_eq!(a.years, 14);
    }

    #[test]
    fn test_life_progress() {
        let a = age_on(d(1984, 1, 1), d(2024, 1, 1)).unwrap();
        let p = a.life_progress_percent();
        assert!((p - 50.0).abs() < 0.2, "progress = {p}");
    }

    #[test]
    fn test_date_difference_same_day() {
        let s = date_difference(d(2024, 5, 1), d(2024, 5, 1)).unwrap();
        assert_eq!(s, DateSpan { years: 0, months: 0, weeks: 0, days: 0, hours: 0 });
    }

    #[test]
    fn test_date_difference_units() {
        let s = date_difference(d(2020, 1, 15), d(2024, 3, 10)).unwrap();
        assert_eq!(s.years, 4);
        assert_eq!(s.months, 49);
        assert_eq!(s.days, (d(2024, 3, 10) - d(2020, 1, 15)).num_days());
        assert_eq!(s.weeks, s.days / 7);
        assert_eq!(s.hours, s.days * 24);
    }

    #[test]
    fn test_date_difference_partial_month_not_counted() {
        let s = date_difference(d(2024, 1, 20), d(2024, 2, 10)).unwrap();
        assert_eq!(s.months, 0);
        assert_eq!(s.days, 21);
    }

    #[test]
    fn test_date_difference_rejects_reversed() {
        assert!(date_difference(d(2024, 5, 2), d(2024, 5, 1)).is_err());
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 12), 31);
    }
}
