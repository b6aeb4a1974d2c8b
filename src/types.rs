use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DECEMBER, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, KEY_SEPARATOR,
    LEAP_YEAR_CYCLE,
};
use crate::{CalendarError, prelude::*};

/// Which month of the grid a day belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Membership {
    /// Leading filler day from the month before
    #[display(fmt = "prev")]
    Prev,
    /// Day of the displayed month
    #[display(fmt = "current")]
    Current,
    /// Trailing filler day from the month after
    #[display(fmt = "next")]
    Next,
}

impl Membership {
    /// Classifies a grid offset relative to the first of the month
    pub const fn from_offset(offset: i64, month_len: u32) -> Self {
        if offset < 0 {
            Self::Prev
        } else if offset >= month_len as i64 {
            Self::Next
        } else {
            Self::Current
        }
    }
}

/// Step size used when navigating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[display(fmt = "days")]
    Days,
    #[display(fmt = "weeks")]
    Weeks,
    #[display(fmt = "months")]
    Months,
    #[display(fmt = "years")]
    Years,
}

impl FromStr for Unit {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" | "days" => Ok(Self::Days),
            "week" | "weeks" => Ok(Self::Weeks),
            "month" | "months" => Ok(Self::Months),
            "year" | "years" => Ok(Self::Years),
            _ => Err(CalendarError::UnknownUnit(s.to_owned())),
        }
    }
}

/// Stable identity of a grid cell, `day-month-year`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Deref, Into)]
pub struct DayKey(String);

impl DayKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(format!(
            "{}{KEY_SEPARATOR}{}{KEY_SEPARATOR}{}",
            date.day(),
            date.month(),
            date.year()
        ))
    }
}

/// Stable identity of a weekday column, `weekday-week-year`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Deref, Into)]
pub struct GroupKey(String);

impl GroupKey {
    pub fn new(civil_day: u32, week: u32, year: i32) -> Self {
        Self(format!("{civil_day}{KEY_SEPARATOR}{week}{KEY_SEPARATOR}{year}"))
    }
}

// Helper functions

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `month` (1-based) of `year`, or `None` for a month
/// outside `1..=12`.
pub const fn days_in_month(year: i32, month: u32) -> Option<u32> {
    if month == 0 || month > DECEMBER {
        return None;
    }

    if month == FEBRUARY && is_leap_year(year) {
        Some(FEBRUARY_DAYS_LEAP)
    } else {
        Some(DAYS_IN_MONTH[month as usize])
    }
}
