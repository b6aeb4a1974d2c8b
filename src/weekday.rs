use std::cmp::Ordering;
use std::str::FromStr;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::consts::{DAYS_PER_WEEK, REFERENCE_SUNDAY_FROM_EPOCH};
use crate::{CalendarError, prelude::*};

/// A day of the week.
///
/// Variants are declared in civil order, so the derived ordering is the
/// natural Sunday-first order. Use [`Weekday::cmp_from`] for orderings that
/// start on another day.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    #[display(fmt = "sunday")]
    Sunday,
    #[display(fmt = "monday")]
    Monday,
    #[display(fmt = "tuesday")]
    Tuesday,
    #[display(fmt = "wednesday")]
    Wednesday,
    #[display(fmt = "thursday")]
    Thursday,
    #[display(fmt = "friday")]
    Friday,
    #[display(fmt = "saturday")]
    Saturday,
}

impl Weekday {
    /// All weekdays in civil order (Sunday first)
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Civil index: 0 = Sunday .. 6 = Saturday
    #[inline]
    pub const fn civil(self) -> u32 {
        self as u32
    }

    /// ISO index: 1 = Monday .. 7 = Sunday
    #[inline]
    pub const fn iso(self) -> u32 {
        match self.civil() {
            0 => DAYS_PER_WEEK,
            civil => civil,
        }
    }

    /// Looks up a weekday by its civil index (0 = Sunday)
    pub const fn from_civil(index: u32) -> Option<Self> {
        if index < DAYS_PER_WEEK {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// Looks up a weekday by its ISO index (1 = Monday)
    pub const fn from_iso(index: u32) -> Option<Self> {
        match index {
            DAYS_PER_WEEK => Some(Self::Sunday),
            0 => None,
            i => Self::from_civil(i),
        }
    }

    pub const fn is_weekend(self) -> bool {
        matches!(self, Self::Saturday | Self::Sunday)
    }

    pub const fn is_weekday(self) -> bool {
        !self.is_weekend()
    }

    /// The following day, wrapping Saturday to Sunday
    pub const fn succ(self) -> Self {
        Self::ALL[((self.civil() + 1) % DAYS_PER_WEEK) as usize]
    }

    /// Compares two weekdays in a week that starts on `start`.
    ///
    /// Days on or after `start` come before days earlier in the civil week;
    /// within each half the natural order applies.
    pub fn cmp_from(self, other: Self, start: Self) -> Ordering {
        if self == other {
            return Ordering::Equal;
        }
        match (self >= start, other >= start) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => self.cmp(&other),
        }
    }

    /// The seven weekdays of a week starting on `start`
    pub fn rotation(start: Self) -> [Self; 7] {
        std::array::from_fn(|i| {
            Self::ALL[(start.civil() as usize + i) % DAYS_PER_WEEK as usize]
        })
    }
}

impl FromStr for Weekday {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|day| day.to_string() == name)
            .ok_or_else(|| CalendarError::UnknownWeekday(s.to_owned()))
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        Self::ALL[day.num_days_from_sunday() as usize]
    }
}

impl From<Weekday> for chrono::Weekday {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Sunday => Self::Sun,
            Weekday::Monday => Self::Mon,
            Weekday::Tuesday => Self::Tue,
            Weekday::Wednesday => Self::Wed,
            Weekday::Thursday => Self::Thu,
            Weekday::Friday => Self::Fri,
            Weekday::Saturday => Self::Sat,
        }
    }
}

/// Anything that sits in a single weekday column.
pub trait HasWeekday {
    fn weekday(&self) -> Weekday;
}

impl HasWeekday for Weekday {
    fn weekday(&self) -> Weekday {
        *self
    }
}

/// A column header: a weekday together with a representative date, independent
/// of the displayed month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayOfWeek {
    pub weekday: Weekday,
    pub date:    NaiveDate,
}

impl DayOfWeek {
    /// Builds the header for `weekday`, dated within the week of Sunday 1970-02-01.
    pub fn new(weekday: Weekday) -> Self {
        let date = NaiveDate::default()
            + Days::new(REFERENCE_SUNDAY_FROM_EPOCH + u64::from(weekday.civil()));
        Self { weekday, date }
    }

    pub const fn day(&self) -> u32 {
        self.weekday.civil()
    }

    pub const fn iso_day(&self) -> u32 {
        self.weekday.iso()
    }
}

impl HasWeekday for DayOfWeek {
    fn weekday(&self) -> Weekday {
        self.weekday
    }
}

/// The seven column headers in display order for a week starting on `start`
pub fn days_of_week(start: Weekday) -> [DayOfWeek; 7] {
    Weekday::rotation(start).map(DayOfWeek::new)
}
