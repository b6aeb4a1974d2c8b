use std::cmp::Ordering;

use chrono::{Datelike, NaiveDate, TimeDelta};

use crate::consts::{DAYS_PER_WEEK, SIX_ROW_GRID_LEN};
use crate::types::days_in_month;
use crate::weekday::HasWeekday;
use crate::{DayKey, Membership, ResolvedOptions, Weekday};

/// One cell of a month grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CalendarDay {
    pub date:         NaiveDate,
    pub day_of_month: u32,
    pub weekday:      Weekday,
    pub membership:   Membership,
    pub is_disabled:  bool,
    pub key:          DayKey,
}

impl CalendarDay {
    pub fn new(date: NaiveDate, membership: Membership, options: &ResolvedOptions) -> Self {
        let weekday = Weekday::from(date.weekday());
        Self {
            date,
            day_of_month: date.day(),
            weekday,
            membership,
            is_disabled: options.is_day_disabled(weekday),
            key: DayKey::new(date),
        }
    }

    /// Civil weekday index (0 = Sunday)
    pub const fn day(&self) -> u32 {
        self.weekday.civil()
    }

    /// ISO weekday index (1 = Monday)
    pub const fn iso_day(&self) -> u32 {
        self.weekday.iso()
    }

    pub const fn is_weekday(&self) -> bool {
        self.weekday.is_weekday()
    }

    pub const fn is_weekend(&self) -> bool {
        self.weekday.is_weekend()
    }

    pub const fn is_prev_month(&self) -> bool {
        matches!(self.membership, Membership::Prev)
    }

    pub const fn is_current_month(&self) -> bool {
        matches!(self.membership, Membership::Current)
    }

    pub const fn is_next_month(&self) -> bool {
        matches!(self.membership, Membership::Next)
    }
}

impl HasWeekday for CalendarDay {
    fn weekday(&self) -> Weekday {
        self.weekday
    }
}

impl HasWeekday for &CalendarDay {
    fn weekday(&self) -> Weekday {
        self.weekday
    }
}

/// Number of days before the first of the month needed so the grid starts on
/// `start`. Always in `-6..=0`.
pub fn leading_offset(first: Weekday, start: Weekday) -> i64 {
    let first_civil = i64::from(first.civil());
    let start_civil = i64::from(start.civil());
    match first_civil.cmp(&start_civil) {
        Ordering::Equal => 0,
        Ordering::Greater => start_civil - first_civil,
        Ordering::Less => -(i64::from(DAYS_PER_WEEK) - start_civil + first_civil),
    }
}

/// Shape of a month grid relative to the first day of the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Offset of the first cell from the first of the month
    pub leading_offset: i64,
    /// Total number of cells
    pub len:            u32,
    /// Days in the displayed month
    pub month_len:      u32,
}

impl GridLayout {
    pub fn new(first_weekday: Weekday, month_len: u32, options: &ResolvedOptions) -> Self {
        if options.current_month_only {
            return Self {
                leading_offset: 0,
                len: month_len,
                month_len,
            };
        }

        let leading_offset = leading_offset(first_weekday, options.start_weekday);
        let len = if options.always_six_rows {
            SIX_ROW_GRID_LEN
        } else {
            // |offset| is at most 6, so the cast is lossless
            let covered = leading_offset.unsigned_abs() as u32 + month_len;
            covered.div_ceil(DAYS_PER_WEEK) * DAYS_PER_WEEK
        };

        Self {
            leading_offset,
            len,
            month_len,
        }
    }

    /// Cell offsets relative to the first of the month, in display order
    pub fn offsets(&self) -> std::ops::Range<i64> {
        self.leading_offset..self.leading_offset + i64::from(self.len)
    }
}

/// Builds the grid for the month containing `reference`.
///
/// The result is chronological with no gaps. Cells that would fall outside
/// the representable date range are left out.
pub fn generate_days(reference: NaiveDate, options: &ResolvedOptions) -> Vec<CalendarDay> {
    let Some(first) = reference.with_day(1) else {
        return Vec::new();
    };
    let Some(month_len) = days_in_month(first.year(), first.month()) else {
        return Vec::new();
    };
    let layout = GridLayout::new(Weekday::from(first.weekday()), month_len, options);

    let days: Vec<CalendarDay> = layout
        .offsets()
        .filter_map(|offset| {
            let date = first.checked_add_signed(TimeDelta::try_days(offset)?)?;
            let membership = Membership::from_offset(offset, month_len);
            Some(CalendarDay::new(date, membership, options))
        })
        .collect();

    tracing::trace!(
        %reference,
        start = %options.start_weekday,
        leading_offset = layout.leading_offset,
        len = days.len(),
        "generated month grid"
    );
    days
}
