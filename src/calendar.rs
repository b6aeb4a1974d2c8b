//! The navigable calendar view.
//!
//! A [`Calendar`] holds the reference date and the resolved options, and keeps
//! the month grid for that date. Every mutation replaces the reference date and
//! rebuilds the grid.

use chrono::{Local, Months, NaiveDate, TimeDelta};

use crate::consts::MONTHS_PER_YEAR;
use crate::{
    CalendarDay, CalendarError, CalendarGroup, DayOfWeek, ResolvedOptions, Unit, days_of_week,
    generate_days, group_by_weekday,
};

/// Storage for the reference date.
///
/// `NaiveDate` owns its value; `&mut NaiveDate` writes through to a date owned
/// by the caller.
pub trait DateState {
    fn get(&self) -> NaiveDate;
    fn replace(&mut self, date: NaiveDate);
}

impl DateState for NaiveDate {
    fn get(&self) -> NaiveDate {
        *self
    }

    fn replace(&mut self, date: NaiveDate) {
        *self = date;
    }
}

impl DateState for &mut NaiveDate {
    fn get(&self) -> NaiveDate {
        **self
    }

    fn replace(&mut self, date: NaiveDate) {
        **self = date;
    }
}

#[derive(Debug, Clone)]
pub struct Calendar<S = NaiveDate> {
    state:   S,
    options: ResolvedOptions,
    days:    Vec<CalendarDay>,
}

impl Calendar<NaiveDate> {
    /// Owns its reference date, starting at `options.default_date` or today.
    pub fn new(options: ResolvedOptions) -> Self {
        let date = options
            .default_date
            .unwrap_or_else(|| Local::now().date_naive());
        Self::with_state(date, options)
    }
}

impl<'a> Calendar<&'a mut NaiveDate> {
    /// Navigates a reference date owned by the caller. `options.default_date`
    /// is ignored.
    pub fn controlled(date: &'a mut NaiveDate, options: ResolvedOptions) -> Self {
        Self::with_state(date, options)
    }
}

impl<S: DateState> Calendar<S> {
    pub fn with_state(state: S, options: ResolvedOptions) -> Self {
        let days = generate_days(state.get(), &options);
        Self {
            state,
            options,
            days,
        }
    }

    /// The reference date
    pub fn date(&self) -> NaiveDate {
        self.state.get()
    }

    pub const fn options(&self) -> &ResolvedOptions {
        &self.options
    }

    /// Replaces the options and rebuilds the grid
    pub fn set_options(&mut self, options: ResolvedOptions) {
        self.options = options;
        self.regenerate();
    }

    /// Replaces the reference date
    pub fn set(&mut self, date: NaiveDate) {
        tracing::debug!(from = %self.date(), to = %date, "setting calendar date");
        self.state.replace(date);
        self.regenerate();
    }

    /// Moves the reference date by `amount` units and returns the new date.
    ///
    /// Month and year steps clamp the day to the length of the target month.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if the result is not representable;
    /// the reference date is left unchanged.
    pub fn add(&mut self, amount: i64, unit: Unit) -> Result<NaiveDate, CalendarError> {
        let date = self.date();
        let shifted = shift(date, amount, unit).ok_or(CalendarError::OutOfRange {
            date,
            amount,
            unit,
        })?;
        self.set(shifted);
        Ok(shifted)
    }

    /// Moves the reference date back by `amount` units.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if the result is not representable.
    pub fn subtract(&mut self, amount: i64, unit: Unit) -> Result<NaiveDate, CalendarError> {
        let negated = amount.checked_neg().ok_or(CalendarError::OutOfRange {
            date: self.date(),
            amount,
            unit,
        })?;
        self.add(negated, unit)
    }

    /// # Errors
    /// Returns `CalendarError::OutOfRange` past the last representable month.
    pub fn add_month(&mut self) -> Result<NaiveDate, CalendarError> {
        self.add(1, Unit::Months)
    }

    /// # Errors
    /// Returns `CalendarError::OutOfRange` before the first representable month.
    pub fn subtract_month(&mut self) -> Result<NaiveDate, CalendarError> {
        self.add(-1, Unit::Months)
    }

    /// # Errors
    /// Returns `CalendarError::OutOfRange` past the last representable year.
    pub fn add_year(&mut self) -> Result<NaiveDate, CalendarError> {
        self.add(1, Unit::Years)
    }

    /// # Errors
    /// Returns `CalendarError::OutOfRange` before the first representable year.
    pub fn subtract_year(&mut self) -> Result<NaiveDate, CalendarError> {
        self.add(-1, Unit::Years)
    }

    /// The grid for the reference month, in display order
    pub fn days(&self) -> &[CalendarDay] {
        &self.days
    }

    /// The grid split into weekday columns, starting at the configured weekday
    pub fn grouped_days(&self) -> Vec<CalendarGroup<'_>> {
        group_by_weekday(&self.days, self.options.start_weekday)
    }

    /// Column headers, starting at the configured weekday
    pub fn days_of_week(&self) -> [DayOfWeek; 7] {
        days_of_week(self.options.start_weekday)
    }

    pub const fn is_disabled(&self) -> bool {
        self.options.disabled
    }

    /// First date shown in the grid
    pub fn grid_start(&self) -> Option<NaiveDate> {
        self.days.first().map(|day| day.date)
    }

    /// Last date shown in the grid
    pub fn grid_end(&self) -> Option<NaiveDate> {
        self.days.last().map(|day| day.date)
    }

    /// Formats the reference date with the calendar date pattern.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidPattern` if the pattern is malformed.
    pub fn format(&self) -> Result<String, CalendarError> {
        self.format_with(&self.options.calendar_date_format)
    }

    /// Formats the reference date with `pattern`.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidPattern` if the pattern is malformed.
    pub fn format_with(&self, pattern: &str) -> Result<String, CalendarError> {
        self.options.formatter().format(self.date(), pattern)
    }

    /// Formats a grid cell with the day pattern.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidPattern` if the pattern is malformed.
    pub fn format_day(&self, day: &CalendarDay) -> Result<String, CalendarError> {
        self.format_day_with(day, &self.options.day_format)
    }

    /// Formats a grid cell with `pattern`.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidPattern` if the pattern is malformed.
    pub fn format_day_with(
        &self,
        day: &CalendarDay,
        pattern: &str,
    ) -> Result<String, CalendarError> {
        self.options.formatter().format(day.date, pattern)
    }

    /// Formats a column header with the day-of-week pattern. Empty columns
    /// format as an empty string.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidPattern` if the pattern is malformed.
    pub fn format_group(&self, group: &CalendarGroup<'_>) -> Result<String, CalendarError> {
        self.format_group_with(group, &self.options.day_of_week_format)
    }

    /// Formats a column header with `pattern`.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidPattern` if the pattern is malformed.
    pub fn format_group_with(
        &self,
        group: &CalendarGroup<'_>,
        pattern: &str,
    ) -> Result<String, CalendarError> {
        group.date().map_or_else(
            || Ok(String::new()),
            |date| self.options.formatter().format(date, pattern),
        )
    }

    /// Formats a month-independent header with the day-of-week pattern.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidPattern` if the pattern is malformed.
    pub fn format_day_of_week(&self, header: &DayOfWeek) -> Result<String, CalendarError> {
        self.format_day_of_week_with(header, &self.options.day_of_week_format)
    }

    /// # Errors
    /// Returns `CalendarError::InvalidPattern` if the pattern is malformed.
    pub fn format_day_of_week_with(
        &self,
        header: &DayOfWeek,
        pattern: &str,
    ) -> Result<String, CalendarError> {
        self.options.formatter().format(header.date, pattern)
    }

    /// Gives back the date storage
    pub fn into_state(self) -> S {
        self.state
    }

    fn regenerate(&mut self) {
        self.days = generate_days(self.state.get(), &self.options);
    }
}

fn shift(date: NaiveDate, amount: i64, unit: Unit) -> Option<NaiveDate> {
    match unit {
        Unit::Days => date.checked_add_signed(TimeDelta::try_days(amount)?),
        Unit::Weeks => date.checked_add_signed(TimeDelta::try_weeks(amount)?),
        Unit::Months => shift_months(date, amount),
        Unit::Years => shift_months(date, amount.checked_mul(i64::from(MONTHS_PER_YEAR))?),
    }
}

fn shift_months(date: NaiveDate, months: i64) -> Option<NaiveDate> {
    let step = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        date.checked_add_months(step)
    } else {
        date.checked_sub_months(step)
    }
}
