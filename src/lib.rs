//! Month grids for calendar UIs.
//!
//! Given a reference date and a [`ResolvedOptions`], [`generate_days`] builds the
//! cells shown for that month, including filler days from the adjacent months,
//! and [`group_by_weekday`] splits them into seven weekday columns ordered from
//! the configured week start. [`Calendar`] ties both to a navigable reference
//! date.
//!
//! ```
//! use calendar_grid::{Calendar, CalendarOptions, Weekday};
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
//! let options = CalendarOptions::new()
//!     .with_default_date(date)
//!     .with_start_weekday(Weekday::Monday)
//!     .resolve();
//! let calendar = Calendar::new(options);
//!
//! assert_eq!(calendar.days().len(), 42);
//! assert_eq!(calendar.grouped_days()[0].weekday, Weekday::Monday);
//! ```

mod calendar;
mod consts;
mod error;
mod format;
mod grid;
mod group;
mod options;
mod prelude;
mod types;
mod weekday;

#[cfg(test)]
mod test_utils;

pub use calendar::{Calendar, DateState};
pub use consts::*;
pub use error::CalendarError;
pub use format::DateFormatter;
pub use grid::{CalendarDay, GridLayout, generate_days, leading_offset};
pub use group::{CalendarGroup, group_by_weekday, sort_by_day_of_week, week_of_year};
pub use options::{CalendarDefaults, CalendarOptions, ResolvedOptions};
pub use types::{DayKey, GroupKey, Membership, Unit, days_in_month, is_leap_year};
pub use weekday::{DayOfWeek, HasWeekday, Weekday, days_of_week};
