use chrono::{Datelike, Days, NaiveDate};

use crate::consts::DAYS_PER_WEEK;
use crate::weekday::HasWeekday;
use crate::{CalendarDay, GroupKey, Weekday};

/// One weekday column of a month grid.
///
/// Borrows its days from the grid it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGroup<'a> {
    pub weekday:  Weekday,
    /// Week number of the first day, for weeks starting on the configured day
    pub week:     u32,
    /// ISO 8601 week number of the first day
    pub iso_week: u32,
    pub days:     Vec<&'a CalendarDay>,
    pub key:      GroupKey,
}

impl<'a> CalendarGroup<'a> {
    fn open(first: &'a CalendarDay, week_start: Weekday) -> Self {
        let week = week_of_year(first.date, week_start);
        Self {
            weekday: first.weekday,
            week,
            iso_week: first.date.iso_week().week(),
            days: vec![first],
            key: GroupKey::new(first.day(), week, first.date.year()),
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

    /// Date of the first day in the column
    pub fn date(&self) -> Option<NaiveDate> {
        self.days.first().map(|day| day.date)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl HasWeekday for CalendarGroup<'_> {
    fn weekday(&self) -> Weekday {
        self.weekday
    }
}

/// Stable sort of `items` into week order starting at `start`
pub fn sort_by_day_of_week<T: HasWeekday>(items: &mut [T], start: Weekday) {
    items.sort_by(|a, b| a.weekday().cmp_from(b.weekday(), start));
}

/// Splits `days` into one column per weekday present, columns ordered from
/// `start`.
///
/// A single pass keeps each column in the order of `days`, so a chronological
/// grid yields chronological columns. Malformed grids give uneven columns
/// rather than an error.
pub fn group_by_weekday(days: &[CalendarDay], start: Weekday) -> Vec<CalendarGroup<'_>> {
    let mut slots: [Option<CalendarGroup<'_>>; 7] = Default::default();
    for day in days {
        let index = day.day() as usize;
        if let Some(group) = &mut slots[index] {
            group.days.push(day);
        } else {
            slots[index] = Some(CalendarGroup::open(day, start));
        }
    }

    let mut groups: Vec<CalendarGroup<'_>> = slots.into_iter().flatten().collect();
    sort_by_day_of_week(&mut groups, start);
    groups
}

/// First day of the week containing `date`, for weeks starting on `start`
fn start_of_week(date: NaiveDate, start: Weekday) -> NaiveDate {
    let current = Weekday::from(date.weekday()).civil();
    let back = (current + DAYS_PER_WEEK - start.civil()) % DAYS_PER_WEEK;
    date.checked_sub_days(Days::new(u64::from(back))).unwrap_or(date)
}

/// Week of the year for weeks starting on `start`, where week 1 is the week
/// containing January 1st. Late-December days in that week count as week 1 of
/// the following year.
pub fn week_of_year(date: NaiveDate, start: Weekday) -> u32 {
    let week_start = start_of_week(date, start);

    let next_year_start = NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
        .map(|jan_first| start_of_week(jan_first, start));
    let year_start = match next_year_start {
        Some(next) if date >= next => next,
        _ => date
            .with_ordinal(1)
            .map_or(week_start, |jan_first| start_of_week(jan_first, start)),
    };

    let weeks = (week_start - year_start).num_days() / i64::from(DAYS_PER_WEEK);
    u32::try_from(weeks).map_or(1, |w| w + 1)
}
