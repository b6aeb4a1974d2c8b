/// Number of days (and columns) in a week
pub const DAYS_PER_WEEK: u32 = 7;

/// Rows shown when a grid is forced to a fixed height
pub const SIX_ROWS: u32 = 6;

/// Grid length when `always_six_rows` is set
pub const SIX_ROW_GRID_LEN: u32 = SIX_ROWS * DAYS_PER_WEEK;

/// Month number for February
pub const FEBRUARY: u32 = 2;
/// Month number for December
pub const DECEMBER: u32 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u32 = 29;

/// Days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u32; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Months added or removed by a one-year step
pub(crate) const MONTHS_PER_YEAR: u32 = 12;

/// Default pattern for a single day cell ("01".."31")
pub const DEFAULT_DAY_FORMAT: &str = "%d";
/// Default pattern for a column header ("Mon")
pub const DEFAULT_DAY_OF_WEEK_FORMAT: &str = "%a";
/// Default pattern for the displayed month ("07-2022")
pub const DEFAULT_CALENDAR_DATE_FORMAT: &str = "%m-%Y";

/// Days from the Unix epoch to Sunday 1970-02-01, which starts the week used
/// for month-independent header labels
pub(crate) const REFERENCE_SUNDAY_FROM_EPOCH: u64 = 31;

/// Separator between the components of a day or group key
pub const KEY_SEPARATOR: char = '-';
