//! Localized date formatting.
//!
//! Patterns use chrono's strftime syntax; this module only checks that chrono
//! can parse them before handing the date over.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{Locale, NaiveDate, NaiveTime};

use crate::CalendarError;

/// Formats dates with a fixed locale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateFormatter {
    locale: Locale,
}

impl DateFormatter {
    pub const fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Formats `date` at midnight with a strftime `pattern`.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidPattern` if chrono cannot parse the pattern.
    pub fn format(&self, date: NaiveDate, pattern: &str) -> Result<String, CalendarError> {
        let items = StrftimeItems::new_with_locale(pattern, self.locale);
        if items.clone().any(|item| matches!(item, Item::Error)) {
            return Err(CalendarError::InvalidPattern(pattern.to_owned()));
        }

        let instant = date.and_time(NaiveTime::MIN).and_utc();
        let mut out = String::with_capacity(pattern.len() * 2);
        write!(out, "{}", instant.format_localized_with_items(items, self.locale))?;
        Ok(out)
    }
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self::new(Locale::en_US)
    }
}
