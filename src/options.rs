//! Calendar configuration.
//!
//! Options are resolved from three layers, highest priority first:
//! call-site [`CalendarOptions`], the overrides held by a [`CalendarDefaults`],
//! and the library defaults in [`ResolvedOptions::default`].

use chrono::{Locale, NaiveDate};
use serde::{Deserialize, Deserializer};

use crate::consts::{DEFAULT_CALENDAR_DATE_FORMAT, DEFAULT_DAY_FORMAT, DEFAULT_DAY_OF_WEEK_FORMAT};
use crate::{DateFormatter, Weekday};

/// A partial set of options. Unset fields fall through to the next layer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalendarOptions {
    /// Initial reference date; today when unset at every layer
    pub default_date:         Option<NaiveDate>,
    /// First column of the grid
    #[serde(alias = "calendarStartDay", deserialize_with = "lenient_weekday")]
    pub start_weekday:        Option<Weekday>,
    /// Marks every day disabled
    pub disabled:             Option<bool>,
    #[serde(alias = "disableWeekDays")]
    pub disable_weekdays:     Option<bool>,
    pub disable_weekends:     Option<bool>,
    /// Always produce 42 days
    pub always_six_rows:      Option<bool>,
    /// Produce only the days of the reference month
    #[serde(alias = "onlyCurrentMonth")]
    pub current_month_only:   Option<bool>,
    /// Set programmatically; not part of the serialized form
    #[serde(skip)]
    pub locale:               Option<Locale>,
    pub day_format:           Option<String>,
    pub day_of_week_format:   Option<String>,
    pub calendar_date_format: Option<String>,
}

/// Unknown weekday names fall back to the next layer instead of failing.
fn lenient_weekday<'de, D>(deserializer: D) -> Result<Option<Weekday>, D::Error>
where
    D: Deserializer<'de>,
{
    let name = Option::<String>::deserialize(deserializer)?;
    Ok(name.and_then(|name| match name.parse() {
        Ok(day) => Some(day),
        Err(err) => {
            tracing::debug!(%err, "ignoring start weekday option");
            None
        },
    }))
}

impl CalendarOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_date(mut self, date: NaiveDate) -> Self {
        self.default_date = Some(date);
        self
    }

    pub fn with_start_weekday(mut self, day: Weekday) -> Self {
        self.start_weekday = Some(day);
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    pub fn with_disable_weekdays(mut self, disable: bool) -> Self {
        self.disable_weekdays = Some(disable);
        self
    }

    pub fn with_disable_weekends(mut self, disable: bool) -> Self {
        self.disable_weekends = Some(disable);
        self
    }

    pub fn with_always_six_rows(mut self, six_rows: bool) -> Self {
        self.always_six_rows = Some(six_rows);
        self
    }

    pub fn with_current_month_only(mut self, only: bool) -> Self {
        self.current_month_only = Some(only);
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    pub fn with_day_format(mut self, pattern: impl Into<String>) -> Self {
        self.day_format = Some(pattern.into());
        self
    }

    pub fn with_day_of_week_format(mut self, pattern: impl Into<String>) -> Self {
        self.day_of_week_format = Some(pattern.into());
        self
    }

    pub fn with_calendar_date_format(mut self, pattern: impl Into<String>) -> Self {
        self.calendar_date_format = Some(pattern.into());
        self
    }

    /// Layers `self` over `lower`: every field set here wins.
    pub fn merged_over(&self, lower: &Self) -> Self {
        Self {
            default_date:         self.default_date.or(lower.default_date),
            start_weekday:        self.start_weekday.or(lower.start_weekday),
            disabled:             self.disabled.or(lower.disabled),
            disable_weekdays:     self.disable_weekdays.or(lower.disable_weekdays),
            disable_weekends:     self.disable_weekends.or(lower.disable_weekends),
            always_six_rows:      self.always_six_rows.or(lower.always_six_rows),
            current_month_only:   self.current_month_only.or(lower.current_month_only),
            locale:               self.locale.or(lower.locale),
            day_format:           self.day_format.clone().or_else(|| lower.day_format.clone()),
            day_of_week_format:   self
                .day_of_week_format
                .clone()
                .or_else(|| lower.day_of_week_format.clone()),
            calendar_date_format: self
                .calendar_date_format
                .clone()
                .or_else(|| lower.calendar_date_format.clone()),
        }
    }

    /// Resolves against the library defaults only
    pub fn resolve(&self) -> ResolvedOptions {
        CalendarDefaults::new().resolve(self)
    }
}

/// A complete configuration with every option set.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOptions {
    pub default_date:         Option<NaiveDate>,
    pub start_weekday:        Weekday,
    pub disabled:             bool,
    pub disable_weekdays:     bool,
    pub disable_weekends:     bool,
    pub always_six_rows:      bool,
    pub current_month_only:   bool,
    pub locale:               Locale,
    pub day_format:           String,
    pub day_of_week_format:   String,
    pub calendar_date_format: String,
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        Self {
            default_date:         None,
            start_weekday:        Weekday::Monday,
            disabled:             false,
            disable_weekdays:     false,
            disable_weekends:     false,
            always_six_rows:      false,
            current_month_only:   false,
            locale:               Locale::en_US,
            day_format:           DEFAULT_DAY_FORMAT.to_owned(),
            day_of_week_format:   DEFAULT_DAY_OF_WEEK_FORMAT.to_owned(),
            calendar_date_format: DEFAULT_CALENDAR_DATE_FORMAT.to_owned(),
        }
    }
}

impl ResolvedOptions {
    /// Fills every field from `options`, falling back to the library defaults
    fn from_partial(options: CalendarOptions) -> Self {
        let defaults = Self::default();
        Self {
            default_date:         options.default_date,
            start_weekday:        options.start_weekday.unwrap_or(defaults.start_weekday),
            disabled:             options.disabled.unwrap_or(defaults.disabled),
            disable_weekdays:     options.disable_weekdays.unwrap_or(defaults.disable_weekdays),
            disable_weekends:     options.disable_weekends.unwrap_or(defaults.disable_weekends),
            always_six_rows:      options.always_six_rows.unwrap_or(defaults.always_six_rows),
            current_month_only:   options.current_month_only.unwrap_or(defaults.current_month_only),
            locale:               options.locale.unwrap_or(defaults.locale),
            day_format:           options.day_format.unwrap_or(defaults.day_format),
            day_of_week_format:   options.day_of_week_format.unwrap_or(defaults.day_of_week_format),
            calendar_date_format: options
                .calendar_date_format
                .unwrap_or(defaults.calendar_date_format),
        }
    }

    pub const fn formatter(&self) -> DateFormatter {
        DateFormatter::new(self.locale)
    }

    /// Whether a day falling on `weekday` is disabled
    pub const fn is_day_disabled(&self, weekday: Weekday) -> bool {
        self.disabled
            || (weekday.is_weekday() && self.disable_weekdays)
            || (weekday.is_weekend() && self.disable_weekends)
    }
}

/// The override layer shared by every calendar built from it.
///
/// Starts empty, so resolving against a fresh value yields the library defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalendarDefaults {
    overrides: CalendarOptions,
}

impl CalendarDefaults {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn overrides(&self) -> &CalendarOptions {
        &self.overrides
    }

    /// Sets the default locale. `None` leaves it unchanged.
    pub fn set_locale(&mut self, locale: Option<Locale>) {
        let Some(locale) = locale else {
            return;
        };
        tracing::debug!(?locale, "setting default locale");
        self.overrides.locale = Some(locale);
    }

    /// Sets the default week start. `None` leaves it unchanged.
    pub fn set_start_weekday(&mut self, day: Option<Weekday>) {
        let Some(day) = day else {
            return;
        };
        tracing::debug!(%day, "setting default start weekday");
        self.overrides.start_weekday = Some(day);
    }

    /// Merges `options` into the overrides; fields set in `options` win.
    pub fn set_options(&mut self, options: CalendarOptions) {
        tracing::debug!(?options, "merging default options");
        self.overrides = options.merged_over(&self.overrides);
    }

    /// Drops every override
    pub fn reset(&mut self) {
        tracing::debug!("resetting default options");
        self.overrides = CalendarOptions::default();
    }

    /// Resolves call-site `options` over the overrides and library defaults
    pub fn resolve(&self, options: &CalendarOptions) -> ResolvedOptions {
        ResolvedOptions::from_partial(options.merged_over(&self.overrides))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_fresh_defaults_resolve_to_library_defaults() {
        let defaults = CalendarDefaults::new();
        let resolved = defaults.resolve(&CalendarOptions::default());

        assert_eq!(resolved, ResolvedOptions::default());
        assert_eq!(resolved.start_weekday, Weekday::Monday);
        assert_eq!(resolved.locale, Locale::en_US);
        assert_eq!(resolved.day_format, "%d");
        assert_eq!(resolved.day_of_week_format, "%a");
        assert_eq!(resolved.calendar_date_format, "%m-%Y");
        assert!(!resolved.disabled);
        assert!(!resolved.always_six_rows);
        assert!(!resolved.current_month_only);
        assert_eq!(resolved.default_date, None);
    }

    #[test]
    fn test_layer_priority() {
        let mut defaults = CalendarDefaults::new();
        defaults.set_start_weekday(Some(Weekday::Tuesday));
        defaults.set_options(
            CalendarOptions::new()
                .with_day_format("%e")
                .with_calendar_date_format("%d-%m-%Y"),
        );
        defaults.set_locale(Some(Locale::pl_PL));

        let resolved = defaults.resolve(&CalendarOptions::new().with_day_format("%d"));

        assert_eq!(resolved.locale, Locale::pl_PL);
        assert_eq!(resolved.start_weekday, Weekday::Tuesday);
        assert_eq!(resolved.day_format, "%d", "call site wins over overrides");
        assert_eq!(resolved.calendar_date_format, "%d-%m-%Y", "overrides win over defaults");
        assert_eq!(resolved.day_of_week_format, "%a", "library default fills the rest");
    }

    #[test]
    fn test_resolve_does_not_mutate_inputs() {
        let mut defaults = CalendarDefaults::new();
        defaults.set_start_weekday(Some(Weekday::Friday));
        let before = defaults.clone();
        let call = CalendarOptions::new().with_start_weekday(Weekday::Sunday);
        let call_before = call.clone();

        let resolved = defaults.resolve(&call);

        assert_eq!(resolved.start_weekday, Weekday::Sunday);
        assert_eq!(defaults, before);
        assert_eq!(call, call_before);
    }

    #[test]
    fn test_none_mutators_are_no_ops() {
        let mut defaults = CalendarDefaults::new();
        defaults.set_locale(Some(Locale::fr_FR));
        defaults.set_start_weekday(Some(Weekday::Thursday));

        defaults.set_locale(None);
        defaults.set_start_weekday(None);

        assert_eq!(defaults.overrides().locale, Some(Locale::fr_FR));
        assert_eq!(defaults.overrides().start_weekday, Some(Weekday::Thursday));
    }

    #[test]
    fn test_set_options_merges() {
        let now = date(2024, 3, 15);
        let mut defaults = CalendarDefaults::new();
        defaults.set_start_weekday(Some(Weekday::Thursday));
        defaults.set_options(
            CalendarOptions::new()
                .with_default_date(now)
                .with_disable_weekdays(true)
                .with_day_of_week_format("%A"),
        );

        let overrides = defaults.overrides();
        assert_eq!(overrides.default_date, Some(now));
        assert_eq!(overrides.disable_weekdays, Some(true));
        assert_eq!(overrides.day_of_week_format.as_deref(), Some("%A"));
        assert_eq!(overrides.start_weekday, Some(Weekday::Thursday), "earlier overrides survive");
    }

    #[test]
    fn test_reset() {
        let mut defaults = CalendarDefaults::new();
        defaults.set_locale(Some(Locale::fr_FR));
        defaults.set_options(CalendarOptions::new().with_always_six_rows(true));
        defaults.reset();

        assert_eq!(defaults, CalendarDefaults::new());
        assert_eq!(defaults.resolve(&CalendarOptions::new()), ResolvedOptions::default());
    }

    #[test]
    fn test_is_day_disabled() {
        struct TestCase {
            options:     CalendarOptions,
            disabled:    [bool; 7],
            description: &'static str,
        }

        let cases = [
            TestCase {
                options:     CalendarOptions::new(),
                disabled:    [false; 7],
                description: "nothing disabled",
            },
            TestCase {
                options:     CalendarOptions::new().with_disabled(true),
                disabled:    [true; 7],
                description: "everything disabled",
            },
            TestCase {
                options:     CalendarOptions::new().with_disable_weekends(true),
                disabled:    [true, false, false, false, false, false, true],
                description: "weekends disabled",
            },
            TestCase {
                options:     CalendarOptions::new().with_disable_weekdays(true),
                disabled:    [false, true, true, true, true, true, false],
                description: "weekdays disabled",
            },
        ];

        for case in &cases {
            let resolved = case.options.resolve();
            for day in Weekday::ALL {
                assert_eq!(
                    resolved.is_day_disabled(day),
                    case.disabled[day.civil() as usize],
                    "{}: {day}",
                    case.description
                );
            }
        }
    }

    #[test]
    fn test_deserialize_options() {
        let json = r#"{
            "defaultDate": "2022-07-01",
            "startWeekday": "sunday",
            "disableWeekends": true,
            "alwaysSixRows": true,
            "dayFormat": "%e"
        }"#;
        let options: CalendarOptions = serde_json::from_str(json).unwrap();

        assert_eq!(options.default_date, Some(date(2022, 7, 1)));
        assert_eq!(options.start_weekday, Some(Weekday::Sunday));
        assert_eq!(options.disable_weekends, Some(true));
        assert_eq!(options.always_six_rows, Some(true));
        assert_eq!(options.day_format.as_deref(), Some("%e"));
        assert_eq!(options.disabled, None);
        assert_eq!(options.locale, None);
    }

    #[test]
    fn test_deserialize_accepts_legacy_names() {
        let json = r#"{"calendarStartDay": "friday", "disableWeekDays": true, "onlyCurrentMonth": true}"#;
        let options: CalendarOptions = serde_json::from_str(json).unwrap();

        assert_eq!(options.start_weekday, Some(Weekday::Friday));
        assert_eq!(options.disable_weekdays, Some(true));
        assert_eq!(options.current_month_only, Some(true));
    }

    #[test]
    fn test_invalid_weekday_falls_back() {
        let options: CalendarOptions =
            serde_json::from_str(r#"{"startWeekday": "caturday"}"#).unwrap();
        assert_eq!(options.start_weekday, None);

        let mut defaults = CalendarDefaults::new();
        defaults.set_start_weekday(Some(Weekday::Wednesday));
        assert_eq!(defaults.resolve(&options).start_weekday, Weekday::Wednesday);
    }
}
