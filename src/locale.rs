//! Name tables for weekday headers, the month chooser and the header line.
//!
//! Index 0 is Sunday for weekdays and January for months.

use chrono::{Datelike, Month, NaiveDate, Weekday};
use serde::Deserialize;

pub trait Locale {
    fn weekday_name(&self, index: usize) -> String;
    fn month_name(&self, index: usize) -> String;
    /// BCP 47 tag, e.g. `en` or `de-AT`.
    fn current_locale(&self) -> &str;

    /// Long form of a date for the picker header: "February 15, 2024" for
    /// English tags, "15 February 2024" otherwise.
    fn format_long_date(&self, date: NaiveDate) -> String { long_date(self, date) }
}

fn long_date<L: Locale + ?Sized>(locale: &L, date: NaiveDate) -> String {
    let month = locale.month_name(date.month0() as usize);
    let tag   = locale.current_locale();
    if tag == "en" || tag.starts_with("en-") {
        format!("{month} {}, {}", date.day(), date.year())
    } else {
        format!("{} {month} {}", date.day(), date.year())
    }
}

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun, Weekday::Mon, Weekday::Tue, Weekday::Wed,
    Weekday::Thu, Weekday::Fri, Weekday::Sat,
];

const MONTHS: [Month; 12] = [
    Month::January, Month::February, Month::March,     Month::April,
    Month::May,     Month::June,     Month::July,      Month::August,
    Month::September, Month::October, Month::November, Month::December,
];

/// Short English weekday names and long month names, as chrono spells them.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLocale;

impl Locale for EnglishLocale {
    fn weekday_name(&self, index: usize) -> String { WEEKDAYS[index % 7].to_string() }
    fn month_name(&self, index: usize)   -> String { MONTHS[index % 12].name().to_owned() }
    fn current_locale(&self)             -> &str   { "en" }
}

/// A locale loaded from configuration:
///
/// ```toml
/// [locale]
/// tag      = "de"
/// weekdays = ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"]
/// months   = ["Januar", "Februar", "März", "April", "Mai", "Juni",
///             "Juli", "August", "September", "Oktober", "November", "Dezember"]
/// long_date = "{day}. {month} {year}"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct TableLocale {
    pub tag:       String,
    pub weekdays:  [String; 7],
    pub months:    [String; 12],
    /// `{day}`, `{month}` and `{year}` are substituted.
    #[serde(default)]
    pub long_date: Option<String>,
}

impl Locale for TableLocale {
    fn weekday_name(&self, index: usize) -> String { self.weekdays[index % 7].clone() }
    fn month_name(&self, index: usize)   -> String { self.months[index % 12].clone() }
    fn current_locale(&self)             -> &str   { &self.tag }

    fn format_long_date(&self, date: NaiveDate) -> String {
        match &self.long_date {
            Some(pattern) => pattern
                .replace("{day}", &date.day().to_string())
                .replace("{month}", &self.month_name(date.month0() as usize))
                .replace("{year}", &date.year().to_string()),
            None => long_date(self, date),
        }
    }
}
