//! Rendering seam. The picker hands each part of a month view to a
//! [`GridRenderer`]; [`TextRenderer`] is the plain-text one used by the
//! `grid` subcommand and in tests.

use std::fmt::Write;

use crate::calendar::{DayCell, WeekdayHeader, YearRangeWindow};

pub trait GridRenderer {
    fn header(&mut self, text: &str);
    /// Month/year choosers; `years` bounds the selectable years.
    fn choosers(&mut self, month_label: &str, year: i32, years: &YearRangeWindow);
    fn weekdays(&mut self, headers: &[WeekdayHeader]);
    fn week(&mut self, cells: &[DayCell]);
}

/// Fixed-width text, five columns per day, one week per line.
/// Today is wrapped in `[..]`, the selection in `*..*`.
#[derive(Debug, Default)]
pub struct TextRenderer {
    out: String,
}

impl TextRenderer {
    pub fn new() -> Self { Self::default() }
    pub fn finish(self) -> String { self.out }
}

impl GridRenderer for TextRenderer {
    fn header(&mut self, text: &str) {
        let _ = writeln!(self.out, "{text}");
    }

    fn choosers(&mut self, month_label: &str, year: i32, years: &YearRangeWindow) {
        let (a, b) = (years.first_year(), years.last_year());
        let _ = writeln!(self.out, "< {month_label} {year} > ({a}-{b})");
    }

    fn weekdays(&mut self, headers: &[WeekdayHeader]) {
        let line: String = headers.iter()
            .map(|h| format!("  {:<2} ", h.label.chars().take(2).collect::<String>()))
            .collect();
        let _ = writeln!(self.out, "{}", line.trim_end());
    }

    fn week(&mut self, cells: &[DayCell]) {
        let line: String = cells.iter().map(|c| match c.day {
            None                     => "     ".to_owned(),
            Some(d) if c.is_selected => format!(" *{d:>2}*"),
            Some(d) if c.is_today    => format!(" [{d:>2}]"),
            Some(d)                  => format!("  {d:>2} "),
        }).collect();
        let _ = writeln!(self.out, "{}", line.trim_end());
    }
}
