use chrono::{Datelike, NaiveDate};

use super::{days_in_month, is_weekend, weekday_of};
use crate::locale::Locale;

// ─── Data types ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekdayHeader {
    pub label:      String,
    pub is_weekend: bool,
}

/// One slot in the month grid. `day == None` pads the grid before the 1st
/// and after the last day; padding cells carry no flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayCell {
    pub day:         Option<u32>,
    pub is_today:    bool,
    pub is_selected: bool,
    pub is_weekend:  bool,
}

impl DayCell {
    pub const EMPTY: DayCell = DayCell {
        day: None, is_today: false, is_selected: false, is_weekend: false,
    };

    pub fn is_empty(&self) -> bool { self.day.is_none() }
}

/// Weekday headers (Sunday first) plus the padded day cells of one month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout {
    pub year:     i32,
    pub month:    u32,
    pub headers:  Vec<WeekdayHeader>,
    pub cells:    Vec<DayCell>,
    pub leading:  usize,
    pub trailing: usize,
}

impl GridLayout {
    pub fn days_in_month(&self) -> usize { self.cells.len() - self.leading - self.trailing }

    /// Rows of 7 cells, Sunday first.
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> { self.cells.chunks(7) }

    pub fn cell(&self, day: u32) -> Option<&DayCell> {
        self.cells.iter().find(|c| c.day == Some(day))
    }

    pub fn today(&self) -> Option<u32> {
        self.cells.iter().find(|c| c.is_today).and_then(|c| c.day)
    }

    pub fn selected(&self) -> Option<u32> {
        self.cells.iter().find(|c| c.is_selected).and_then(|c| c.day)
    }
}

// ─── Layout ───────────────────────────────────────────────────────────────────

/// Lays out the month `(year, month)` (0-based month) with `selected` and
/// `today` highlighted. Pure: same inputs, same grid.
pub fn compute(
    year:     i32,
    month:    u32,
    selected: NaiveDate,
    today:    NaiveDate,
    locale:   &dyn Locale,
) -> GridLayout {
    let first_weekday = weekday_of(year, month, 1) as usize;
    let day_count     = days_in_month(year, month);
    let trailing      = (7 - (first_weekday + day_count as usize) % 7) % 7;

    let is_on = |d: NaiveDate, day: u32| {
        d.year() == year && d.month0() == month && d.day() == day
    };

    let mut cells = Vec::with_capacity(first_weekday + day_count as usize + trailing);
    cells.extend(std::iter::repeat(DayCell::EMPTY).take(first_weekday));
    for day in 1..=day_count {
        let weekday = (first_weekday as u32 + day - 1) % 7;
        cells.push(DayCell {
            day:         Some(day),
            is_today:    is_on(today, day),
            is_selected: is_on(selected, day),
            is_weekend:  is_weekend(weekday),
        });
    }
    cells.extend(std::iter::repeat(DayCell::EMPTY).take(trailing));

    tracing::trace!(year, month, first_weekday, day_count, trailing, "month grid computed");

    GridLayout {
        year,
        month,
        headers: weekday_headers(locale),
        cells,
        leading: first_weekday,
        trailing,
    }
}

/// Sunday-first header row; the first and last columns are the weekend.
pub fn weekday_headers(locale: &dyn Locale) -> Vec<WeekdayHeader> {
    (0..7)
        .map(|i| WeekdayHeader { label: locale.weekday_name(i), is_weekend: i == 0 || i == 6 })
        .collect()
}
