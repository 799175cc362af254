//! Proleptic Gregorian date math for month grids.
//!
//! Months are 0-based throughout. These helpers are plain integer
//! arithmetic so they stay total for any year, including ones chrono's
//! `NaiveDate` cannot represent.

pub mod grid;
pub mod navigation;
pub mod year_range;

pub use grid::{compute, DayCell, GridLayout, WeekdayHeader};
pub use navigation::{DisplayedPage, NavigationEngine};
pub use year_range::{resolve, YearRangeWindow};

const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

// Sakamoto's month offsets for day-of-week.
const WEEKDAY_OFFSET: [i64; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `month` (0 = January) of `year`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    debug_assert!(month < 12, "month out of range: {month}");
    if month == 1 && is_leap_year(year) { 29 } else { DAYS_IN_MONTH[month as usize % 12] }
}

/// Day of week for a date, 0 = Sunday through 6 = Saturday.
pub fn weekday_of(year: i32, month: u32, day: u32) -> u32 {
    debug_assert!(month < 12, "month out of range: {month}");
    let m = (month % 12) as usize;
    let y = year as i64 - if m < 2 { 1 } else { 0 };
    let n = y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
        + WEEKDAY_OFFSET[m] + day as i64;
    n.rem_euclid(7) as u32
}

/// True for Sunday (0) and Saturday (6).
pub fn is_weekend(weekday: u32) -> bool { weekday == 0 || weekday == 6 }
