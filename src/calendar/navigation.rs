use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

use super::grid::{compute, GridLayout};
use crate::date::SelectedDate;
use crate::error::PickerError;
use crate::locale::Locale;

/// The month currently on screen. `month` is 0-based and always in 0..=11.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayedPage {
    pub year:  i32,
    pub month: u32,
}

impl DisplayedPage {
    pub fn new(year: i32, month: u32) -> Self {
        debug_assert!(month < 12, "month out of range: {month}");
        Self { year, month }
    }

    pub fn of(date: &SelectedDate) -> Self { Self::new(date.year(), date.month()) }

    /// The month before. January of `i32::MIN` has none and stays put.
    pub fn previous(self) -> Self {
        match (self.month, self.year.checked_sub(1)) {
            (0, Some(year)) => Self::new(year, 11),
            (0, None)       => self,
            (m, _)          => Self::new(self.year, m - 1),
        }
    }

    /// The month after. December of `i32::MAX` has none and stays put.
    pub fn next(self) -> Self {
        match (self.month, self.year.checked_add(1)) {
            (11, Some(year)) => Self::new(year, 0),
            (11, None)       => self,
            (m, _)           => Self::new(self.year, m + 1),
        }
    }
}

/// Parses `YYYY-MM` with a human (1-based) month, e.g. `2024-02`.
impl FromStr for DisplayedPage {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || PickerError::InvalidPage(s.to_owned());
        let (y, m) = s.trim().rsplit_once('-').ok_or_else(bad)?;
        let year:  i32 = y.parse().map_err(|_| bad())?;
        let month: u32 = m.parse().map_err(|_| bad())?;
        if !(1..=12).contains(&month) {
            return Err(PickerError::InvalidMonth(month));
        }
        Ok(Self::new(year, month - 1))
    }
}

impl fmt::Display for DisplayedPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month + 1)
    }
}

/// Paging state machine over [`DisplayedPage`]. Never touches the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationEngine {
    page: DisplayedPage,
}

impl NavigationEngine {
    pub fn new(page: DisplayedPage) -> Self { Self { page } }

    pub fn page(&self) -> DisplayedPage { self.page }

    pub fn previous_month(&mut self) -> DisplayedPage {
        self.page = self.page.previous();
        tracing::debug!(year = self.page.year, month = self.page.month, "previous month");
        self.page
    }

    pub fn next_month(&mut self) -> DisplayedPage {
        self.page = self.page.next();
        tracing::debug!(year = self.page.year, month = self.page.month, "next month");
        self.page
    }

    /// Moves straight to `(year, month)`. Callers only pass values offered by
    /// the month and year choosers, so nothing is range-checked here.
    pub fn jump_to(&mut self, year: i32, month: u32) -> DisplayedPage {
        self.page = DisplayedPage::new(year, month);
        tracing::debug!(year, month, "jump to page");
        self.page
    }

    pub fn layout(&self, selected: NaiveDate, today: NaiveDate, locale: &dyn Locale) -> GridLayout {
        compute(self.page.year, self.page.month, selected, today, locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previous_from_january_wraps_year_once() {
        let mut nav = NavigationEngine::new(DisplayedPage::new(2024, 0));
        assert_eq!(nav.previous_month(), DisplayedPage::new(2023, 11));
        assert_eq!(nav.previous_month(), DisplayedPage::new(2023, 10));
    }

    #[test]
    fn next_from_december_wraps_year_once() {
        let mut nav = NavigationEngine::new(DisplayedPage::new(2023, 11));
        assert_eq!(nav.next_month(), DisplayedPage::new(2024, 0));
        assert_eq!(nav.next_month(), DisplayedPage::new(2024, 1));
    }

    #[test]
    fn twelve_steps_move_one_year() {
        let start = DisplayedPage::new(2024, 5);
        let mut nav = NavigationEngine::new(start);
        for _ in 0..12 { nav.next_month(); }
        assert_eq!(nav.page(), DisplayedPage::new(2025, 5));
        for _ in 0..24 { nav.previous_month(); }
        assert_eq!(nav.page(), DisplayedPage::new(2023, 5));
    }

    #[test]
    fn paging_stops_at_the_ends_of_i32() {
        let mut nav = NavigationEngine::new(DisplayedPage::new(i32::MAX, 11));
        assert_eq!(nav.next_month(), DisplayedPage::new(i32::MAX, 11));
        assert_eq!(nav.previous_month(), DisplayedPage::new(i32::MAX, 10));

        let mut nav = NavigationEngine::new(DisplayedPage::new(i32::MIN, 0));
        assert_eq!(nav.previous_month(), DisplayedPage::new(i32::MIN, 0));
        assert_eq!(nav.next_month(), DisplayedPage::new(i32::MIN, 1));

        assert_eq!(DisplayedPage::new(i32::MAX, 5).next(), DisplayedPage::new(i32::MAX, 6));
        assert_eq!(DisplayedPage::new(i32::MIN, 5).previous(), DisplayedPage::new(i32::MIN, 4));
    }

    #[test]
    fn parses_human_month() {
        assert_eq!("2024-02".parse::<DisplayedPage>(), Ok(DisplayedPage::new(2024, 1)));
        assert_eq!("-44-03".parse::<DisplayedPage>(), Ok(DisplayedPage::new(-44, 2)));
        assert_eq!("2024-13".parse::<DisplayedPage>(), Err(PickerError::InvalidMonth(13)));
        assert_eq!("2024-0".parse::<DisplayedPage>(), Err(PickerError::InvalidMonth(0)));
        assert!(matches!("feb".parse::<DisplayedPage>(), Err(PickerError::InvalidPage(_))));
        assert_eq!(DisplayedPage::new(2024, 1).to_string(), "2024-02");
    }

    #[test]
    fn jump_replaces_page() {
        let mut nav = NavigationEngine::new(DisplayedPage::new(2024, 5));
        assert_eq!(nav.jump_to(1990, 11), DisplayedPage::new(1990, 11));
        assert_eq!(nav.page(), DisplayedPage::new(1990, 11));
    }
}
