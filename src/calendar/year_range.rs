//! `yearRange` option parsing: `c-<N>:c+<M>` around a pivot year.

use regex::Regex;
use std::ops::RangeInclusive;
use std::sync::LazyLock;

static YEAR_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"c-(\d+):c\+(\d+)").expect("invalid year range regex")
});

/// Selectable years around a pivot. `years_before`/`years_after` are counts,
/// so the window always holds `years_before + years_after + 1` years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRangeWindow {
    pub pivot:        i32,
    pub years_before: u32,
    pub years_after:  u32,
}

impl YearRangeWindow {
    pub const DEFAULT_BEFORE: u32 = 0;
    pub const DEFAULT_AFTER:  u32 = 1;

    pub fn fallback(pivot: i32) -> Self {
        Self { pivot, years_before: Self::DEFAULT_BEFORE, years_after: Self::DEFAULT_AFTER }
    }

    pub fn first_year(&self) -> i32 { self.pivot.saturating_sub_unsigned(self.years_before) }
    pub fn last_year(&self)  -> i32 { self.pivot.saturating_add_unsigned(self.years_after) }

    pub fn years(&self) -> RangeInclusive<i32> { self.first_year()..=self.last_year() }

    pub fn contains(&self, year: i32) -> bool { self.years().contains(&year) }

    /// The same offsets re-centred on another pivot.
    pub fn around(&self, pivot: i32) -> Self { Self { pivot, ..*self } }
}

/// Parses a year-range expression. Anything that does not match the grammar,
/// including counts too large for `u32`, yields the `[pivot, pivot + 1]`
/// fallback instead of an error.
pub fn resolve(expression: Option<&str>, pivot: i32) -> YearRangeWindow {
    let Some(expr) = expression else {
        return YearRangeWindow::fallback(pivot);
    };
    let parsed = YEAR_RANGE.captures(expr).and_then(|caps| {
        let before = caps[1].parse::<u32>().ok()?;
        let after  = caps[2].parse::<u32>().ok()?;
        Some((before, after))
    });
    match parsed {
        Some((years_before, years_after)) => YearRangeWindow { pivot, years_before, years_after },
        None => {
            tracing::debug!("yearRange {expr:?} not understood, using default window");
            YearRangeWindow::fallback(pivot)
        }
    }
}
