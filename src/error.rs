use thiserror::Error;

/// Errors raised at the edges of the picker, where raw numbers come in.
///
/// Navigation and grid computation never fail; only turning untyped input
/// into a [`SelectedDate`](crate::date::SelectedDate) or a page can.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickerError {
    /// `month` is 0-based here, the same as everywhere else in the picker.
    #[error("invalid date: year {year}, month {month}, day {day}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("invalid time: {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: u32, minute: u32, second: u32 },

    /// Month as the user typed it (1-based).
    #[error("month {0} is not in 1..=12")]
    InvalidMonth(u32),

    #[error("cannot parse month page from {0:?} (expected YYYY-MM)")]
    InvalidPage(String),
}

pub type Result<T> = std::result::Result<T, PickerError>;
