//! The picker proper: calendar state, the command controller, lifecycle.

pub mod calendar;
pub mod controller;

pub use calendar::{Calendar, CalendarView, DefaultCalendar};
pub use controller::{Anchor, DateTimePicker, PickerCommand};
