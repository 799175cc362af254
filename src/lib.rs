//! Date/time picker core: month grid layout, page navigation and the
//! command/callback contract between a picker and its host form.
//!
//! Rendering, locale tables and the clock are collaborators passed in
//! through traits ([`render::GridRenderer`], [`locale::Locale`],
//! [`clock::Clock`]).

pub mod calendar;
pub mod clock;
pub mod date;
pub mod error;
pub mod locale;
pub mod options;
pub mod picker;
pub mod render;

pub use date::SelectedDate;
pub use error::PickerError;
pub use options::{PickerCallbacks, PickerMode, PickerOptions};
pub use picker::{Anchor, Calendar, DateTimePicker, PickerCommand};
