use serde::Deserialize;

use crate::date::SelectedDate;

fn default_true()        -> bool { true }
fn default_minute_step() -> u32  { 1 }

/// Host-supplied picker settings. Every field has a default, so an empty
/// `[picker]` table (or none at all) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PickerOptions {
    /// `c-<N>:c+<M>`; bounds the year chooser around the displayed year.
    #[serde(default)]
    pub year_range:               Option<String>,
    #[serde(default = "default_true")]
    pub show_time_picker:         bool,
    #[serde(default = "default_true")]
    pub show_calendar:            bool,
    /// Commit immediately when a day is activated.
    #[serde(default)]
    pub one_click_date_selection: bool,
    #[serde(default = "default_minute_step")]
    pub minute_step:              u32,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            year_range:               None,
            show_time_picker:         default_true(),
            show_calendar:            default_true(),
            one_click_date_selection: false,
            minute_step:              default_minute_step(),
        }
    }
}

/// Which sub-widgets are active, derived from the two `show_*` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerMode {
    DateOnly,
    TimeOnly,
    DateTime,
}

impl PickerMode {
    pub fn has_calendar(self) -> bool { matches!(self, PickerMode::DateOnly | PickerMode::DateTime) }
    pub fn has_time(self)     -> bool { matches!(self, PickerMode::TimeOnly | PickerMode::DateTime) }
}

impl PickerOptions {
    pub fn mode(&self) -> PickerMode {
        match (self.show_calendar, self.show_time_picker) {
            (true,  false) => PickerMode::DateOnly,
            (false, true)  => PickerMode::TimeOnly,
            (true,  true)  => PickerMode::DateTime,
            (false, false) => {
                tracing::warn!("both calendar and time picker disabled, showing both");
                PickerMode::DateTime
            }
        }
    }
}

// ─── Callbacks ────────────────────────────────────────────────────────────────

type Hook     = Box<dyn FnMut()>;
type DateHook = Box<dyn FnMut(SelectedDate)>;

/// Lifecycle notifications sent back to the host. All optional.
#[derive(Default)]
pub struct PickerCallbacks {
    pub before_show:         Option<Hook>,
    pub on_apply:            Option<DateHook>,
    pub on_cancel:           Option<Hook>,
    pub on_date_time_changed: Option<DateHook>,
}

impl PickerCallbacks {
    pub fn before_show(mut self, f: impl FnMut() + 'static) -> Self {
        self.before_show = Some(Box::new(f));
        self
    }

    pub fn on_apply(mut self, f: impl FnMut(SelectedDate) + 'static) -> Self {
        self.on_apply = Some(Box::new(f));
        self
    }

    pub fn on_cancel(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_cancel = Some(Box::new(f));
        self
    }

    pub fn on_date_time_changed(mut self, f: impl FnMut(SelectedDate) + 'static) -> Self {
        self.on_date_time_changed = Some(Box::new(f));
        self
    }

    pub(crate) fn fire_before_show(&mut self) {
        if let Some(f) = self.before_show.as_mut() { f(); }
    }

    pub(crate) fn fire_apply(&mut self, date: SelectedDate) {
        if let Some(f) = self.on_apply.as_mut() { f(date); }
    }

    pub(crate) fn fire_cancel(&mut self) {
        if let Some(f) = self.on_cancel.as_mut() { f(); }
    }

    pub(crate) fn fire_changed(&mut self, date: SelectedDate) {
        if let Some(f) = self.on_date_time_changed.as_mut() { f(date); }
    }
}

impl std::fmt::Debug for PickerCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PickerCallbacks")
            .field("before_show", &self.before_show.is_some())
            .field("on_apply", &self.on_apply.is_some())
            .field("on_cancel", &self.on_cancel.is_some())
            .field("on_date_time_changed", &self.on_date_time_changed.is_some())
            .finish()
    }
}
