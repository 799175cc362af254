//! Turns discrete user actions into calendar calls and host notifications.

use crate::clock::{Clock, SystemClock};
use crate::date::SelectedDate;
use crate::locale::{EnglishLocale, Locale};
use crate::options::{PickerCallbacks, PickerMode, PickerOptions};
use crate::render::GridRenderer;

use super::calendar::{Calendar, CalendarView, DefaultCalendar};

// ─── Commands ─────────────────────────────────────────────────────────────────

/// Everything a front end can ask of the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerCommand {
    /// Day number within the displayed month.
    DayActivated(u32),
    PrevActivated,
    NextActivated,
    /// 0-based month from the month chooser.
    MonthChosen(u32),
    YearChosen(i32),
    /// Hours to add; wraps within the day.
    HourAdjusted(i32),
    /// Minute steps to add; wraps within the hour.
    MinuteAdjusted(i32),
    Apply,
    Cancel,
}

/// Where the overlay collaborator should place the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Anchor {
    pub x:     u16,
    pub y:     u16,
    pub width: u16,
}

// ─── Picker ───────────────────────────────────────────────────────────────────

pub struct DateTimePicker {
    options:   PickerOptions,
    mode:      PickerMode,
    callbacks: PickerCallbacks,
    calendar:  Box<dyn Calendar>,
    visible:   Option<Anchor>,
}

impl DateTimePicker {
    /// English names, local clock, selection starting at "now".
    pub fn new(options: PickerOptions, callbacks: PickerCallbacks) -> Self {
        Self::with_collaborators(options, callbacks, Box::new(EnglishLocale), Box::new(SystemClock))
    }

    pub fn with_collaborators(
        options:   PickerOptions,
        callbacks: PickerCallbacks,
        locale:    Box<dyn Locale>,
        clock:     Box<dyn Clock>,
    ) -> Self {
        let now      = SelectedDate::from(clock.now());
        let calendar = DefaultCalendar::new(now, options.year_range.clone(), locale, clock);
        Self::with_calendar(options, callbacks, Box::new(calendar))
    }

    /// Uses a caller-built calendar variant.
    pub fn with_calendar(
        options:   PickerOptions,
        callbacks: PickerCallbacks,
        calendar:  Box<dyn Calendar>,
    ) -> Self {
        let mode = options.mode();
        Self { options, mode, callbacks, calendar, visible: None }
    }

    pub fn options(&self) -> &PickerOptions { &self.options }
    pub fn mode(&self) -> PickerMode { self.mode }

    pub fn date(&self) -> SelectedDate { self.calendar.date() }

    /// Replaces the working copy and shows its month. Fires nothing.
    pub fn set_date(&mut self, date: impl Into<SelectedDate>) {
        self.calendar.set_date(date.into());
    }

    pub fn view(&self) -> &CalendarView { self.calendar.layout() }

    pub fn render(&self, out: &mut dyn GridRenderer) { self.calendar.render(out); }

    pub fn is_visible(&self) -> bool { self.visible.is_some() }
    pub fn anchor(&self) -> Option<Anchor> { self.visible }

    // ── Lifecycle ─────────────────────────────────────────────────────────────

    /// Opens the picker next to `anchor`, paging back to the selected month.
    pub fn show(&mut self, anchor: Anchor) {
        let date = self.calendar.date();
        self.calendar.set_date(date);
        self.callbacks.fire_before_show();
        self.visible = Some(anchor);
        tracing::info!(%date, "picker shown");
    }

    pub fn apply(&mut self) {
        let date = self.calendar.date();
        self.visible = None;
        tracing::info!(%date, "picker applied");
        self.callbacks.fire_apply(date);
    }

    /// Closes without committing. The host restores its own prior value.
    pub fn cancel(&mut self) {
        self.visible = None;
        tracing::info!("picker cancelled");
        self.callbacks.fire_cancel();
    }

    // ── Dispatch ──────────────────────────────────────────────────────────────

    pub fn dispatch(&mut self, cmd: PickerCommand) {
        use PickerCommand as C;

        match cmd {
            C::DayActivated(_) | C::PrevActivated | C::NextActivated
            | C::MonthChosen(_) | C::YearChosen(_) if !self.mode.has_calendar() => {
                tracing::debug!(?cmd, "calendar hidden, command ignored");
            }
            C::HourAdjusted(_) | C::MinuteAdjusted(_) if !self.mode.has_time() => {
                tracing::debug!(?cmd, "time picker hidden, command ignored");
            }

            C::DayActivated(day) => self.day_activated(day),
            C::PrevActivated     => self.calendar.previous_month(),
            C::NextActivated     => self.calendar.next_month(),
            C::MonthChosen(m)    => {
                let year = self.calendar.page().year;
                self.calendar.jump_to(year, m);
            }
            C::YearChosen(y)     => {
                let month = self.calendar.page().month;
                self.calendar.jump_to(y, month);
            }
            C::HourAdjusted(delta)   => self.adjust_hour(delta),
            C::MinuteAdjusted(delta) => self.adjust_minute(delta),
            C::Apply                 => self.apply(),
            C::Cancel                => self.cancel(),
        }
    }

    fn day_activated(&mut self, day: u32) {
        let date = match self.calendar.select_day(day) {
            Ok(d)  => d,
            Err(e) => { tracing::warn!("day activation ignored: {e}"); return; }
        };
        if self.options.one_click_date_selection {
            self.apply();
        } else {
            self.callbacks.fire_changed(date);
        }
    }

    fn adjust_hour(&mut self, delta: i32) {
        let cur  = self.calendar.date();
        let hour = (cur.hour() as i32 + delta).rem_euclid(24) as u32;
        self.time_changed(cur.with_hour(hour));
    }

    fn adjust_minute(&mut self, delta: i32) {
        let cur    = self.calendar.date();
        let step   = self.options.minute_step.clamp(1, 60) as i32;
        let minute = (cur.minute() as i32 + delta * step).rem_euclid(60) as u32;
        self.time_changed(cur.with_minute(minute));
    }

    fn time_changed(&mut self, date: SelectedDate) {
        self.calendar.select(date);
        self.callbacks.fire_changed(date);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::DisplayedPage;
    use crate::clock::FixedClock;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Default)]
    struct Log {
        shown:     u32,
        applied:   Vec<SelectedDate>,
        cancelled: u32,
        changed:   Vec<SelectedDate>,
    }

    fn picker(options: PickerOptions) -> (DateTimePicker, Rc<RefCell<Log>>) {
        let log = Rc::new(RefCell::new(Log::default()));
        let (a, b, c, d) = (log.clone(), log.clone(), log.clone(), log.clone());
        let callbacks = PickerCallbacks::default()
            .before_show(move || a.borrow_mut().shown += 1)
            .on_apply(move |dt| b.borrow_mut().applied.push(dt))
            .on_cancel(move || c.borrow_mut().cancelled += 1)
            .on_date_time_changed(move |dt| d.borrow_mut().changed.push(dt));
        let now = SelectedDate::from_parts(2024, 5, 10, 12, 0, 0).unwrap().naive();
        let p = DateTimePicker::with_collaborators(
            options, callbacks, Box::new(EnglishLocale), Box::new(FixedClock(now)),
        );
        (p, log)
    }

    #[test]
    fn starts_at_clock_now() {
        let (p, _) = picker(PickerOptions::default());
        assert_eq!(p.date(), SelectedDate::from_parts(2024, 5, 10, 12, 0, 0).unwrap());
        assert_eq!(p.view().page, DisplayedPage::new(2024, 5));
        assert!(!p.is_visible());
    }

    #[test]
    fn month_and_year_choosers_jump() {
        let (mut p, log) = picker(PickerOptions::default());
        p.dispatch(PickerCommand::MonthChosen(0));
        assert_eq!(p.view().page, DisplayedPage::new(2024, 0));
        p.dispatch(PickerCommand::YearChosen(2025));
        assert_eq!(p.view().page, DisplayedPage::new(2025, 0));
        assert!(log.borrow().changed.is_empty());
    }

    #[test]
    fn prev_next_do_not_fire_or_select() {
        let (mut p, log) = picker(PickerOptions::default());
        let before = p.date();
        p.dispatch(PickerCommand::PrevActivated);
        p.dispatch(PickerCommand::PrevActivated);
        p.dispatch(PickerCommand::NextActivated);
        assert_eq!(p.view().page, DisplayedPage::new(2024, 4));
        assert_eq!(p.date(), before);
        assert!(log.borrow().changed.is_empty());
    }

    #[test]
    fn one_click_selection_applies_and_closes() {
        let opts = PickerOptions { one_click_date_selection: true, ..Default::default() };
        let (mut p, log) = picker(opts);
        p.show(Anchor::default());
        p.dispatch(PickerCommand::DayActivated(3));
        let log = log.borrow();
        assert_eq!(log.applied, vec![SelectedDate::from_parts(2024, 5, 3, 12, 0, 0).unwrap()]);
        assert!(log.changed.is_empty());
        assert!(!p.is_visible());
    }

    #[test]
    fn invalid_day_is_ignored() {
        let (mut p, log) = picker(PickerOptions::default());
        p.dispatch(PickerCommand::DayActivated(31));
        assert_eq!(p.date().day(), 10);
        assert!(log.borrow().changed.is_empty());
    }

    #[test]
    fn show_resets_page_and_fires_before_show() {
        let (mut p, log) = picker(PickerOptions::default());
        p.dispatch(PickerCommand::NextActivated);
        p.show(Anchor { x: 4, y: 2, width: 20 });
        assert_eq!(p.view().page, DisplayedPage::new(2024, 5));
        assert_eq!(p.anchor(), Some(Anchor { x: 4, y: 2, width: 20 }));
        assert_eq!(log.borrow().shown, 1);
    }

    #[test]
    fn cancel_fires_and_hides() {
        let (mut p, log) = picker(PickerOptions::default());
        p.show(Anchor::default());
        p.dispatch(PickerCommand::Cancel);
        assert!(!p.is_visible());
        assert_eq!(log.borrow().cancelled, 1);
        assert!(log.borrow().applied.is_empty());
    }

    #[test]
    fn time_adjustments_wrap() {
        let opts = PickerOptions { minute_step: 15, ..Default::default() };
        let (mut p, log) = picker(opts);
        p.dispatch(PickerCommand::HourAdjusted(13));
        assert_eq!(p.date().hour(), 1);
        assert_eq!(p.date().day(), 10);
        p.dispatch(PickerCommand::MinuteAdjusted(-1));
        assert_eq!(p.date().minute(), 45);
        assert_eq!(p.date().hour(), 1);
        assert_eq!(log.borrow().changed.len(), 2);
    }

    #[test]
    fn time_commands_ignored_in_date_only_mode() {
        let opts = PickerOptions { show_time_picker: false, ..Default::default() };
        let (mut p, log) = picker(opts);
        p.dispatch(PickerCommand::HourAdjusted(1));
        assert_eq!(p.date().hour(), 12);
        assert!(log.borrow().changed.is_empty());
    }

    #[test]
    fn calendar_commands_ignored_in_time_only_mode() {
        let opts = PickerOptions { show_calendar: false, ..Default::default() };
        let (mut p, log) = picker(opts);
        p.dispatch(PickerCommand::NextActivated);
        p.dispatch(PickerCommand::DayActivated(1));
        assert_eq!(p.view().page, DisplayedPage::new(2024, 5));
        assert_eq!(p.date().day(), 10);
        assert!(log.borrow().changed.is_empty());
    }
}
