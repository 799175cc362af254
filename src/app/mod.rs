use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use datepicker::calendar::days_in_month;
use datepicker::clock::SystemClock;
use datepicker::locale::{EnglishLocale, Locale};
use datepicker::{Anchor, DateTimePicker, PickerCallbacks, PickerCommand, SelectedDate};

use crate::config::AppConfig;
use crate::theme::Theme;
use crate::ui::draw;

// ─── Form field state shared with the picker callbacks ────────────────────────

/// The host form's single date input. Owned by the form; the picker only
/// writes to it through its callbacks.
#[derive(Debug, Default)]
pub struct Field {
    pub value:      String,
    /// Value captured when the picker opened, restored on cancel.
    pub before:     String,
    pub status:     String,
    pub committed:  Option<SelectedDate>,
}

pub type SharedField = Rc<RefCell<Field>>;

// ─── App state ────────────────────────────────────────────────────────────────

pub struct App {
    pub theme:      Theme,
    pub picker:     DateTimePicker,
    pub field:      SharedField,
    /// Keyboard focus inside the open grid (day of the displayed month).
    pub cursor_day: u32,
    pub field_area: Rect,
    pub running:    bool,
}

impl App {
    pub fn new(cfg: AppConfig) -> Self {
        let field  = Rc::new(RefCell::new(Field::default()));
        let locale: Box<dyn Locale> = match cfg.locale {
            Some(table) => Box::new(table),
            None        => Box::new(EnglishLocale),
        };
        let picker = DateTimePicker::with_collaborators(
            cfg.picker, callbacks(&field), locale, Box::new(SystemClock),
        );
        field.borrow_mut().value = picker.date().to_string();
        let cursor_day = picker.date().day();

        Self {
            theme: cfg.theme,
            picker, field, cursor_day,
            field_area: Rect::default(),
            running: true,
        }
    }

    /// Committed value, if the user applied one before quitting.
    pub fn committed(&self) -> Option<SelectedDate> { self.field.borrow().committed }

    // ── TUI loop ──────────────────────────────────────────────────────────────

    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend  = CrosstermBackend::new(stdout);
        let mut term = Terminal::new(backend)?;

        let result = self.event_loop(&mut term);

        disable_raw_mode()?;
        execute!(term.backend_mut(), LeaveAlternateScreen)?;
        term.show_cursor()?;
        result
    }

    fn event_loop(&mut self, term: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        let tick = std::time::Duration::from_millis(100);
        while self.running {
            let mut field_area = self.field_area;
            term.draw(|f| field_area = draw(f, self))?;
            self.field_area = field_area;

            if event::poll(tick)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press { self.on_key(key); }
                }
            }
        }
        Ok(())
    }

    // ── Input ─────────────────────────────────────────────────────────────────

    pub fn on_key(&mut self, key: KeyEvent) {
        if self.picker.is_visible() {
            self.key_picker(key);
        } else {
            self.key_form(key);
        }
    }

    fn key_form(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Enter | KeyCode::Char(' ') => self.open_picker(),
            _ => {}
        }
    }

    fn key_picker(&mut self, key: KeyEvent) {
        let cmd = match key.code {
            KeyCode::Right | KeyCode::Char('l') => { self.move_cursor(1);  None }
            KeyCode::Left  | KeyCode::Char('h') => { self.move_cursor(-1); None }
            KeyCode::Down  | KeyCode::Char('j') => { self.move_cursor(7);  None }
            KeyCode::Up    | KeyCode::Char('k') => { self.move_cursor(-7); None }
            KeyCode::Char(' ') => Some(PickerCommand::DayActivated(self.cursor_day)),
            KeyCode::Char('[') => Some(PickerCommand::PrevActivated),
            KeyCode::Char(']') => Some(PickerCommand::NextActivated),
            KeyCode::Char('{') => Some(PickerCommand::MonthChosen(self.month_option(-1))),
            KeyCode::Char('}') => Some(PickerCommand::MonthChosen(self.month_option(1))),
            KeyCode::Char('<') => Some(PickerCommand::YearChosen(self.year_option(-1))),
            KeyCode::Char('>') => Some(PickerCommand::YearChosen(self.year_option(1))),
            KeyCode::Char('+') => Some(PickerCommand::HourAdjusted(1)),
            KeyCode::Char('-') => Some(PickerCommand::HourAdjusted(-1)),
            KeyCode::Char('.') => Some(PickerCommand::MinuteAdjusted(1)),
            KeyCode::Char(',') => Some(PickerCommand::MinuteAdjusted(-1)),
            KeyCode::Enter     => Some(PickerCommand::Apply),
            KeyCode::Esc       => Some(PickerCommand::Cancel),
            _ => None,
        };
        if let Some(cmd) = cmd {
            self.picker.dispatch(cmd);
            self.clamp_cursor();
        }
    }

    fn open_picker(&mut self) {
        {
            let mut field = self.field.borrow_mut();
            field.before = field.value.clone();
        }
        let area = self.field_area;
        self.picker.show(Anchor { x: area.x, y: area.y + area.height, width: area.width });
        self.cursor_day = self.picker.date().day();
    }

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn move_cursor(&mut self, delta: i32) {
        let page = self.picker.view().page;
        let last = days_in_month(page.year, page.month) as i32;
        self.cursor_day = (self.cursor_day as i32 + delta).clamp(1, last) as u32;
    }

    fn clamp_cursor(&mut self) {
        let page = self.picker.view().page;
        self.cursor_day = self.cursor_day.min(days_in_month(page.year, page.month));
    }

    /// Neighbouring entry in the month chooser, wrapping around the year.
    fn month_option(&self, delta: i32) -> u32 {
        (self.picker.view().page.month as i32 + delta).rem_euclid(12) as u32
    }

    /// Neighbouring entry in the year chooser; stays on the window's ends.
    fn year_option(&self, delta: i32) -> i32 {
        let view = self.picker.view();
        let year = view.page.year.saturating_add(delta);
        if view.years.contains(year) { year } else { view.page.year }
    }
}

fn callbacks(field: &SharedField) -> PickerCallbacks {
    let (shown, applied, cancelled, changed) =
        (field.clone(), field.clone(), field.clone(), field.clone());
    PickerCallbacks::default()
        .before_show(move || {
            shown.borrow_mut().status = "Picking…  Enter: apply  Esc: cancel".into();
        })
        .on_apply(move |date| {
            let mut f = applied.borrow_mut();
            f.value     = date.to_string();
            f.committed = Some(date);
            f.status    = format!("✓ Applied {date}");
        })
        .on_cancel(move || {
            let mut f = cancelled.borrow_mut();
            f.value  = f.before.clone();
            f.status = "✗ Cancelled".into();
        })
        .on_date_time_changed(move |date| {
            changed.borrow_mut().value = date.to_string();
        })
}
