//! Calendar variants: the selection + displayed page pair, and what one
//! month page looks like once laid out.

use crate::calendar::{resolve, DisplayedPage, GridLayout, NavigationEngine, YearRangeWindow};
use crate::clock::Clock;
use crate::date::SelectedDate;
use crate::error::Result;
use crate::locale::Locale;
use crate::render::GridRenderer;

/// Everything a renderer needs for one month page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarView {
    pub page:   DisplayedPage,
    pub grid:   GridLayout,
    /// Selected date in long form.
    pub header: String,
    /// Month chooser labels, index = 0-based month.
    pub months: Vec<String>,
    /// Year chooser bounds, pivoted on the displayed year.
    pub years:  YearRangeWindow,
}

/// A calendar variant. Paging lives in the composed [`NavigationEngine`];
/// the provided methods drive it and re-layout afterwards.
pub trait Calendar {
    /// Replaces the selection and shows its month.
    fn set_date(&mut self, date: SelectedDate);

    /// Replaces the selection, leaving the displayed page alone.
    fn select(&mut self, date: SelectedDate);

    fn date(&self) -> SelectedDate;
    fn layout(&self) -> &CalendarView;
    fn engine_mut(&mut self) -> &mut NavigationEngine;

    /// Recomputes the cached [`CalendarView`].
    fn refresh(&mut self);

    fn render(&self, out: &mut dyn GridRenderer);

    fn page(&self) -> DisplayedPage { self.layout().page }

    fn previous_month(&mut self) {
        self.engine_mut().previous_month();
        self.refresh();
    }

    fn next_month(&mut self) {
        self.engine_mut().next_month();
        self.refresh();
    }

    fn jump_to(&mut self, year: i32, month: u32) {
        self.engine_mut().jump_to(year, month);
        self.refresh();
    }

    /// Selects `day` of the displayed month, keeping the time of day.
    fn select_day(&mut self, day: u32) -> Result<SelectedDate> {
        let page = self.page();
        let date = self.date().with_ymd(page.year, page.month, day)?;
        self.select(date);
        Ok(date)
    }
}

// ─── Default variant ──────────────────────────────────────────────────────────

/// Month grid with month/year choosers and prev/next arrows.
pub struct DefaultCalendar {
    selected:   SelectedDate,
    engine:     NavigationEngine,
    years:      YearRangeWindow,
    locale:     Box<dyn Locale>,
    clock:      Box<dyn Clock>,
    view:       CalendarView,
}

impl DefaultCalendar {
    pub fn new(
        date:       SelectedDate,
        year_range: Option<String>,
        locale:     Box<dyn Locale>,
        clock:      Box<dyn Clock>,
    ) -> Self {
        let engine = NavigationEngine::new(DisplayedPage::of(&date));
        let years  = resolve(year_range.as_deref(), date.year());
        let view   = build_view(&engine, &date, years, &*locale, &*clock);
        Self { selected: date, engine, years, locale, clock, view }
    }
}

impl Calendar for DefaultCalendar {
    fn set_date(&mut self, date: SelectedDate) {
        self.selected = date;
        self.engine   = NavigationEngine::new(DisplayedPage::of(&date));
        self.refresh();
    }

    fn select(&mut self, date: SelectedDate) {
        self.selected = date;
        self.refresh();
    }

    fn date(&self) -> SelectedDate { self.selected }
    fn layout(&self) -> &CalendarView { &self.view }
    fn engine_mut(&mut self) -> &mut NavigationEngine { &mut self.engine }

    fn refresh(&mut self) {
        self.view = build_view(&self.engine, &self.selected, self.years, &*self.locale, &*self.clock);
    }

    fn render(&self, out: &mut dyn GridRenderer) {
        let v = &self.view;
        out.header(&v.header);
        out.choosers(&v.months[v.page.month as usize % 12], v.page.year, &v.years);
        out.weekdays(&v.grid.headers);
        for week in v.grid.weeks() { out.week(week); }
    }
}

fn build_view(
    engine:     &NavigationEngine,
    selected:   &SelectedDate,
    years:      YearRangeWindow,
    locale:     &dyn Locale,
    clock:      &dyn Clock,
) -> CalendarView {
    let page = engine.page();
    CalendarView {
        page,
        grid:   engine.layout(selected.date(), clock.today(), locale),
        header: locale.format_long_date(selected.date()),
        months: (0..12).map(|m| locale.month_name(m)).collect(),
        years:  years.around(page.year),
    }
}
