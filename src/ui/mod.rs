use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{block::Title, Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use datepicker::calendar::{DayCell, WeekdayHeader, YearRangeWindow};
use datepicker::render::GridRenderer;

use crate::app::App;
use crate::theme::Theme;

const POPUP_WIDTH: u16 = 38;

// ─── Grid → ratatui lines ─────────────────────────────────────────────────────

/// Collects the picker's month page as styled lines.
struct TuiRenderer<'t> {
    theme:  &'t Theme,
    cursor: u32,
    lines:  Vec<Line<'static>>,
}

impl GridRenderer for TuiRenderer<'_> {
    fn header(&mut self, text: &str) {
        self.lines.push(Line::from(Span::styled(
            format!(" {text}"),
            Style::default().fg(self.theme.fg()).add_modifier(Modifier::BOLD),
        )));
    }

    fn choosers(&mut self, month_label: &str, year: i32, years: &YearRangeWindow) {
        let t      = self.theme;
        let accent = Style::default().fg(t.accent()).add_modifier(Modifier::BOLD);
        let dim    = Style::default().fg(t.muted());
        let range  = format!("  {}–{}", years.first_year(), years.last_year());
        self.lines.push(Line::from(vec![
            Span::styled(" ‹ ", dim),
            Span::styled(format!("{month_label} {year}"), accent),
            Span::styled(" › ", dim),
            Span::styled(range, dim),
        ]));
        self.lines.push(Line::from(""));
    }

    fn weekdays(&mut self, headers: &[WeekdayHeader]) {
        let t = self.theme;
        let spans: Vec<Span> = headers.iter().map(|h| {
            let fg = if h.is_weekend { t.weekend() } else { t.muted() };
            let label: String = h.label.chars().take(2).collect();
            Span::styled(format!("  {label:<3}"), Style::default().fg(fg).add_modifier(Modifier::BOLD))
        }).collect();
        self.lines.push(Line::from(spans));
    }

    fn week(&mut self, cells: &[DayCell]) {
        let t = self.theme;
        let spans: Vec<Span> = cells.iter().map(|c| {
            let Some(d) = c.day else { return Span::raw("     ") };
            let style = if c.is_selected {
                let (bg, fg) = t.selected_highlight();
                Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD)
            } else if c.is_today {
                let (bg, fg) = t.today_highlight();
                Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD)
            } else if c.is_weekend {
                Style::default().fg(t.weekend())
            } else {
                Style::default().fg(t.fg())
            };
            let style = if d == self.cursor { style.add_modifier(Modifier::UNDERLINED) } else { style };
            Span::styled(format!("  {d:>2} "), style)
        }).collect();
        self.lines.push(Line::from(spans));
    }
}

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Draws the form and, when open, the picker popup. Returns the date field's
/// area so the picker can be anchored under it.
pub fn draw(f: &mut Frame, app: &App) -> Rect {
    let t    = &app.theme;
    let area = f.area();

    f.render_widget(Block::default().style(Style::default().bg(t.bg()).fg(t.fg())), area);

    let root = Layout::default().direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ]).split(area);

    let field_area = Rect { width: root[1].width.min(40), ..root[1] };

    draw_title(f, app, root[0]);
    draw_field(f, app, field_area);
    draw_statusbar(f, app, root[3]);

    if let Some(anchor) = app.picker.anchor() {
        draw_picker(f, app, anchor, area);
    }
    field_area
}

fn draw_title(f: &mut Frame, app: &App, area: Rect) {
    let t = &app.theme;
    f.render_widget(
        Paragraph::new(Span::styled(
            " New appointment",
            Style::default().fg(t.accent()).add_modifier(Modifier::BOLD),
        )),
        area,
    );
}

fn draw_field(f: &mut Frame, app: &App, area: Rect) {
    let t       = &app.theme;
    let focused = app.picker.is_visible();
    let block = Block::default()
        .title(Title::from(Span::styled(" Date ", Style::default().fg(t.muted()))))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { t.accent() } else { t.border() }));
    f.render_widget(
        Paragraph::new(app.field.borrow().value.clone()).block(block).style(Style::default().fg(t.fg())),
        area,
    );
}

fn draw_statusbar(f: &mut Frame, app: &App, area: Rect) {
    let t     = &app.theme;
    let hints = if app.picker.is_visible() {
        "  hjkl:move  Space:pick  [ ]:month  { }:month list  < >:year  +/-:hour  , .:minute  Enter:apply  Esc:cancel"
    } else {
        "  Enter:open picker  q:quit"
    };
    let bar = Paragraph::new(Line::from(vec![
        Span::styled(hints, Style::default().fg(t.muted())),
        Span::styled(
            format!("  {}", app.field.borrow().status),
            Style::default().fg(t.accent()).add_modifier(Modifier::ITALIC),
        ),
    ])).style(Style::default().bg(t.popup_bg()));
    f.render_widget(bar, area);
}

fn draw_picker(f: &mut Frame, app: &App, anchor: datepicker::Anchor, area: Rect) {
    let t = &app.theme;

    let mut out = TuiRenderer { theme: t, cursor: app.cursor_day, lines: Vec::new() };
    if app.picker.mode().has_calendar() {
        app.picker.render(&mut out);
    }
    if app.picker.mode().has_time() {
        let d = app.picker.date();
        out.lines.push(Line::from(""));
        out.lines.push(Line::from(vec![
            Span::styled(" Time  ", Style::default().fg(t.muted())),
            Span::styled(
                format!("{:02}:{:02}", d.hour(), d.minute()),
                Style::default().fg(t.fg()).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  step {}m", app.picker.options().minute_step),
                Style::default().fg(t.muted()),
            ),
        ]));
    }

    let height = out.lines.len() as u16 + 2;
    let rect   = popup_rect(anchor, POPUP_WIDTH, height, area);
    f.render_widget(Clear, rect);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(t.border()))
        .style(Style::default().bg(t.popup_bg()));
    f.render_widget(Paragraph::new(out.lines).block(block), rect);
}

// ─── Utilities ────────────────────────────────────────────────────────────────

/// Below the anchor, pulled back inside `bounds` when it would overflow.
fn popup_rect(anchor: datepicker::Anchor, width: u16, height: u16, bounds: Rect) -> Rect {
    let width  = width.min(bounds.width);
    let height = height.min(bounds.height);
    let x = anchor.x.min(bounds.right().saturating_sub(width));
    let y = anchor.y.min(bounds.bottom().saturating_sub(height));
    Rect { x, y, width, height }
}
