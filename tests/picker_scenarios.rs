//! End-to-end picker behaviour as a host form sees it.

use std::cell::RefCell;
use std::rc::Rc;

use datepicker::calendar::{resolve, DisplayedPage};
use datepicker::clock::FixedClock;
use datepicker::locale::EnglishLocale;
use datepicker::{Anchor, DateTimePicker, PickerCallbacks, PickerCommand, PickerOptions, SelectedDate};

struct Host {
    field:   Rc<RefCell<String>>,
    applied: Rc<RefCell<Vec<SelectedDate>>>,
    changed: Rc<RefCell<Vec<SelectedDate>>>,
}

/// Wires a picker the way a form field does: callbacks write the field,
/// cancel restores the value captured before opening.
fn open_picker(options: PickerOptions, initial: SelectedDate) -> (DateTimePicker, Host) {
    let field   = Rc::new(RefCell::new(initial.to_string()));
    let applied = Rc::new(RefCell::new(Vec::new()));
    let changed = Rc::new(RefCell::new(Vec::new()));
    let old     = initial.to_string();

    let callbacks = PickerCallbacks::default()
        .on_apply({
            let (field, applied) = (field.clone(), applied.clone());
            move |d| { *field.borrow_mut() = d.to_string(); applied.borrow_mut().push(d); }
        })
        .on_date_time_changed({
            let (field, changed) = (field.clone(), changed.clone());
            move |d| { *field.borrow_mut() = d.to_string(); changed.borrow_mut().push(d); }
        })
        .on_cancel({
            let field = field.clone();
            move || *field.borrow_mut() = old.clone()
        });

    let now = SelectedDate::from_ymd(2024, 1, 20).unwrap().naive();
    let mut picker = DateTimePicker::with_collaborators(
        options, callbacks, Box::new(EnglishLocale), Box::new(FixedClock(now)),
    );
    picker.set_date(initial);
    picker.show(Anchor::default());
    (picker, Host { field, applied, changed })
}

#[test]
fn activating_a_day_changes_without_applying() {
    let (mut p, host) = open_picker(PickerOptions::default(), SelectedDate::from_ymd(2024, 1, 1).unwrap());
    assert_eq!(p.view().page, DisplayedPage::new(2024, 1));

    p.dispatch(PickerCommand::DayActivated(15));

    let expected = SelectedDate::from_ymd(2024, 1, 15).unwrap();
    assert_eq!(p.date(), expected);
    assert_eq!(*host.changed.borrow(), vec![expected]);
    assert!(host.applied.borrow().is_empty());
    assert_eq!(p.view().page, DisplayedPage::new(2024, 1));
    assert_eq!(p.view().grid.selected(), Some(15));
    assert!(p.is_visible());
}

#[test]
fn previous_month_from_january_decrements_year_once() {
    let (mut p, _) = open_picker(PickerOptions::default(), SelectedDate::from_ymd(2024, 0, 10).unwrap());
    p.dispatch(PickerCommand::PrevActivated);
    assert_eq!(p.view().page, DisplayedPage::new(2023, 11));
}

#[test]
fn february_2024_grid_shape() {
    let (p, _) = open_picker(PickerOptions::default(), SelectedDate::from_ymd(2024, 1, 1).unwrap());
    let g = &p.view().grid;
    assert_eq!((g.leading, g.days_in_month(), g.trailing), (4, 29, 2));
    assert_eq!(g.cells.len(), 35);
    assert_eq!(g.today(), Some(20));
}

#[test]
fn year_chooser_options_from_range() {
    let opts = PickerOptions { year_range: Some("c-5:c+2".into()), ..Default::default() };
    let (p, _) = open_picker(opts, SelectedDate::from_ymd(2024, 3, 1).unwrap());
    assert_eq!(p.view().years.years(), 2019..=2026);
    assert_eq!(resolve(None, 2024).years().collect::<Vec<_>>(), vec![2024, 2025]);
}

#[test]
fn navigate_choose_then_apply() {
    let (mut p, host) = open_picker(PickerOptions::default(), SelectedDate::from_ymd(2024, 1, 1).unwrap());
    p.dispatch(PickerCommand::NextActivated);
    p.dispatch(PickerCommand::YearChosen(2025));
    p.dispatch(PickerCommand::MonthChosen(11));
    p.dispatch(PickerCommand::DayActivated(24));
    p.dispatch(PickerCommand::Apply);

    let expected = SelectedDate::from_ymd(2025, 11, 24).unwrap();
    assert_eq!(*host.applied.borrow(), vec![expected]);
    assert_eq!(*host.field.borrow(), "2025-12-24 00:00:00");
    assert!(!p.is_visible());
}

#[test]
fn cancel_lets_host_restore_prior_value() {
    let initial = SelectedDate::from_ymd(2024, 1, 1).unwrap();
    let (mut p, host) = open_picker(PickerOptions::default(), initial);
    p.dispatch(PickerCommand::DayActivated(9));
    assert_eq!(*host.field.borrow(), "2024-02-09 00:00:00");

    p.dispatch(PickerCommand::Cancel);
    assert_eq!(*host.field.borrow(), initial.to_string());
    assert!(host.applied.borrow().is_empty());
}

#[test]
fn reopening_shows_selected_month_again() {
    let (mut p, _) = open_picker(PickerOptions::default(), SelectedDate::from_ymd(2024, 1, 1).unwrap());
    p.dispatch(PickerCommand::NextActivated);
    p.dispatch(PickerCommand::NextActivated);
    p.cancel();
    p.show(Anchor::default());
    assert_eq!(p.view().page, DisplayedPage::new(2024, 1));
}
