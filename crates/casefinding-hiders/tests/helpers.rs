use std::cell::{Cell, RefCell};
use std::rc::Rc;

use casefinding_hiders::changes::ValueChanges;
use casefinding_hiders::control::{CanHide, FormControl};
use casefinding_hiders::helpers::{
    clear_hiders_for_control, evaluate_control_hiders, hide_control, set_hider_for_control,
    set_up_re_evaluation_when_value_changes, show_control,
};
use casefinding_hiders::hider::Hider;
use serde_json::json;

fn fixed(to_hide: bool) -> Hider {
    Hider::new(format!("{to_hide}"), move || to_hide)
}

fn watching(flag: &Rc<Cell<bool>>) -> Hider {
    let flag = Rc::clone(flag);
    Hider::new("sex === 'F'", move || flag.get())
}

#[test]
fn hide_control_hides_and_disables() {
    let mut control = FormControl::new("preGnant");
    hide_control(&mut control);
    assert!(control.hidden());
    assert!(control.disabled());
}

#[test]
fn show_control_unhides_but_leaves_disabled() {
    let mut control = FormControl::new("preGnant");
    hide_control(&mut control);
    show_control(&mut control);
    assert!(!control.hidden());
    assert!(control.disabled());

    control.enable();
    assert!(!control.disabled());
}

#[test]
fn set_hider_appends_in_order() {
    let mut control = FormControl::new("preGnant");
    set_hider_for_control(&mut control, fixed(true));
    set_hider_for_control(&mut control, fixed(false));

    let expressions: Vec<&str> = control
        .hiders()
        .iter()
        .map(|h| h.hide_when_expression.as_str())
        .collect();
    assert_eq!(expressions, ["true", "false"]);
}

#[test]
fn clear_hiders_empties_list_and_unhides() {
    let mut control = FormControl::new("preGnant");
    set_hider_for_control(&mut control, fixed(true));
    set_hider_for_control(&mut control, fixed(true));
    evaluate_control_hiders(&mut control);
    assert!(control.hidden());

    clear_hiders_for_control(&mut control);
    assert!(control.hiders().is_empty());
    assert!(!control.hidden());
}

#[test]
fn any_hider_hiding_hides_the_control() {
    let mut control = FormControl::new("preGnant");
    set_hider_for_control(&mut control, fixed(true));
    set_hider_for_control(&mut control, fixed(false));
    set_hider_for_control(&mut control, fixed(true));

    evaluate_control_hiders(&mut control);
    assert!(control.hidden());
}

#[test]
fn no_hider_hiding_shows_the_control() {
    let mut control = FormControl::new("preGnant");
    hide_control(&mut control);
    set_hider_for_control(&mut control, fixed(false));
    set_hider_for_control(&mut control, fixed(false));

    evaluate_control_hiders(&mut control);
    assert!(!control.hidden());
}

#[test]
fn evaluation_with_no_hiders_shows_the_control() {
    let mut control = FormControl::new("preGnant");
    control.set_hidden(true);
    evaluate_control_hiders(&mut control);
    assert!(!control.hidden());
}

#[test]
fn evaluation_replaces_stale_results() {
    let mut control = FormControl::new("preGnant");
    set_hider_for_control(&mut control, fixed(false).with_to_hide(true));
    assert!(control.hiders()[0].to_hide);

    evaluate_control_hiders(&mut control);
    assert!(!control.hiders()[0].to_hide);
    assert!(!control.hidden());
}

#[test]
fn value_change_re_evaluates_synchronously() {
    let female = Rc::new(Cell::new(false));
    let control = Rc::new(RefCell::new(FormControl::new("preGnant")));
    control.borrow_mut().set_hiding_fn(watching(&female));

    let changes = ValueChanges::new();
    let _subscription = set_up_re_evaluation_when_value_changes(&control, &changes);

    female.set(true);
    changes.emit(&json!("F"));
    assert!(control.borrow().hidden());

    female.set(false);
    changes.emit(&json!("M"));
    assert!(!control.borrow().hidden());
}

#[test]
fn unsubscribing_stops_re_evaluation() {
    let female = Rc::new(Cell::new(false));
    let control = Rc::new(RefCell::new(FormControl::new("preGnant")));
    control.borrow_mut().set_hiding_fn(watching(&female));

    let changes = ValueChanges::new();
    let subscription = set_up_re_evaluation_when_value_changes(&control, &changes);
    subscription.unsubscribe();

    female.set(true);
    changes.emit(&json!("F"));
    assert!(!control.borrow().hidden());
    assert_eq!(changes.listener_count(), 0);
}

#[test]
fn dropped_control_is_not_kept_alive() {
    let control = Rc::new(RefCell::new(FormControl::new("preGnant")));
    control.borrow_mut().set_hiding_fn(fixed(true));

    let changes = ValueChanges::new();
    let _subscription = set_up_re_evaluation_when_value_changes(&control, &changes);

    let weak = Rc::downgrade(&control);
    drop(control);
    assert!(weak.upgrade().is_none());

    changes.emit(&json!(1));
}

#[test]
fn sibling_value_change_updates_hidden_state() {
    let sex = Rc::new(RefCell::new(FormControl::new("sex")));
    let pregnant = Rc::new(RefCell::new(FormControl::new("preGnant")));

    let watched = Rc::downgrade(&sex);
    pregnant.borrow_mut().set_hiding_fn(Hider::new("sex !== 'F'", move || {
        watched
            .upgrade()
            .is_some_and(|c| c.borrow().value() != &json!("F"))
    }));
    let changes = sex.borrow().value_changes().clone();
    let _subscription = set_up_re_evaluation_when_value_changes(&pregnant, &changes);

    FormControl::set_value(&sex, json!("M"));
    assert_eq!(sex.borrow().value(), &json!("M"));
    assert!(pregnant.borrow().hidden());

    FormControl::set_value(&sex, json!("F"));
    assert!(!pregnant.borrow().hidden());
}

#[test]
fn own_value_change_re_evaluates() {
    let calls = Rc::new(Cell::new(0));
    let control = Rc::new(RefCell::new(FormControl::new("noSexPartners")));
    let counter = Rc::clone(&calls);
    control.borrow_mut().set_hiding_fn(Hider::new("true", move || {
        counter.set(counter.get() + 1);
        true
    }));
    let _subscription = FormControl::re_evaluate_on_change(&control);

    FormControl::set_value(&control, json!(0));
    FormControl::set_value(&control, json!(2));
    assert_eq!(calls.get(), 2);
    assert!(control.borrow().hidden());
}

#[test]
fn hider_reading_its_own_control_re_evaluates_on_change() {
    let control = Rc::new(RefCell::new(FormControl::new("noSexPartners")));
    let watched = Rc::downgrade(&control);
    control.borrow_mut().set_hiding_fn(Hider::new("noSexPartners === 0", move || {
        watched
            .upgrade()
            .is_some_and(|c| c.borrow().value() == &json!(0))
    }));
    let _subscription = FormControl::re_evaluate_on_change(&control);

    FormControl::set_value(&control, json!(0));
    assert!(control.borrow().hidden());

    FormControl::set_value(&control, json!(2));
    assert!(!control.borrow().hidden());
    assert_eq!(control.borrow().hiders().len(), 1);
}

#[test]
fn hider_added_during_evaluation_is_kept() {
    let control = Rc::new(RefCell::new(FormControl::new("preGnant")));
    let target = Rc::downgrade(&control);
    let mut added = false;
    control.borrow_mut().set_hiding_fn(Hider::new("false", move || {
        if !added {
            added = true;
            if let Some(c) = target.upgrade() {
                c.borrow_mut().set_hiding_fn(fixed(true).with_to_hide(true));
            }
        }
        false
    }));

    FormControl::refresh_hidden_state(&control);
    assert_eq!(control.borrow().hiders().len(), 2);
    assert!(control.borrow().hidden());
}
