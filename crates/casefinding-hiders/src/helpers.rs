use std::cell::RefCell;
use std::rc::Rc;

use tracing::trace;

use crate::changes::{Subscription, ValueChanges};
use crate::control::CanHide;
use crate::hider::Hider;

/// Hide and disable the control.
pub fn hide_control<C: CanHide + ?Sized>(control: &mut C) {
    control.set_hidden(true);
    control.set_disabled(true);
    trace!("control hidden");
}

/// Unhide the control. It stays disabled until something re-enables it.
pub fn show_control<C: CanHide + ?Sized>(control: &mut C) {
    control.set_hidden(false);
    trace!(disabled = control.disabled(), "control shown");
}

pub fn set_hider_for_control<C: CanHide + ?Sized>(control: &mut C, hider: Hider) {
    control.hiders_mut().push(hider);
}

pub fn clear_hiders_for_control<C: CanHide + ?Sized>(control: &mut C) {
    control.hiders_mut().clear();
    control.set_hidden(false);
}

/// Re-run every hider, in order, then hide the control if any hider says so.
///
/// Hiders that read the control itself need [`evaluate_shared_control_hiders`];
/// here the control is exclusively borrowed while they run.
pub fn evaluate_control_hiders<C: CanHide + ?Sized>(control: &mut C) {
    for hider in control.hiders_mut().iter_mut() {
        hider.re_evaluate();
    }
    let hidden = control.hiders().iter().any(|h| h.to_hide);
    control.set_hidden(hidden);

    trace!(hiders = control.hiders().len(), hidden, "evaluated control hiders");
}

/// Same pass as [`evaluate_control_hiders`] for a shared control.
///
/// The hiders are taken out while they run, so an evaluator may borrow the
/// control. Hiders added during the pass are kept after the existing ones.
pub fn evaluate_shared_control_hiders<C: CanHide + ?Sized>(control: &RefCell<C>) {
    let mut hiders = std::mem::take(control.borrow_mut().hiders_mut());
    for hider in hiders.iter_mut() {
        hider.re_evaluate();
    }

    let mut control = control.borrow_mut();
    let added = std::mem::replace(control.hiders_mut(), hiders);
    control.hiders_mut().extend(added);
    let hidden = control.hiders().iter().any(|h| h.to_hide);
    control.set_hidden(hidden);

    trace!(hiders = control.hiders().len(), hidden, "evaluated control hiders");
}

/// Re-evaluate the control's hiders on every value `changes` emits.
///
/// The listener only holds a weak reference, so it does not keep the control
/// alive; once the control is gone, emissions are ignored. Drop or
/// unsubscribe the returned token to stop re-evaluating.
pub fn set_up_re_evaluation_when_value_changes<C, T>(
    control: &Rc<RefCell<C>>,
    changes: &ValueChanges<T>,
) -> Subscription
where
    C: CanHide + 'static,
    T: Clone + 'static,
{
    let control = Rc::downgrade(control);
    changes.subscribe(move |_| {
        if let Some(control) = control.upgrade() {
            evaluate_shared_control_hiders::<C>(&control);
        }
    })
}
