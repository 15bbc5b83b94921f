use std::cell::RefCell;
use std::rc::Rc;

use serde_json::Value;
use tracing::debug;

use crate::changes::{Subscription, ValueChanges};
use crate::helpers;
use crate::hider::Hider;

/// Anything that can be shown or hidden by a list of hiders.
pub trait CanHide {
    fn hidden(&self) -> bool;
    fn set_hidden(&mut self, hidden: bool);
    fn disabled(&self) -> bool;
    fn set_disabled(&mut self, disabled: bool);
    fn hiders(&self) -> &[Hider];
    fn hiders_mut(&mut self) -> &mut Vec<Hider>;
}

/// A single form question's control: its value, visibility and hiders.
pub struct FormControl {
    key: String,
    value: Value,
    hidden: bool,
    disabled: bool,
    hiders: Vec<Hider>,
    value_changes: ValueChanges<Value>,
}

impl FormControl {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Value::Null,
            hidden: false,
            disabled: false,
            hiders: Vec::new(),
            value_changes: ValueChanges::new(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn value_changes(&self) -> &ValueChanges<Value> {
        &self.value_changes
    }

    pub fn hide(&mut self) {
        helpers::hide_control(self);
    }

    pub fn show(&mut self) {
        helpers::show_control(self);
    }

    pub fn enable(&mut self) {
        self.disabled = false;
    }

    pub fn set_hiding_fn(&mut self, hider: Hider) {
        helpers::set_hider_for_control(self, hider);
    }

    pub fn clear_hiding_fns(&mut self) {
        helpers::clear_hiders_for_control(self);
    }

    pub fn update_hidden_state(&mut self) {
        helpers::evaluate_control_hiders(self);
    }

    /// Re-run the hiders of a shared control without holding its borrow,
    /// so hiders may read the control's own value.
    pub fn refresh_hidden_state(this: &Rc<RefCell<Self>>) {
        helpers::evaluate_shared_control_hiders::<Self>(this);
    }

    /// Store a new value and notify listeners.
    ///
    /// The control is not borrowed while listeners run, so they are free to
    /// read or update it.
    pub fn set_value(this: &Rc<RefCell<Self>>, value: Value) {
        let changes = {
            let mut control = this.borrow_mut();
            debug!(key = %control.key, "control value changed");
            control.value = value.clone();
            control.value_changes.clone()
        };
        changes.emit(&value);
    }

    /// Re-evaluate this control's hiders whenever its own value changes.
    pub fn re_evaluate_on_change(this: &Rc<RefCell<Self>>) -> Subscription {
        let changes = this.borrow().value_changes.clone();
        helpers::set_up_re_evaluation_when_value_changes(this, &changes)
    }
}

impl CanHide for FormControl {
    fn hidden(&self) -> bool {
        self.hidden
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    fn disabled(&self) -> bool {
        self.disabled
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    fn hiders(&self) -> &[Hider] {
        &self.hiders
    }

    fn hiders_mut(&mut self) -> &mut Vec<Hider> {
        &mut self.hiders
    }
}
