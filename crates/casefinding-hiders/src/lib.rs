//! casefinding-hiders
//!
//! Show/hide state for form controls. Each control carries a list of hiders;
//! the control is hidden while any of them says so, and the list is
//! re-evaluated whenever the control's value changes.
//!
//! Everything here is single-threaded and synchronous: a value change is
//! fully processed, hiders and all, before `emit` returns.

pub mod changes;
pub mod control;
pub mod helpers;
pub mod hider;
