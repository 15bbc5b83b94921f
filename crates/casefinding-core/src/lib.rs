//! casefinding-core
//!
//! Pure domain types shared by the mapper, the scoring client and the form UI.
//! No HTTP dependency; this is the shared vocabulary of the casefinding system.

pub mod error;
pub mod models;
