//! casefinding-cli
//!
//! Configuration persistence for the `casefinding` binary.

pub mod config;
