//! casefinding-scoring
//!
//! Client for the HIV case-finding scoring service and classification of
//! its predictions into risk tiers.

pub mod client;
pub mod config;
pub mod error;
pub mod response;
pub mod risk;
pub mod transport;
