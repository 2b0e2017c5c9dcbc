//! Rota recurring-event engine - shared foundation.
//!
//! Error taxonomy, configuration, and the opaque identifier types the rest
//! of the workspace builds on. This crate knows nothing about rules or
//! events; it only carries what every layer needs.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
