#![doc(test(attr(deny(warnings))))]

//! Membership Core splits the cost of a fixed-term family membership across
//! members who join at different dates and reconciles what each member owes
//! or is owed against the payer who fronted the full price.

pub mod cli;
pub mod config;
pub mod currency;
pub mod errors;
pub mod family;
pub mod report;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Membership Core tracing initialized.");
    });
}
