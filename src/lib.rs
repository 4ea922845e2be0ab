#![doc(test(attr(deny(warnings))))]

//! FinTrack keeps a personal ledger of income, expenses and debts, derives
//! dashboard totals from it, exports it as JSON or CSV, and can ask an
//! external text generator for spending advice.

pub mod advisor;
pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod report;
pub mod storage;
pub mod utils;

pub use errors::{FinTrackError, Result, ValidationError};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("FinTrack tracing initialized.");
    });
}
