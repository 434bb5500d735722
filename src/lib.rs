#![doc(test(attr(deny(warnings))))]

//! Weekly Budget offers expense aggregation, budget projection and
//! persisted application state for a single-user weekly spending tracker.

pub mod app;
pub mod config;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;
pub mod views;

pub use app::BudgetApp;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Weekly Budget tracing initialized.");
    });
}
