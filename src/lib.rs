#![doc(test(attr(deny(warnings))))]

//! Calorie Core offers the ledger primitives behind a daily calorie tracker:
//! logged meals and workouts, a configured limit, and a persisted running
//! total, with display updates delivered through a narrow presenter seam.

pub mod errors;
pub mod presenter;
pub mod storage;
pub mod tracker;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Calorie Core tracing initialized.");
    });
}
