#![doc(test(attr(deny(warnings))))]

//! Charter Inquiry holds the draft-handling core of a boat-charter booking
//! inquiry: field validators, a durable draft store, the three-step inquiry
//! wizard, and the summary and completion flows that consume its result.

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod summary;
pub mod utils;
pub mod validation;
pub mod wizard;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Charter inquiry tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
