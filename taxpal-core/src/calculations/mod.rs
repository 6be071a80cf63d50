//! Tax calculation modules for the freelance estimation engine.
//!
//! The entry point is [`TaxEstimator`], which runs the full estimation
//! pipeline; the bracket schedule and payment schedule are exposed for
//! callers that need the pieces individually.

pub mod bracket_schedule;
pub mod common;
pub mod estimator;
pub mod payments;

pub use bracket_schedule::BracketSchedule;
pub use estimator::TaxEstimator;
pub use payments::{Quarter, ScheduledPayment, payment_schedule};
