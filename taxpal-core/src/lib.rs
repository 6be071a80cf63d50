//! Core tax estimation engine for TaxPal, a freelance-tax estimator.
//!
//! This crate is the computation heart of the application: a pure, stateless
//! pipeline that turns gross income and deductible business expenses into a
//! self-employment tax liability, a federal income tax liability, and a
//! quarterly payment obligation for a single filer. Everything around it
//! (ledger persistence, report formatting, HTTP, UI) lives outside this crate
//! and talks to it only through [`TaxEstimator`].
//!
//! This is an estimation model, not a filing engine: it assumes a single
//! filer, ignores state taxes, AMT, and QBI phase-outs, and models the four
//! estimated payments as equal shares.

pub mod calculations;
pub mod models;
pub mod policy;

pub use calculations::{BracketSchedule, Quarter, ScheduledPayment, TaxEstimator};
pub use models::{
    DeductionCategory, DeductionEntry, PolicyError, TaxBracket, TaxBreakdown, TaxInput,
    TaxYearPolicy,
};
