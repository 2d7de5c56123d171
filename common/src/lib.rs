//! Shared core of the student registration form.
//!
//! Everything with logic lives here so it can be compiled for both the
//! browser (`frontend`) and native targets (`backend`, tests):
//! - `model`: the FieldSet, field names, year options and photo candidates.
//! - `validation`: the pure validation engine producing an `ErrorMap`.
//! - `form`: the per-session state store, preview handles and submission flow.

pub mod form;
pub mod model;
pub mod validation;
