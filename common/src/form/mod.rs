//! Per-session form state and the submission flow built on top of it.

pub mod preview;
pub mod store;
pub mod submission;

use thiserror::Error;

use crate::model::field::FieldName;

pub use preview::PreviewProvider;
pub use store::FormStateStore;
pub use submission::{RetentionPolicy, SubmissionFlow, SubmissionOutcome, SubmissionSink, SubmissionState};

/// Misuse of the store's API. User input problems are never reported here;
/// they end up in the `ErrorMap`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown form field `{0}`")]
    UnknownField(String),
    #[error("field `{0}` is not a text field")]
    NotATextField(FieldName),
}
