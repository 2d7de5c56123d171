//! Submission flow: `Idle -> Validating -> {Accepted, Rejected} -> Idle`.
//!
//! A submit request validates the current snapshot synchronously, replaces the
//! store's error map with the result and, only if it is empty, hands the
//! snapshot to the sink. The sink's own outcome is not tracked here.

use crate::model::student::StudentForm;
use crate::validation::{validate, ErrorMap};

use super::preview::PreviewProvider;
use super::store::FormStateStore;

/// Receives a fully validated snapshot. Fire-and-forget from the flow's view.
pub trait SubmissionSink {
    fn submit(&mut self, snapshot: &StudentForm);
}

impl<F: FnMut(&StudentForm)> SubmissionSink for F {
    fn submit(&mut self, snapshot: &StudentForm) {
        self(snapshot)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Validating,
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted,
    /// Every failing field, so all of them can be shown at once.
    Rejected(ErrorMap),
}

impl SubmissionOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionOutcome::Accepted)
    }
}

/// What happens to the form after an accepted submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RetentionPolicy {
    /// Keep the entered data in place.
    #[default]
    Retain,
    /// Return the form to empty defaults and release the preview.
    Reset,
}

pub struct SubmissionFlow<S> {
    sink: S,
    retention: RetentionPolicy,
    state: SubmissionState,
    attempts: u32,
}

impl<S: SubmissionSink> SubmissionFlow<S> {
    pub fn new(sink: S) -> Self {
        Self::with_retention(sink, RetentionPolicy::default())
    }

    pub fn with_retention(sink: S, retention: RetentionPolicy) -> Self {
        Self {
            sink,
            retention,
            state: SubmissionState::Idle,
            attempts: 0,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn retention(&self) -> RetentionPolicy {
        self.retention
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Runs one validation pass over `store` and submits if nothing fails.
    pub fn submit<P: PreviewProvider>(&mut self, store: &mut FormStateStore<P>) -> SubmissionOutcome {
        self.attempts += 1;
        self.transition(SubmissionState::Validating);

        let errors = validate(store.values());
        store.replace_errors(errors.clone());

        let outcome = if errors.is_empty() {
            self.transition(SubmissionState::Accepted);
            log::info!(
                "submission #{} accepted for student `{}`",
                self.attempts,
                store.values().student_id.trim()
            );
            self.sink.submit(store.values());
            if self.retention == RetentionPolicy::Reset {
                store.reset();
            }
            SubmissionOutcome::Accepted
        } else {
            self.transition(SubmissionState::Rejected);
            log::info!(
                "submission #{} rejected: {} field(s) need correction",
                self.attempts,
                errors.len()
            );
            SubmissionOutcome::Rejected(errors)
        };

        self.transition(SubmissionState::Idle);
        outcome
    }

    fn transition(&mut self, next: SubmissionState) {
        log::trace!("submission state {:?} -> {:?}", self.state, next);
        self.state = next;
    }
}
