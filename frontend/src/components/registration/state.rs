//! Component state for the registration form.
//!
//! The component owns one `FormStateStore` (field values, errors, focus and the
//! photo preview URL) and one `SubmissionFlow` wired to the HTTP sink. Both
//! live exactly as long as the mounted component; dropping the component drops
//! the store, which revokes the preview URL.

use common::form::{FormStateStore, RetentionPolicy, SubmissionFlow};
use yew::html::Scope;
use yew::prelude::*;

use super::preview::ObjectUrlPreviews;
use super::sink::HttpSink;

/// Main state container for the `RegistrationFormComponent`.
///
/// Fields are `pub` because they are accessed by `view` and `update` modules.
pub struct RegistrationFormComponent {
    /// Values, errors, focus and preview for this form session.
    pub store: FormStateStore<ObjectUrlPreviews>,

    /// Validation-then-submit flow posting accepted registrations.
    pub flow: SubmissionFlow<HttpSink>,

    /// Reference to the hidden file input used for photo selection.
    pub file_input_ref: NodeRef,

    /// True while an accepted registration is in flight; disables the submit button.
    pub submitting: bool,

    /// Numbers file picks so only the latest one's read result is applied.
    pub photo_selections: PhotoSelections,
}

/// Monotonic counter of file picks. Reads run concurrently and may finish out
/// of order; a result is applied only if it belongs to the latest pick.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PhotoSelections {
    latest: u32,
}

impl PhotoSelections {
    /// Registers a new pick and returns its number.
    pub fn begin(&mut self) -> u32 {
        self.latest = self.latest.wrapping_add(1);
        self.latest
    }

    pub fn is_latest(&self, selection: u32) -> bool {
        selection == self.latest
    }
}

impl RegistrationFormComponent {
    /// Starts an empty session posting to `endpoint`.
    pub fn new(
        endpoint: &str,
        retention: RetentionPolicy,
        link: Scope<RegistrationFormComponent>,
    ) -> Self {
        Self {
            store: FormStateStore::new(ObjectUrlPreviews),
            flow: SubmissionFlow::with_retention(HttpSink::new(endpoint, link), retention),
            file_input_ref: NodeRef::default(),
            submitting: false,
            photo_selections: PhotoSelections::default(),
        }
    }

    /// Empties the hidden file input so picking the same file again still fires `change`.
    pub fn clear_file_input(&self) {
        if let Some(input) = self.file_input_ref.cast::<web_sys::HtmlInputElement>() {
            input.set_value("");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_latest_pick_is_current() {
        let mut selections = PhotoSelections::default();
        let first = selections.begin();
        let second = selections.begin();

        assert_ne!(first, second);
        assert!(!selections.is_latest(first));
        assert!(selections.is_latest(second));
    }

    #[test]
    fn slower_earlier_read_is_discarded() {
        let mut selections = PhotoSelections::default();
        let first = selections.begin();
        let second = selections.begin();

        // second read finishes first, then the first one arrives late
        let applied: Vec<u32> = [second, first]
            .into_iter()
            .filter(|selection| selections.is_latest(*selection))
            .collect();
        assert_eq!(applied, vec![second]);
    }

    #[test]
    fn nothing_is_current_before_any_pick() {
        let selections = PhotoSelections::default();
        assert!(!selections.is_latest(1));
    }
}
