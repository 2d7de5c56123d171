//! Single source of truth for one form session.
//!
//! Holds the field values, the current `ErrorMap`, which field has focus, and
//! the preview handle of the selected profile picture. All mutation goes
//! through the methods below; the validation engine only ever reads a snapshot.

use crate::model::field::FieldName;
use crate::model::photo::Photo;
use crate::model::student::StudentForm;
use crate::validation::{ErrorMap, INVALID_IMAGE};

use super::preview::PreviewProvider;
use super::FormError;

pub struct FormStateStore<P: PreviewProvider> {
    values: StudentForm,
    errors: ErrorMap,
    focused: Option<FieldName>,
    preview: Option<P::Handle>,
    previews: P,
}

impl<P: PreviewProvider> FormStateStore<P> {
    /// Starts a session with empty defaults and no recorded errors.
    pub fn new(previews: P) -> Self {
        Self {
            values: StudentForm::default(),
            errors: ErrorMap::new(),
            focused: None,
            preview: None,
            previews,
        }
    }

    pub fn values(&self) -> &StudentForm {
        &self.values
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error(&self, field: FieldName) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn focused(&self) -> Option<FieldName> {
        self.focused
    }

    pub fn is_focused(&self, field: FieldName) -> bool {
        self.focused == Some(field)
    }

    /// Handle for the currently selected picture. Present iff a picture is.
    pub fn preview(&self) -> Option<&P::Handle> {
        self.preview.as_ref()
    }

    /// Replaces the value of a text or year field.
    ///
    /// No validation happens here. Any error recorded for the field is dropped
    /// straight away, whether or not the new value is acceptable; the next
    /// submission re-checks it. Capped fields keep only their leading
    /// characters.
    pub fn set_field(&mut self, field: FieldName, value: impl Into<String>) -> Result<(), FormError> {
        let slot = self
            .values
            .text_mut(field)
            .ok_or(FormError::NotATextField(field))?;

        let mut value = value.into();
        if let Some(max) = field.max_len() {
            if let Some((cut, _)) = value.char_indices().nth(max) {
                value.truncate(cut);
            }
        }
        *slot = value;

        self.errors.remove(field);
        Ok(())
    }

    /// Same as `set_field`, addressing the field by its wire name.
    pub fn set_field_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        self.set_field(name.parse()?, value)
    }

    /// Offers a new profile picture.
    ///
    /// A candidate that is not an image is discarded, the current picture and
    /// preview stay as they are, and the invalid-image message is recorded.
    /// An accepted picture replaces the current one, gets a fresh preview (the
    /// previous one is released) and clears any picture error.
    ///
    /// Returns whether the candidate was accepted.
    pub fn set_profile_picture(&mut self, photo: Photo) -> bool {
        if !photo.is_image() {
            log::warn!(
                "rejected profile picture `{}` with media type `{}`",
                photo.file_name,
                photo.media_type
            );
            self.errors.insert(FieldName::ProfilePicture, INVALID_IMAGE);
            return false;
        }

        let handle = self.previews.create(&photo);
        if let Some(previous) = self.preview.replace(handle) {
            self.previews.release(previous);
        }
        self.values.profile_picture = Some(photo);
        self.errors.remove(FieldName::ProfilePicture);
        true
    }

    pub fn set_focus(&mut self, field: Option<FieldName>) {
        self.focused = field;
    }

    /// Wholesale replacement, used by the submission flow after a full pass.
    pub fn replace_errors(&mut self, errors: ErrorMap) {
        self.errors = errors;
    }

    /// Returns to empty defaults, releasing the preview if there is one.
    pub fn reset(&mut self) {
        self.release_preview();
        self.values = StudentForm::default();
        self.errors = ErrorMap::new();
        self.focused = None;
    }

    fn release_preview(&mut self) {
        if let Some(handle) = self.preview.take() {
            self.previews.release(handle);
        }
    }
}

impl<P: PreviewProvider> Drop for FormStateStore<P> {
    fn drop(&mut self) {
        self.release_preview();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::preview::testing::CountingPreviews;
    use crate::validation::{validate, PROFILE_PICTURE_REQUIRED};

    fn store() -> (FormStateStore<CountingPreviews>, CountingPreviews) {
        let previews = CountingPreviews::default();
        (FormStateStore::new(previews.clone()), previews)
    }

    fn png(name: &str) -> Photo {
        Photo::new(name, "image/png", vec![0x89, 0x50, 0x4e, 0x47])
    }

    #[test]
    fn starts_empty() {
        let (store, _) = store();
        assert_eq!(store.values(), &StudentForm::default());
        assert!(store.errors().is_empty());
        assert!(store.preview().is_none());
        assert!(store.focused().is_none());
    }

    #[test]
    fn set_field_updates_value() {
        let (mut store, _) = store();
        store.set_field(FieldName::Course, "BSCS").unwrap();
        store.set_field_by_name("cityMunicipality", "Mandaue City").unwrap();
        assert_eq!(store.values().course, "BSCS");
        assert_eq!(store.values().city_municipality, "Mandaue City");
    }

    #[test]
    fn set_field_rejects_unknown_and_non_text_fields() {
        let (mut store, _) = store();
        assert_eq!(
            store.set_field_by_name("nickname", "x"),
            Err(FormError::UnknownField("nickname".into()))
        );
        assert_eq!(
            store.set_field(FieldName::ProfilePicture, "x"),
            Err(FormError::NotATextField(FieldName::ProfilePicture))
        );
        assert_eq!(store.values(), &StudentForm::default());
    }

    #[test]
    fn editing_clears_error_without_revalidating() {
        let (mut store, _) = store();
        store.replace_errors(validate(store.values()));
        assert!(store.error(FieldName::FirstName).is_some());

        store.set_field(FieldName::FirstName, "").unwrap();

        assert!(store.error(FieldName::FirstName).is_none());
        assert!(store.error(FieldName::LastName).is_some());
        assert!(validate(store.values()).contains(FieldName::FirstName));
    }

    #[test]
    fn postal_code_input_is_capped() {
        let (mut store, _) = store();
        store.set_field(FieldName::PostalCode, "601499").unwrap();
        assert_eq!(store.values().postal_code, "6014");
        store.set_field(FieldName::Street, "a very long street name").unwrap();
        assert_eq!(store.values().street, "a very long street name");
    }

    #[test]
    fn accepted_picture_creates_preview_and_clears_error() {
        let (mut store, _) = store();
        store.replace_errors(validate(store.values()));
        assert_eq!(store.error(FieldName::ProfilePicture), Some(PROFILE_PICTURE_REQUIRED));

        assert!(store.set_profile_picture(png("me.png")));

        assert_eq!(store.preview(), Some(&1));
        assert_eq!(store.values().profile_picture, Some(png("me.png")));
        assert!(store.error(FieldName::ProfilePicture).is_none());
    }

    #[test]
    fn new_picture_releases_previous_preview() {
        let (mut store, previews) = store();
        store.set_profile_picture(png("a.png"));
        store.set_profile_picture(png("b.png"));

        assert_eq!(store.preview(), Some(&2));
        let ledger = previews.ledger.borrow();
        assert_eq!(ledger.released, vec![1]);
        assert_eq!(ledger.live.iter().copied().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn non_image_is_rejected_and_keeps_current_picture() {
        let (mut store, previews) = store();
        store.set_profile_picture(png("a.png"));

        let accepted = store.set_profile_picture(Photo::new("cv.pdf", "application/pdf", vec![1]));

        assert!(!accepted);
        assert_eq!(store.values().profile_picture, Some(png("a.png")));
        assert_eq!(store.preview(), Some(&1));
        assert_eq!(store.error(FieldName::ProfilePicture), Some(INVALID_IMAGE));
        assert!(previews.ledger.borrow().released.is_empty());
    }

    #[test]
    fn non_image_without_prior_picture_leaves_it_absent() {
        let (mut store, _) = store();
        store.set_profile_picture(Photo::new("notes.txt", "text/plain", vec![]));
        assert!(store.values().profile_picture.is_none());
        assert!(store.preview().is_none());
        assert_eq!(store.error(FieldName::ProfilePicture), Some(INVALID_IMAGE));
    }

    #[test]
    fn focus_is_tracked_without_touching_errors() {
        let (mut store, _) = store();
        store.replace_errors(validate(store.values()));
        let before = store.errors().clone();

        store.set_focus(Some(FieldName::Province));
        assert!(store.is_focused(FieldName::Province));
        assert!(!store.is_focused(FieldName::Street));
        store.set_focus(None);
        assert_eq!(store.focused(), None);
        assert_eq!(store.errors(), &before);
    }

    #[test]
    fn reset_and_drop_release_preview_once() {
        let (mut store, previews) = store();
        store.set_profile_picture(png("a.png"));
        store.set_field(FieldName::FirstName, "Ana").unwrap();

        store.reset();
        assert!(store.preview().is_none());
        assert_eq!(store.values(), &StudentForm::default());
        assert_eq!(previews.ledger.borrow().released, vec![1]);

        store.set_profile_picture(png("b.png"));
        drop(store);
        let ledger = previews.ledger.borrow();
        assert_eq!(ledger.released, vec![1, 2]);
        assert!(ledger.live.is_empty());
    }
}
