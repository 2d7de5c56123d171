use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};

use super::photo::Photo;
use super::student::StudentForm;

/// Wire representation of a submitted registration.
///
/// Produced by the frontend from a validated `StudentForm` snapshot and sent as
/// JSON to `POST /api/registrations`. Keys are camelCase to match the form's
/// field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub profile_picture: Option<EncodedPhoto>,
    pub first_name: String,
    #[serde(default)]
    pub middle_name: String,
    pub last_name: String,
    pub student_id: String,
    pub course: String,
    pub year: String,
    pub section: String,
    pub street: String,
    pub city_municipality: String,
    pub province: String,
    pub postal_code: String,
}

/// A photo with its bytes encoded as standard base64.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedPhoto {
    pub file_name: String,
    pub media_type: String,
    pub base64: String,
}

impl EncodedPhoto {
    pub fn decode(&self) -> Result<Photo, String> {
        let bytes = general_purpose::STANDARD
            .decode(&self.base64)
            .map_err(|e| e.to_string())?;
        Ok(Photo::new(self.file_name.clone(), self.media_type.clone(), bytes))
    }
}

impl From<&Photo> for EncodedPhoto {
    fn from(photo: &Photo) -> Self {
        Self {
            file_name: photo.file_name.clone(),
            media_type: photo.media_type.clone(),
            base64: general_purpose::STANDARD.encode(&photo.bytes),
        }
    }
}

impl From<&StudentForm> for Registration {
    fn from(form: &StudentForm) -> Self {
        Self {
            profile_picture: form.profile_picture.as_ref().map(EncodedPhoto::from),
            first_name: form.first_name.clone(),
            middle_name: form.middle_name.clone(),
            last_name: form.last_name.clone(),
            student_id: form.student_id.clone(),
            course: form.course.clone(),
            year: form.year.clone(),
            section: form.section.clone(),
            street: form.street.clone(),
            city_municipality: form.city_municipality.clone(),
            province: form.province.clone(),
            postal_code: form.postal_code.clone(),
        }
    }
}

/// Acknowledgement returned by the backend for an accepted registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationReceipt {
    pub receipt_id: String,
}

impl Registration {
    /// Upper bound of the decoded photo size in bytes, without decoding it.
    pub fn photo_size_estimate(&self) -> usize {
        self.profile_picture
            .as_ref()
            .map_or(0, |p| base64::decoded_len_estimate(p.base64.len()))
    }
}
