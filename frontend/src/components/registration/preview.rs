//! Browser-side preview provider backed by object URLs.
//!
//! Each accepted photo is wrapped in a `Blob` and exposed through
//! `URL.createObjectURL`, which the view uses as the `<img>` source. Object
//! URLs pin the blob in memory until revoked, so `release` revokes them. If the
//! browser refuses to create one, a `data:` URL is used instead; those hold no
//! browser resource and need no revocation.

use base64::{engine::general_purpose, Engine as _};
use common::form::PreviewProvider;
use common::model::photo::Photo;
use gloo_console::error;
use gloo_file::Blob;
use web_sys::Url;

#[derive(Default)]
pub struct ObjectUrlPreviews;

impl PreviewProvider for ObjectUrlPreviews {
    type Handle = String;

    fn create(&mut self, photo: &Photo) -> String {
        let blob = Blob::new_with_options(photo.bytes.as_slice(), Some(photo.media_type.as_str()));
        match Url::create_object_url_with_blob(&web_sys::Blob::from(blob)) {
            Ok(url) => url,
            Err(err) => {
                error!("object URL unavailable, falling back to data URL", err);
                format!(
                    "data:{};base64,{}",
                    photo.media_type,
                    general_purpose::STANDARD.encode(&photo.bytes)
                )
            }
        }
    }

    fn release(&mut self, handle: String) {
        if handle.starts_with("blob:") {
            if let Err(err) = Url::revoke_object_url(&handle) {
                error!("failed to revoke preview URL", err);
            }
        }
    }
}
