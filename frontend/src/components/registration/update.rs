//! Update function for the registration form component.
//!
//! Elm-style: receives the component state, the `Context` and a `Msg`, mutates
//! the state and returns whether the view should re-render.
//!
//! Key behaviors
//! - Field edits go straight to the store, which clears that field's error.
//! - Selected files are read into memory and offered to the store as a `Photo`.
//! - Submit runs one validation pass; accepted snapshots are POSTed by the sink.

use common::form::{RetentionPolicy, SubmissionOutcome};
use common::model::photo::Photo;
use gloo_console::{error, log};
use gloo_file::futures::read_as_bytes;
use gloo_file::File;
use yew::prelude::*;

use super::helpers::show_toast;
use super::messages::Msg;
use super::state::RegistrationFormComponent;

pub const SUCCESS_MESSAGE: &str = "Registration submitted successfully!";

pub fn update(
    component: &mut RegistrationFormComponent,
    ctx: &Context<RegistrationFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::InputChanged { name, value } => match component.store.set_field_by_name(&name, value) {
            Ok(()) => true,
            Err(err) => {
                error!(format!("ignored input change: {}", err));
                false
            }
        },
        Msg::Focus(field) => {
            component.store.set_focus(field);
            true
        }
        Msg::OpenFileDialog => {
            if let Some(input) = component.file_input_ref.cast::<web_sys::HtmlInputElement>() {
                input.click();
            }
            false
        }
        Msg::FileSelected(None) => false,
        Msg::FileSelected(Some(file)) => {
            let selection = component.photo_selections.begin();
            let file = File::from(file);
            let link = ctx.link().clone();
            wasm_bindgen_futures::spawn_local(async move {
                match read_as_bytes(&file).await {
                    Ok(bytes) => link.send_message(Msg::PhotoLoaded {
                        selection,
                        photo: Photo::new(file.name(), file.raw_mime_type(), bytes),
                    }),
                    Err(err) => link.send_message(Msg::PhotoReadFailed {
                        selection,
                        reason: err.to_string(),
                    }),
                }
            });
            false
        }
        Msg::PhotoLoaded { selection, .. } | Msg::PhotoReadFailed { selection, .. }
            if !component.photo_selections.is_latest(selection) =>
        {
            log!(format!("discarding photo read #{} superseded by a newer pick", selection));
            false
        }
        Msg::PhotoLoaded { photo, .. } => {
            if !component.store.set_profile_picture(photo) {
                component.clear_file_input();
            }
            true
        }
        Msg::PhotoReadFailed { reason, .. } => {
            error!(format!("could not read selected photo: {}", reason));
            show_toast("Could not read the selected file.");
            false
        }
        Msg::Submit => {
            if component.submitting {
                return false;
            }
            match component.flow.submit(&mut component.store) {
                SubmissionOutcome::Accepted => {
                    component.submitting = true;
                    if component.flow.retention() == RetentionPolicy::Reset {
                        component.clear_file_input();
                    }
                }
                SubmissionOutcome::Rejected(errors) => {
                    log!(format!("registration rejected: {} field(s) need correction", errors.len()));
                }
            }
            true
        }
        Msg::SubmissionFinished(result) => {
            component.submitting = false;
            match result {
                Ok(receipt) => {
                    log!(format!("registration received, receipt {}", receipt.receipt_id));
                    show_toast(SUCCESS_MESSAGE);
                }
                Err(err) => {
                    error!(format!("registration failed: {}", err));
                    show_toast(&format!("Registration failed: {}", err));
                }
            }
            true
        }
    }
}
