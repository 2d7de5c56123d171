//! Utility functions for the registration form component.

use common::model::field::FieldName;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Displays a temporary notification message at the bottom of the screen.
///
/// Used by `update.rs` to report the outcome of a submission and photo read
/// failures. The toast removes itself after three seconds.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// Human label shown above each input, with `*` on required fields.
pub fn field_label(field: FieldName) -> &'static str {
    match field {
        FieldName::ProfilePicture => "Profile Picture",
        FieldName::FirstName => "First Name *",
        FieldName::MiddleName => "Middle Name",
        FieldName::LastName => "Last Name *",
        FieldName::StudentId => "Student ID *",
        FieldName::Course => "Course *",
        FieldName::Year => "Year *",
        FieldName::Section => "Section *",
        FieldName::Street => "Street Address *",
        FieldName::CityMunicipality => "City/Municipality *",
        FieldName::Province => "Province *",
        FieldName::PostalCode => "Postal Code *",
    }
}

pub fn field_placeholder(field: FieldName) -> &'static str {
    match field {
        FieldName::FirstName => "Enter first name",
        FieldName::MiddleName => "Enter middle name",
        FieldName::LastName => "Enter last name",
        FieldName::StudentId => "Enter student ID",
        FieldName::Course => "Enter course",
        FieldName::Section => "Enter section",
        FieldName::Street => "Enter street address",
        FieldName::CityMunicipality => "Enter city/municipality",
        FieldName::Province => "Enter province",
        FieldName::PostalCode => "Enter postal code",
        FieldName::ProfilePicture | FieldName::Year => "",
    }
}
