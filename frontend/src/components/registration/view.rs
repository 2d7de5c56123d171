//! View rendering for the registration form component.
//!
//! Four sections (profile picture, personal, academic and address details)
//! followed by the submit button. Every input carries its wire name in the
//! `name` attribute so a single `oninput` handler can route edits. Styling is
//! left to the stylesheet through the `error` and `focused` classes.

use common::model::field::FieldName;
use common::model::student::YearLevel;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::{field_label, field_placeholder};
use super::messages::Msg;
use super::state::RegistrationFormComponent;

pub fn view(component: &RegistrationFormComponent, ctx: &Context<RegistrationFormComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="registration-card">
            <div class="registration-header">
                <h2>{"Student Registration"}</h2>
                <p>{"Please fill in all required information"}</p>
            </div>
            <div class="registration-body">
                { build_photo_section(component, link) }
                { build_section("Personal Information", &[FieldName::FirstName, FieldName::MiddleName, FieldName::LastName], component, link) }
                { build_section("Academic Information", &[FieldName::StudentId, FieldName::Course, FieldName::Year, FieldName::Section], component, link) }
                { build_section("Address Information", &[FieldName::Street, FieldName::CityMunicipality, FieldName::Province, FieldName::PostalCode], component, link) }
                <div class="submit-row">
                    <button
                        type="button"
                        class="submit-btn"
                        disabled={component.submitting}
                        onclick={link.callback(|_| Msg::Submit)}
                    >
                        { if component.submitting { "Submitting..." } else { "Submit Registration" } }
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Preview circle, hidden file input and the "Choose Photo" trigger.
fn build_photo_section(component: &RegistrationFormComponent, link: &Scope<RegistrationFormComponent>) -> Html {
    let on_change = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::FileSelected(input.files().and_then(|files| files.get(0)))
    });

    html! {
        <div class="photo-section">
            <h3>{ field_label(FieldName::ProfilePicture) }</h3>
            <div class="photo-preview">
                {
                    match component.store.preview() {
                        Some(url) => html! { <img src={url.clone()} alt="Profile Preview" /> },
                        None => html! { <i class="material-icons">{"upload"}</i> },
                    }
                }
            </div>
            <button type="button" class="photo-btn" onclick={link.callback(|_| Msg::OpenFileDialog)}>
                {"Choose Photo"}
            </button>
            <input
                type="file"
                accept="image/*"
                style="display:none;"
                ref={component.file_input_ref.clone()}
                onchange={on_change}
            />
            { error_text(component, FieldName::ProfilePicture) }
        </div>
    }
}

fn build_section(
    title: &str,
    fields: &[FieldName],
    component: &RegistrationFormComponent,
    link: &Scope<RegistrationFormComponent>,
) -> Html {
    html! {
        <div class="form-section">
            <h3>{ title }</h3>
            <div class="form-grid">
                { for fields.iter().map(|field| build_field(*field, component, link)) }
            </div>
        </div>
    }
}

fn build_field(field: FieldName, component: &RegistrationFormComponent, link: &Scope<RegistrationFormComponent>) -> Html {
    let class = classes!(
        "field-input",
        component.store.error(field).map(|_| "error"),
        component.store.is_focused(field).then_some("focused"),
    );
    let value = component.store.values().text(field).unwrap_or_default().to_string();
    let onfocus = link.callback(move |_: FocusEvent| Msg::Focus(Some(field)));
    let onblur = link.callback(|_: FocusEvent| Msg::Focus(None));

    let control = if field == FieldName::Year {
        let onchange = link.callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            Msg::InputChanged { name: select.name(), value: select.value() }
        });
        html! {
            <select name={field.as_str()} {class} {onchange} {onfocus} {onblur}>
                <option value="" selected={value.is_empty()}>{"Select Year"}</option>
                { for YearLevel::ALL.iter().map(|year| html! {
                    <option value={year.label()} selected={value == year.label()}>{ year.label() }</option>
                }) }
            </select>
        }
    } else {
        let oninput = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::InputChanged { name: input.name(), value: input.value() }
        });
        let maxlength = field.max_len().map(|max| max.to_string());
        html! {
            <input
                type="text"
                name={field.as_str()}
                placeholder={field_placeholder(field)}
                {value}
                {maxlength}
                {class}
                {oninput}
                {onfocus}
                {onblur}
            />
        }
    };

    html! {
        <div class="form-field">
            <label>{ field_label(field) }</label>
            { control }
            { error_text(component, field) }
        </div>
    }
}

fn error_text(component: &RegistrationFormComponent, field: FieldName) -> Html {
    match component.store.error(field) {
        Some(message) => html! { <p class="field-error">{ message.to_string() }</p> },
        None => html! {},
    }
}
