//! Defines the properties for the `RegistrationFormComponent`.

use common::form::RetentionPolicy;
use yew::prelude::*;

pub const DEFAULT_ENDPOINT: &str = "/api/registrations";

fn default_endpoint() -> AttrValue {
    AttrValue::Static(DEFAULT_ENDPOINT)
}

/// Properties for the `RegistrationFormComponent`.
///
/// Both values are read once, when the component is created.
#[derive(Properties, PartialEq, Clone)]
pub struct RegistrationFormProps {
    /// URL that accepted registrations are POSTed to as JSON.
    #[prop_or_else(default_endpoint)]
    pub endpoint: AttrValue,

    /// Whether the entered data stays in place after a successful submission
    /// (`Retain`, the default) or the form is cleared (`Reset`).
    #[prop_or_default]
    pub retention: RetentionPolicy,
}
