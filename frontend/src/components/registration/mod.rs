//! Student registration form: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view rendering,
//! and the browser-side collaborators of the shared form core.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `RegistrationFormProps`, `RegistrationFormComponent`).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.

use yew::prelude::*;

mod helpers;
mod messages;
mod preview;
mod props;
mod sink;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::RegistrationFormProps;
pub use state::RegistrationFormComponent;

impl Component for RegistrationFormComponent {
    type Message = Msg;
    type Properties = RegistrationFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        RegistrationFormComponent::new(&props.endpoint, props.retention, ctx.link().clone())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
