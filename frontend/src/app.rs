use crate::components::registration::RegistrationFormComponent;
use yew::{html, Component, Context, Html};

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="page">
                <h1 class="page-title">{"ACLC Mandaue Student Form"}</h1>
                <RegistrationFormComponent />
            </div>
        }
    }
}
