//! HTTP submission sink.
//!
//! Converts the validated snapshot into a `Registration` and POSTs it as JSON.
//! The request runs detached; its result comes back to the component as
//! `Msg::SubmissionFinished`.

use common::form::SubmissionSink;
use common::model::registration::{Registration, RegistrationReceipt};
use common::model::student::StudentForm;
use gloo_net::http::Request;
use yew::html::Scope;
use yew::platform::spawn_local;

use super::messages::Msg;
use super::state::RegistrationFormComponent;

pub struct HttpSink {
    endpoint: String,
    link: Scope<RegistrationFormComponent>,
}

impl HttpSink {
    pub fn new(endpoint: impl Into<String>, link: Scope<RegistrationFormComponent>) -> Self {
        Self {
            endpoint: endpoint.into(),
            link,
        }
    }
}

impl SubmissionSink for HttpSink {
    fn submit(&mut self, snapshot: &StudentForm) {
        let registration = Registration::from(snapshot);
        let endpoint = self.endpoint.clone();
        let link = self.link.clone();
        spawn_local(async move {
            let result = post_registration(&endpoint, &registration).await;
            link.send_message(Msg::SubmissionFinished(result));
        });
    }
}

async fn post_registration(
    endpoint: &str,
    registration: &Registration,
) -> Result<RegistrationReceipt, String> {
    let response = Request::post(endpoint)
        .json(registration)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.ok() {
        response
            .json::<RegistrationReceipt>()
            .await
            .map_err(|e| e.to_string())
    } else {
        Err(format!(
            "{} {}",
            response.status(),
            response.text().await.unwrap_or_default()
        ))
    }
}
