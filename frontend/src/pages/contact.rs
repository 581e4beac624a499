use log::{error, info};
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::notification::{use_notice, Notice, Toast};
use crate::config::{self, Endpoints, SUPPORT_EMAIL};
use crate::leads::validation::{validate_email, EmailError};
use crate::webhook::{self, GlooWebhook, Webhook, WebhookError};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Please enter your name")]
    NameRequired,
    #[error("{0}")]
    Email(EmailError),
    #[error("Please enter a message")]
    MessageRequired,
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::NameRequired);
        }
        validate_email(self.email.trim()).map_err(ContactError::Email)?;
        if self.message.trim().is_empty() {
            return Err(ContactError::MessageRequired);
        }
        Ok(())
    }
}

pub async fn send_contact_message<W>(
    webhook: &W,
    endpoints: &Endpoints,
    message: &ContactMessage,
) -> Result<(), WebhookError>
where
    W: Webhook + ?Sized,
{
    webhook::post(webhook, &endpoints.contact, message).await.map(|_| ())
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let draft = use_state(ContactMessage::default);
    let sending = use_state(|| false);
    let in_flight = use_mut_ref(|| false);
    let notice = use_notice();

    let on_name = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(ContactMessage { name: input.value(), ..(*draft).clone() });
        })
    };
    let on_email = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(ContactMessage { email: input.value(), ..(*draft).clone() });
        })
    };
    let on_message = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            draft.set(ContactMessage { message: input.value(), ..(*draft).clone() });
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let sending = sending.clone();
        let in_flight = in_flight.clone();
        let notice = notice.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let message = (*draft).clone();
            if let Err(reason) = message.validate() {
                notice.show(Notice::error(reason.to_string()));
                return;
            }
            if in_flight.replace(true) {
                return;
            }
            sending.set(true);

            let draft = draft.clone();
            let sending = sending.clone();
            let in_flight = in_flight.clone();
            let notice = notice.clone();
            spawn_local(async move {
                match send_contact_message(&GlooWebhook, &config::endpoints(), &message).await {
                    Ok(()) => {
                        info!("Contact message sent");
                        draft.set(ContactMessage::default());
                        notice.show(Notice::success(
                            "Thank you for your message. We will get back to you soon!",
                        ));
                    }
                    Err(e) => {
                        error!("Contact message failed: {}", e);
                        notice.show(Notice::error("Failed to send message. Please try again later."));
                    }
                }
                *in_flight.borrow_mut() = false;
                sending.set(false);
            });
        })
    };

    html! {
        <div class="contact-page">
            <Toast notice={notice.notice()} />
            <div class="contact-header">
                <h1>{"Get in "}<span class="gradient-text">{"Touch"}</span></h1>
                <p>{"Let's discuss how we can transform your lead generation"}</p>
            </div>
            <div class="contact-grid">
                <div class="contact-card">
                    <h3>{"Contact Information"}</h3>
                    <p class="label">{"Email"}</p>
                    <a href={format!("mailto:{}", SUPPORT_EMAIL)}>{SUPPORT_EMAIL}</a>
                </div>
                <form class="contact-card contact-form" novalidate=true onsubmit={on_submit}>
                    <label for="contact-name">{"Name"}</label>
                    <input id="contact-name" type="text" placeholder="Your name"
                        value={draft.name.clone()} oninput={on_name} />
                    <label for="contact-email">{"Email"}</label>
                    <input id="contact-email" type="email" placeholder="your@email.com"
                        value={draft.email.clone()} oninput={on_email} />
                    <label for="contact-message">{"Message"}</label>
                    <textarea id="contact-message" rows="5" placeholder="How can we help you?"
                        value={draft.message.clone()} oninput={on_message} />
                    <button type="submit" disabled={*sending}>
                        if *sending { {"Sending..."} } else { {"Send Message"} }
                    </button>
                </form>
            </div>
            <style>
                {r#"
                .contact-page {
                    min-height: 100vh;
                    padding: 8rem 2rem 6rem;
                    color: #fff;
                    max-width: 1100px;
                    margin: 0 auto;
                }
                .contact-header { text-align: center; margin-bottom: 3rem; }
                .contact-header h1 { font-size: 3rem; margin-bottom: 1rem; }
                .contact-header p, .contact-card .label { color: #999; }
                .gradient-text {
                    background: linear-gradient(45deg, #cc73f8, #b44fe0);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .contact-grid { display: grid; grid-template-columns: 1fr 2fr; gap: 2rem; }
                .contact-card {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(204, 115, 248, 0.15);
                    border-radius: 16px;
                    padding: 2rem;
                }
                .contact-card a { color: #cc73f8; }
                .contact-form { display: flex; flex-direction: column; gap: 0.75rem; }
                .contact-form input, .contact-form textarea {
                    padding: 0.75rem 1rem;
                    border-radius: 8px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(0, 0, 0, 0.3);
                    color: #fff;
                    font: inherit;
                }
                .contact-form button {
                    margin-top: 1rem;
                    padding: 1rem;
                    border: none;
                    border-radius: 10px;
                    background: linear-gradient(45deg, #cc73f8, #b44fe0);
                    color: #fff;
                    cursor: pointer;
                }
                .contact-form button:disabled { opacity: 0.5; cursor: not-allowed; }
                @media (max-width: 900px) {
                    .contact-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::webhook::testing::RecordingWebhook;
    use futures::executor::block_on;

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Do you cover EU companies?".to_string(),
        }
    }

    #[test]
    fn every_field_is_required() {
        assert_eq!(message().validate(), Ok(()));
        assert_eq!(
            ContactMessage { name: " ".to_string(), ..message() }.validate(),
            Err(ContactError::NameRequired)
        );
        assert_eq!(
            ContactMessage { email: "ada@example".to_string(), ..message() }.validate(),
            Err(ContactError::Email(EmailError::InvalidFormat))
        );
        assert_eq!(
            ContactMessage { message: String::new(), ..message() }.validate(),
            Err(ContactError::MessageRequired)
        );
    }

    #[test]
    fn posts_message_to_contact_hook() {
        let endpoints = Endpoints::from_base("https://hooks.test");
        let webhook = RecordingWebhook::default();

        block_on(send_contact_message(&webhook, &endpoints, &message())).unwrap();

        let calls = webhook.calls.borrow();
        assert_eq!(calls[0].0, "https://hooks.test/apollo-contact-us");
        assert_eq!(calls[0].1["name"], "Ada");
        assert_eq!(calls[0].1["message"], "Do you cover EU companies?");
    }

    #[test]
    fn failure_is_reported() {
        let endpoints = Endpoints::from_base("https://hooks.test");
        let webhook = RecordingWebhook::replying(RecordingWebhook::status(503, ""));
        let result = block_on(send_contact_message(&webhook, &endpoints, &message()));
        assert_eq!(result, Err(WebhookError::Status(503)));
    }
}
