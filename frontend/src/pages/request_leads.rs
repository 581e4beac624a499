use gloo_timers::callback::Timeout;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::notification::{Notice, NoticeKind, NoticeSlot, Toast, NOTICE_DISMISS_MS};
use crate::config::{self, Endpoints};
use crate::leads::form::{
    LeadForm, SubmitAttempt, SubmitOutcome, FAILURE_MESSAGE,
};
use crate::leads::mode::Mode;
use crate::leads::pricing::{format_price, range_progress};
use crate::leads::request::send_lead_request;
use crate::webhook::{GlooWebhook, WebhookError};
use crate::Route;

const ADVISORY_MESSAGE: &str =
    "It looks like you want to use your account's leads. Use the \"Get Leads with Lists\" form instead.";

/// Router state left by the pricing calculator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingSelection {
    pub initial_leads: u32,
}

pub enum Msg {
    SwitchMode(Mode),
    SetUrl(String),
    SetLeads(u32),
    SetEmail(String),
    SetCredential(String),
    Submit,
    SubmitFinished(Result<(), WebhookError>),
    NoticeExpired(u64),
}

pub struct RequestLeads {
    form: LeadForm,
    endpoints: Endpoints,
    notice: NoticeSlot,
    notice_generation: u64,
    notice_timer: Option<Timeout>,
}

impl RequestLeads {
    fn show_notice(&mut self, ctx: &Context<Self>, notice: Notice) {
        self.notice_generation += 1;
        let generation = self.notice_generation;
        self.notice.show(generation, notice);
        let link = ctx.link().clone();
        self.notice_timer = Some(Timeout::new(NOTICE_DISMISS_MS, move || {
            link.send_message(Msg::NoticeExpired(generation));
        }));
    }

    fn view_tabs(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="mode-tabs">
                { for Mode::ALL.iter().map(|&mode| {
                    let class = if mode == self.form.mode() { "mode-tab active" } else { "mode-tab" };
                    html! {
                        <button type="button" class={class}
                            onclick={ctx.link().callback(move |_| Msg::SwitchMode(mode))}>
                            {mode.config().tab_label}
                        </button>
                    }
                }) }
            </div>
        }
    }

    fn view_steps(&self) -> Html {
        let config = self.form.mode().config();
        html! {
            <div class="steps-card">
                <h3>{config.title}</h3>
                <p class="steps-description">{config.description}</p>
                <ol class="steps">
                    { for config.steps.iter().enumerate().map(|(i, step)| html! {
                        <li>
                            <span class="step-number">{(i + 1).to_string()}</span>
                            <div>
                                <h4>{step.title}</h4>
                                <p>{step.description}</p>
                            </div>
                        </li>
                    }) }
                </ol>
            </div>
        }
    }

    fn view_form(&self, ctx: &Context<Self>) -> Html {
        let state = self.form.state();
        let validation = self.form.validation();
        let mode = self.form.mode();
        let cap = mode.cap();
        let progress = range_progress(state.lead_count, 1, cap);

        let on_url = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::SetUrl(input.value())
        });
        let on_leads = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::SetLeads(input.value().parse().unwrap_or(1))
        });
        let on_email = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::SetEmail(input.value())
        });
        let on_credential = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::SetCredential(input.value())
        });
        let on_submit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        let url_placeholder = match mode {
            Mode::Search => "https://app.apollo.io/#/people?page=1&contactEmailStatus[]=verified",
            Mode::Lists => "https://app.apollo.io/#/people?contactLabelIds[]=...",
        };

        html! {
            <form class="lead-form" novalidate=true onsubmit={on_submit}>
                <label for="source-url">{"Apollo URL"}</label>
                <input id="source-url" type="url" placeholder={url_placeholder}
                    value={state.source_url.clone()} oninput={on_url} />
                if let Some(error) = validation.url.error() {
                    <p class="field-error">{error.to_string()}</p>
                }

                <label for="lead-count">
                    {"Number of Leads: "}<b>{format!("{}k leads", state.lead_count)}</b>
                </label>
                <input id="lead-count" type="range" min="1" max={cap.to_string()}
                    value={state.lead_count.to_string()} oninput={on_leads}
                    style={format!("--range-progress: {}%", progress)} />
                <div class="range-labels">
                    <span>{"1k leads"}</span>
                    <span>{format!("{}k leads", cap)}</span>
                </div>

                if mode.config().requires_credential {
                    <label for="credential-id">{"Cred ID"}</label>
                    <input id="credential-id" type="text" placeholder="Enter your Cred ID"
                        value={state.credential_id.clone()} oninput={on_credential} />
                    if let Some(error) = validation.credential.error() {
                        <p class="field-error">{error.to_string()}</p>
                    }
                }

                <label for="email">{"Email"}</label>
                <input id="email" type="email" placeholder="your@email.com"
                    value={state.email.clone()} oninput={on_email} />
                if let Some(error) = validation.email.error() {
                    <p class="field-error">{error.to_string()}</p>
                }

                <div class="price-row">
                    <span>{"Price"}</span>
                    <span class="price">{format_price(self.form.price())}</span>
                </div>

                <button type="submit" class="submit-button" disabled={self.form.is_submitting()}>
                    if self.form.is_submitting() {
                        {"Sending..."}
                    } else {
                        {"Request Leads →"}
                    }
                </button>
            </form>
        }
    }
}

impl Component for RequestLeads {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut form = LeadForm::new(Mode::Search);
        if let Some(selection) = ctx
            .link()
            .location()
            .and_then(|location| location.state::<PricingSelection>())
        {
            form.set_lead_count(selection.initial_leads);
        }

        Self {
            form,
            endpoints: config::endpoints(),
            notice: NoticeSlot::default(),
            notice_generation: 0,
            notice_timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SwitchMode(mode) => self.form.switch_mode(mode),
            Msg::SetUrl(url) => {
                if self.form.set_source_url(url) {
                    self.show_notice(ctx, Notice::advisory(ADVISORY_MESSAGE));
                }
                true
            }
            Msg::SetLeads(count) => {
                self.form.set_lead_count(count);
                true
            }
            Msg::SetEmail(email) => {
                self.form.set_email(email);
                true
            }
            Msg::SetCredential(credential) => {
                self.form.set_credential_id(credential);
                true
            }
            Msg::Submit => {
                match self.form.begin_submit() {
                    SubmitAttempt::InFlight => return false,
                    SubmitAttempt::Rejected(blocker) => {
                        self.show_notice(ctx, Notice::error(blocker.to_string()));
                    }
                    SubmitAttempt::Dispatch(request) => {
                        let endpoints = self.endpoints.clone();
                        ctx.link().send_future(async move {
                            Msg::SubmitFinished(
                                send_lead_request(&GlooWebhook, &endpoints, &request).await,
                            )
                        });
                    }
                }
                true
            }
            Msg::SubmitFinished(result) => {
                match self.form.finish_submit(result) {
                    SubmitOutcome::Succeeded(confirmation) => {
                        info!("Lead request accepted");
                        // The thank-you view raises the success notice once it mounts
                        if let Some(navigator) = ctx.link().navigator() {
                            navigator.push_with_state(&Route::ThankYou, confirmation);
                        }
                    }
                    SubmitOutcome::Failed(e) => {
                        warn!("Lead request not accepted: {}", e);
                        self.show_notice(ctx, Notice::error(FAILURE_MESSAGE));
                    }
                }
                true
            }
            Msg::NoticeExpired(generation) => {
                let cleared = self.notice.expire(generation);
                if cleared {
                    self.notice_timer = None;
                }
                cleared
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let advisory_switch = ctx.link().callback(|_| Msg::SwitchMode(Mode::Lists));
        let show_switch = self.form.mode() == Mode::Search
            && self.notice.notice().map_or(false, |n| n.kind == NoticeKind::Advisory);

        html! {
            <div class="request-leads">
                <Toast notice={self.notice.notice().cloned()}>
                    if show_switch {
                        <button type="button" onclick={advisory_switch}>{"Switch to lists"}</button>
                    }
                </Toast>

                <div class="request-header">
                    <h1>{"Request Your "}<span class="gradient-text">{"Leads"}</span></h1>
                    <p>{"Choose your preferred method to get started"}</p>
                </div>

                { self.view_tabs(ctx) }

                <div class="request-grid">
                    { self.view_steps() }
                    { self.view_form(ctx) }
                </div>

                <style>
                    {r#"
                    .request-leads {
                        min-height: 100vh;
                        padding: 8rem 2rem 6rem;
                        color: #fff;
                        max-width: 1200px;
                        margin: 0 auto;
                    }
                    .request-header { text-align: center; margin-bottom: 3rem; }
                    .request-header h1 { font-size: 3rem; margin-bottom: 1rem; }
                    .request-header p { color: #bbb; font-size: 1.2rem; }
                    .gradient-text {
                        background: linear-gradient(45deg, #cc73f8, #b44fe0);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .mode-tabs {
                        display: flex;
                        justify-content: center;
                        gap: 0.5rem;
                        margin-bottom: 3rem;
                    }
                    .mode-tab {
                        padding: 0.75rem 1.5rem;
                        border-radius: 10px;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(0, 0, 0, 0.2);
                        color: #999;
                        cursor: pointer;
                    }
                    .mode-tab.active { background: #cc73f8; color: #fff; }
                    .request-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 2rem;
                    }
                    .steps-card, .lead-form {
                        background: rgba(30, 30, 30, 0.7);
                        border: 1px solid rgba(204, 115, 248, 0.15);
                        border-radius: 16px;
                        padding: 2rem;
                        backdrop-filter: blur(10px);
                    }
                    .steps { list-style: none; padding: 0; }
                    .steps li { display: flex; gap: 1rem; margin-bottom: 1.5rem; }
                    .step-number {
                        flex-shrink: 0;
                        width: 2rem;
                        height: 2rem;
                        border-radius: 50%;
                        background: rgba(204, 115, 248, 0.2);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .steps p, .steps-description { color: #999; line-height: 1.6; }
                    .lead-form { display: flex; flex-direction: column; gap: 0.75rem; }
                    .lead-form input[type="url"],
                    .lead-form input[type="text"],
                    .lead-form input[type="email"] {
                        padding: 0.75rem 1rem;
                        border-radius: 8px;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(0, 0, 0, 0.3);
                        color: #fff;
                    }
                    .lead-form input[type="range"] {
                        accent-color: #cc73f8;
                        background: linear-gradient(to right, #cc73f8 var(--range-progress), rgba(255, 255, 255, 0.1) var(--range-progress));
                    }
                    .range-labels { display: flex; justify-content: space-between; color: #777; font-size: 0.85rem; }
                    .field-error { color: #f87171; font-size: 0.9rem; }
                    .price-row { display: flex; justify-content: space-between; font-size: 1.2rem; margin-top: 1rem; }
                    .price { color: #cc73f8; font-weight: 700; }
                    .submit-button {
                        margin-top: 1rem;
                        padding: 1rem;
                        border: none;
                        border-radius: 10px;
                        background: linear-gradient(45deg, #cc73f8, #b44fe0);
                        color: #fff;
                        font-size: 1.1rem;
                        cursor: pointer;
                    }
                    .submit-button:disabled { opacity: 0.5; cursor: not-allowed; }
                    @media (max-width: 900px) {
                        .request-grid { grid-template-columns: 1fr; }
                        .request-header h1 { font-size: 2.2rem; }
                    }
                    "#}
                </style>
            </div>
        }
    }
}
