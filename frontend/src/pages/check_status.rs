use chrono::{DateTime, NaiveDate};
use log::{error, info};
use serde::{Deserialize, Serialize};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::notification::{use_notice, Notice, Toast};
use crate::config::{self, Endpoints};
use crate::webhook::{self, GlooWebhook, Webhook, WebhookError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    #[serde(rename = "in queue")]
    InQueue,
    #[serde(rename = "in progress")]
    InProgress,
    #[serde(rename = "failed")]
    Failed,
    #[serde(rename = "completed")]
    Completed,
}

impl RequestStatus {
    pub fn label(self) -> &'static str {
        match self {
            RequestStatus::InQueue => "In queue",
            RequestStatus::InProgress => "In progress",
            RequestStatus::Failed => "Failed",
            RequestStatus::Completed => "Completed",
        }
    }

    fn badge_class(self) -> &'static str {
        match self {
            RequestStatus::InQueue => "badge badge-yellow",
            RequestStatus::InProgress => "badge badge-blue",
            RequestStatus::Failed => "badge badge-red",
            RequestStatus::Completed => "badge badge-green",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingRequest {
    pub tracking_id: String,
    pub email: String,
    pub apollo_url: String,
    pub number_of_leads: u64,
    pub date: String,
    pub status: RequestStatus,
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusQuery<'a> {
    tracking_id: &'a str,
}

pub async fn fetch_status<W>(
    webhook: &W,
    endpoints: &Endpoints,
    tracking_id: &str,
) -> Result<TrackingRequest, WebhookError>
where
    W: Webhook + ?Sized,
{
    let query = StatusQuery { tracking_id: tracking_id.trim() };
    let response = webhook::post(webhook, &endpoints.check_status, &query).await?;
    response.json()
}

/// Notice to raise for a freshly loaded request, if any.
pub fn status_notice(status: RequestStatus) -> Option<Notice> {
    match status {
        RequestStatus::Completed => Some(Notice::success("Your request has been completed!")),
        RequestStatus::Failed => Some(Notice::error("Your request has failed. Please try again.")),
        RequestStatus::InQueue | RequestStatus::InProgress => None,
    }
}

/// Accepts RFC 3339 timestamps or plain dates; anything else is shown as is.
pub fn format_date(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format("%b %-d, %Y %H:%M").to_string();
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return parsed.format("%b %-d, %Y").to_string();
    }
    raw.to_string()
}

#[derive(Properties, PartialEq)]
struct RequestDetailsProps {
    request: TrackingRequest,
}

#[function_component(RequestDetails)]
fn request_details(props: &RequestDetailsProps) -> Html {
    let request = &props.request;
    html! {
        <div class="details-card">
            <div class="details-header">
                <span class="tracking-id">{&request.tracking_id}</span>
                <span class={request.status.badge_class()}>{request.status.label()}</span>
            </div>
            <dl>
                <dt>{"Email"}</dt>
                <dd>{&request.email}</dd>
                <dt>{"Apollo URL"}</dt>
                <dd class="break">{&request.apollo_url}</dd>
                <dt>{"Date"}</dt>
                <dd>{format_date(&request.date)}</dd>
                <dt>{"Leads"}</dt>
                <dd>{request.number_of_leads.to_string()}</dd>
                if let Some(filename) = request.filename.as_ref() {
                    <dt>{"Filename"}</dt>
                    <dd>{filename}</dd>
                }
            </dl>
            if let Some(url) = request.download_url.clone() {
                <a class="cta-button" href={url} target="_blank" rel="noopener noreferrer">
                    {"Download leads"}
                </a>
            }
        </div>
    }
}

#[function_component(CheckStatus)]
pub fn check_status() -> Html {
    let tracking_id = use_state(String::new);
    let checking = use_state(|| false);
    let in_flight = use_mut_ref(|| false);
    let request = use_state(|| None::<TrackingRequest>);
    let notice = use_notice();

    let on_input = {
        let tracking_id = tracking_id.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            tracking_id.set(input.value());
        })
    };

    let on_submit = {
        let tracking_id = tracking_id.clone();
        let checking = checking.clone();
        let in_flight = in_flight.clone();
        let request = request.clone();
        let notice = notice.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let id = tracking_id.trim().to_string();
            if id.is_empty() {
                notice.show(Notice::error("Please enter a tracking ID"));
                return;
            }
            if in_flight.replace(true) {
                return;
            }
            checking.set(true);

            let checking = checking.clone();
            let in_flight = in_flight.clone();
            let request = request.clone();
            let notice = notice.clone();
            spawn_local(async move {
                info!("Checking status of request {}", id);
                match fetch_status(&GlooWebhook, &config::endpoints(), &id).await {
                    Ok(found) => {
                        if let Some(n) = status_notice(found.status) {
                            notice.show(n);
                        }
                        request.set(Some(found));
                    }
                    Err(e) => {
                        error!("Status check failed: {}", e);
                        notice.show(Notice::error("Failed to check request status"));
                    }
                }
                *in_flight.borrow_mut() = false;
                checking.set(false);
            });
        })
    };

    html! {
        <div class="status-page">
            <Toast notice={notice.notice()} />
            <h1>{"Check Request "}<span class="gradient-text">{"Status"}</span></h1>
            <form class="status-form" onsubmit={on_submit}>
                <label for="tracking-id">{"Check by Tracking ID"}</label>
                <div class="status-input-row">
                    <input id="tracking-id" type="text" placeholder="Enter your tracking ID"
                        value={(*tracking_id).clone()} oninput={on_input} />
                    <button type="submit" disabled={*checking}>
                        if *checking { {"Checking..."} } else { {"Check Status"} }
                    </button>
                </div>
            </form>
            if let Some(found) = (*request).clone() {
                <RequestDetails request={found} />
            }
            <style>
                {r#"
                .status-page {
                    min-height: 100vh;
                    padding: 8rem 2rem 6rem;
                    color: #fff;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 2rem;
                }
                .status-page h1 { font-size: 3rem; }
                .gradient-text {
                    background: linear-gradient(45deg, #cc73f8, #b44fe0);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .status-form, .details-card {
                    width: 100%;
                    max-width: 640px;
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(204, 115, 248, 0.15);
                    border-radius: 16px;
                    padding: 2rem;
                }
                .status-input-row { display: flex; gap: 0.75rem; margin-top: 0.75rem; }
                .status-input-row input {
                    flex: 1;
                    padding: 0.75rem 1rem;
                    border-radius: 8px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(0, 0, 0, 0.3);
                    color: #fff;
                }
                .status-input-row button, .cta-button {
                    padding: 0.75rem 1.5rem;
                    border: none;
                    border-radius: 8px;
                    background: linear-gradient(45deg, #cc73f8, #b44fe0);
                    color: #fff;
                    cursor: pointer;
                    text-decoration: none;
                }
                .status-input-row button:disabled { opacity: 0.5; cursor: not-allowed; }
                .details-header { display: flex; justify-content: space-between; align-items: center; }
                .details-card dt { color: #999; font-size: 0.85rem; margin-top: 1rem; }
                .details-card dd { margin: 0.25rem 0 0; }
                .details-card .break { word-break: break-all; }
                .badge { padding: 0.25rem 0.75rem; border-radius: 999px; font-size: 0.85rem; }
                .badge-yellow { background: rgba(234, 179, 8, 0.2); color: #facc15; }
                .badge-blue { background: rgba(59, 130, 246, 0.2); color: #60a5fa; }
                .badge-red { background: rgba(239, 68, 68, 0.2); color: #f87171; }
                .badge-green { background: rgba(34, 197, 94, 0.2); color: #4ade80; }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::notification::NoticeKind;
    use crate::webhook::testing::RecordingWebhook;
    use futures::executor::block_on;

    const COMPLETED: &str = r#"{
        "trackingId": "TRK-1",
        "email": "buyer@example.com",
        "apolloUrl": "https://app.apollo.io/#/people?page=1",
        "numberOfLeads": 5000,
        "date": "2024-03-01T10:15:00Z",
        "status": "completed",
        "downloadUrl": "https://files.example.com/leads.csv",
        "filename": "leads.csv"
    }"#;

    #[test]
    fn posts_trimmed_tracking_id_and_decodes_reply() {
        let endpoints = Endpoints::from_base("https://hooks.test");
        let webhook = RecordingWebhook::replying(RecordingWebhook::status(200, COMPLETED));

        let request = block_on(fetch_status(&webhook, &endpoints, "  TRK-1 ")).unwrap();

        let calls = webhook.calls.borrow();
        assert_eq!(calls[0].0, "https://hooks.test/check-status");
        assert_eq!(calls[0].1, serde_json::json!({ "trackingId": "TRK-1" }));
        assert_eq!(request.status, RequestStatus::Completed);
        assert_eq!(request.number_of_leads, 5000);
        assert_eq!(request.filename.as_deref(), Some("leads.csv"));
    }

    #[test]
    fn optional_fields_may_be_missing() {
        let body = r#"{"trackingId":"T","email":"e@x.io","apolloUrl":"u","numberOfLeads":1000,"date":"2024-03-01","status":"in queue"}"#;
        let request: TrackingRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.status, RequestStatus::InQueue);
        assert_eq!(request.download_url, None);
    }

    #[test]
    fn unknown_status_is_a_decode_error() {
        let endpoints = Endpoints::from_base("https://hooks.test");
        let body = r#"{"trackingId":"T","email":"e","apolloUrl":"u","numberOfLeads":1,"date":"d","status":"lost"}"#;
        let webhook = RecordingWebhook::replying(RecordingWebhook::status(200, body));
        let result = block_on(fetch_status(&webhook, &endpoints, "T"));
        assert!(matches!(result, Err(WebhookError::Decode(_))));
    }

    #[test]
    fn not_found_is_an_error() {
        let endpoints = Endpoints::from_base("https://hooks.test");
        let webhook = RecordingWebhook::replying(RecordingWebhook::status(404, ""));
        let result = block_on(fetch_status(&webhook, &endpoints, "missing"));
        assert_eq!(result, Err(WebhookError::Status(404)));
    }

    #[test]
    fn only_terminal_states_raise_notices() {
        assert_eq!(status_notice(RequestStatus::Completed).map(|n| n.kind), Some(NoticeKind::Success));
        assert_eq!(status_notice(RequestStatus::Failed).map(|n| n.kind), Some(NoticeKind::Error));
        assert_eq!(status_notice(RequestStatus::InQueue), None);
        assert_eq!(status_notice(RequestStatus::InProgress), None);
    }

    #[test]
    fn dates_are_prettified_when_parseable() {
        assert_eq!(format_date("2024-03-01T10:15:00Z"), "Mar 1, 2024 10:15");
        assert_eq!(format_date("2024-03-01"), "Mar 1, 2024");
        assert_eq!(format_date("yesterday"), "yesterday");
    }
}
