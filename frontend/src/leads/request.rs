use log::{error, info};
use serde::{Deserialize, Serialize};

use super::mode::Mode;
use crate::config::Endpoints;
use crate::webhook::{self, Webhook, WebhookError};

/// Body posted to the lead webhooks. `number_of_leads` is the absolute
/// count; the form works in thousands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRequest {
    #[serde(skip)]
    pub mode: Mode,
    pub source_url: String,
    pub number_of_leads: u64,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
}

impl LeadRequest {
    pub fn lead_count_thousands(&self) -> u32 {
        (self.number_of_leads / 1000) as u32
    }

    pub fn confirmation(&self) -> Confirmation {
        Confirmation {
            source_url: self.source_url.clone(),
            lead_count_in_thousands: self.lead_count_thousands(),
            email: self.email.clone(),
        }
    }
}

/// Display-only context handed to the thank-you view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Confirmation {
    pub source_url: String,
    pub lead_count_in_thousands: u32,
    pub email: String,
}

pub async fn send_lead_request<W>(
    webhook: &W,
    endpoints: &Endpoints,
    request: &LeadRequest,
) -> Result<(), WebhookError>
where
    W: Webhook + ?Sized,
{
    let endpoint = endpoints.for_mode(request.mode);
    info!("Sending {:?} lead request to {}", request.mode, endpoint);
    match webhook::post(webhook, endpoint, request).await {
        Ok(_) => Ok(()),
        Err(e) => {
            error!("Lead request failed: {}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::webhook::testing::RecordingWebhook;
    use futures::executor::block_on;
    use serde_json::json;

    fn search_request() -> LeadRequest {
        LeadRequest {
            mode: Mode::Search,
            source_url: "https://app.apollo.io/#/people?page=1".to_string(),
            number_of_leads: 5000,
            email: "buyer@example.com".to_string(),
            credential_id: None,
        }
    }

    #[test]
    fn search_body_has_no_credential() {
        let body = serde_json::to_value(search_request()).unwrap();
        assert_eq!(
            body,
            json!({
                "sourceUrl": "https://app.apollo.io/#/people?page=1",
                "numberOfLeads": 5000,
                "email": "buyer@example.com",
            })
        );
    }

    #[test]
    fn lists_body_carries_credential() {
        let request = LeadRequest {
            mode: Mode::Lists,
            credential_id: Some("cred-123".to_string()),
            ..search_request()
        };
        let body = serde_json::to_value(request).unwrap();
        assert_eq!(body["credentialId"], "cred-123");
        assert!(body.get("mode").is_none());
    }

    #[test]
    fn posts_to_mode_endpoint() {
        let endpoints = Endpoints::from_base("https://hooks.test");
        let webhook = RecordingWebhook::default();
        let lists = LeadRequest {
            mode: Mode::Lists,
            credential_id: Some("cred-123".to_string()),
            ..search_request()
        };

        block_on(send_lead_request(&webhook, &endpoints, &search_request())).unwrap();
        block_on(send_lead_request(&webhook, &endpoints, &lists)).unwrap();

        let calls = webhook.calls.borrow();
        assert_eq!(calls[0].0, endpoints.search);
        assert_eq!(calls[1].0, endpoints.lists);
    }

    #[test]
    fn confirmation_reports_thousands() {
        let confirmation = search_request().confirmation();
        assert_eq!(confirmation.lead_count_in_thousands, 5);
        assert_eq!(confirmation.email, "buyer@example.com");
    }
}
