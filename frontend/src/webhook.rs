use async_trait::async_trait;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum WebhookError {
    #[error("failed to encode request body: {0}")]
    Encode(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("webhook responded with status {0}")]
    Status(u16),
    #[error("failed to parse response: {0}")]
    Decode(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WebhookResponse {
    pub status: u16,
    pub body: String,
}

impl WebhookResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, WebhookError> {
        serde_json::from_str(&self.body).map_err(|e| WebhookError::Decode(e.to_string()))
    }
}

/// Outbound JSON POST to one of the processing webhooks.
#[async_trait(?Send)]
pub trait Webhook {
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<WebhookResponse, WebhookError>;
}

/// Browser transport backed by `fetch`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooWebhook;

#[async_trait(?Send)]
impl Webhook for GlooWebhook {
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<WebhookResponse, WebhookError> {
        let request = Request::post(url)
            .json(body)
            .map_err(|e| WebhookError::Encode(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| WebhookError::Transport(e.to_string()))?;
        let status = response.status();
        // The webhooks sometimes answer with an empty body
        let body = response.text().await.unwrap_or_default();
        Ok(WebhookResponse { status, body })
    }
}

/// Posts `payload` and treats any non-2xx status as an error.
pub async fn post<W, T>(webhook: &W, url: &str, payload: &T) -> Result<WebhookResponse, WebhookError>
where
    W: Webhook + ?Sized,
    T: Serialize,
{
    let body = serde_json::to_value(payload).map_err(|e| WebhookError::Encode(e.to_string()))?;
    let response = webhook.post_json(url, &body).await?;
    if !response.ok() {
        return Err(WebhookError::Status(response.status));
    }
    Ok(response)
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Records every call and answers from a script; falls back to `200 {}`.
    #[derive(Default)]
    pub struct RecordingWebhook {
        pub calls: RefCell<Vec<(String, serde_json::Value)>>,
        pub replies: RefCell<VecDeque<Result<WebhookResponse, WebhookError>>>,
    }

    impl RecordingWebhook {
        pub fn replying(reply: Result<WebhookResponse, WebhookError>) -> Self {
            let webhook = Self::default();
            webhook.replies.borrow_mut().push_back(reply);
            webhook
        }

        pub fn status(status: u16, body: &str) -> Result<WebhookResponse, WebhookError> {
            Ok(WebhookResponse {
                status,
                body: body.to_string(),
            })
        }

        pub fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl Webhook for RecordingWebhook {
        async fn post_json(
            &self,
            url: &str,
            body: &serde_json::Value,
        ) -> Result<WebhookResponse, WebhookError> {
            self.calls.borrow_mut().push((url.to_string(), body.clone()));
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Self::status(200, "{}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingWebhook;
    use super::*;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn success_range_is_2xx() {
        for (status, ok) in [(199, false), (200, true), (204, true), (299, true), (300, false), (500, false)] {
            let response = WebhookResponse { status, body: String::new() };
            assert_eq!(response.ok(), ok, "status {}", status);
        }
    }

    #[test]
    fn non_2xx_becomes_status_error() {
        let webhook = RecordingWebhook::replying(RecordingWebhook::status(502, ""));
        let result = block_on(post(&webhook, "https://hooks.test/x", &json!({ "a": 1 })));
        assert_eq!(result, Err(WebhookError::Status(502)));
        assert_eq!(webhook.call_count(), 1);
    }

    #[test]
    fn transport_errors_pass_through() {
        let webhook =
            RecordingWebhook::replying(Err(WebhookError::Transport("offline".to_string())));
        let result = block_on(post(&webhook, "https://hooks.test/x", &json!({})));
        assert_eq!(result, Err(WebhookError::Transport("offline".to_string())));
    }

    #[test]
    fn decodes_json_body() {
        let response = WebhookResponse { status: 200, body: r#"{"n": 3}"#.to_string() };
        let value: serde_json::Value = response.json().unwrap();
        assert_eq!(value["n"], 3);
        let broken = WebhookResponse { status: 200, body: "nope".to_string() };
        assert!(matches!(broken.json::<serde_json::Value>(), Err(WebhookError::Decode(_))));
    }
}
