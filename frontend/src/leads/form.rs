//! State and workflow behind the lead request form.
//!
//! `LeadForm` owns the field values, re-derives field validity after every
//! mutation and drives a single submission attempt at a time:
//!
//! ```text
//! Idle -> begin_submit -> Rejected(blocker) -> Idle
//!                      -> Dispatch(request) [Submitting]
//!                           -> finish_submit(Ok)  -> Succeeded, fields reset
//!                           -> finish_submit(Err) -> Failed, fields kept
//! ```
//!
//! The component performs the network call between `begin_submit` and
//! `finish_submit`; while it is in flight further submits are ignored.

use thiserror::Error;

use super::mode::Mode;
use super::pricing;
use super::request::{Confirmation, LeadRequest};
use super::validation::{
    classify_url, validate_credential, validate_email, CredentialError, EmailError, UrlRejection,
    UrlVerdict,
};
use crate::webhook::WebhookError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    pub mode: Mode,
    pub source_url: String,
    /// Thousands of leads, within `1..=mode.cap()`.
    pub lead_count: u32,
    pub email: String,
    pub credential_id: String,
}

impl FormState {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            source_url: String::new(),
            lead_count: 1,
            email: String::new(),
            credential_id: String::new(),
        }
    }
}

/// Validity of a single field. `Unchecked` until the first evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Check<E> {
    Unchecked,
    Valid,
    Invalid(E),
}

impl<E> Check<E> {
    pub fn is_valid(&self) -> bool {
        matches!(self, Check::Valid)
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            Check::Invalid(e) => Some(e),
            _ => None,
        }
    }
}

impl<E> From<Result<(), E>> for Check<E> {
    fn from(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Check::Valid,
            Err(e) => Check::Invalid(e),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UrlCheck {
    Unchecked,
    Valid,
    Invalid(UrlRejection),
    /// Mode-mismatch hint raised; waits for the next edit.
    Advisory,
}

impl UrlCheck {
    pub fn error(&self) -> Option<&UrlRejection> {
        match self {
            UrlCheck::Invalid(e) => Some(e),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationState {
    pub url: UrlCheck,
    pub email: Check<EmailError>,
    pub credential: Check<CredentialError>,
}

impl Default for ValidationState {
    fn default() -> Self {
        Self {
            url: UrlCheck::Unchecked,
            email: Check::Unchecked,
            credential: Check::Unchecked,
        }
    }
}

impl ValidationState {
    pub fn eligible(&self, mode: Mode) -> bool {
        self.url == UrlCheck::Valid
            && self.email.is_valid()
            && (mode == Mode::Search || self.credential.is_valid())
    }
}

/// Why a submit intent was refused before any network call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitBlocker {
    #[error("{0}")]
    Email(EmailError),
    #[error("Please provide a valid Cred ID")]
    Credential(CredentialError),
    #[error("Please fill in all required fields correctly")]
    SourceUrl,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// A submission is already in flight; nothing happens.
    InFlight,
    Rejected(SubmitBlocker),
    Dispatch(LeadRequest),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Succeeded(Confirmation),
    Failed(WebhookError),
}

pub const SUCCESS_MESSAGE: &str = "Request sent successfully! Please check your email.";
pub const FAILURE_MESSAGE: &str = "Failed to submit request. Please try again later.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeadForm {
    state: FormState,
    validation: ValidationState,
    in_flight: Option<LeadRequest>,
}

impl LeadForm {
    pub fn new(mode: Mode) -> Self {
        Self {
            state: FormState::new(mode),
            validation: ValidationState::default(),
            in_flight: None,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn validation(&self) -> &ValidationState {
        &self.validation
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && self.validation.eligible(self.state.mode)
    }

    pub fn price(&self) -> u32 {
        pricing::price(self.state.lead_count, self.state.mode)
    }

    /// Returns true when this edit newly raised the mode-mismatch advisory.
    pub fn set_source_url(&mut self, value: String) -> bool {
        self.state.source_url = value;
        let was_advisory = self.validation.url == UrlCheck::Advisory;
        self.revalidate_url();
        !was_advisory && self.validation.url == UrlCheck::Advisory
    }

    pub fn set_lead_count(&mut self, value: u32) {
        self.state.lead_count = value.clamp(1, self.state.mode.cap());
    }

    pub fn set_email(&mut self, value: String) {
        self.state.email = value;
        self.validation.email = validate_email(&self.state.email).into();
    }

    pub fn set_credential_id(&mut self, value: String) {
        self.state.credential_id = value;
        self.revalidate_credential();
    }

    /// Switching resets every field and its validity. Same mode is a no-op.
    pub fn switch_mode(&mut self, mode: Mode) -> bool {
        if mode == self.state.mode {
            return false;
        }
        self.state = FormState::new(mode);
        self.validation = ValidationState::default();
        true
    }

    pub fn begin_submit(&mut self) -> SubmitAttempt {
        if self.is_submitting() {
            return SubmitAttempt::InFlight;
        }

        self.validation.email = validate_email(&self.state.email).into();
        self.revalidate_credential();
        // Keep an advisory as is, so the hint is not raised a second time
        if self.validation.url != UrlCheck::Advisory {
            self.revalidate_url();
        }

        if let Some(blocker) = self.first_blocker() {
            return SubmitAttempt::Rejected(blocker);
        }

        let request = LeadRequest {
            mode: self.state.mode,
            source_url: self.state.source_url.clone(),
            number_of_leads: u64::from(self.state.lead_count) * 1000,
            email: self.state.email.clone(),
            credential_id: (self.state.mode == Mode::Lists)
                .then(|| self.state.credential_id.clone()),
        };
        self.in_flight = Some(request.clone());
        SubmitAttempt::Dispatch(request)
    }

    pub fn finish_submit(&mut self, result: Result<(), WebhookError>) -> SubmitOutcome {
        let request = self.in_flight.take();
        match result {
            Ok(()) => {
                let confirmation = match request {
                    Some(request) => request.confirmation(),
                    None => Confirmation {
                        source_url: self.state.source_url.clone(),
                        lead_count_in_thousands: self.state.lead_count,
                        email: self.state.email.clone(),
                    },
                };
                self.state = FormState::new(self.state.mode);
                self.validation = ValidationState::default();
                SubmitOutcome::Succeeded(confirmation)
            }
            Err(e) => SubmitOutcome::Failed(e),
        }
    }

    fn first_blocker(&self) -> Option<SubmitBlocker> {
        if let Some(e) = self.validation.email.error() {
            return Some(SubmitBlocker::Email(e.clone()));
        }
        if let Some(e) = self.validation.credential.error() {
            return Some(SubmitBlocker::Credential(e.clone()));
        }
        if !self.validation.eligible(self.state.mode) {
            return Some(SubmitBlocker::SourceUrl);
        }
        None
    }

    fn revalidate_url(&mut self) {
        self.validation.url = if self.state.source_url.is_empty() {
            UrlCheck::Unchecked
        } else {
            match classify_url(&self.state.source_url, self.state.mode) {
                UrlVerdict::Valid => UrlCheck::Valid,
                UrlVerdict::Invalid(reason) => UrlCheck::Invalid(reason),
                UrlVerdict::Advisory => UrlCheck::Advisory,
            }
        };
    }

    fn revalidate_credential(&mut self) {
        self.validation.credential = if self.state.mode.config().requires_credential {
            validate_credential(&self.state.credential_id, self.state.mode).into()
        } else {
            Check::Unchecked
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Endpoints;
    use crate::leads::request::send_lead_request;
    use crate::webhook::testing::RecordingWebhook;
    use futures::executor::block_on;

    const PEOPLE: &str = "https://app.apollo.io/#/people?page=1&contactEmailStatus[]=verified";

    fn filled_search_form() -> LeadForm {
        let mut form = LeadForm::new(Mode::Search);
        form.set_source_url(PEOPLE.to_string());
        form.set_lead_count(5);
        form.set_email("buyer@example.com".to_string());
        form
    }

    fn filled_lists_form() -> LeadForm {
        let mut form = LeadForm::new(Mode::Lists);
        form.set_source_url(PEOPLE.to_string());
        form.set_lead_count(3);
        form.set_email("buyer@example.com".to_string());
        form.set_credential_id("cred-123".to_string());
        form
    }

    /// Runs one submit intent end to end the way the component does.
    fn submit(form: &mut LeadForm, webhook: &RecordingWebhook) -> Option<SubmitOutcome> {
        let endpoints = Endpoints::from_base("https://hooks.test");
        match form.begin_submit() {
            SubmitAttempt::Dispatch(request) => {
                let result = block_on(send_lead_request(webhook, &endpoints, &request));
                Some(form.finish_submit(result))
            }
            _ => None,
        }
    }

    #[test]
    fn lead_count_is_clamped_to_cap() {
        for mode in Mode::ALL {
            let mut form = LeadForm::new(mode);
            form.set_lead_count(1_000);
            assert_eq!(form.state().lead_count, mode.cap());
            form.set_lead_count(0);
            assert_eq!(form.state().lead_count, 1);
        }
    }

    #[test]
    fn switching_mode_resets_everything() {
        let mut form = filled_search_form();
        form.set_lead_count(40);
        assert!(form.switch_mode(Mode::Lists));

        assert_eq!(form.state(), &FormState::new(Mode::Lists));
        assert_eq!(form.state().lead_count, 1);
        assert_eq!(form.validation(), &ValidationState::default());

        form.set_credential_id("cred-123".to_string());
        assert!(form.switch_mode(Mode::Search));
        assert_eq!(form.state().credential_id, "");
    }

    #[test]
    fn switching_to_same_mode_keeps_fields() {
        let mut form = filled_search_form();
        assert!(!form.switch_mode(Mode::Search));
        assert_eq!(form.state().email, "buyer@example.com");
    }

    #[test]
    fn lead_count_never_exceeds_cap_after_switch() {
        let mut form = LeadForm::new(Mode::Search);
        form.set_lead_count(45);
        form.switch_mode(Mode::Lists);
        assert!(form.state().lead_count <= Mode::Lists.cap());
    }

    #[test]
    fn eligibility_follows_field_validity() {
        let mut form = LeadForm::new(Mode::Search);
        assert!(!form.can_submit());
        form.set_source_url(PEOPLE.to_string());
        assert!(!form.can_submit());
        form.set_email("buyer@example.com".to_string());
        assert!(form.can_submit());

        let mut lists = LeadForm::new(Mode::Lists);
        lists.set_source_url(PEOPLE.to_string());
        lists.set_email("buyer@example.com".to_string());
        assert!(!lists.can_submit());
        lists.set_credential_id("abcd".to_string());
        assert!(!lists.can_submit());
        lists.set_credential_id("abcde".to_string());
        assert!(lists.can_submit());
    }

    #[test]
    fn advisory_is_raised_once_and_blocks_submission() {
        let mut form = LeadForm::new(Mode::Search);
        let saved_list = format!("{}&contactLabelIds[]=5", PEOPLE);
        assert!(form.set_source_url(saved_list.clone()));
        assert_eq!(form.validation().url, UrlCheck::Advisory);
        assert!(form.validation().url.error().is_none());
        // Still in the advisory state on the next keystroke: no second hint
        assert!(!form.set_source_url(format!("{}1", saved_list)));

        form.set_email("buyer@example.com".to_string());
        assert_eq!(
            form.begin_submit(),
            SubmitAttempt::Rejected(SubmitBlocker::SourceUrl)
        );

        form.set_source_url(PEOPLE.to_string());
        assert_eq!(form.validation().url, UrlCheck::Valid);
    }

    #[test]
    fn emptied_url_is_unchecked() {
        let mut form = LeadForm::new(Mode::Search);
        form.set_source_url("bad".to_string());
        assert_eq!(
            form.validation().url,
            UrlCheck::Invalid(UrlRejection::MalformedUrl)
        );
        form.set_source_url(String::new());
        assert_eq!(form.validation().url, UrlCheck::Unchecked);
    }

    #[test]
    fn submit_rechecks_required_fields() {
        let mut form = LeadForm::new(Mode::Lists);
        form.set_source_url(PEOPLE.to_string());
        assert_eq!(
            form.begin_submit(),
            SubmitAttempt::Rejected(SubmitBlocker::Email(EmailError::Required))
        );
        assert_eq!(form.validation().email, Check::Invalid(EmailError::Required));

        form.set_email("buyer@example.com".to_string());
        assert_eq!(
            form.begin_submit(),
            SubmitAttempt::Rejected(SubmitBlocker::Credential(CredentialError::Required))
        );
        assert!(!form.is_submitting());
    }

    #[test]
    fn rejected_submit_makes_no_call() {
        let webhook = RecordingWebhook::default();
        let mut form = LeadForm::new(Mode::Search);
        assert_eq!(submit(&mut form, &webhook), None);
        assert_eq!(webhook.call_count(), 0);
    }

    #[test]
    fn successful_search_submission() {
        let webhook = RecordingWebhook::replying(RecordingWebhook::status(200, ""));
        let mut form = filled_search_form();

        let outcome = submit(&mut form, &webhook).unwrap();

        assert_eq!(webhook.call_count(), 1);
        let calls = webhook.calls.borrow();
        assert_eq!(calls[0].0, "https://hooks.test/apollo-request");
        assert_eq!(calls[0].1["numberOfLeads"], 5000);
        assert!(calls[0].1.get("credentialId").is_none());

        assert_eq!(
            outcome,
            SubmitOutcome::Succeeded(Confirmation {
                source_url: PEOPLE.to_string(),
                lead_count_in_thousands: 5,
                email: "buyer@example.com".to_string(),
            })
        );
        assert_eq!(form.state(), &FormState::new(Mode::Search));
        assert!(!form.is_submitting());
    }

    #[test]
    fn successful_lists_submission_sends_credential() {
        let webhook = RecordingWebhook::default();
        let mut form = filled_lists_form();

        submit(&mut form, &webhook).unwrap();

        let calls = webhook.calls.borrow();
        assert_eq!(calls[0].0, "https://hooks.test/apollo-request-list");
        assert_eq!(calls[0].1["credentialId"], "cred-123");
        assert_eq!(calls[0].1["numberOfLeads"], 3000);
        assert_eq!(form.state(), &FormState::new(Mode::Lists));
    }

    #[test]
    fn failed_submission_keeps_fields_for_retry() {
        let webhook =
            RecordingWebhook::replying(Err(WebhookError::Transport("offline".to_string())));
        let mut form = filled_search_form();
        let before = form.state().clone();

        let outcome = submit(&mut form, &webhook).unwrap();

        assert_eq!(
            outcome,
            SubmitOutcome::Failed(WebhookError::Transport("offline".to_string()))
        );
        assert_eq!(form.state(), &before);
        assert!(!form.is_submitting());
        assert!(form.can_submit());
    }

    #[test]
    fn non_2xx_is_a_failure() {
        let webhook = RecordingWebhook::replying(RecordingWebhook::status(500, "boom"));
        let mut form = filled_search_form();
        let outcome = submit(&mut form, &webhook).unwrap();
        assert_eq!(outcome, SubmitOutcome::Failed(WebhookError::Status(500)));
        assert_eq!(form.state().email, "buyer@example.com");
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let webhook = RecordingWebhook::default();
        let endpoints = Endpoints::from_base("https://hooks.test");
        let mut form = filled_search_form();

        let first = form.begin_submit();
        let second = form.begin_submit();
        assert_eq!(second, SubmitAttempt::InFlight);
        assert!(!form.can_submit());

        for attempt in [first, second] {
            if let SubmitAttempt::Dispatch(request) = attempt {
                let result = block_on(send_lead_request(&webhook, &endpoints, &request));
                form.finish_submit(result);
            }
        }
        assert_eq!(webhook.call_count(), 1);
    }

    #[test]
    fn editing_during_flight_does_not_leak_into_confirmation() {
        let mut form = filled_search_form();
        let attempt = form.begin_submit();
        assert!(matches!(attempt, SubmitAttempt::Dispatch(_)));
        form.set_email("other@example.com".to_string());

        match form.finish_submit(Ok(())) {
            SubmitOutcome::Succeeded(confirmation) => {
                assert_eq!(confirmation.email, "buyer@example.com")
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn price_tracks_lead_count() {
        let mut form = LeadForm::new(Mode::Search);
        form.set_lead_count(7);
        assert_eq!(form.price(), 21);
    }
}
